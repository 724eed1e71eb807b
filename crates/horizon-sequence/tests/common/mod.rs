//! Shared fixtures for the editor integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use horizon_sequence::prelude::*;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("horizon_sequence=trace")),
        )
        .try_init();
}

/// A call received by a [`ScriptedFactory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactoryCall {
    ViewFor(String),
    Discard(String),
    Create(ItemKind),
}

#[derive(Default)]
struct FactoryState {
    calls: Vec<FactoryCall>,
    views: HashMap<Item<String>, ObjectId>,
    failing: HashSet<String>,
    cancel: bool,
    queued: VecDeque<Item<String>>,
    created: usize,
}

/// A view factory whose behavior is scripted by the test.
///
/// Items are created as `"<kind>-<n>"` unless an item was queued, and view
/// construction fails for every value marked with [`fail_for`](Self::fail_for).
#[derive(Default)]
pub struct ScriptedFactory {
    state: Mutex<FactoryState>,
}

impl ScriptedFactory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_for(&self, value: &str) {
        self.state.lock().failing.insert(value.to_owned());
    }

    pub fn set_cancel(&self, cancel: bool) {
        self.state.lock().cancel = cancel;
    }

    pub fn queue(&self, item: Item<String>) {
        self.state.lock().queued.push_back(item);
    }

    pub fn calls(&self) -> Vec<FactoryCall> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    pub fn discarded(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                FactoryCall::Discard(value) => Some(value),
                _ => None,
            })
            .collect()
    }

    pub fn view_of(&self, item: &Item<String>) -> Option<ObjectId> {
        self.state.lock().views.get(item).copied()
    }
}

impl ViewFactory<String> for ScriptedFactory {
    fn view_for(&self, item: &Item<String>) -> Result<ObjectId, ViewConstructionError> {
        let mut state = self.state.lock();
        state.calls.push(FactoryCall::ViewFor(item.get().clone()));
        if state.failing.contains(item.get()) {
            return Err(ViewConstructionError::new(format!("no view for {}", item.get())));
        }
        let id = *state.views.entry(item.clone()).or_insert_with(ObjectId::next);
        Ok(id)
    }

    fn discard_view(&self, item: &Item<String>) {
        let mut state = self.state.lock();
        state.calls.push(FactoryCall::Discard(item.get().clone()));
        state.views.remove(item);
    }

    fn create_item(&self, kind: ItemKind) -> Option<Item<String>> {
        let mut state = self.state.lock();
        state.calls.push(FactoryCall::Create(kind));
        if state.cancel {
            return None;
        }
        if let Some(item) = state.queued.pop_front() {
            return Some(item);
        }
        state.created += 1;
        Some(Item::new(format!("{}-{}", kind.label().to_lowercase(), state.created)))
    }
}

/// An editor wired to a headless host and a scripted factory.
pub struct Fixture {
    pub sequence: Arc<Sequence<String>>,
    pub host: Arc<HeadlessHost>,
    pub factory: Arc<ScriptedFactory>,
    pub editor: SequenceEditor<String>,
}

impl Fixture {
    pub fn new(values: &[&str]) -> Self {
        Self::with_options(values, EditorOptions::default())
    }

    pub fn with_options(values: &[&str], options: EditorOptions) -> Self {
        init_logging();
        let sequence = Arc::new(Sequence::from_values(values.iter().map(|v| v.to_string())));
        let host = Arc::new(HeadlessHost::new());
        let factory = ScriptedFactory::new();
        let editor = SequenceEditor::new(sequence.clone(), factory.clone(), host.clone(), options);
        Self {
            sequence,
            host,
            factory,
            editor,
        }
    }

    /// The sequence's items, in order.
    pub fn items(&self) -> Vec<Item<String>> {
        self.sequence.items()
    }

    /// The values of the rows, in layout order.
    pub fn view_order(&self) -> Vec<String> {
        self.editor
            .items_in_view_order()
            .iter()
            .map(|item| item.get().clone())
            .collect()
    }

    /// Relayout requests received for the editor so far.
    pub fn relayouts(&self) -> usize {
        self.host.relayout_count(self.editor.object_id())
    }

    /// Assert that the editor has exactly one row per sequence item.
    pub fn assert_mapping_matches(&self) {
        let items = self.items();
        assert_eq!(self.editor.entry_count(), items.len(), "row count");
        for item in &items {
            assert!(self.editor.contains(item), "missing row for {:?}", item);
        }
    }
}
