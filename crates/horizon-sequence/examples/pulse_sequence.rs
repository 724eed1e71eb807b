//! Horizon Sequence Pulse Editor Example
//!
//! Drives a sequence editor without a window:
//! - A console host logs every call the editor makes
//! - Item controls open command menus that mutate the sequence
//! - A batch of moves costs a single relayout
//! - Folding and unfolding refreshes the editor
//!
//! Run with: RUST_LOG=horizon_sequence=debug cargo run -p horizon-sequence --example pulse_sequence

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_sequence::prelude::*;
use horizon_sequence::widget::HostEvent;
use tracing_subscriber::EnvFilter;

/// A pulse with a duration in nanoseconds.
#[derive(Debug)]
struct Pulse {
    name: String,
    duration_ns: u64,
}

/// Records the tree like a headless host and prints each call.
struct ConsoleHost {
    inner: HeadlessHost,
}

impl ConsoleHost {
    fn log(&self, event: HostEvent) {
        println!("  host: {event:?}");
    }
}

impl RenderHost for ConsoleHost {
    fn attach(&self, child: ObjectId, parent: ObjectId) {
        self.inner.attach(child, parent);
        self.log(HostEvent::Attach(child, parent));
    }

    fn detach(&self, child: ObjectId) {
        self.inner.detach(child);
        self.log(HostEvent::Detach(child));
    }

    fn set_visible(&self, view: ObjectId, visible: bool) {
        self.inner.set_visible(view, visible);
        self.log(HostEvent::SetVisible(view, visible));
    }

    fn destroy(&self, view: ObjectId) {
        self.inner.destroy(view);
        self.log(HostEvent::Destroy(view));
    }

    fn request_relayout(&self, root: ObjectId) {
        self.inner.request_relayout(root);
        self.log(HostEvent::RequestRelayout(root));
    }
}

/// Builds a view id per pulse and creates pulses with a default duration.
struct PulseViews {
    created: AtomicUsize,
}

impl ViewFactory<Pulse> for PulseViews {
    fn view_for(&self, item: &Item<Pulse>) -> Result<ObjectId, ViewConstructionError> {
        if item.duration_ns == 0 {
            return Err(ViewConstructionError::new(format!(
                "pulse '{}' has no duration",
                item.name
            )));
        }
        Ok(ObjectId::next())
    }

    fn discard_view(&self, item: &Item<Pulse>) {
        println!("  factory: discarded view of '{}'", item.name);
    }

    fn create_item(&self, kind: ItemKind) -> Option<Item<Pulse>> {
        let n = self.created.fetch_add(1, Ordering::Relaxed) + 1;
        Some(Item::new(Pulse {
            name: format!("{}-{n}", kind.label().to_lowercase()),
            duration_ns: 100,
        }))
    }
}

fn print_rows(title: &str, editor: &SequenceEditor<Pulse>) {
    println!("{title}");
    let names: Vec<String> = editor
        .items_in_view_order()
        .iter()
        .map(|item| format!("{} ({} ns)", item.name, item.duration_ns))
        .collect();
    println!("  items: {names:?}");
    for row in editor.debug_rows() {
        println!("  {row}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let options = EditorOptions::from_toml_str(
        r#"
        item_kinds = ["pulse"]
        folded_label = "Pulses (folded)"

        [menu]
        delete = "Remove pulse"
        "#,
    )?;

    let sequence = Arc::new(Sequence::<Pulse>::empty());
    let host = Arc::new(ConsoleHost {
        inner: HeadlessHost::new(),
    });
    let factory = Arc::new(PulseViews {
        created: AtomicUsize::new(0),
    });

    let editor = SequenceEditor::new(sequence.clone(), factory, host.clone(), options);
    editor.error_occurred().connect(|err| println!("  error: {err}"));
    print_rows("== empty editor", &editor);

    for action in editor.placeholder_actions() {
        println!("== placeholder: {}", action.text);
        editor.activate_placeholder(action.kind)?;
    }
    editor.add_after(0, ItemKind::Pulse)?;
    editor.add_after(1, ItemKind::Pulse)?;
    print_rows("== three pulses", &editor);

    let first = sequence.get(0).ok_or("sequence is empty")?;
    let control = editor.control_for(&first).ok_or("no control for the first pulse")?;
    if let Some(mut menu) = control.activate()? {
        println!("== menu for index {}", menu.index());
        for item in menu.items() {
            if let Some(text) = item.display_text() {
                println!("  entry: {text}");
            }
        }
        menu.trigger_text("Move to bottom")?;
    }
    print_rows("== after moving the first pulse to the bottom", &editor);

    sequence.batch(|batch| {
        batch.move_item(0, 2)?;
        batch.move_item(0, 1)
    })?;
    println!(
        "== batch of moves issued {} relayout request(s) in total",
        host.inner.relayout_count(editor.object_id())
    );

    let broken = Item::new(Pulse {
        name: "broken".into(),
        duration_ns: 0,
    });
    sequence.push_item(broken)?;
    if let Some(err) = editor.take_error() {
        println!("== rejected view: {err}");
    }

    let mut foldable = FoldableEditor::new(editor, host.clone());
    foldable.fold();
    println!("== folded: {}", foldable.label_text());
    foldable.unfold();
    print_rows("== unfolded", foldable.editor());

    Ok(())
}
