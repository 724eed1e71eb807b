//! Observable ordered sequence of items.
//!
//! `Sequence<T>` owns an ordered list of [`Item`] handles and announces every
//! mutation through its [`changed`](Sequence::changed) signal. The lock
//! protecting the items is always released before the signal is emitted, so
//! observers may read the sequence (or mutate it again) from inside their slot.

use horizon_sequence_core::logging::targets;
use horizon_sequence_core::Signal;
use parking_lot::RwLock;

use super::change::Change;
use super::item::Item;
use crate::error::{EditorError, Result};

/// An ordered, mutable collection of unique items with change notification.
///
/// # Example
///
/// ```
/// use horizon_sequence::model::{Change, Item, Sequence};
///
/// let sequence = Sequence::new(vec![Item::new("a"), Item::new("b")]);
/// sequence.changed.connect(|change| {
///     if let Change::Moved { from, to, .. } = change {
///         println!("moved {from} -> {to}");
///     }
/// });
/// sequence.move_item(0, 2).unwrap();
/// assert_eq!(*sequence.get(1).unwrap(), "a");
/// ```
pub struct Sequence<T> {
    items: RwLock<Vec<Item<T>>>,

    /// Emitted after every mutation.
    pub changed: Signal<Change<T>>,
}

impl<T> Sequence<T> {
    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns a snapshot of the current items, in order.
    pub fn items(&self) -> Vec<Item<T>> {
        self.items.read().clone()
    }

    /// Returns the item at `index`.
    pub fn get(&self, index: usize) -> Option<Item<T>> {
        self.items.read().get(index).cloned()
    }

    /// Returns the current position of `item`, looked up by identity.
    pub fn index_of(&self, item: &Item<T>) -> Option<usize> {
        position_of(&self.items.read(), item)
    }

    /// Returns `true` if `item` is part of the sequence.
    pub fn contains(&self, item: &Item<T>) -> bool {
        self.index_of(item).is_some()
    }
}

impl<T: Send + Sync + 'static> Sequence<T> {
    /// Creates a sequence holding `items`.
    ///
    /// Duplicate handles are dropped, keeping the first occurrence.
    pub fn new(items: Vec<Item<T>>) -> Self {
        let mut unique: Vec<Item<T>> = Vec::with_capacity(items.len());
        for item in items {
            if position_of(&unique, &item).is_none() {
                unique.push(item);
            }
        }
        Self {
            items: RwLock::new(unique),
            changed: Signal::new(),
        }
    }

    /// Creates an empty sequence.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Creates a sequence from plain values, giving each a fresh identity.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        Self::new(values.into_iter().map(Item::new).collect())
    }

    /// Inserts `item` at `index`.
    ///
    /// `index` may equal the length, which appends.
    pub fn insert_item(&self, index: usize, item: Item<T>) -> Result<()> {
        let change = insert_into(&mut self.items.write(), index, item)?;
        self.notify(change);
        Ok(())
    }

    /// Appends `item` at the end.
    pub fn push_item(&self, item: Item<T>) -> Result<()> {
        let change = {
            let mut items = self.items.write();
            let index = items.len();
            insert_into(&mut items, index, item)?
        };
        self.notify(change);
        Ok(())
    }

    /// Appends several items, announced as a single `Added` change.
    pub fn extend_items(&self, new_items: Vec<Item<T>>) -> Result<()> {
        let change = {
            let mut items = self.items.write();
            for (offset, item) in new_items.iter().enumerate() {
                if let Some(index) = position_of(&items, item) {
                    return Err(EditorError::DuplicateItem { index });
                }
                if new_items[..offset].contains(item) {
                    return Err(EditorError::DuplicateItem {
                        index: items.len() + offset,
                    });
                }
            }
            let start = items.len();
            let added: Vec<(usize, Item<T>)> = new_items
                .into_iter()
                .enumerate()
                .map(|(offset, item)| (start + offset, item))
                .collect();
            if added.is_empty() {
                return Ok(());
            }
            items.extend(added.iter().map(|(_, item)| item.clone()));
            Change::Added(added)
        };
        self.notify(change);
        Ok(())
    }

    /// Removes and returns the item at `index`.
    pub fn remove_item(&self, index: usize) -> Result<Item<T>> {
        let (item, change) = remove_from(&mut self.items.write(), index)?;
        self.notify(change);
        Ok(item)
    }

    /// Removes every item, announced as a single `Removed` change.
    pub fn clear(&self) {
        let removed: Vec<(usize, Item<T>)> = {
            let mut items = self.items.write();
            items.drain(..).enumerate().collect()
        };
        if !removed.is_empty() {
            self.notify(Change::Removed(removed));
        }
    }

    /// Moves the item at `from` to `to`.
    ///
    /// `to` is an index into the sequence as it looks after the move; passing
    /// the length moves the item to the end. Moving an item onto its own
    /// position is accepted and announces nothing.
    pub fn move_item(&self, from: usize, to: usize) -> Result<()> {
        let change = move_within(&mut self.items.write(), from, to)?;
        if let Some(change) = change {
            self.notify(change);
        }
        Ok(())
    }

    /// Applies several mutations and announces them as one `Collapsed` change.
    ///
    /// Mutations made before an error returned by `f` stay applied and are
    /// still announced.
    pub fn batch<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut SequenceBatch<'_, T>) -> Result<R>,
    {
        let (result, changes) = {
            let mut items = self.items.write();
            let mut batch = SequenceBatch {
                items: &mut items,
                changes: Vec::new(),
            };
            let result = f(&mut batch);
            (result, batch.changes)
        };
        if !changes.is_empty() {
            self.notify(Change::Collapsed(changes));
        }
        result
    }

    fn notify(&self, change: Change<T>) {
        tracing::debug!(
            target: targets::MODEL,
            kind = change.kind_name(),
            leaves = change.leaf_count(),
            "sequence changed"
        );
        self.changed.emit(change);
    }
}

impl<T: Send + Sync + 'static> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Mutation handle passed to [`Sequence::batch`].
pub struct SequenceBatch<'a, T> {
    items: &'a mut Vec<Item<T>>,
    changes: Vec<Change<T>>,
}

impl<T> SequenceBatch<'_, T> {
    /// Current number of items, including mutations made in this batch.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence is currently empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the item at `index`.
    pub fn get(&self, index: usize) -> Option<Item<T>> {
        self.items.get(index).cloned()
    }

    /// Inserts `item` at `index`.
    pub fn insert_item(&mut self, index: usize, item: Item<T>) -> Result<()> {
        let change = insert_into(self.items, index, item)?;
        self.changes.push(change);
        Ok(())
    }

    /// Removes and returns the item at `index`.
    pub fn remove_item(&mut self, index: usize) -> Result<Item<T>> {
        let (item, change) = remove_from(self.items, index)?;
        self.changes.push(change);
        Ok(item)
    }

    /// Moves the item at `from` to `to`, see [`Sequence::move_item`].
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<()> {
        if let Some(change) = move_within(self.items, from, to)? {
            self.changes.push(change);
        }
        Ok(())
    }
}

fn position_of<T>(items: &[Item<T>], item: &Item<T>) -> Option<usize> {
    items.iter().position(|candidate| Item::ptr_eq(candidate, item))
}

fn insert_into<T>(items: &mut Vec<Item<T>>, index: usize, item: Item<T>) -> Result<Change<T>> {
    if index > items.len() {
        return Err(EditorError::invalid_index(index, items.len()));
    }
    if let Some(existing) = position_of(items, &item) {
        return Err(EditorError::DuplicateItem { index: existing });
    }
    items.insert(index, item.clone());
    Ok(Change::Added(vec![(index, item)]))
}

fn remove_from<T>(items: &mut Vec<Item<T>>, index: usize) -> Result<(Item<T>, Change<T>)> {
    if index >= items.len() {
        return Err(EditorError::invalid_index(index, items.len()));
    }
    let item = items.remove(index);
    Ok((item.clone(), Change::Removed(vec![(index, item)])))
}

fn move_within<T>(items: &mut Vec<Item<T>>, from: usize, to: usize) -> Result<Option<Change<T>>> {
    let len = items.len();
    if from >= len || to > len {
        return Err(EditorError::invalid_move(from, to, len));
    }
    let target = to.min(len - 1);
    if target == from {
        return Ok(None);
    }
    let item = items.remove(from);
    items.insert(target, item.clone());
    Ok(Some(Change::Moved {
        item,
        from,
        to: target,
    }))
}

static_assertions::assert_impl_all!(Sequence<String>: Send, Sync);
