//! Change notifications emitted by a [`Sequence`](super::Sequence).

use std::fmt;
use std::sync::Arc;

use super::item::Item;
use super::sequence::Sequence;

/// A mutation of a sequence, as delivered to observers.
///
/// Exactly one variant describes each notification. A [`Change::Collapsed`]
/// batch carries its sub-changes in the order they were applied.
pub enum Change<T> {
    /// One or more items were inserted. Indices are positions after insertion,
    /// in ascending order.
    Added(Vec<(usize, Item<T>)>),

    /// One or more items were deleted. Indices are positions before removal.
    Removed(Vec<(usize, Item<T>)>),

    /// An item changed position without changing identity.
    Moved {
        /// The moved item.
        item: Item<T>,
        /// Its index before the move.
        from: usize,
        /// Its index after the move.
        to: usize,
    },

    /// Several changes delivered as one notification.
    Collapsed(Vec<Change<T>>),

    /// The observed sequence was swapped for another one.
    Replaced(Arc<Sequence<T>>),
}

impl<T> Change<T> {
    /// A short name for the variant, used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Change::Added(_) => "added",
            Change::Removed(_) => "removed",
            Change::Moved { .. } => "moved",
            Change::Collapsed(_) => "collapsed",
            Change::Replaced(_) => "replaced",
        }
    }

    /// Number of leaf changes, counting every sub-change of a batch.
    pub fn leaf_count(&self) -> usize {
        match self {
            Change::Collapsed(changes) => changes.iter().map(Change::leaf_count).sum(),
            _ => 1,
        }
    }
}

impl<T> Clone for Change<T> {
    fn clone(&self) -> Self {
        match self {
            Change::Added(items) => Change::Added(items.clone()),
            Change::Removed(items) => Change::Removed(items.clone()),
            Change::Moved { item, from, to } => Change::Moved {
                item: item.clone(),
                from: *from,
                to: *to,
            },
            Change::Collapsed(changes) => Change::Collapsed(changes.clone()),
            Change::Replaced(sequence) => Change::Replaced(Arc::clone(sequence)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Change<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Added(items) => f.debug_tuple("Added").field(items).finish(),
            Change::Removed(items) => f.debug_tuple("Removed").field(items).finish(),
            Change::Moved { item, from, to } => f
                .debug_struct("Moved")
                .field("item", item)
                .field("from", from)
                .field("to", to)
                .finish(),
            Change::Collapsed(changes) => f.debug_tuple("Collapsed").field(changes).finish(),
            Change::Replaced(sequence) => f
                .debug_struct("Replaced")
                .field("len", &sequence.len())
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_classification() {
        let item = Item::new(0u8);
        let moved = Change::Moved {
            item: item.clone(),
            from: 0,
            to: 1,
        };
        assert_eq!(moved.kind_name(), "moved");
        assert_eq!(Change::Added(vec![(0, item.clone())]).leaf_count(), 1);

        let batch = Change::Collapsed(vec![moved.clone(), moved.clone()]);
        assert_eq!(batch.leaf_count(), 2);

        let mixed = Change::Collapsed(vec![moved, Change::Removed(vec![(0, item)])]);
        assert_eq!(mixed.leaf_count(), 2);
        assert_eq!(mixed.kind_name(), "collapsed");
    }

    #[test]
    fn test_nested_leaf_count() {
        let item = Item::new(());
        let leaf = || Change::Added(vec![(0, item.clone())]);
        let nested = Change::Collapsed(vec![leaf(), Change::Collapsed(vec![leaf(), leaf()])]);
        assert_eq!(nested.leaf_count(), 3);
    }
}
