//! Item handles and item kinds.
//!
//! A sequence holds [`Item`] handles rather than values. Two handles are equal
//! only when they point at the same allocation, which gives items the
//! reference identity the editor keys its view entries on: two pulses with
//! identical settings are still two distinct items.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A shared, identity-compared handle to an item of a sequence.
pub struct Item<T> {
    inner: Arc<T>,
}

impl<T> Item<T> {
    /// Wrap a value in a new item handle with a fresh identity.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// Check whether two handles refer to the same item.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }

    /// Borrow the item's value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.inner
    }

    fn address(&self) -> usize {
        Arc::as_ptr(&self.inner) as usize
    }
}

impl<T> Clone for Item<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Deref for Item<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> PartialEq for Item<T> {
    fn eq(&self, other: &Self) -> bool {
        Item::ptr_eq(self, other)
    }
}

impl<T> Eq for Item<T> {}

impl<T> Hash for Item<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Item<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Item@{:x}(", self.address())?;
        self.inner.fmt(f)?;
        write!(f, ")")
    }
}

impl<T> From<T> for Item<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// The kinds of item a user can ask the editor to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A single pulse.
    Pulse,
    /// A nested sub-sequence.
    Sequence,
}

impl ItemKind {
    /// All kinds, in menu order.
    pub const ALL: [ItemKind; 2] = [ItemKind::Pulse, ItemKind::Sequence];

    /// The user-facing label of this kind.
    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Pulse => "Pulse",
            ItemKind::Sequence => "Sequence",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_equality() {
        let a = Item::new(String::from("pulse"));
        let b = Item::new(String::from("pulse"));
        let a2 = a.clone();

        assert_eq!(a, a2);
        assert_ne!(a, b);
        assert_eq!(*a, *b);
    }

    #[test]
    fn test_identity_hashing() {
        let a = Item::new(1);
        let b = Item::new(1);
        let set: HashSet<_> = [a.clone(), b.clone(), a.clone()].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(&a));
        assert!(set.contains(&b));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ItemKind::Pulse.to_string(), "Pulse");
        assert_eq!(ItemKind::Sequence.label(), "Sequence");
        assert_eq!(ItemKind::ALL.len(), 2);
    }
}
