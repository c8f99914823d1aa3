use crate::balance::Balance;
use crate::rbt::RedBlack;
use crate::{Arbor, Error};

/// An ordered set of keys, a thin wrapper around [`Arbor`] with unit
/// values.
///
/// Balanced with the red-black policy unless another one is selected.
pub struct ArborSet<K, B: Balance = RedBlack> {
    tree: Arbor<K, (), B>,
}

impl<K: PartialOrd, B: Balance> ArborSet<K, B> {
    #[must_use]
    pub fn new() -> Self {
        Self { tree: Arbor::new() }
    }

    /// Inserts `key`; `Ok(true)` when it was not present before.
    pub fn insert(&mut self, key: K) -> Result<bool, Error> {
        Ok(self.tree.put(key, ())?.is_none())
    }

    /// Removes `key`; `Ok(false)` when it was not present.
    pub fn remove(&mut self, key: &K) -> Result<bool, Error> {
        match self.tree.take(key) {
            Ok(()) => Ok(true),
            Err(Error::KeyNotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains(key)
    }

    /// Smallest key, or [`Error::EmptyTree`].
    pub fn first(&self) -> Result<&K, Error> {
        Ok(self.tree.minimum()?.0)
    }

    /// Greatest key, or [`Error::EmptyTree`].
    pub fn last(&self) -> Result<&K, Error> {
        Ok(self.tree.maximum()?.0)
    }

    /// Keys in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.tree.iter().map(|(key, _)| key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree.clear();
    }

    pub fn reserve(&mut self, additional: usize) {
        self.tree.reserve(additional);
    }
}

impl<K: PartialOrd, B: Balance> Default for ArborSet<K, B> {
    fn default() -> Self {
        Self::new()
    }
}
