//! Module `llrb` exports [`Llrb`], an in-memory, ordered key/value
//! container implementing a left-leaning red-black tree.
//!
//! **IMPORTANT**: this container is not thread safe. A `Llrb` must not be
//! mutated while any other operation on it is in flight; the compiler's
//! borrow checker enforces this for any single-threaded caller, since every
//! mutating method takes `&mut self`.
//!
//! [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

use std::fmt::Debug;
use std::ops::Bound;

use log::debug;

use crate::compare::{KeyCompare, OrdComparator};
use crate::delete::{delete_max, delete_min, do_delete};
use crate::error::{Error, Result, ValidationError};
use crate::insert::{insert, InsertOutcome};
use crate::iter::{Iter, Range, Reverse};
use crate::node::{is_red, DepthStats, Node};
use crate::search;
use crate::stats::validate_tree;

/// An ordered key/value container backed by a left-leaning red-black tree.
///
/// `Llrb` is generic over the key `K`, the value `V`, and an injected
/// comparator `C: KeyCompare<K>`. The default comparator, `OrdComparator`,
/// defers to `K: Ord`; supplying a different `C` lets the same `V` be keyed
/// under a different order without re-implementing the tree.
pub struct Llrb<K, V, C = OrdComparator<K>> {
    name: String,
    root: Option<Box<Node<K, V>>>,
    n_count: usize,
    cmp: C,
}

impl<K, V> Llrb<K, V, OrdComparator<K>>
where
    K: Ord,
{
    /// Create an empty instance, identified by `name`. Applications can
    /// choose unique names; the name is never interpreted by the engine.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Llrb::new_with(name, OrdComparator::new())
    }
}

impl<K, V, C> Llrb<K, V, C>
where
    C: KeyCompare<K>,
{
    /// Create an empty instance using a custom comparator.
    pub fn new_with<S: Into<String>>(name: S, cmp: C) -> Self {
        Llrb {
            name: name.into(),
            root: None,
            n_count: 0,
            cmp,
        }
    }

    /// Identify this instance.
    pub fn id(&self) -> &str {
        &self.name
    }

    /// Number of entries currently in the tree.
    pub fn len(&self) -> usize {
        self.n_count
    }

    /// `true` if the tree holds no entries.
    pub fn is_empty(&self) -> bool {
        self.n_count == 0
    }

    /// Discard every entry, leaving an empty tree.
    pub fn clear(&mut self) {
        debug!("llrb_map({}): clear, {} entries dropped", self.name, self.n_count);
        self.root.take();
        self.n_count = 0;
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        search::get(self.root.as_deref(), key, &self.cmp).map(|node| &node.value)
    }

    /// Look up a mutable reference to the value for `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        search::get_mut(self.root.as_deref_mut(), key, &self.cmp).map(|node| &mut node.value)
    }

    /// `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Smallest stored entry, or `None` if the tree is empty.
    pub fn min(&self) -> Option<(&K, &V)> {
        search::min(self.root.as_deref()).map(|node| (&node.key, &node.value))
    }

    /// Largest stored entry, or `None` if the tree is empty.
    pub fn max(&self) -> Option<(&K, &V)> {
        search::max(self.root.as_deref()).map(|node| (&node.key, &node.value))
    }

    /// Smallest stored entry with key >= `key`.
    pub fn ceiling(&self, key: &K) -> Option<(&K, &V)> {
        search::ceiling(self.root.as_deref(), key, &self.cmp).map(|node| (&node.key, &node.value))
    }

    /// Largest stored entry with key <= `key`.
    pub fn floor(&self, key: &K) -> Option<(&K, &V)> {
        search::floor(self.root.as_deref(), key, &self.cmp).map(|node| (&node.key, &node.value))
    }

    /// Smallest stored entry with key > `key`.
    pub fn higher(&self, key: &K) -> Option<(&K, &V)> {
        search::higher(self.root.as_deref(), key, &self.cmp).map(|node| (&node.key, &node.value))
    }

    /// Largest stored entry with key < `key`.
    pub fn lower(&self, key: &K) -> Option<(&K, &V)> {
        search::lower(self.root.as_deref(), key, &self.cmp).map(|node| (&node.key, &node.value))
    }

    /// First key whose value equals `value`, by linear scan.
    pub fn get_key_for_value(&self, value: &V) -> Option<&K>
    where
        V: PartialEq,
    {
        search::find_by_value(self.root.as_deref(), &|v| v == value).map(|node| &node.key)
    }

    /// `true` if some entry's value equals `value`.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.get_key_for_value(value).is_some()
    }

    /// Insert `(key, value)` if, and only if, `key` is not already present.
    /// Returns `Err(Error::AlreadyContains)` otherwise, leaving the tree
    /// unchanged.
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        let (mut root, outcome) = insert(self.root.take(), key, value, false, &self.cmp);
        root.set_black();
        self.root = Some(root);
        match outcome {
            InsertOutcome::Inserted => {
                self.n_count += 1;
                debug!("llrb_map({}): put, {} entries", self.name, self.n_count);
                Ok(())
            }
            InsertOutcome::Rejected => Err(Error::AlreadyContains),
            InsertOutcome::Replaced(_) => unreachable!("put always runs in error-on-existing mode"),
        }
    }

    /// Insert or overwrite `(key, value)`. Returns the previous value, if
    /// any.
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        let (mut root, outcome) = insert(self.root.take(), key, value, true, &self.cmp);
        root.set_black();
        self.root = Some(root);
        match outcome {
            InsertOutcome::Inserted => {
                self.n_count += 1;
                debug!("llrb_map({}): set (new), {} entries", self.name, self.n_count);
                None
            }
            InsertOutcome::Replaced(old) => {
                debug!("llrb_map({}): set (overwrite)", self.name);
                Some(old)
            }
            InsertOutcome::Rejected => unreachable!("set always runs in overwrite mode"),
        }
    }

    /// Overwrite the value for an existing `key`. Returns the previous
    /// value, or `Err(Error::DoesNotContain)` if `key` is absent. Does not
    /// alter the tree's shape or `len()`.
    pub fn replace_value(&mut self, key: &K, new_value: V) -> Result<V> {
        match search::get_mut(self.root.as_deref_mut(), key, &self.cmp) {
            Some(node) => Ok(std::mem::replace(&mut node.value, new_value)),
            None => Err(Error::DoesNotContain),
        }
    }

    /// Remove `key`, returning the removed pair, or `Err(Error::DoesNotContain)`.
    pub fn remove(&mut self, key: &K) -> Result<(K, V)> {
        let mut root = self.root.take().ok_or(Error::DoesNotContain)?;
        if !is_red(root.left_deref()) && !is_red(root.right_deref()) {
            root.set_red();
        }
        let (new_root, extracted) = do_delete(Some(root), key, &self.cmp);
        self.root = new_root;
        if let Some(root) = self.root.as_mut() {
            root.set_black();
        }
        match extracted {
            Some(pair) => {
                self.n_count -= 1;
                debug!("llrb_map({}): remove, {} entries", self.name, self.n_count);
                Ok(pair)
            }
            None => Err(Error::DoesNotContain),
        }
    }

    /// Remove and return the minimum-keyed entry.
    pub fn pop_min(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        if !is_red(root.left_deref()) && !is_red(root.right_deref()) {
            root.set_red();
        }
        let (new_root, extracted) = delete_min(Some(root));
        self.root = new_root;
        if let Some(root) = self.root.as_mut() {
            root.set_black();
        }
        if extracted.is_some() {
            self.n_count -= 1;
            debug!("llrb_map({}): pop_min, {} entries", self.name, self.n_count);
        }
        extracted
    }

    /// Remove and return the maximum-keyed entry.
    pub fn pop_max(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        if !is_red(root.left_deref()) && !is_red(root.right_deref()) {
            root.set_red();
        }
        let (new_root, extracted) = delete_max(Some(root));
        self.root = new_root;
        if let Some(root) = self.root.as_mut() {
            root.set_black();
        }
        if extracted.is_some() {
            self.n_count -= 1;
            debug!("llrb_map({}): pop_max, {} entries", self.name, self.n_count);
        }
        extracted
    }

    /// Full in-order scan.
    pub fn iter(&self) -> Iter<K, V>
    where
        K: Ord + Clone,
    {
        Iter::new(self.root.as_deref())
    }

    /// Ascending scan between `low` and `high`.
    pub fn range(&self, low: Bound<K>, high: Bound<K>) -> Range<K, V>
    where
        K: Ord + Clone,
    {
        Range::new(self.root.as_deref(), low, high)
    }

    /// Descending scan between `low` and `high`, highest key first.
    pub fn range_rev(&self, low: Bound<K>, high: Bound<K>) -> Reverse<K, V>
    where
        K: Ord + Clone,
    {
        Reverse::new(self.root.as_deref(), low, high)
    }
}

impl<K, V, C> Llrb<K, V, C>
where
    K: Ord + Debug,
    C: KeyCompare<K>,
{
    /// Check every structural invariant: ascending key order, no two reds
    /// in a row, no red right links, perfect black balance, a black root,
    /// and a node count matching the number of reachable entries.
    pub fn validate(&self) -> std::result::Result<DepthStats, ValidationError> {
        let mut depths = DepthStats::default();
        let from_red = is_red(self.root.as_deref());
        let blacks = validate_tree(self.root.as_deref(), from_red, 0, 0, &mut depths)?;
        let _ = blacks;

        if let Some(root) = self.root.as_deref() {
            if !root.is_black() {
                return Err(ValidationError::RedRoot);
            }
        }

        if depths.leaves != self.n_count + 1 && !(self.n_count == 0 && depths.leaves == 1) {
            // every node contributes exactly one additional null leaf,
            // plus the one null leaf of the empty tree itself.
            return Err(ValidationError::CountMismatch {
                tracked: self.n_count,
                reachable: depths.leaves.saturating_sub(1),
            });
        }

        Ok(depths)
    }
}

impl<K, V, C> Drop for Llrb<K, V, C> {
    fn drop(&mut self) {
        // `Node`'s child fields recursively drop on their own; nothing
        // special is required here. Kept explicit (rather than omitted)
        // to match the teacher's habit of documenting the drop path even
        // when it does no extra work, and as the natural place to note
        // why: unlike the teacher's own `Llrb`, this container has no
        // MVCC-shared subtrees to leak-guard against, so a derived drop
        // is correct as-is.
    }
}

#[cfg(test)]
#[path = "llrb_test.rs"]
mod llrb_test;
