//! Insertion kernel, grounded in the teacher's `upsert`/`insert` pair in
//! `mem_store.rs` (the `put` vs `set` split mirrors the teacher's
//! `create`/`set` split in the `bnclabs-llrb-index` sibling crate).

use std::cmp::Ordering;

use crate::compare::KeyCompare;
use crate::node::Node;
use crate::rotate::balance;

/// What happened at the equal-key case of [`insert`].
pub(crate) enum InsertOutcome<V> {
    /// A new leaf was created; no prior value existed for the key.
    Inserted,
    /// The key was already present and `overwrite` was false: the tree is
    /// unchanged.
    Rejected,
    /// The key was already present and `overwrite` was true: `old` holds
    /// the value that was replaced.
    Replaced(V),
}

/// Recursively descend `node`, inserting `(key, value)`. When `overwrite`
/// is false this implements `put` (fails on an existing key); when true it
/// implements `set` (idempotent upsert). Returns the new subtree root and
/// the outcome.
pub(crate) fn insert<K, V, C>(
    node: Option<Box<Node<K, V>>>,
    key: K,
    value: V,
    overwrite: bool,
    cmp: &C,
) -> (Box<Node<K, V>>, InsertOutcome<V>)
where
    C: KeyCompare<K>,
{
    let mut node = match node {
        None => return (Node::new(key, value), InsertOutcome::Inserted),
        Some(node) => node,
    };

    match cmp.compare(&key, &node.key) {
        Ordering::Less => {
            let (left, outcome) = insert(node.left.take(), key, value, overwrite, cmp);
            node.left = Some(left);
            (balance(node), outcome)
        }
        Ordering::Greater => {
            let (right, outcome) = insert(node.right.take(), key, value, overwrite, cmp);
            node.right = Some(right);
            (balance(node), outcome)
        }
        Ordering::Equal if overwrite => {
            let old = std::mem::replace(&mut node.value, value);
            (balance(node), InsertOutcome::Replaced(old))
        }
        Ordering::Equal => (balance(node), InsertOutcome::Rejected),
    }
}
