//! Key-ordered search, grounded in the teacher's `get`. No direct teacher
//! counterpart was retrieved for ceiling/floor/higher/lower; they are built
//! in the same iterative, best-so-far style as `get`.

use std::cmp::Ordering;

use crate::compare::KeyCompare;
use crate::node::Node;

pub(crate) fn get<'a, K, V, C>(
    mut node: Option<&'a Node<K, V>>,
    key: &K,
    cmp: &C,
) -> Option<&'a Node<K, V>>
where
    C: KeyCompare<K>,
{
    while let Some(nref) = node {
        node = match cmp.compare(key, &nref.key) {
            Ordering::Less => nref.left_deref(),
            Ordering::Greater => nref.right_deref(),
            Ordering::Equal => return Some(nref),
        };
    }
    None
}

pub(crate) fn get_mut<'a, K, V, C>(
    mut node: Option<&'a mut Node<K, V>>,
    key: &K,
    cmp: &C,
) -> Option<&'a mut Node<K, V>>
where
    C: KeyCompare<K>,
{
    while let Some(nref) = node {
        node = match cmp.compare(key, &nref.key) {
            Ordering::Less => nref.left.as_deref_mut(),
            Ordering::Greater => nref.right.as_deref_mut(),
            Ordering::Equal => return Some(nref),
        };
    }
    None
}

pub(crate) fn min<K, V>(mut node: Option<&Node<K, V>>) -> Option<&Node<K, V>> {
    let mut found = None;
    while let Some(nref) = node {
        found = Some(nref);
        node = nref.left_deref();
    }
    found
}

pub(crate) fn max<K, V>(mut node: Option<&Node<K, V>>) -> Option<&Node<K, V>> {
    let mut found = None;
    while let Some(nref) = node {
        found = Some(nref);
        node = nref.right_deref();
    }
    found
}

/// Smallest stored key >= `key`.
pub(crate) fn ceiling<'a, K, V, C>(
    mut node: Option<&'a Node<K, V>>,
    key: &K,
    cmp: &C,
) -> Option<&'a Node<K, V>>
where
    C: KeyCompare<K>,
{
    let mut best = None;
    while let Some(nref) = node {
        match cmp.compare(key, &nref.key) {
            Ordering::Equal => return Some(nref),
            Ordering::Less => {
                best = Some(nref);
                node = nref.left_deref();
            }
            Ordering::Greater => node = nref.right_deref(),
        }
    }
    best
}

/// Largest stored key <= `key`.
pub(crate) fn floor<'a, K, V, C>(
    mut node: Option<&'a Node<K, V>>,
    key: &K,
    cmp: &C,
) -> Option<&'a Node<K, V>>
where
    C: KeyCompare<K>,
{
    let mut best = None;
    while let Some(nref) = node {
        match cmp.compare(key, &nref.key) {
            Ordering::Equal => return Some(nref),
            Ordering::Greater => {
                best = Some(nref);
                node = nref.right_deref();
            }
            Ordering::Less => node = nref.left_deref(),
        }
    }
    best
}

/// Smallest stored key > `key`.
pub(crate) fn higher<'a, K, V, C>(
    mut node: Option<&'a Node<K, V>>,
    key: &K,
    cmp: &C,
) -> Option<&'a Node<K, V>>
where
    C: KeyCompare<K>,
{
    let mut best = None;
    while let Some(nref) = node {
        match cmp.compare(key, &nref.key) {
            Ordering::Less => {
                best = Some(nref);
                node = nref.left_deref();
            }
            Ordering::Equal | Ordering::Greater => node = nref.right_deref(),
        }
    }
    best
}

/// Largest stored key < `key`.
pub(crate) fn lower<'a, K, V, C>(
    mut node: Option<&'a Node<K, V>>,
    key: &K,
    cmp: &C,
) -> Option<&'a Node<K, V>>
where
    C: KeyCompare<K>,
{
    let mut best = None;
    while let Some(nref) = node {
        match cmp.compare(key, &nref.key) {
            Ordering::Greater => {
                best = Some(nref);
                node = nref.right_deref();
            }
            Ordering::Equal | Ordering::Less => node = nref.left_deref(),
        }
    }
    best
}

/// Full-tree traversal (left, self, right) looking for the first node whose
/// value equals `value`. Linear in the size of the tree.
pub(crate) fn find_by_value<'a, K, V, F>(
    node: Option<&'a Node<K, V>>,
    matches: &F,
) -> Option<&'a Node<K, V>>
where
    F: Fn(&V) -> bool,
{
    let nref = node?;
    if let Some(found) = find_by_value(nref.left_deref(), matches) {
        return Some(found);
    }
    if matches(&nref.value) {
        return Some(nref);
    }
    find_by_value(nref.right_deref(), matches)
}
