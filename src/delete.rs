//! Deletion kernels, grounded in the teacher's `do_delete`/`delete_min` in
//! `mem_store.rs`. `delete_max` has no direct counterpart in the retrieved
//! teacher source but is the textbook mirror image, built the same way the
//! teacher builds `rotate_right` as the mirror of `rotate_left`.

use std::cmp::Ordering;

use crate::compare::KeyCompare;
use crate::node::{is_red, Node};
use crate::rotate::{fixup, move_red_left, move_red_right, rotate_right};

type DeleteResult<K, V> = (Option<Box<Node<K, V>>>, Option<(K, V)>);

fn extract<K, V>(node: Box<Node<K, V>>) -> (K, V) {
    let node = *node;
    (node.key, node.value)
}

/// Remove and return the minimum-keyed entry of `node`'s subtree.
pub(crate) fn delete_min<K, V>(node: Option<Box<Node<K, V>>>) -> DeleteResult<K, V> {
    let mut node = match node {
        None => return (None, None),
        Some(node) => node,
    };

    if node.left.is_none() {
        return (None, Some(extract(node)));
    }
    if !is_red(node.left_deref()) && !is_red(node.left.as_ref().unwrap().left_deref()) {
        node = move_red_left(node);
    }
    let (left, extracted) = delete_min(node.left.take());
    node.left = left;
    (Some(fixup(node)), extracted)
}

/// Remove and return the maximum-keyed entry of `node`'s subtree.
pub(crate) fn delete_max<K, V>(node: Option<Box<Node<K, V>>>) -> DeleteResult<K, V> {
    let mut node = match node {
        None => return (None, None),
        Some(node) => node,
    };

    if is_red(node.left_deref()) {
        node = rotate_right(node);
    }
    if node.right.is_none() {
        return (None, Some(extract(node)));
    }
    if !is_red(node.right_deref()) && !is_red(node.right.as_ref().unwrap().left_deref()) {
        node = move_red_right(node);
    }
    let (right, extracted) = delete_max(node.right.take());
    node.right = right;
    (Some(fixup(node)), extracted)
}

/// Remove `key` from `node`'s subtree, if present.
pub(crate) fn do_delete<K, V, C>(
    node: Option<Box<Node<K, V>>>,
    key: &K,
    cmp: &C,
) -> DeleteResult<K, V>
where
    C: KeyCompare<K>,
{
    let mut node = match node {
        None => return (None, None),
        Some(node) => node,
    };

    if cmp.compare(key, &node.key) == Ordering::Less {
        if node.left.is_none() {
            return (Some(node), None);
        }
        if !is_red(node.left_deref()) && !is_red(node.left.as_ref().unwrap().left_deref()) {
            node = move_red_left(node);
        }
        let (left, extracted) = do_delete(node.left.take(), key, cmp);
        node.left = left;
        (Some(fixup(node)), extracted)
    } else {
        if is_red(node.left_deref()) {
            node = rotate_right(node);
        }

        if cmp.compare(key, &node.key) != Ordering::Greater && node.right.is_none() {
            return (None, Some(extract(node)));
        }

        let has_right = node.right.is_some() && !is_red(node.right_deref());
        if has_right && !is_red(node.right.as_ref().unwrap().left_deref()) {
            node = move_red_right(node);
        }

        if cmp.compare(key, &node.key) != Ordering::Greater {
            // node.key == key: splice in the in-order successor.
            let (right, min_pair) = delete_min(node.right.take());
            node.right = right;
            let (succ_key, succ_value) =
                min_pair.expect("llrb_map: do_delete successor must exist");
            let extracted = (
                std::mem::replace(&mut node.key, succ_key),
                std::mem::replace(&mut node.value, succ_value),
            );
            (Some(fixup(node)), Some(extracted))
        } else {
            let (right, extracted) = do_delete(node.right.take(), key, cmp);
            node.right = right;
            (Some(fixup(node)), extracted)
        }
    }
}
