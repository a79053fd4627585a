//! Shared rotation/recoloring primitives used by both the insertion and
//! deletion unwind paths. Grounded in the teacher's `rotate_left`,
//! `rotate_right`, `flip`, `walkuprot_23` and `fixup`.

use log::trace;

use crate::node::{is_black, is_red, Node};

///```text
///              (i)                       (i)
///               |                         |
///              node                       x
///              /  \                      / \
///             /    (r)                 (r)  \
///            /       \                 /     \
///          left       x             node      xr
///                    / \            /  \
///                  xl   xr       left   xl
///```
/// `h` must have a red right child.
pub(crate) fn rotate_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_black(node.right_deref()) {
        panic!("rotate_left: rotating a black link, this is an llrb_map bug");
    }
    trace!("llrb_map: rotate_left");
    let mut x = node.right.take().unwrap();
    node.right = x.left.take();
    x.black = node.black;
    node.set_red();
    x.left = Some(node);
    x
}

///```text
///              (i)                       (i)
///               |                         |
///              node                       x
///              /  \                      / \
///            (r)   \                   (r)  \
///           /       \                 /      \
///          x       right             xl      node
///         / \                                / \
///       xl   xr                             xr  right
///```
/// `h` must have a red left child.
pub(crate) fn rotate_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_black(node.left_deref()) {
        panic!("rotate_right: rotating a black link, this is an llrb_map bug");
    }
    trace!("llrb_map: rotate_right");
    let mut x = node.left.take().unwrap();
    node.left = x.right.take();
    x.black = node.black;
    node.set_red();
    x.right = Some(node);
    x
}

///```text
///        (x)                   (!x)
///         |                     |
///        node                  node
///        / \                   / \
///      (y) (z)              (!y) (!z)
///     /      \              /      \
///   left    right         left    right
///```
/// Requires both children to be present.
pub(crate) fn flip_colors<K, V>(node: &mut Node<K, V>) {
    node.left.as_mut().unwrap().toggle_color();
    node.right.as_mut().unwrap().toggle_color();
    node.toggle_color();
}

/// Rebalancing rules applied while unwinding a mutating recursion. Callers
/// name this `balance` on the insertion path and `fixup` on the deletion
/// path, but both run the identical three checks in the same order, so one
/// implementation serves both, see `fixup` below.
pub(crate) fn balance<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    if is_red(node.right_deref()) && !is_red(node.left_deref()) {
        node = rotate_left(node);
    }
    if is_red(node.left_deref()) && is_red(node.left.as_ref().unwrap().left_deref()) {
        node = rotate_right(node);
    }
    if is_red(node.left_deref()) && is_red(node.right_deref()) {
        flip_colors(&mut node);
    }
    node
}

/// Alias for [`balance`], used from the deletion unwind path to match the
/// teacher's naming split between `walkuprot_23` (insert) and `fixup`
/// (delete).
#[inline]
pub(crate) fn fixup<K, V>(node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    balance(node)
}

/// Precondition: `node` is red, neither `node.left` nor `node.left.left` is
/// red. Pushes a red link down onto the left, for the deletion recursion
/// about to descend left.
pub(crate) fn move_red_left<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut node);
    if is_red(node.right.as_ref().unwrap().left_deref()) {
        node.right = Some(rotate_right(node.right.take().unwrap()));
        node = rotate_left(node);
        flip_colors(&mut node);
    }
    node
}

/// Precondition: `node` is red, neither `node.right` nor `node.right.left`
/// is red. Mirror of [`move_red_left`].
pub(crate) fn move_red_right<K, V>(mut node: Box<Node<K, V>>) -> Box<Node<K, V>> {
    flip_colors(&mut node);
    if is_red(node.left.as_ref().unwrap().left_deref()) {
        node = rotate_right(node);
        flip_colors(&mut node);
    }
    node
}
