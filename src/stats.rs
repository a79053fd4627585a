//! Structural-invariant checking, grounded in the teacher's `validate_tree`
//! (`llrb_common.rs`) and its `bnclabs-llrb-index` sibling's `validate_tree`.

use crate::error::ValidationError;
use crate::node::{is_red, DepthStats, Node};

type ValidateResult<T> = std::result::Result<T, ValidationError>;

/// Walk the tree validating strictly ascending keys, no red right link,
/// no two reds in a row, and perfect black balance. The node-count and
/// black-root checks are left to the caller, which has direct access to
/// `n_count` and the root.
pub(crate) fn validate_tree<K, V>(
    node: Option<&Node<K, V>>,
    from_red: bool,
    mut blacks: usize,
    depth: usize,
    depths: &mut DepthStats,
) -> ValidateResult<usize>
where
    K: Ord + std::fmt::Debug,
{
    let node = match node {
        None => {
            depths.sample(depth);
            return Ok(blacks);
        }
        Some(node) => node,
    };

    let red = !node.is_black();
    if from_red && red {
        return Err(ValidationError::ConsecutiveReds);
    }
    if !red {
        blacks += 1;
    }

    if let Some(left) = node.left_deref() {
        if left.key >= node.key {
            return Err(ValidationError::SortError(format!(
                "left {:?} >= parent {:?}",
                left.key, node.key
            )));
        }
    }
    if let Some(right) = node.right_deref() {
        if right.key <= node.key {
            return Err(ValidationError::SortError(format!(
                "right {:?} <= parent {:?}",
                right.key, node.key
            )));
        }
        if is_red(Some(right)) {
            return Err(ValidationError::SortError(format!(
                "right link into {:?} is red",
                right.key
            )));
        }
    }

    let lblacks = validate_tree(node.left_deref(), red, blacks, depth + 1, depths)?;
    let rblacks = validate_tree(node.right_deref(), red, blacks, depth + 1, depths)?;
    if lblacks != rblacks {
        return Err(ValidationError::UnbalancedBlacks(lblacks, rblacks));
    }
    Ok(lblacks)
}
