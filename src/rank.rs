//! Rank type and utilities for leftist trees.
//!
//! The rank (also called distance or s-value) of a node is the length of its
//! right spine: the number of nodes on the path that follows right children
//! until a missing child is reached. A leaf has rank 1 and a missing child
//! counts as rank 0.
//!
//! # Why u8?
//!
//! A leftist tree whose root has rank `r` contains at least `2ʳ - 1` nodes,
//! so the rank of any node in a heap of `n` elements is at most `log₂(n + 1)`.
//! `u8` covers heaps of up to 2²⁵⁵ elements, far beyond addressable memory,
//! and keeps the per-node field to a single byte.

/// Type alias for node rank (right-spine length).
pub type Rank = u8;

/// Rank of a missing child.
pub const NIL_RANK: Rank = 0;

/// Rank of a node without a right child.
pub const LEAF_RANK: Rank = 1;

/// Maximum valid rank value.
pub const MAX_RANK: Rank = u8::MAX;

/// Safely increment a rank value, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`. This cannot happen with a valid leftist tree
/// since it would require more than 2²⁵⁵ elements.
///
/// # Example
///
/// ```rust
/// use leftist_heap::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: this should be impossible since rank is at most log₂(n + 1) \
         and u8::MAX (255) supports heaps with up to 2²⁵⁵ elements",
    )
}

/// Rank of a node given the rank of its right child (`None` if missing).
///
/// ```rust
/// use leftist_heap::rank::{rank_above, LEAF_RANK};
///
/// assert_eq!(rank_above(None), LEAF_RANK);
/// assert_eq!(rank_above(Some(2)), 3);
/// ```
#[inline]
pub fn rank_above(right: Option<Rank>) -> Rank {
    match right {
        Some(rank) => checked_increment(rank),
        None => LEAF_RANK,
    }
}
