//! Leftist Heap implementation
//!
//! A leftist heap is a heap-ordered binary tree in which every node's left
//! subtree has a rank (right-spine length) at least as large as its right
//! subtree's. The right spine of an `n`-element tree therefore has at most
//! `log₂(n + 1)` nodes, and two trees merge by walking down their right spines.
//!
//! Every mutation reduces to the binary merge:
//! - insert merges a singleton into the root
//! - extract-min merges the root's two children
//! - remove merges the removed node's children and re-attaches the result
//!   under its parent, then repairs ranks on the way back up
//! - decrease-key is a remove followed by an insert
//!
//! # Time Complexity
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `insert`       | O(log n)   |
//! | `peek`         | O(1)       |
//! | `extract_min`  | O(log n)   |
//! | `remove`       | O(log n)   |
//! | `decrease_key` | O(log n)   |
//! | `merge`        | O(log n) for the tree, plus moving the other heap's nodes |
//!
//! # Storage
//!
//! Nodes live in a generational arena ([`slotmap::SlotMap`]). Child links and
//! the parent back-link are arena keys, so there is no reference cycle and no
//! unsafe code. A [`LeftistHandle`] carries the arena key plus the id of the heap
//! that issued it: using a handle after its element is gone, or with another
//! heap, is reported as [`HeapError::InvalidHandle`].
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::leftist::LeftistHeap;
//!
//! let mut heap = LeftistHeap::new();
//! heap.insert(30, "X");
//! heap.insert(20, "Y");
//! let u = heap.insert(60, "U");
//!
//! let u = heap.decrease_key(&u, 22).unwrap();
//! assert_eq!(heap.extract_min(), Ok((20, "Y")));
//! assert_eq!(heap.get(&u), Some((&22, &"U")));
//! assert_eq!(heap.extract_min(), Ok((22, "U")));
//! assert_eq!(heap.len(), 1);
//! ```

use crate::rank::{self, Rank, LEAF_RANK, NIL_RANK};
use crate::traits::{DecreaseKeyHeap, Handle, Heap, HeapError};
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use std::sync::atomic::{AtomicU64, Ordering};

new_key_type! {
    struct NodeKey;
}

/// Source of per-instance ids used to reject handles from other heaps.
static NEXT_HEAP_ID: AtomicU64 = AtomicU64::new(0);

fn next_heap_id() -> u64 {
    NEXT_HEAP_ID.fetch_add(1, Ordering::Relaxed)
}

/// Handle to an element in a [`LeftistHeap`]
///
/// A handle names an element, not a position: it stays valid while the
/// element moves around the tree, and becomes invalid once the element is
/// extracted or removed. `decrease_key` re-inserts the element and returns a
/// fresh handle; the one passed in is stale afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LeftistHandle {
    heap: u64,
    key: NodeKey,
}

impl Handle for LeftistHandle {}

#[derive(Debug, Clone)]
struct Node<T, P> {
    item: T,
    priority: P,
    rank: Rank,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
    // Non-owning; None only for the root.
    parent: Option<NodeKey>,
}

/// Leftist Heap
///
/// # Example
///
/// ```rust
/// use leftist_heap::leftist::LeftistHeap;
///
/// let mut heap = LeftistHeap::new();
/// heap.insert(10, "A");
/// let b = heap.insert(20, "B");
/// heap.insert(30, "C");
///
/// assert_eq!(heap.remove(&b), Ok((20, "B")));
/// assert_eq!(heap.into_sorted_vec(), vec![(10, "A"), (30, "C")]);
/// ```
#[derive(Debug)]
pub struct LeftistHeap<T, P: Ord> {
    nodes: SlotMap<NodeKey, Node<T, P>>,
    root: Option<NodeKey>,
    len: usize,
    id: u64,
}

impl<T, P: Ord> LeftistHeap<T, P> {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
            len: 0,
            id: next_heap_id(),
        }
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts an element with the given priority, returning its handle
    pub fn insert(&mut self, priority: P, item: T) -> LeftistHandle {
        let key = self.nodes.insert(Node {
            item,
            priority,
            rank: LEAF_RANK,
            left: None,
            right: None,
            parent: None,
        });

        let root = self.root;
        let merged = self.merge_trees(root, Some(key));
        self.set_root(merged);
        self.len += 1;

        LeftistHandle { heap: self.id, key }
    }

    /// Returns the minimum priority and its item without removing it
    pub fn peek(&self) -> Option<(&P, &T)> {
        self.root
            .and_then(|key| self.nodes.get(key))
            .map(|node| (&node.priority, &node.item))
    }

    /// Removes and returns the element with the minimum priority
    ///
    /// # Errors
    /// Returns `HeapError::EmptyHeap` if there is nothing to extract.
    pub fn extract_min(&mut self) -> Result<(P, T), HeapError> {
        let root = self.root.ok_or(HeapError::EmptyHeap)?;
        debug_assert!(self.nodes.contains_key(root), "root key missing from arena");
        let node = self.nodes.remove(root).ok_or(HeapError::EmptyHeap)?;
        Ok(self.splice_out(root, node))
    }

    /// Removes the element identified by `handle`, returning it
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the element was already removed
    /// or the handle was issued by another heap.
    pub fn remove(&mut self, handle: &LeftistHandle) -> Result<(P, T), HeapError> {
        let key = self.live_key(handle)?;
        debug_assert!(self.nodes.contains_key(key), "live key missing from arena");
        let node = self.nodes.remove(key).ok_or(HeapError::InvalidHandle)?;
        Ok(self.splice_out(key, node))
    }

    /// Lowers the priority of the element identified by `handle`
    ///
    /// The element is removed and inserted again with `new_priority`. The
    /// returned handle replaces `handle`, which is stale afterwards.
    ///
    /// # Errors
    /// - `HeapError::InvalidHandle` if the handle is not live in this heap
    /// - `HeapError::NonDecreasingKey` if `new_priority` is not strictly less
    ///   than the current priority
    pub fn decrease_key(
        &mut self,
        handle: &LeftistHandle,
        new_priority: P,
    ) -> Result<LeftistHandle, HeapError> {
        let key = self.live_key(handle)?;
        if new_priority >= self.nodes[key].priority {
            return Err(HeapError::NonDecreasingKey);
        }

        let (_, item) = self.remove(handle)?;
        Ok(self.insert(new_priority, item))
    }

    /// Moves every element of `other` into this heap
    ///
    /// On equal priorities the current minimum of `self` stays on top.
    /// Handles issued by `other` are invalid afterwards.
    pub fn merge(&mut self, mut other: Self) {
        if other.is_empty() {
            return;
        }

        let mut moved: SecondaryMap<NodeKey, NodeKey> =
            SecondaryMap::with_capacity(other.nodes.len());
        let mut adopted = Vec::with_capacity(other.nodes.len());
        for (old_key, node) in other.nodes.drain() {
            let new_key = self.nodes.insert(node);
            moved.insert(old_key, new_key);
            adopted.push(new_key);
        }

        let relink = |link: Option<NodeKey>| link.and_then(|key| moved.get(key).copied());
        for key in adopted {
            let node = &mut self.nodes[key];
            node.left = relink(node.left);
            node.right = relink(node.right);
            node.parent = relink(node.parent);
        }

        let other_root = relink(other.root.take());
        self.len += std::mem::take(&mut other.len);

        let root = self.root;
        let merged = self.merge_trees(root, other_root);
        self.set_root(merged);
    }

    /// Returns the priority and item behind `handle`, if it is live
    pub fn get(&self, handle: &LeftistHandle) -> Option<(&P, &T)> {
        if handle.heap != self.id {
            return None;
        }
        self.nodes
            .get(handle.key)
            .map(|node| (&node.priority, &node.item))
    }

    /// Returns true if `handle` refers to a live element of this heap
    pub fn contains(&self, handle: &LeftistHandle) -> bool {
        self.live_key(handle).is_ok()
    }

    /// Removes every element; all outstanding handles become invalid
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Iterates over all elements in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&P, &T)> + '_ {
        self.nodes.values().map(|node| (&node.priority, &node.item))
    }

    /// Drains the heap into a vector sorted by ascending priority
    pub fn into_sorted_vec(mut self) -> Vec<(P, T)> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Ok(entry) = self.extract_min() {
            sorted.push(entry);
        }
        sorted
    }

    /// Checks the whole tree against the leftist heap invariants
    ///
    /// Verifies heap order, leftist order, the rank definition, parent links
    /// and that `len()` matches the number of reachable nodes.
    pub fn verify_invariants(&self) -> bool {
        let Some(root) = self.root else {
            return self.len == 0 && self.nodes.is_empty();
        };
        match self.nodes.get(root) {
            Some(node) if node.parent.is_none() => {}
            _ => return false,
        }

        let mut reachable = 0usize;
        let mut stack = vec![root];
        while let Some(key) = stack.pop() {
            let Some(node) = self.nodes.get(key) else {
                return false;
            };
            reachable += 1;
            if reachable > self.nodes.len() {
                return false;
            }

            for child in [node.left, node.right].into_iter().flatten() {
                match self.nodes.get(child) {
                    Some(c) if c.parent == Some(key) && node.priority <= c.priority => {
                        stack.push(child)
                    }
                    _ => return false,
                }
            }

            let (left_rank, right_rank) = (self.rank_of(node.left), self.rank_of(node.right));
            if left_rank < right_rank || node.rank != rank::checked_increment(right_rank) {
                return false;
            }
        }

        reachable == self.len && reachable == self.nodes.len()
    }

    fn live_key(&self, handle: &LeftistHandle) -> Result<NodeKey, HeapError> {
        if handle.heap == self.id && self.nodes.contains_key(handle.key) {
            Ok(handle.key)
        } else {
            Err(HeapError::InvalidHandle)
        }
    }

    fn rank_of(&self, key: Option<NodeKey>) -> Rank {
        key.and_then(|key| self.nodes.get(key))
            .map_or(NIL_RANK, |node| node.rank)
    }

    fn set_root(&mut self, root: Option<NodeKey>) {
        self.root = root;
        if let Some(key) = root {
            self.nodes[key].parent = None;
        }
    }

    /// Merges two trees, returning the new subtree root
    ///
    /// The returned root's parent link is left as-is; the caller owns the slot
    /// it is attached to and sets the link accordingly.
    fn merge_trees(&mut self, a: Option<NodeKey>, b: Option<NodeKey>) -> Option<NodeKey> {
        let (a, b) = match (a, b) {
            (None, other) | (other, None) => return other,
            (Some(a), Some(b)) => (a, b),
        };

        let (small, large) = if self.nodes[b].priority < self.nodes[a].priority {
            (b, a)
        } else {
            (a, b)
        };

        let spine = self.nodes[small].right;
        let merged = self.merge_trees(spine, Some(large));
        self.nodes[small].right = merged;
        if let Some(child) = merged {
            self.nodes[child].parent = Some(small);
        }

        self.restore_leftist(small);
        Some(small)
    }

    /// Swaps children where leftist order is violated and recomputes the rank
    ///
    /// A lone child always ends up on the left. Returns the node's new rank.
    fn restore_leftist(&mut self, key: NodeKey) -> Rank {
        let (left, right) = {
            let node = &self.nodes[key];
            (node.left, node.right)
        };

        let swap = match (left, right) {
            (None, Some(_)) => true,
            (Some(_), Some(_)) => self.rank_of(left) < self.rank_of(right),
            _ => false,
        };
        let new_right = if swap { left } else { right };
        let rank = rank::rank_above(new_right.map(|key| self.rank_of(Some(key))));

        let node = &mut self.nodes[key];
        if swap {
            std::mem::swap(&mut node.left, &mut node.right);
        }
        node.rank = rank;
        rank
    }

    /// Re-attaches the children of an already-detached node in its place
    fn splice_out(&mut self, key: NodeKey, node: Node<T, P>) -> (P, T) {
        let replacement = self.merge_trees(node.left, node.right);

        match node.parent {
            None => {
                debug_assert_eq!(self.root, Some(key));
                self.set_root(replacement);
            }
            Some(parent) => {
                if let Some(child) = replacement {
                    self.nodes[child].parent = Some(parent);
                }
                let slot = &mut self.nodes[parent];
                if slot.left == Some(key) {
                    slot.left = replacement;
                } else {
                    debug_assert_eq!(slot.right, Some(key));
                    slot.right = replacement;
                }
                self.fix_ranks_upward(parent);
            }
        }

        self.len -= 1;
        (node.priority, node.item)
    }

    /// Restores leftist order from `start` towards the root
    ///
    /// Stops at the first node whose rank did not change: nothing above it
    /// can observe the edit.
    fn fix_ranks_upward(&mut self, start: NodeKey) {
        let mut current = start;
        loop {
            let before = self.nodes[current].rank;
            if self.restore_leftist(current) == before {
                break;
            }
            match self.nodes[current].parent {
                Some(parent) => current = parent,
                None => break,
            }
        }
    }
}

impl<T, P: Ord> Default for LeftistHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P: Ord + Clone> Clone for LeftistHeap<T, P> {
    /// The clone is a separate heap: handles of `self` are rejected by it.
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            len: self.len,
            id: next_heap_id(),
        }
    }
}

impl<T, P: Ord> FromIterator<(P, T)> for LeftistHeap<T, P> {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T, P: Ord> Extend<(P, T)> for LeftistHeap<T, P> {
    fn extend<I: IntoIterator<Item = (P, T)>>(&mut self, iter: I) {
        for (priority, item) in iter {
            self.insert(priority, item);
        }
    }
}

impl<T, P: Ord> Heap<T, P> for LeftistHeap<T, P> {
    fn new() -> Self {
        LeftistHeap::new()
    }

    fn is_empty(&self) -> bool {
        LeftistHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        LeftistHeap::len(self)
    }

    fn push(&mut self, priority: P, item: T) {
        self.insert(priority, item);
    }

    fn peek(&self) -> Option<(&P, &T)> {
        LeftistHeap::peek(self)
    }

    fn pop(&mut self) -> Option<(P, T)> {
        self.extract_min().ok()
    }

    fn merge(&mut self, other: Self) {
        LeftistHeap::merge(self, other)
    }
}

impl<T, P: Ord> DecreaseKeyHeap<T, P> for LeftistHeap<T, P> {
    type Handle = LeftistHandle;

    fn push_with_handle(&mut self, priority: P, item: T) -> Self::Handle {
        self.insert(priority, item)
    }

    fn decrease_key(
        &mut self,
        handle: &Self::Handle,
        new_priority: P,
    ) -> Result<Self::Handle, HeapError> {
        LeftistHeap::decrease_key(self, handle, new_priority)
    }

    fn remove(&mut self, handle: &Self::Handle) -> Result<(P, T), HeapError> {
        LeftistHeap::remove(self, handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<T, P: Ord>(heap: &mut LeftistHeap<T, P>) -> Vec<(P, T)> {
        let mut out = Vec::new();
        while let Ok(entry) = heap.extract_min() {
            assert!(heap.verify_invariants());
            out.push(entry);
        }
        out
    }

    #[test]
    fn test_creation() {
        let heap: LeftistHeap<&str, i32> = LeftistHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.peek(), None);
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_single_insert_and_extract() {
        let mut heap = LeftistHeap::new();
        heap.insert(2, "X");
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.extract_min(), Ok((2, "X")));
        assert_eq!(heap.len(), 0);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_extract_from_empty() {
        let mut heap: LeftistHeap<&str, i32> = LeftistHeap::new();
        assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_multiple_insert() {
        let mut heap = LeftistHeap::new();
        heap.insert(4, "X");
        heap.insert(3, "Y");
        heap.insert(7, "Z");
        heap.insert(5, "G");
        assert_eq!(heap.len(), 4);
        assert!(heap.verify_invariants());

        assert_eq!(
            drain(&mut heap),
            vec![(3, "Y"), (4, "X"), (5, "G"), (7, "Z")]
        );
    }

    #[test]
    fn test_remove_root() {
        let mut heap = LeftistHeap::new();
        let x = heap.insert(2, "X");
        heap.insert(3, "Y");
        heap.insert(7, "Z");

        assert_eq!(heap.remove(&x), Ok((2, "X")));
        assert_eq!(heap.len(), 2);
        assert_eq!(drain(&mut heap), vec![(3, "Y"), (7, "Z")]);
    }

    #[test]
    fn test_remove_inner() {
        let mut heap = LeftistHeap::new();
        heap.insert(2, "X");
        let y = heap.insert(3, "Y");
        heap.insert(7, "Z");
        heap.insert(5, "G");

        assert_eq!(heap.remove(&y), Ok((3, "Y")));
        assert_eq!(heap.len(), 3);
        assert!(heap.verify_invariants());
        assert_eq!(drain(&mut heap), vec![(2, "X"), (5, "G"), (7, "Z")]);
    }

    #[test]
    fn test_remove_leaf_in_the_middle() {
        let mut heap = LeftistHeap::new();
        heap.insert(10, "A");
        let b = heap.insert(20, "B");
        heap.insert(30, "C");
        heap.insert(40, "D");

        heap.remove(&b).unwrap();
        assert_eq!(drain(&mut heap), vec![(10, "A"), (30, "C"), (40, "D")]);
    }

    #[test]
    fn test_decrease_key() {
        let mut heap = LeftistHeap::new();
        heap.insert(30, "X");
        heap.insert(20, "Y");
        heap.insert(40, "Z");
        let h = heap.insert(60, "U");
        heap.insert(100, "V");
        heap.insert(100, "W");

        heap.decrease_key(&h, 22).unwrap();
        assert!(heap.verify_invariants());
        assert_eq!(heap.extract_min(), Ok((20, "Y")));
        assert_eq!(heap.extract_min(), Ok((22, "U")));
        assert_eq!(heap.len(), 4);
    }

    #[test]
    fn test_decrease_key_rejects_equal_and_greater() {
        let mut heap = LeftistHeap::new();
        let h = heap.insert(10, "a");
        heap.insert(5, "b");

        assert_eq!(heap.decrease_key(&h, 10), Err(HeapError::NonDecreasingKey));
        assert_eq!(heap.decrease_key(&h, 11), Err(HeapError::NonDecreasingKey));
        assert_eq!(heap.get(&h), Some((&10, &"a")));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_decrease_key_invalidates_old_handle() {
        let mut heap = LeftistHeap::new();
        let old = heap.insert(10, "a");
        let new = heap.decrease_key(&old, 1).unwrap();

        assert!(heap.contains(&new));
        assert!(!heap.contains(&old));
        assert_eq!(heap.remove(&old), Err(HeapError::InvalidHandle));
        assert_eq!(heap.decrease_key(&old, 0), Err(HeapError::InvalidHandle));
        assert_eq!(heap.get(&new), Some((&1, &"a")));
    }

    #[test]
    fn test_stale_handle_after_extract() {
        let mut heap = LeftistHeap::new();
        let h = heap.insert(1, "a");
        heap.insert(2, "b");
        heap.extract_min().unwrap();

        assert_eq!(heap.remove(&h), Err(HeapError::InvalidHandle));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_failed_removals_leave_heap_intact() {
        let mut heap = LeftistHeap::new();
        let gone = heap.insert(1, "a");
        let kept = heap.insert(2, "b");
        heap.insert(3, "c");
        assert_eq!(heap.remove(&gone), Ok((1, "a")));

        assert_eq!(heap.remove(&gone), Err(HeapError::InvalidHandle));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.peek(), Some((&2, &"b")));
        assert!(heap.contains(&kept));
        assert!(heap.verify_invariants());

        assert_eq!(heap.extract_min(), Ok((2, "b")));
        assert_eq!(heap.extract_min(), Ok((3, "c")));
        assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.remove(&kept), Err(HeapError::InvalidHandle));
        assert!(heap.is_empty());
        assert!(heap.verify_invariants());

        heap.insert(4, "d");
        assert_eq!(heap.peek(), Some((&4, &"d")));
    }

    #[test]
    fn test_stale_handle_after_slot_reuse() {
        let mut heap = LeftistHeap::new();
        let h = heap.insert(1, "a");
        heap.remove(&h).unwrap();
        let fresh = heap.insert(2, "b");

        assert_ne!(h, fresh);
        assert!(!heap.contains(&h));
        assert_eq!(heap.get(&h), None);
    }

    #[test]
    fn test_foreign_handle_rejected() {
        let mut heap1 = LeftistHeap::new();
        let mut heap2 = LeftistHeap::new();
        let h1 = heap1.insert(1, "a");
        heap2.insert(1, "b");

        assert_eq!(heap2.remove(&h1), Err(HeapError::InvalidHandle));
        assert_eq!(heap2.decrease_key(&h1, 0), Err(HeapError::InvalidHandle));
        assert_eq!(heap2.len(), 1);
        assert_eq!(heap2.peek(), Some((&1, &"b")));
    }

    #[test]
    fn test_handle_survives_restructuring() {
        let mut heap = LeftistHeap::new();
        let handles: Vec<_> = (0..50).map(|i| heap.insert(100 - i, i)).collect();
        for _ in 0..10 {
            heap.extract_min().unwrap();
        }
        // The ten smallest priorities were inserted last.
        for (i, handle) in handles.iter().enumerate() {
            let expected = (100 - i as i32, i as i32);
            if i < 40 {
                assert_eq!(heap.get(handle), Some((&expected.0, &expected.1)));
            } else {
                assert!(!heap.contains(handle));
            }
        }
    }

    #[test]
    fn test_equal_priorities_keep_existing_root() {
        let mut heap = LeftistHeap::new();
        heap.insert(1, "first");
        heap.insert(1, "second");
        assert_eq!(heap.peek(), Some((&1, &"first")));

        let mut other = LeftistHeap::new();
        other.insert(1, "other");
        heap.merge(other);
        assert_eq!(heap.peek(), Some((&1, &"first")));
    }

    #[test]
    fn test_merge_heaps() {
        let mut heap1 = LeftistHeap::new();
        heap1.insert(5, "a");
        heap1.insert(10, "b");

        let mut heap2 = LeftistHeap::new();
        let c = heap2.insert(3, "c");
        heap2.insert(7, "d");

        heap1.merge(heap2);
        assert_eq!(heap1.len(), 4);
        assert!(heap1.verify_invariants());
        assert!(!heap1.contains(&c));
        assert_eq!(
            drain(&mut heap1),
            vec![(3, "c"), (5, "a"), (7, "d"), (10, "b")]
        );
    }

    #[test]
    fn test_merge_with_empty() {
        let mut heap = LeftistHeap::new();
        let h = heap.insert(1, "a");
        heap.merge(LeftistHeap::new());
        assert_eq!(heap.len(), 1);
        assert!(heap.contains(&h));

        let mut empty = LeftistHeap::new();
        empty.merge(heap);
        assert_eq!(empty.len(), 1);
        assert!(empty.verify_invariants());
        assert_eq!(empty.peek(), Some((&1, &"a")));
    }

    #[test]
    fn test_ranks_of_ascending_inserts() {
        let mut heap = LeftistHeap::new();
        heap.insert(0, 0);
        heap.insert(1, 1);
        // A lone child is moved to the left.
        let root = heap.root.unwrap();
        assert_eq!(heap.nodes[root].rank, 1);
        assert!(heap.nodes[root].right.is_none());
        assert!(heap.nodes[root].left.is_some());

        heap.insert(2, 2);
        assert_eq!(heap.nodes[root].rank, 2);

        for i in 3..8 {
            heap.insert(i, i);
            assert!(heap.verify_invariants());
        }
        // rank <= log2(n + 1)
        assert!(heap.nodes[root].rank <= 3);
    }

    #[test]
    fn test_ranks_of_descending_inserts() {
        let mut heap = LeftistHeap::new();
        for i in (0..15).rev() {
            heap.insert(i, i);
        }
        assert!(heap.verify_invariants());
        let root = heap.root.unwrap();
        assert!(heap.nodes[root].rank <= 4);
    }

    #[test]
    fn test_remove_every_handle_in_insertion_order() {
        let mut heap = LeftistHeap::new();
        let handles: Vec<_> = [8, 3, 9, 1, 7, 2, 6, 4, 5, 0]
            .into_iter()
            .map(|p| heap.insert(p, p))
            .collect();

        for (removed, handle) in handles.iter().enumerate() {
            heap.remove(handle).unwrap();
            assert_eq!(heap.len(), handles.len() - removed - 1);
            assert!(heap.verify_invariants());
        }
        assert!(heap.is_empty());
    }

    #[test]
    fn test_clear_invalidates_handles() {
        let mut heap = LeftistHeap::new();
        let h = heap.insert(1, "a");
        heap.clear();
        assert!(heap.is_empty());
        assert!(!heap.contains(&h));
        assert!(heap.verify_invariants());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut heap = LeftistHeap::new();
        let h = heap.insert(1, "a");
        heap.insert(2, "b");

        let mut copy = heap.clone();
        assert!(!copy.contains(&h));
        assert_eq!(copy.extract_min(), Ok((1, "a")));
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.peek(), Some((&1, &"a")));
    }

    #[test]
    fn test_from_iterator_and_sorted_vec() {
        let heap: LeftistHeap<char, u32> =
            [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(heap.iter().count(), 3);
        assert_eq!(heap.into_sorted_vec(), vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    }
}
