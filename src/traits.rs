//! Common traits for heap data structures
//!
//! This module provides a two-tier trait hierarchy for priority queues:
//!
//! - [`Heap`]: Base trait for push/pop/peek/merge
//! - [`DecreaseKeyHeap`]: Extended trait adding handles, `decrease_key` and `remove`
//!
//! The base [`Heap`] trait follows Rust's standard heap API patterns, while
//! [`DecreaseKeyHeap`] adds the addressable operations needed by algorithms
//! like Dijkstra's shortest path.

use std::fmt;

/// Error type for heap operations
///
/// Every operation checks its preconditions before touching the tree, so a
/// returned error always means the heap is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements
    EmptyHeap,
    /// The handle does not refer to a live element of this heap
    InvalidHandle,
    /// The new priority is not strictly less than the current priority
    NonDecreasingKey,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
            HeapError::InvalidHandle => {
                write!(f, "handle is not live in this heap (removed or foreign)")
            }
            HeapError::NonDecreasingKey => {
                write!(f, "new priority is not less than current priority")
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A handle to an element in the heap
///
/// This is an opaque value identifying one specific element. Handles are
/// `Copy`; holding one never keeps an element alive.
pub trait Handle: Copy + Eq + fmt::Debug {}

/// Base trait for heap/priority queue data structures
///
/// Stores (priority, item) pairs to separate the ordering key from the data.
/// This is a min-heap: `pop` returns the smallest priority first.
///
/// # Example
///
/// ```rust
/// use leftist_heap::Heap;
/// use leftist_heap::leftist::LeftistHeap;
///
/// let mut heap = LeftistHeap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    fn pop(&mut self) -> Option<(P, T)>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}

/// Extended heap trait with handle-based operations
///
/// - `push_with_handle` returns a handle naming the inserted element
/// - `decrease_key` lowers an element's priority
/// - `remove` deletes an arbitrary element
///
/// # Example
///
/// ```rust
/// use leftist_heap::{DecreaseKeyHeap, Heap};
/// use leftist_heap::leftist::LeftistHeap;
///
/// let mut heap = LeftistHeap::new();
/// let handle = heap.push_with_handle(10, "item");
/// let handle = heap.decrease_key(&handle, 5).unwrap();
/// assert_eq!(heap.peek(), Some((&5, &"item")));
/// assert_eq!(heap.remove(&handle), Ok((5, "item")));
/// ```
pub trait DecreaseKeyHeap<T, P: Ord>: Heap<T, P> {
    /// The handle type for this heap
    type Handle: Handle;

    /// Inserts an element with the given priority, returning a handle
    fn push_with_handle(&mut self, priority: P, item: T) -> Self::Handle;

    /// Decreases the priority of the element identified by the handle
    ///
    /// Returns the handle to use for the element from now on. Implementations
    /// may re-allocate the element, in which case the old handle is stale.
    ///
    /// # Errors
    /// - `HeapError::InvalidHandle` if the handle is not live in this heap
    /// - `HeapError::NonDecreasingKey` if `new_priority` is not strictly less
    ///   than the current priority
    fn decrease_key(
        &mut self,
        handle: &Self::Handle,
        new_priority: P,
    ) -> Result<Self::Handle, HeapError>;

    /// Removes the element identified by the handle, returning it
    ///
    /// # Errors
    /// Returns `HeapError::InvalidHandle` if the handle is not live in this heap.
    fn remove(&mut self, handle: &Self::Handle) -> Result<(P, T), HeapError>;
}
