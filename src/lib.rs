//! Leftist Heap for Rust
//!
//! A mergeable priority queue built on a leftist tree, with stable handles
//! that support arbitrary removal and `decrease_key`.
//!
//! # Features
//!
//! - **O(log n) merge**: two heaps combine by walking their right spines
//! - **Handles**: `insert` returns a [`LeftistHandle`](leftist::LeftistHandle)
//!   that keeps naming its element while the tree reshapes around it
//! - **remove / decrease_key**: by handle, O(log n)
//! - **Checked misuse**: stale or foreign handles and non-decreasing keys are
//!   reported as [`HeapError`] values; the heap is left untouched
//! - **pathfinding** (default feature): Dijkstra and A* drivers over any
//!   [`DecreaseKeyHeap`]
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::leftist::LeftistHeap;
//! use leftist_heap::HeapError;
//!
//! let mut heap = LeftistHeap::new();
//! heap.insert(4, "X");
//! let y = heap.insert(3, "Y");
//! heap.insert(7, "Z");
//!
//! assert_eq!(heap.peek(), Some((&3, &"Y")));
//! assert_eq!(heap.decrease_key(&y, 3), Err(HeapError::NonDecreasingKey));
//! assert_eq!(heap.extract_min(), Ok((3, "Y")));
//! assert_eq!(heap.remove(&y), Err(HeapError::InvalidHandle));
//! assert_eq!(heap.len(), 2);
//! ```

pub mod leftist;
#[cfg(feature = "pathfinding")]
pub mod pathfinding;
pub mod rank;
pub mod traits;

// Re-export the main traits for convenience
pub use leftist::{LeftistHandle, LeftistHeap};
pub use traits::{DecreaseKeyHeap, Handle, Heap, HeapError};
