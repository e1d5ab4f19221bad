//! Dijkstra's and A* search driven by a [`DecreaseKeyHeap`]
//!
//! The open set holds one entry per discovered node. When a shorter route to
//! a node is found its priority is lowered in place with `decrease_key`
//! instead of pushing a duplicate, and the handle returned by `decrease_key`
//! replaces the stored one.
//!
//! Only lightweight indices are stored in the heap. A fast hash map (FxHash)
//! maps node states to their index; per-node metadata lives in a vector.
//!
//! Dijkstra is A* with h(n) = 0.
//!
//! # Example
//!
//! ```rust
//! use leftist_heap::leftist::LeftistHeap;
//! use leftist_heap::pathfinding::{dijkstra, SearchNode};
//!
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct GridPos { x: i32, y: i32, goal_x: i32, goal_y: i32 }
//!
//! impl SearchNode for GridPos {
//!     type Cost = u32;
//!
//!     fn successors(&self) -> Vec<(Self, Self::Cost)> {
//!         [(1, 0), (-1, 0), (0, 1), (0, -1)]
//!             .into_iter()
//!             .map(|(dx, dy)| (GridPos { x: self.x + dx, y: self.y + dy, ..self.clone() }, 1))
//!             .collect()
//!     }
//!
//!     fn is_goal(&self) -> bool {
//!         self.x == self.goal_x && self.y == self.goal_y
//!     }
//! }
//!
//! let start = GridPos { x: 0, y: 0, goal_x: 2, goal_y: 2 };
//! let (path, cost) = dijkstra::<_, LeftistHeap<_, _>>(&start).unwrap();
//! assert_eq!(cost, 4);
//! assert_eq!(path.len(), 5);
//! ```

use crate::traits::{DecreaseKeyHeap, Heap};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::Add;

/// Trait for types usable as path costs.
///
/// `Default` must be the zero cost.
pub trait Cost: Ord + Copy + Add<Output = Self> + Default {}

impl<T> Cost for T where T: Ord + Copy + Add<Output = Self> + Default {}

/// A node in a search graph.
///
/// The node carries whatever context it needs to enumerate its neighbours and
/// to recognise a goal.
pub trait SearchNode: Clone + Eq + Hash {
    /// Edge weight type
    type Cost: Cost;

    /// Returns every neighbour together with the cost of the edge to it.
    fn successors(&self) -> Vec<(Self, Self::Cost)>;

    /// Returns true if this node ends the search.
    fn is_goal(&self) -> bool;
}

/// A node that can estimate its remaining distance to a goal, for A*.
pub trait AStarNode: SearchNode {
    /// Admissible estimate of the cost from this node to a goal: it must
    /// never overestimate, otherwise A* may return a suboptimal path.
    fn heuristic(&self) -> Self::Cost;
}

/// Heap priority for a search entry, ordered by f-score only.
#[derive(Debug, Clone, Copy)]
pub struct PriorityCost<C> {
    /// g + h (h = 0 for Dijkstra)
    pub f_score: C,
    /// Cost from the start
    pub g_score: C,
}

impl<C: Ord> PartialEq for PriorityCost<C> {
    fn eq(&self, other: &Self) -> bool {
        self.f_score == other.f_score
    }
}

impl<C: Ord> Eq for PriorityCost<C> {}

impl<C: Ord> PartialOrd for PriorityCost<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for PriorityCost<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_score.cmp(&other.f_score)
    }
}

/// Index of a discovered node; this is what the heap stores as its item.
pub type NodeIndex = usize;

struct NodeEntry<N: SearchNode, H> {
    node: N,
    g_score: N::Cost,
    /// Set while the node sits in the open set
    handle: Option<H>,
    came_from: Option<NodeIndex>,
    closed: bool,
}

/// Open/closed bookkeeping shared by all searches.
struct SearchState<N: SearchNode, H> {
    entries: Vec<NodeEntry<N, H>>,
    index_of: FxHashMap<N, NodeIndex>,
}

impl<N: SearchNode, H: Copy> SearchState<N, H> {
    fn new() -> Self {
        SearchState {
            entries: Vec::new(),
            index_of: FxHashMap::default(),
        }
    }

    /// Returns the node's index and whether it was seen for the first time.
    fn discover(&mut self, node: &N, g_score: N::Cost) -> (NodeIndex, bool) {
        if let Some(&index) = self.index_of.get(node) {
            return (index, false);
        }
        let index = self.entries.len();
        self.index_of.insert(node.clone(), index);
        self.entries.push(NodeEntry {
            node: node.clone(),
            g_score,
            handle: None,
            came_from: None,
            closed: false,
        });
        (index, true)
    }

    fn reconstruct_path(&self, goal: NodeIndex) -> Vec<N> {
        let mut path = Vec::new();
        let mut current = Some(goal);
        while let Some(index) = current {
            let entry = &self.entries[index];
            path.push(entry.node.clone());
            current = entry.came_from;
        }
        path.reverse();
        path
    }
}

/// Limits applied to a search.
#[derive(Debug, Clone, Copy)]
struct Limits<C> {
    max_cost: Option<C>,
    max_nodes: Option<usize>,
}

impl<C> Default for Limits<C> {
    fn default() -> Self {
        Limits {
            max_cost: None,
            max_nodes: None,
        }
    }
}

/// What to do with a node popped from the open set.
enum Visit {
    Stop,
    Expand,
}

/// Best-first search core.
///
/// `on_settle` is called once per settled node with its final cost and
/// decides whether the search stops there. Returns the index of the node the
/// search stopped at, if any, and the bookkeeping for path reconstruction.
fn best_first<N, H>(
    start: &N,
    heuristic: impl Fn(&N) -> N::Cost,
    limits: Limits<N::Cost>,
    mut on_settle: impl FnMut(&N, N::Cost) -> Visit,
) -> (Option<(NodeIndex, N::Cost)>, SearchState<N, H::Handle>)
where
    N: SearchNode,
    H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
{
    let zero = N::Cost::default();
    let mut heap = H::new();
    let mut state: SearchState<N, H::Handle> = SearchState::new();

    let (start_index, _) = state.discover(start, zero);
    let priority = PriorityCost {
        f_score: heuristic(start),
        g_score: zero,
    };
    state.entries[start_index].handle = Some(heap.push_with_handle(priority, start_index));

    let within_budget = |cost: N::Cost| limits.max_cost.map_or(true, |max| cost <= max);
    let mut settled = 0usize;

    while let Some((priority, current_index)) = heap.pop() {
        let current = &mut state.entries[current_index];
        if current.closed {
            continue;
        }
        current.closed = true;
        current.handle = None;
        let current_node = current.node.clone();

        let current_g = priority.g_score;
        if !within_budget(current_g) {
            continue;
        }
        if limits.max_nodes.is_some_and(|max| settled >= max) {
            return (None, state);
        }
        settled += 1;

        if let Visit::Stop = on_settle(&current_node, current_g) {
            return (Some((current_index, current_g)), state);
        }

        for (neighbor, edge_cost) in current_node.successors() {
            let tentative_g = current_g + edge_cost;
            if !within_budget(tentative_g) {
                continue;
            }

            let (neighbor_index, is_new) = state.discover(&neighbor, tentative_g);
            let entry = &mut state.entries[neighbor_index];
            if entry.closed || (!is_new && tentative_g >= entry.g_score) {
                continue;
            }

            let new_priority = PriorityCost {
                f_score: tentative_g + heuristic(&neighbor),
                g_score: tentative_g,
            };

            // g strictly drops and h is fixed per node, so f drops too.
            let handle = match entry.handle {
                Some(handle) => match heap.decrease_key(&handle, new_priority) {
                    Ok(handle) => handle,
                    Err(err) => {
                        debug_assert!(false, "open-set decrease_key failed: {err}");
                        continue;
                    }
                },
                None => heap.push_with_handle(new_priority, neighbor_index),
            };
            entry.g_score = tentative_g;
            entry.came_from = Some(current_index);
            entry.handle = Some(handle);
        }
    }

    (None, state)
}

fn search_to_goal<N, H>(
    start: &N,
    heuristic: impl Fn(&N) -> N::Cost,
    limits: Limits<N::Cost>,
) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
{
    let (found, state) = best_first::<N, H>(start, heuristic, limits, |node, _| {
        if node.is_goal() {
            Visit::Stop
        } else {
            Visit::Expand
        }
    });
    found.map(|(goal, cost)| (state.reconstruct_path(goal), cost))
}

/// Runs Dijkstra's algorithm from `start` until a node's `is_goal()` holds.
///
/// Returns the path (start and goal inclusive) and its cost, or `None` if no
/// goal is reachable.
pub fn dijkstra<N, H>(start: &N) -> Option<(Vec<N>, N::Cost)>
where
    N: SearchNode,
    H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
{
    search_to_goal::<N, H>(start, |_| N::Cost::default(), Limits::default())
}

/// Runs A* search from `start`, guided by the node's `heuristic()`.
pub fn astar<N, H>(start: &N) -> Option<(Vec<N>, N::Cost)>
where
    N: AStarNode,
    H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
{
    search_to_goal::<N, H>(start, |node| node.heuristic(), Limits::default())
}

/// Returns every node reachable from `start` within `max_cost`, with its
/// shortest distance, in order of increasing distance.
pub fn reachable_within<N, H>(start: &N, max_cost: N::Cost) -> Vec<(N, N::Cost)>
where
    N: SearchNode,
    H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
{
    let mut reached = Vec::new();
    let limits = Limits {
        max_cost: Some(max_cost),
        max_nodes: None,
    };
    best_first::<N, H>(start, |_| N::Cost::default(), limits, |node, cost| {
        reached.push((node.clone(), cost));
        Visit::Expand
    });
    reached
}

/// Builder for searches with cost or size limits.
///
/// ```rust
/// use leftist_heap::leftist::LeftistHeap;
/// use leftist_heap::pathfinding::{PathFinderBuilder, SearchNode};
///
/// #[derive(Clone, PartialEq, Eq, Hash)]
/// struct Step(u32);
///
/// impl SearchNode for Step {
///     type Cost = u32;
///     fn successors(&self) -> Vec<(Self, u32)> {
///         vec![(Step(self.0 + 1), 1)]
///     }
///     fn is_goal(&self) -> bool {
///         self.0 == 50
///     }
/// }
///
/// let found = PathFinderBuilder::new(Step(0))
///     .max_cost(10)
///     .dijkstra::<LeftistHeap<_, _>>();
/// assert!(found.is_none());
/// ```
pub struct PathFinderBuilder<N: SearchNode> {
    start: N,
    limits: Limits<N::Cost>,
}

impl<N: SearchNode> PathFinderBuilder<N> {
    /// Creates a new builder starting from the given node.
    pub fn new(start: N) -> Self {
        PathFinderBuilder {
            start,
            limits: Limits::default(),
        }
    }

    /// Ignores nodes whose cost from the start exceeds `cost`.
    pub fn max_cost(mut self, cost: N::Cost) -> Self {
        self.limits.max_cost = Some(cost);
        self
    }

    /// Gives up after settling `count` nodes.
    pub fn max_nodes(mut self, count: usize) -> Self {
        self.limits.max_nodes = Some(count);
        self
    }

    /// Runs Dijkstra's algorithm with the configured limits.
    pub fn dijkstra<H>(self) -> Option<(Vec<N>, N::Cost)>
    where
        H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
    {
        search_to_goal::<N, H>(&self.start, |_| N::Cost::default(), self.limits)
    }

    /// Runs A* search with the configured limits.
    pub fn astar<H>(self) -> Option<(Vec<N>, N::Cost)>
    where
        N: AStarNode,
        H: DecreaseKeyHeap<NodeIndex, PriorityCost<N::Cost>>,
    {
        search_to_goal::<N, H>(&self.start, |node| node.heuristic(), self.limits)
    }
}
