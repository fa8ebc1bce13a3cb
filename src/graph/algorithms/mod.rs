//! Graph algorithms.
//!
//! Most algorithms are exposed as inherent methods on [`Graph`](crate::Graph) and are
//! implemented in the submodules below. The traversal primitives are public on their own
//! so they can run over any [`Successors`](crate::graph::Successors) handle.
//!
//! # Available Algorithms
//!
//! ## Traversal
//!
//! - [`DepthFirst`] - Iterative depth-first search
//! - [`has_transitive_path`] - Path of two or more edges between two vertices
//!
//! ## Reachability
//!
//! - [`Graph::has_path`](crate::Graph::has_path) and its direct/transitive variants
//! - [`Graph::vertices_connected_with`](crate::Graph::vertices_connected_with) and the
//!   directed variants
//! - [`Graph::is_connected`](crate::Graph::is_connected),
//!   [`Graph::connected_components`](crate::Graph::connected_components)
//!
//! ## Structure
//!
//! - [`Graph::is_cyclic`](crate::Graph::is_cyclic)
//! - [`Graph::reduce_transitions`](crate::Graph::reduce_transitions),
//!   [`Graph::reduce_reflexes`](crate::Graph::reduce_reflexes)
//! - [`Graph::transpose`](crate::Graph::transpose)
//! - [`Graph::order_topologically`](crate::Graph::order_topologically)
//! - [`Graph::get_subgraph`](crate::Graph::get_subgraph) and set algebra
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS | O(V + E) | Reachability, connectivity |
//! | Cycle detection | O(V + E) | Acyclicity checks |
//! | Transitive reduction | O(V * E) | Minimal dependency graphs |
//! | Strict topological order | O(V + E) | Build and load ordering |

mod cycles;
mod reachability;
mod reduction;
mod subgraph;
mod topological;
mod transposition;
mod traversal;

pub use traversal::{has_transitive_path, DepthFirst};
