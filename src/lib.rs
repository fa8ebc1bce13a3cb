// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # topograph
//!
//! Mutable directed and undirected graphs with cached structural queries, and a stable,
//! cycle-tolerant topological sort for arbitrary sequences.
//!
//! ## Features
//!
//! - **Insertion-ordered storage** - Vertices, edges and every algorithm enumerate
//!   deterministically
//! - **Lazy reverse index** - Incoming adjacency is built on first use and kept in sync
//!   afterwards, or maintained from the start with [`ReverseIndexMode::Eager`]
//! - **Memoized scalars** - Connectivity and acyclicity are cached against a mutation
//!   version and survive mutations that cannot change them
//! - **Structural algorithms** - Reachability, cycle detection, transitive reduction,
//!   transposition, subgraphs and set algebra
//! - **Stable ordering** - [`OrderTopologically`] reorders any sequence by a dependency
//!   relation while keeping unconstrained elements in place, even across cycles
//! - **Iterative traversal** - No algorithm recurses, so deep graphs are safe
//!
//! ## Quick Start
//!
//! ### Graphs
//!
//! ```rust
//! use topograph::prelude::*;
//!
//! let mut graph: Graph<&str> = Graph::new();
//! graph.edges_mut().add(Edge::new("a", "b"));
//! graph.edges_mut().add(Edge::new("b", "c"));
//! graph.edges_mut().add(Edge::new("a", "c"));
//!
//! assert!(!graph.is_cyclic());
//! graph.reduce_transitions();
//! assert!(!graph.edges().contains(&Edge::new("a", "c")));
//! assert_eq!(graph.order_topologically()?, vec!["a", "b", "c"]);
//! # Ok::<(), topograph::Error>(())
//! ```
//!
//! ### Sequences
//!
//! ```rust
//! use topograph::prelude::*;
//!
//! // "b" depends on "a"; "z" is unconstrained and keeps its place
//! let order = vec!["z", "b", "a"]
//!     .order_topologically(|x, y| *x == "b" && *y == "a")
//!     .into_vec();
//! assert_eq!(order, vec!["z", "a", "b"]);
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`Result<T>`]. Adding something that already exists is not
//! an error; set views report it with a `false` return value instead. See [`Error`].
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade. The crate never
//! installs a logger.
//!
//! ## Thread Safety
//!
//! A [`Graph`] memoizes derived values through interior mutability and is therefore
//! [`Send`] but not [`Sync`]. Share it across threads behind a lock.

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use topograph::prelude::*;
///
/// let graph: Graph<u32> = [Edge::new(1, 2), Edge::new(2, 3)].into_iter().collect();
/// assert!(graph.has_path(&1, &3));
/// ```
pub mod prelude;

/// Mutable graphs, their set views and the algorithms running on them.
///
/// # Key Components
///
/// - [`Graph`] - The graph, generic over vertex type and hasher
/// - [`graph::VertexSet`] / [`graph::EdgeSet`] - Read and write access to the structure
/// - [`graph::algorithms`] - Traversal primitives
pub mod graph;

/// Stable, cycle-tolerant topological ordering of sequences.
///
/// See [`OrderTopologically`] for the entry points and [`TopologicalOrder`] for
/// tie-breaking and reversal.
pub mod ordering;

/// `topograph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
///
/// # Examples
///
/// ```rust
/// use topograph::{Graph, Result};
///
/// fn build_order(graph: &Graph<&'static str>) -> Result<Vec<&'static str>> {
///     graph.order_topologically()
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `topograph` Error type
///
/// The single error type of this crate; most graph operations are infallible.
pub use error::Error;

pub use graph::{
    algorithms, Edge, EdgeComparer, EdgeCursor, EdgeSet, EdgeSetMut, Graph, GraphBase,
    GraphConfig, GraphIncidenceOptions, Neighborhood, Predecessors, ReverseIndexMode, SetView,
    SetViewMut, Successors, Transposed, VertexCursor, VertexSet, VertexSetMut,
};

pub use ordering::{OrderTopologically, SortDirection, TopologicalOrder};
