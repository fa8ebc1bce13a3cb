//! Mutable directed and undirected graphs.
//!
//! # Key Components
//!
//! - [`Graph`] - The graph itself, generic over the vertex type and hasher
//! - [`Edge`] / [`EdgeComparer`] - Edges and directionality-aware edge equality
//! - [`VertexSet`] / [`EdgeSet`] and their `Mut` variants - Set views, the only way to
//!   change the structure
//! - [`VertexCursor`] / [`EdgeCursor`] - Enumeration that detects concurrent modification
//! - [`GraphConfig`] / [`GraphIncidenceOptions`] - Construction options
//! - [`algorithms`] - Traversal primitives
//!
//! # Caching
//!
//! Connectivity and acyclicity are computed on demand and memoized against the graph's
//! mutation version. Edge additions between existing vertices keep a known "connected"
//! answer, every edge addition keeps a known "cyclic" one, and edge removals keep a known
//! "disconnected" or "acyclic" one. Any other change recomputes on the next query.

pub mod algorithms;
mod base;
mod cache;
mod config;
mod edge;
pub(crate) mod store;
mod traits;
mod views;

pub use self::base::Graph;
pub use self::config::{GraphConfig, GraphIncidenceOptions, ReverseIndexMode};
pub use self::edge::{Edge, EdgeComparer};
pub use self::traits::{
    GraphBase, Neighborhood, Predecessors, SetView, SetViewMut, Successors, Transposed,
};
pub use self::views::{EdgeCursor, EdgeSet, EdgeSetMut, VertexCursor, VertexSet, VertexSetMut};
