//! # topograph Prelude
//!
//! This module re-exports the types and traits needed for everyday graph work, including
//! the set-view traits whose methods are only callable when the trait is in scope.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all topograph operations
pub use crate::Error;

/// The result type used throughout topograph
pub use crate::Result;

// ================================================================================================
// Graphs
// ================================================================================================

/// The graph and its edges
pub use crate::{Edge, EdgeComparer, Graph};

/// Construction options
pub use crate::{GraphConfig, GraphIncidenceOptions, ReverseIndexMode};

/// Set views over vertices and edges
pub use crate::{EdgeSet, EdgeSetMut, SetView, SetViewMut, VertexSet, VertexSetMut};

/// Enumeration that detects concurrent modification
pub use crate::{EdgeCursor, VertexCursor};

// ================================================================================================
// Traversal
// ================================================================================================

/// Traversal handles and adapters
pub use crate::{GraphBase, Neighborhood, Predecessors, Successors, Transposed};

/// Depth-first search over any traversal handle
pub use crate::algorithms::DepthFirst;

// ================================================================================================
// Ordering
// ================================================================================================

/// Stable topological ordering of sequences
pub use crate::{OrderTopologically, SortDirection, TopologicalOrder};
