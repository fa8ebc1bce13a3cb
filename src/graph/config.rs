//! Construction-time configuration for graphs.
//!
//! Two kinds of knobs exist:
//!
//! - [`GraphConfig`] fixes properties of a graph for its whole lifetime: whether it is
//!   directed and how its reverse adjacency index is maintained.
//! - [`GraphIncidenceOptions`] tunes how [`Graph::from_incidence`](crate::Graph::from_incidence)
//!   turns an incidence rule into edges.

use bitflags::bitflags;

/// Strategy for maintaining the reverse adjacency index.
///
/// The reverse index maps every vertex to the set of vertices with an edge pointing at it.
/// It accelerates incoming-edge queries, vertex removal and transposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum ReverseIndexMode {
    /// Build the reverse index on the first query that needs it, then keep it in sync
    /// with every later mutation.
    ///
    /// Pure insertion workloads that never look at incoming adjacency pay nothing.
    #[default]
    Lazy,
    /// Maintain the reverse index from construction onwards.
    ///
    /// Every mutation writes both indices, which doubles adjacency memory but keeps
    /// incoming queries and transposition O(1) to start.
    Eager,
}

/// Configuration fixed at graph construction.
///
/// # Examples
///
/// ```rust
/// use topograph::{Graph, GraphConfig, ReverseIndexMode};
///
/// let config = GraphConfig::undirected().with_reverse_index(ReverseIndexMode::Eager);
/// let graph: Graph<u32> = Graph::with_config(config);
/// assert!(!graph.is_directed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Whether edges have a direction. Cannot change after construction.
    pub directed: bool,

    /// How the reverse adjacency index is maintained.
    pub reverse_index: ReverseIndexMode,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: true,
            reverse_index: ReverseIndexMode::Lazy,
        }
    }
}

impl GraphConfig {
    /// Creates the configuration of a directed graph with a lazily built reverse index.
    #[must_use]
    pub fn directed() -> Self {
        Self::default()
    }

    /// Creates the configuration of an undirected graph with a lazily built reverse index.
    #[must_use]
    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Self::default()
        }
    }

    /// Returns this configuration with the given reverse index strategy.
    #[must_use]
    pub fn with_reverse_index(mut self, mode: ReverseIndexMode) -> Self {
        self.reverse_index = mode;
        self
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    /// Options for deriving a graph from an incidence rule
    pub struct GraphIncidenceOptions: u32 {
        /// Skip self-pairs: the rule is never asked whether `v` is incident to `v`
        const REFLEXIVE_REDUCTION = 0x0001;
        /// Drop vertices without any incident edge, unless the graph has a single vertex
        const CONNECTED = 0x0002;
    }
}
