use thiserror::Error;

macro_rules! invalid_argument {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidArgument($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Most graph operations are infallible: adding a vertex or an edge that already exists is
/// not an error and is reported through a `bool` return value instead. The variants below
/// cover the few conditions a caller cannot rule out statically.
///
/// # Error Categories
///
/// ## Ordering Errors
/// - [`Error::UnresolvedCycle`] - Strict topological ordering met a cycle
///
/// ## Argument Errors
/// - [`Error::InvalidArgument`] - A supplied argument cannot be used for the operation
///
/// ## Enumeration Errors
/// - [`Error::ConcurrentModification`] - A detached cursor observed a structural change
///
/// # Examples
///
/// ```rust
/// use topograph::{Edge, Error, Graph, SetViewMut};
///
/// let mut graph: Graph<&str> = Graph::new();
/// graph.edges_mut().add(Edge::new("a", "b"));
/// graph.edges_mut().add(Edge::new("b", "a"));
///
/// match graph.order_topologically() {
///     Ok(order) => println!("order: {:?}", order),
///     Err(Error::UnresolvedCycle { remaining }) => {
///         println!("{} vertices are stuck in a cycle", remaining);
///     }
///     Err(e) => println!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The graph contains a cycle that prevents a strict topological order.
    ///
    /// Raised only by [`Graph::order_topologically`](crate::Graph::order_topologically)
    /// after every vertex with no remaining predecessor has been peeled off and edges are
    /// still left. The sequence-level stable sort never produces this error.
    ///
    /// # Fields
    ///
    /// * `remaining` - Number of vertices that could not be ordered
    #[error("Graph contains an unresolved cycle - {remaining} vertices could not be ordered")]
    UnresolvedCycle {
        /// Number of vertices left in the working graph when peeling stopped
        remaining: usize,
    },

    /// A supplied argument is not usable for the requested operation.
    ///
    /// For example, an undirected graph cannot express a precedence relation, so passing
    /// one as a dependency graph is rejected before any traversal begins.
    #[error("Invalid argument - {0}")]
    InvalidArgument(String),

    /// The graph was modified while a detached cursor was enumerating it.
    ///
    /// Cursors snapshot the graph's mutation version when they are created. Any step
    /// taken after the graph changed fails with this error instead of returning a
    /// possibly inconsistent element.
    ///
    /// # Fields
    ///
    /// * `expected` - Version the cursor was created against
    /// * `found` - Version of the graph at the failing step
    #[error("Graph structure was modified during iteration (expected version {expected}, found {found})")]
    ConcurrentModification {
        /// Version captured by the cursor
        expected: u64,
        /// Version observed on the graph
        found: u64,
    },
}
