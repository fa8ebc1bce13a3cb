//! The mutable [`Graph`] type and its mutation primitives.
//!
//! A graph owns a forward [`AdjacencyStore`] and an optional reverse index holding the same
//! edges inverted. The reverse index is materialized on the first query that needs
//! incoming adjacency (or at construction for [`ReverseIndexMode::Eager`]) and from then on
//! every mutation writes both indices.
//!
//! Undirected graphs store each edge once, under the endpoint it was added from. Every
//! query that depends on adjacency consults both indices so that the stored orientation
//! never leaks into results.
//!
//! All structural changes funnel through a handful of crate-private primitives
//! (`insert_vertex`, `remove_vertex`, `insert_edge`, `remove_edge`, `clear_edges`, `clear`)
//! which keep the edge count current and bump the mutation version. Callers reach them
//! through the [`SetViewMut`](crate::SetViewMut) views.

use std::{
    cell::OnceCell,
    collections::hash_map::RandomState,
    fmt,
    hash::{BuildHasher, Hash},
};

use crate::graph::{
    cache::{Cache, Mutation},
    config::{GraphConfig, GraphIncidenceOptions, ReverseIndexMode},
    edge::{Edge, EdgeComparer},
    store::{AdjacencyRow, AdjacencyStore},
    traits::{GraphBase, Predecessors, Successors},
};

/// A mutable directed or undirected graph over vertices of type `V`.
///
/// Vertices are compared with `V`'s [`Eq`] and [`Hash`] implementations and hashed with the
/// [`BuildHasher`] `S`. Enumeration always follows insertion order.
///
/// # Examples
///
/// ```rust
/// use topograph::{Edge, Graph, SetView, SetViewMut};
///
/// let mut graph: Graph<&str> = Graph::new();
/// graph.edges_mut().add(Edge::new("a", "b"));
/// graph.edges_mut().add(Edge::new("b", "c"));
/// graph.vertices_mut().add("d");
///
/// assert_eq!(graph.order(), 4);
/// assert_eq!(graph.size(), 2);
/// assert!(graph.has_path(&"a", &"c"));
/// assert!(graph.edges().contains(&Edge::new("a", "b")));
/// ```
pub struct Graph<V, S = RandomState> {
    pub(crate) store: AdjacencyStore<V, S>,
    pub(crate) reverse: OnceCell<AdjacencyStore<V, S>>,
    pub(crate) config: GraphConfig,
    pub(crate) size: usize,
    pub(crate) version: u64,
    pub(crate) cache: Cache,
}

impl<V> Graph<V, RandomState>
where
    V: Eq + Hash + Clone,
{
    /// Creates an empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GraphConfig::directed())
    }

    /// Creates an empty undirected graph.
    #[must_use]
    pub fn new_undirected() -> Self {
        Self::with_config(GraphConfig::undirected())
    }

    /// Creates an empty graph with the given configuration.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self::with_config_and_hasher(config, RandomState::new())
    }
}

impl<V> Default for Graph<V, RandomState>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S> Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Creates an empty directed graph hashing vertices with `hasher`.
    #[must_use]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_config_and_hasher(GraphConfig::directed(), hasher)
    }

    /// Creates an empty graph with the given configuration and hasher.
    #[must_use]
    pub fn with_config_and_hasher(config: GraphConfig, hasher: S) -> Self {
        let store = AdjacencyStore::with_hasher(hasher);
        let reverse = match config.reverse_index {
            ReverseIndexMode::Lazy => OnceCell::new(),
            ReverseIndexMode::Eager => OnceCell::from(store.empty_like()),
        };
        Graph {
            store,
            reverse,
            config,
            size: 0,
            version: 0,
            cache: Cache::new(),
        }
    }

    /// Creates an empty graph with the same configuration and hasher as this one.
    #[must_use]
    pub fn empty_like(&self) -> Self {
        Self::with_config_and_hasher(self.config, self.store.hasher().clone())
    }

    /// Builds a directed graph over `vertices` from an incidence rule.
    ///
    /// `incidence(a, b)` is asked once for every ordered pair of distinct input vertices
    /// (and for every `(v, v)` unless [`GraphIncidenceOptions::REFLEXIVE_REDUCTION`] is
    /// set); each `true` answer adds the edge `a -> b`. With
    /// [`GraphIncidenceOptions::CONNECTED`] vertices left without any incident edge are
    /// dropped, unless the graph has a single vertex.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topograph::{Graph, GraphIncidenceOptions};
    ///
    /// let graph: Graph<u32> = Graph::from_incidence(
    ///     [2, 3, 4, 7],
    ///     |a, b| b % a == 0,
    ///     GraphIncidenceOptions::REFLEXIVE_REDUCTION | GraphIncidenceOptions::CONNECTED,
    /// );
    ///
    /// assert!(graph.has_direct_path(&2, &4));
    /// assert!(!graph.contains_vertex(&7));
    /// ```
    #[must_use]
    pub fn from_incidence<I, F>(
        vertices: I,
        mut incidence: F,
        options: GraphIncidenceOptions,
    ) -> Self
    where
        I: IntoIterator<Item = V>,
        F: FnMut(&V, &V) -> bool,
        S: Default,
    {
        let mut graph = Self::with_hasher(S::default());
        for vertex in vertices {
            graph.insert_vertex(vertex);
        }

        let skip_reflexive = options.contains(GraphIncidenceOptions::REFLEXIVE_REDUCTION);
        let candidates: Vec<V> = graph.store.vertices().cloned().collect();
        for from in &candidates {
            for to in &candidates {
                if skip_reflexive && from == to {
                    continue;
                }
                if incidence(from, to) {
                    graph.insert_edge(from.clone(), to.clone());
                }
            }
        }

        if options.contains(GraphIncidenceOptions::CONNECTED) && graph.order() > 1 {
            for vertex in &candidates {
                if graph.is_vertex_isolated(vertex) {
                    graph.remove_vertex(vertex);
                }
            }
        }
        graph
    }

    /// Returns `true` if edges have a direction.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    /// Returns the configuration the graph was created with.
    #[must_use]
    pub fn config(&self) -> GraphConfig {
        self.config
    }

    /// Returns the comparer deciding edge equality for this graph.
    #[must_use]
    pub fn edge_comparer(&self) -> EdgeComparer {
        EdgeComparer::for_directed(self.config.directed)
    }

    /// Number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.store.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Mutation version, incremented by every structural change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns `true` if `vertex` is a member of the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.store.contains_vertex(vertex)
    }

    /// Returns `true` if the graph has an edge from `from` to `to`.
    ///
    /// Undirected graphs match either orientation.
    #[must_use]
    pub fn contains_edge(&self, from: &V, to: &V) -> bool {
        self.edge_comparer()
            .locate(Edge::new(from, to), |a, b| self.store.contains_entry(a, b))
            .is_some()
    }

    /// Number of edges leaving `vertex`. For undirected graphs this is the degree.
    #[must_use]
    pub fn out_degree(&self, vertex: &V) -> usize {
        if self.config.directed {
            self.store.row_len(vertex)
        } else {
            self.degree(vertex)
        }
    }

    /// Number of edges entering `vertex`. For undirected graphs this is the degree.
    #[must_use]
    pub fn in_degree(&self, vertex: &V) -> usize {
        if self.config.directed {
            self.reverse_index().row_len(vertex)
        } else {
            self.degree(vertex)
        }
    }

    /// Number of edge endpoints at `vertex`. A self-loop counts twice.
    #[must_use]
    pub fn degree(&self, vertex: &V) -> usize {
        self.store.row_len(vertex) + self.reverse_index().row_len(vertex)
    }

    /// Returns `true` if `vertex` is a member of the graph without any incident edge.
    #[must_use]
    pub fn is_vertex_isolated(&self, vertex: &V) -> bool {
        self.contains_vertex(vertex) && self.degree(vertex) == 0
    }

    /// Iterates the vertices `vertex` has an edge to.
    ///
    /// For undirected graphs this is the whole neighborhood.
    pub fn outgoing_vertices_adjacent_to<'a>(
        &'a self,
        vertex: &V,
    ) -> impl Iterator<Item = &'a V> + 'a {
        let secondary = if self.config.directed {
            None
        } else {
            self.reverse_index().row(vertex)
        };
        union_rows(self.store.row(vertex), secondary)
    }

    /// Iterates the vertices with an edge to `vertex`.
    ///
    /// For undirected graphs this is the whole neighborhood.
    pub fn incoming_vertices_adjacent_to<'a>(
        &'a self,
        vertex: &V,
    ) -> impl Iterator<Item = &'a V> + 'a {
        let (primary, secondary) = if self.config.directed {
            (self.reverse_index().row(vertex), None)
        } else {
            (self.store.row(vertex), self.reverse_index().row(vertex))
        };
        union_rows(primary, secondary)
    }

    /// Iterates every vertex sharing an edge with `vertex`, each once.
    pub fn vertices_adjacent_to<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        union_rows(self.store.row(vertex), self.reverse_index().row(vertex))
    }

    /// Iterates the edges leaving `vertex`.
    pub fn outgoing_edges_incident_to<'a>(
        &'a self,
        vertex: &'a V,
    ) -> impl Iterator<Item = Edge<&'a V>> + 'a {
        self.outgoing_vertices_adjacent_to(vertex)
            .map(move |to| Edge::new(vertex, to))
    }

    /// Iterates the edges entering `vertex`.
    pub fn incoming_edges_incident_to<'a>(
        &'a self,
        vertex: &'a V,
    ) -> impl Iterator<Item = Edge<&'a V>> + 'a {
        self.incoming_vertices_adjacent_to(vertex)
            .map(move |from| Edge::new(from, vertex))
    }

    /// Iterates every edge touching `vertex`, each once.
    pub fn edges_incident_to<'a>(
        &'a self,
        vertex: &'a V,
    ) -> impl Iterator<Item = Edge<&'a V>> + 'a {
        let directed = self.config.directed;
        self.outgoing_edges_incident_to(vertex).chain(
            self.incoming_edges_incident_to(vertex)
                .filter(move |edge| directed && edge.from != vertex),
        )
    }

    /// Reverse adjacency index, built on first use.
    pub(crate) fn reverse_index(&self) -> &AdjacencyStore<V, S> {
        self.reverse.get_or_init(|| {
            log::debug!(
                "materializing reverse index over {} vertices and {} edges",
                self.store.len(),
                self.size
            );
            self.store.inverted()
        })
    }

    pub(crate) fn bump(&mut self, mutation: Mutation) {
        let from = self.version;
        self.version = self.version.wrapping_add(1);
        self.cache.on_mutation(mutation, from, self.version);
    }

    /// Adds an isolated vertex. Returns `false` if it was already present.
    pub(crate) fn insert_vertex(&mut self, vertex: V) -> bool {
        if self.store.contains_vertex(&vertex) {
            return false;
        }
        if let Some(reverse) = self.reverse.get_mut() {
            reverse.insert_vertex(vertex.clone());
        }
        self.store.insert_vertex(vertex);
        self.bump(Mutation::AddVertex);
        true
    }

    /// Removes a vertex together with every incident edge.
    pub(crate) fn remove_vertex(&mut self, vertex: &V) -> bool {
        if !self.store.contains_vertex(vertex) {
            return false;
        }
        let incoming: Vec<V> = self
            .reverse_index()
            .adjacent(vertex)
            .filter(|from| *from != vertex)
            .cloned()
            .collect();
        let outgoing: Vec<V> = self
            .store
            .remove_vertex(vertex)
            .flatten()
            .map(|row| row.into_iter().collect())
            .unwrap_or_default();
        for from in &incoming {
            self.store.remove_entry(from, vertex);
        }
        if let Some(reverse) = self.reverse.get_mut() {
            reverse.remove_vertex(vertex);
            for to in outgoing.iter().filter(|to| *to != vertex) {
                reverse.remove_entry(to, vertex);
            }
        }
        self.size -= outgoing.len() + incoming.len();
        self.bump(Mutation::RemoveVertex);
        true
    }

    /// Adds an edge, registering both endpoints. Returns `false` if it already existed.
    pub(crate) fn insert_edge(&mut self, from: V, to: V) -> bool {
        if self.contains_edge(&from, &to) {
            return false;
        }
        let mutation = if self.store.contains_vertex(&from) && self.store.contains_vertex(&to) {
            Mutation::AddEdge
        } else {
            Mutation::AddEdgeWithVertices
        };
        if let Some(reverse) = self.reverse.get_mut() {
            reverse.insert_vertex(from.clone());
            reverse.insert_entry(to.clone(), from.clone());
        }
        self.store.insert_entry(from, to);
        self.size += 1;
        self.bump(mutation);
        true
    }

    /// Removes an edge, keeping both endpoints. Returns `false` if it did not exist.
    pub(crate) fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let Some(Edge { from, to }) = self
            .edge_comparer()
            .locate(Edge::new(from, to), |a, b| self.store.contains_entry(a, b))
        else {
            return false;
        };
        self.store.remove_entry(from, to);
        if let Some(reverse) = self.reverse.get_mut() {
            reverse.remove_entry(to, from);
        }
        self.size -= 1;
        self.bump(Mutation::RemoveEdge);
        true
    }

    /// Removes every edge, keeping every vertex.
    pub(crate) fn clear_edges(&mut self) {
        self.store.clear_entries();
        if let Some(reverse) = self.reverse.get_mut() {
            reverse.clear_entries();
        }
        self.size = self.store.entry_count();
        self.bump(Mutation::ClearEdges);
    }

    /// Removes every vertex and edge.
    pub(crate) fn clear(&mut self) {
        self.store.clear();
        if let Some(reverse) = self.reverse.get_mut() {
            reverse.clear();
        }
        self.size = 0;
        self.bump(Mutation::Clear);
    }
}

/// Chains two rows, skipping entries of `secondary` already yielded from `primary`.
fn union_rows<'a, V, S>(
    primary: Option<&'a AdjacencyRow<V, S>>,
    secondary: Option<&'a AdjacencyRow<V, S>>,
) -> impl Iterator<Item = &'a V> + 'a
where
    V: Eq + Hash,
    S: BuildHasher,
{
    primary.into_iter().flatten().chain(
        secondary
            .into_iter()
            .flatten()
            .filter(move |vertex| !primary.is_some_and(|row| row.contains(*vertex))),
    )
}

impl<V, S> Clone for Graph<V, S>
where
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Graph {
            store: self.store.clone(),
            reverse: self.reverse.clone(),
            config: self.config,
            size: self.size,
            version: self.version,
            cache: self.cache.clone(),
        }
    }
}

impl<V, S> fmt::Debug for Graph<V, S>
where
    V: Eq + Hash + Clone + fmt::Debug,
    S: BuildHasher + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &self.config.directed)
            .field("vertices", &self.store.vertices().collect::<Vec<_>>())
            .field(
                "edges",
                &self.store.entries().map(Edge::from).collect::<Vec<_>>(),
            )
            .field("version", &self.version)
            .finish()
    }
}

impl<V, S> PartialEq for Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.graph_equals(other)
    }
}

impl<V, S> Eq for Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
}

impl<V, S> Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Returns `true` if both graphs have the same directedness, vertex set and edge set.
    ///
    /// Insertion order and the stored orientation of undirected edges are ignored.
    #[must_use]
    pub fn graph_equals<S2>(&self, other: &Graph<V, S2>) -> bool
    where
        S2: BuildHasher + Clone,
    {
        self.config.directed == other.config.directed
            && self.order() == other.order()
            && self.size == other.size
            && self.store.vertices().all(|vertex| other.contains_vertex(vertex))
            && self
                .store
                .entries()
                .all(|(from, to)| other.contains_edge(from, to))
    }
}

impl<V, S> FromIterator<Edge<V>> for Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = Edge<V>>>(iter: I) -> Self {
        let mut graph = Self::with_hasher(S::default());
        graph.extend(iter);
        graph
    }
}

impl<V, S> Extend<Edge<V>> for Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn extend<I: IntoIterator<Item = Edge<V>>>(&mut self, iter: I) {
        for edge in iter {
            self.insert_edge(edge.from, edge.to);
        }
    }
}

impl<V, S> GraphBase for &Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Vertex = V;

    fn vertex_count(&self) -> usize {
        self.order()
    }
}

impl<'g, V, S> Successors<'g> for &'g Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn successors(self, vertex: &'g V) -> impl Iterator<Item = &'g V> + 'g {
        self.outgoing_vertices_adjacent_to(vertex)
    }
}

impl<'g, V, S> Predecessors<'g> for &'g Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn predecessors(self, vertex: &'g V) -> impl Iterator<Item = &'g V> + 'g {
        self.incoming_vertices_adjacent_to(vertex)
    }
}
