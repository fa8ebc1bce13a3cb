//! Stable, cycle-tolerant topological ordering of arbitrary sequences.
//!
//! The elements of a sequence are mapped to keys, and the dependency relation between keys
//! is materialized as a precedence graph in which an edge `a -> b` means "`a` comes before
//! `b`". Ordering is a selection sort driven by reachability in that graph:
//!
//! 1. Tie-breaking keys, if any, are applied first with an ordinary stable sort.
//! 2. For every output position `i`, the remaining positions are scanned for the element
//!    that has to come first. It is moved to `i` and everything in between shifts right
//!    by one, so elements that were not moved keep their relative order.
//!
//! An element must precede another when a path leads from its key to the other's key and
//! no path leads back. Keys on a common cycle reach each other, so no order is imposed
//! between them and they stay where they are. The sort therefore never fails.
//!
//! A comparison sort cannot be used instead: "must precede" is only a partial order, and
//! the full scan at every position is what discovers every binding constraint.

use std::{
    cmp::Ordering,
    collections::{hash_map::RandomState, HashMap, HashSet},
    hash::{BuildHasher, Hash},
};

use crate::{
    graph::{Graph, GraphIncidenceOptions},
    ordering::keys::{compare_by_keys, SortDirection, SortKey},
    Result,
};

/// A sequence waiting to be put into stable topological order.
///
/// Created by the [`OrderTopologically`] methods. Sorting happens when the order is
/// consumed through [`into_vec`](Self::into_vec) or iteration, so tie-breaking keys and
/// [`reverse`](Self::reverse) can be chained beforehand.
///
/// # Examples
///
/// ```rust
/// use topograph::OrderTopologically;
///
/// let crates = vec!["serde_json", "serde", "itoa", "ryu"];
/// let order = crates
///     .order_topologically(|a, b| *a == "serde_json" && *b != "serde_json")
///     .then_by(|name| name.len())
///     .into_vec();
///
/// assert_eq!(order, vec!["ryu", "itoa", "serde", "serde_json"]);
/// ```
pub struct TopologicalOrder<T, K, S = RandomState> {
    entries: Vec<(K, T)>,
    precedence: Graph<K, S>,
    tie_breakers: Vec<SortKey<T>>,
}

impl<T, K, S> TopologicalOrder<T, K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    pub(crate) fn new(entries: Vec<(K, T)>, precedence: Graph<K, S>) -> Self {
        TopologicalOrder {
            entries,
            precedence,
            tie_breakers: Vec::new(),
        }
    }

    /// Breaks ties left by the dependency relation by `key`, smallest first.
    #[must_use]
    pub fn then_by<K2, F>(self, key: F) -> Self
    where
        K2: Ord,
        F: Fn(&T) -> K2 + 'static,
    {
        self.push_key(SortKey::by_key(key, SortDirection::Ascending))
    }

    /// Breaks ties left by the dependency relation by `key`, largest first.
    #[must_use]
    pub fn then_by_descending<K2, F>(self, key: F) -> Self
    where
        K2: Ord,
        F: Fn(&T) -> K2 + 'static,
    {
        self.push_key(SortKey::by_key(key, SortDirection::Descending))
    }

    /// Breaks ties by `key` compared with `compare`, in the given direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topograph::{OrderTopologically, SortDirection};
    ///
    /// let order = vec!["beta", "Alpha", "gamma"]
    ///     .order_topologically(|_, _| false)
    ///     .then_by_with(
    ///         |name| name.to_lowercase(),
    ///         |a: &String, b: &String| a.cmp(b),
    ///         SortDirection::Ascending,
    ///     )
    ///     .into_vec();
    ///
    /// assert_eq!(order, vec!["Alpha", "beta", "gamma"]);
    /// ```
    #[must_use]
    pub fn then_by_with<K2, F, C>(self, key: F, compare: C, direction: SortDirection) -> Self
    where
        F: Fn(&T) -> K2 + 'static,
        C: Fn(&K2, &K2) -> Ordering + 'static,
    {
        self.push_key(SortKey::by_key_with(key, compare, direction))
    }

    /// Orders dependents before their dependencies.
    ///
    /// The precedence graph is transposed and the sort runs again from the input order.
    /// This is not the same as reversing the output: elements free to stay in place keep
    /// their input order in both directions. Tie-breaking keys keep their direction.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.precedence.transpose();
        self
    }

    /// The precedence graph the order is computed from. An edge `a -> b` places every
    /// element keyed `a` before every element keyed `b`.
    #[must_use]
    pub fn precedence(&self) -> &Graph<K, S> {
        &self.precedence
    }

    /// Number of elements in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorts the sequence and returns its elements.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        let TopologicalOrder {
            mut entries,
            precedence,
            tie_breakers,
        } = self;

        if !tie_breakers.is_empty() {
            entries.sort_by(|a, b| compare_by_keys(&tie_breakers, &a.1, &b.1));
        }
        log::debug!(
            "stable topological sort of {} elements over {} keys and {} precedence edges",
            entries.len(),
            precedence.order(),
            precedence.size()
        );
        sort_by_precedence(&mut entries, &precedence);

        entries.into_iter().map(|(_, item)| item).collect()
    }

    fn push_key(mut self, key: SortKey<T>) -> Self {
        self.tie_breakers.push(key);
        self
    }
}

impl<T, K, S> IntoIterator for TopologicalOrder<T, K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Moves every entry behind the entries its key must follow, shifting instead of swapping.
fn sort_by_precedence<K, T, S>(entries: &mut [(K, T)], precedence: &Graph<K, S>)
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    let mut oracle = PrecedenceOracle::new(precedence);
    let len = entries.len();
    for i in 0..len.saturating_sub(1) {
        let mut first = i;
        for j in (i + 1)..len {
            if oracle.must_precede(&entries[j].0, &entries[first].0) {
                first = j;
            }
        }
        if first != i {
            entries[i..=first].rotate_right(1);
        }
    }
}

/// Reachability queries over a precedence graph, memoized per source key.
struct PrecedenceOracle<'g, K, S> {
    graph: &'g Graph<K, S>,
    reachable: HashMap<&'g K, HashSet<&'g K>>,
}

impl<'g, K, S> PrecedenceOracle<'g, K, S>
where
    K: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    fn new(graph: &'g Graph<K, S>) -> Self {
        PrecedenceOracle {
            graph,
            reachable: HashMap::new(),
        }
    }

    fn must_precede(&mut self, a: &K, b: &K) -> bool {
        self.reaches(a, b) && !self.reaches(b, a)
    }

    fn reaches(&mut self, from: &K, to: &K) -> bool {
        let graph = self.graph;
        let Some(from) = graph.store.vertex(from) else {
            return false;
        };
        self.reachable
            .entry(from)
            .or_insert_with(|| graph.outgoing_vertices_connected_with(from).collect())
            .contains(to)
    }
}

/// Stable topological ordering for any sequence.
///
/// Every method maps elements to keys and derives a precedence relation between keys. A
/// key's dependencies come before it; keys that are not related keep the input order of
/// their elements, and so do keys caught in a dependency cycle. Self-dependencies are
/// ignored.
///
/// The trait is implemented for every [`IntoIterator`].
///
/// # Examples
///
/// ```rust
/// use topograph::OrderTopologically;
///
/// // 2 depends on 1
/// let order = vec![3, 2, 1].order_topologically(|a, b| *a == 2 && *b == 1).into_vec();
/// assert_eq!(order, vec![3, 1, 2]);
/// ```
pub trait OrderTopologically: IntoIterator + Sized {
    /// Orders the elements so that every element comes after the elements it depends on.
    ///
    /// `depends_on(a, b)` returns `true` if `a` depends on `b`. It is asked once for
    /// every ordered pair of distinct elements.
    fn order_topologically<F>(self, depends_on: F) -> TopologicalOrder<Self::Item, Self::Item>
    where
        Self::Item: Eq + Hash + Clone,
        F: FnMut(&Self::Item, &Self::Item) -> bool,
    {
        self.order_topologically_by(|item: &Self::Item| item.clone(), depends_on)
    }

    /// Orders the elements by the dependencies between their keys.
    ///
    /// `depends_on(a, b)` returns `true` if key `a` depends on key `b`. It is asked once for
    /// every ordered pair of distinct keys.
    fn order_topologically_by<K, KF, F>(
        self,
        key: KF,
        mut depends_on: F,
    ) -> TopologicalOrder<Self::Item, K>
    where
        K: Eq + Hash + Clone,
        KF: FnMut(&Self::Item) -> K,
        F: FnMut(&K, &K) -> bool,
    {
        let entries = keyed(self, key);
        let precedence = Graph::from_incidence(
            entries.iter().map(|(key, _)| key.clone()),
            |before, after| depends_on(after, before),
            GraphIncidenceOptions::REFLEXIVE_REDUCTION,
        );
        TopologicalOrder::new(entries, precedence)
    }

    /// Orders the elements by the dependency sets of their keys.
    ///
    /// `dependencies_of(k)` lists the keys `k` depends on. It is called once per distinct
    /// key. Dependencies on keys that no element carries are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topograph::OrderTopologically;
    ///
    /// let order = vec!["app", "log", "core"]
    ///     .order_topologically_by_dependencies(
    ///         |name| *name,
    ///         |name| match *name {
    ///             "app" => vec!["log", "core"],
    ///             "log" => vec!["core"],
    ///             _ => vec![],
    ///         },
    ///     )
    ///     .into_vec();
    ///
    /// assert_eq!(order, vec!["core", "log", "app"]);
    /// ```
    fn order_topologically_by_dependencies<K, KF, D, I>(
        self,
        key: KF,
        mut dependencies_of: D,
    ) -> TopologicalOrder<Self::Item, K>
    where
        K: Eq + Hash + Clone,
        KF: FnMut(&Self::Item) -> K,
        D: FnMut(&K) -> I,
        I: IntoIterator<Item = K>,
    {
        let entries = keyed(self, key);
        let mut precedence = Graph::new();
        for (key, _) in &entries {
            precedence.insert_vertex(key.clone());
        }

        let keys: Vec<K> = precedence.store.vertices().cloned().collect();
        for dependent in &keys {
            for dependency in dependencies_of(dependent) {
                if dependency != *dependent && precedence.contains_vertex(&dependency) {
                    precedence.insert_edge(dependency, dependent.clone());
                }
            }
        }
        TopologicalOrder::new(entries, precedence)
    }

    /// Orders the elements by a ready-made precedence graph over their keys.
    ///
    /// An edge `a -> b` in `graph` means key `a` comes before key `b`, matching
    /// [`Graph::order_topologically`]. Keys missing from the graph are unconstrained.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) if `graph` is
    /// undirected.
    fn order_topologically_with_graph<K, KF, S>(
        self,
        key: KF,
        graph: &Graph<K, S>,
    ) -> Result<TopologicalOrder<Self::Item, K, S>>
    where
        K: Eq + Hash + Clone,
        KF: FnMut(&Self::Item) -> K,
        S: BuildHasher + Clone,
    {
        if !graph.is_directed() {
            return Err(invalid_argument!(
                "an undirected graph cannot express precedence"
            ));
        }
        Ok(TopologicalOrder::new(keyed(self, key), graph.clone()))
    }
}

impl<I: IntoIterator> OrderTopologically for I {}

fn keyed<I, K, KF>(items: I, mut key: KF) -> Vec<(K, I::Item)>
where
    I: IntoIterator,
    KF: FnMut(&I::Item) -> K,
{
    items
        .into_iter()
        .map(|item| (key(&item), item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, Error, SetViewMut};

    fn create_packages() -> Vec<(&'static str, u8)> {
        vec![("app", 1), ("log", 3), ("core", 2), ("util", 2)]
    }

    fn package_dependencies(name: &&'static str) -> Vec<&'static str> {
        match *name {
            "app" => vec!["log", "core"],
            "log" => vec!["core"],
            _ => vec![],
        }
    }

    fn names(packages: Vec<(&'static str, u8)>) -> Vec<&'static str> {
        packages.into_iter().map(|(name, _)| name).collect()
    }

    #[test]
    fn test_satisfied_input_is_kept() {
        let order = vec![3, 1, 2]
            .order_topologically(|a, b| *a == 2 && *b == 1)
            .into_vec();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn test_constraint_forces_reorder() {
        let order = vec![2, 1]
            .order_topologically(|a, b| *a == 2 && *b == 1)
            .into_vec();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_cycle_keeps_input_order() {
        let order = vec!['a', 'b', 'c']
            .order_topologically(|a, b| matches!((a, b), ('b', 'a') | ('c', 'b') | ('a', 'c')))
            .into_vec();
        assert_eq!(order, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_cycle_follows_its_prerequisite() {
        let order = vec!['c', 'x', 'a', 'b']
            .order_topologically(|a, b| {
                matches!(
                    (a, b),
                    ('b', 'a') | ('c', 'b') | ('a', 'c') | ('a', 'x')
                )
            })
            .into_vec();
        assert_eq!(order, vec!['x', 'c', 'a', 'b']);
    }

    #[test]
    fn test_no_constraints_is_identity() {
        let input = vec![5, 3, 9, 1, 3];
        let order = input.clone().order_topologically(|_, _| false).into_vec();
        assert_eq!(order, input);
    }

    #[test]
    fn test_self_dependency_is_ignored() {
        let order = vec![2, 1].order_topologically(|a, b| a == b);
        assert_eq!(order.precedence().size(), 0);
        assert_eq!(order.into_vec(), vec![2, 1]);
    }

    #[test]
    fn test_duplicate_keys_stay_stable() {
        let order = vec![("b", 1), ("a", 1), ("b", 2), ("a", 2)]
            .order_topologically_by(|(name, _)| *name, |a, b| *a == "b" && *b == "a")
            .into_vec();
        assert_eq!(order, vec![("a", 1), ("a", 2), ("b", 1), ("b", 2)]);
    }

    #[test]
    fn test_dependencies_before_dependents() {
        let order = vec!["app", "log", "core"]
            .order_topologically_by_dependencies(|name| *name, package_dependencies)
            .into_vec();
        assert_eq!(order, vec!["core", "log", "app"]);
    }

    #[test]
    fn test_unknown_dependencies_are_ignored() {
        let order = vec!["log", "app"]
            .order_topologically_by_dependencies(|name| *name, package_dependencies);
        assert_eq!(order.precedence().order(), 2);
        assert_eq!(order.precedence().size(), 1);
        assert_eq!(order.into_vec(), vec!["log", "app"]);
    }

    #[test]
    fn test_tie_breakers_apply_before_constraints() {
        let order = create_packages()
            .order_topologically_by_dependencies(|(name, _)| *name, package_dependencies)
            .then_by_descending(|(_, priority)| *priority);
        assert_eq!(names(order.into_vec()), vec!["core", "log", "util", "app"]);
    }

    #[test]
    fn test_then_by_without_constraints() {
        let order = vec!["pear", "fig", "apple", "kiwi"]
            .order_topologically(|_, _| false)
            .then_by(|name| name.len())
            .into_vec();
        assert_eq!(order, vec!["fig", "pear", "kiwi", "apple"]);
    }

    #[test]
    fn test_chained_tie_breakers() {
        let order = vec![(1, 'b'), (2, 'a'), (1, 'a'), (2, 'b')]
            .order_topologically(|_, _| false)
            .then_by_descending(|pair| pair.0)
            .then_by(|pair| pair.1)
            .into_vec();
        assert_eq!(order, vec![(2, 'a'), (2, 'b'), (1, 'a'), (1, 'b')]);
    }

    #[test]
    fn test_reverse_transposes_precedence() {
        let forward = create_packages()
            .order_topologically_by_dependencies(|(name, _)| *name, package_dependencies)
            .into_vec();
        assert_eq!(names(forward), vec!["core", "log", "app", "util"]);

        let reversed = create_packages()
            .order_topologically_by_dependencies(|(name, _)| *name, package_dependencies)
            .reverse()
            .into_vec();
        assert_eq!(names(reversed), vec!["app", "log", "core", "util"]);

        let restored = create_packages()
            .order_topologically_by_dependencies(|(name, _)| *name, package_dependencies)
            .reverse()
            .reverse()
            .into_vec();
        assert_eq!(names(restored), vec!["core", "log", "app", "util"]);
    }

    #[test]
    fn test_with_graph() {
        let mut graph: Graph<&str> = Graph::new();
        graph.edges_mut().add(Edge::new("core", "log"));
        graph.edges_mut().add(Edge::new("log", "app"));
        graph.vertices_mut().add("unused");

        let order = vec!["app", "util", "log", "core"]
            .order_topologically_with_graph(|name| *name, &graph)
            .unwrap();
        assert_eq!(order.len(), 4);
        assert_eq!(order.into_vec(), vec!["core", "log", "app", "util"]);
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn test_with_undirected_graph_is_rejected() {
        let graph: Graph<&str> = Graph::new_undirected();
        let result = vec!["a"].order_topologically_with_graph(|name| *name, &graph);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_empty_and_single() {
        let empty: Vec<u8> = Vec::new();
        let order = empty.order_topologically(|_, _| true);
        assert!(order.is_empty());
        assert!(order.into_vec().is_empty());

        let single: Vec<u8> = vec![7].order_topologically(|_, _| true).into_iter().collect();
        assert_eq!(single, vec![7]);
    }
}
