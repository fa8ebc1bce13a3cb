//! Memoized graph scalars gated by the mutation version.
//!
//! Every mutation bumps the graph's version counter. A [`Memo`] remembers the version its
//! value was computed for and treats any other version as stale, so no call site ever has
//! to clear a cached value by hand.
//!
//! Some knowledge survives specific mutations. Adding an edge between known vertices never
//! breaks connectivity, adding any edge never removes a cycle, and removing an edge never
//! connects a graph or creates a cycle. [`Cache::on_mutation`] carries such values forward to the new version instead of
//! letting them go stale.

use std::cell::Cell;

/// Kind of structural change applied to a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub(crate) enum Mutation {
    /// A vertex was added
    AddVertex,
    /// A vertex and its incident edges were removed
    RemoveVertex,
    /// An edge was added between two existing vertices
    AddEdge,
    /// An edge was added and registered at least one new endpoint
    AddEdgeWithVertices,
    /// An edge was removed
    RemoveEdge,
    /// All edges were removed, every vertex kept
    ClearEdges,
    /// All vertices and edges were removed
    Clear,
    /// Every edge was reversed
    Transpose,
}

/// A get-or-compute cell stamped with the version its value is valid for.
#[derive(Debug, Clone, Default)]
pub(crate) struct Memo<T: Copy> {
    slot: Cell<Option<(u64, T)>>,
}

impl<T: Copy> Memo<T> {
    pub(crate) fn new() -> Self {
        Memo {
            slot: Cell::new(None),
        }
    }

    /// Returns the value if it was computed for `version`.
    pub(crate) fn get(&self, version: u64) -> Option<T> {
        match self.slot.get() {
            Some((stamp, value)) if stamp == version => Some(value),
            _ => None,
        }
    }

    /// Returns the value for `version`, computing and storing it when stale.
    pub(crate) fn get_or_compute(&self, version: u64, compute: impl FnOnce() -> T) -> T {
        if let Some(value) = self.get(version) {
            return value;
        }
        let value = compute();
        self.slot.set(Some((version, value)));
        value
    }

    /// Stores `value` as valid for `version`.
    pub(crate) fn set(&self, version: u64, value: T) {
        self.slot.set(Some((version, value)));
    }

    /// Re-stamps a value valid at `from` to `to` if `keep` accepts it.
    fn carry(&self, from: u64, to: u64, keep: impl FnOnce(T) -> bool) -> bool {
        match self.get(from) {
            Some(value) if keep(value) => {
                self.slot.set(Some((to, value)));
                true
            }
            _ => false,
        }
    }
}

/// Cached scalars of a graph.
///
/// Order and size are not memoized here: order is the length of the adjacency store
/// and size is maintained incrementally by the mutation primitives.
#[derive(Debug, Clone, Default)]
pub(crate) struct Cache {
    pub(crate) connected: Memo<bool>,
    pub(crate) cyclic: Memo<bool>,
}

impl Cache {
    pub(crate) fn new() -> Self {
        Cache {
            connected: Memo::new(),
            cyclic: Memo::new(),
        }
    }

    /// Moves every value that `mutation` cannot have invalidated from `from` to `to`.
    pub(crate) fn on_mutation(&self, mutation: Mutation, from: u64, to: u64) {
        let (connected, cyclic) = match mutation {
            Mutation::AddEdge => (
                self.connected.carry(from, to, |connected| connected),
                self.cyclic.carry(from, to, |cyclic| cyclic),
            ),
            Mutation::AddEdgeWithVertices => (false, self.cyclic.carry(from, to, |cyclic| cyclic)),
            Mutation::RemoveEdge => (
                self.connected.carry(from, to, |connected| !connected),
                self.cyclic.carry(from, to, |cyclic| !cyclic),
            ),
            Mutation::ClearEdges => {
                self.cyclic.set(to, false);
                (false, true)
            }
            Mutation::Transpose => (
                self.connected.carry(from, to, |_| true),
                self.cyclic.carry(from, to, |_| true),
            ),
            Mutation::AddVertex | Mutation::RemoveVertex | Mutation::Clear => (false, false),
        };
        log::trace!(
            "{mutation}: version {from} -> {to}, kept connected={connected} cyclic={cyclic}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memo_get_or_compute() {
        let memo: Memo<usize> = Memo::new();
        let mut calls = 0;
        assert_eq!(
            memo.get_or_compute(1, || {
                calls += 1;
                7
            }),
            7
        );
        assert_eq!(memo.get_or_compute(1, || unreachable!()), 7);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_memo_stale_after_version_change() {
        let memo: Memo<bool> = Memo::new();
        memo.set(3, true);
        assert_eq!(memo.get(3), Some(true));
        assert_eq!(memo.get(4), None);
        assert!(!memo.get_or_compute(4, || false));
    }

    #[test]
    fn test_add_edge_keeps_positive_knowledge() {
        let cache = Cache::new();
        cache.connected.set(1, true);
        cache.cyclic.set(1, false);
        cache.on_mutation(Mutation::AddEdge, 1, 2);
        assert_eq!(cache.connected.get(2), Some(true));
        assert_eq!(cache.cyclic.get(2), None);
    }

    #[test]
    fn test_add_edge_with_new_vertices_drops_connectivity() {
        let cache = Cache::new();
        cache.connected.set(1, true);
        cache.cyclic.set(1, true);
        cache.on_mutation(Mutation::AddEdgeWithVertices, 1, 2);
        assert_eq!(cache.connected.get(2), None);
        assert_eq!(cache.cyclic.get(2), Some(true));
    }

    #[test]
    fn test_remove_edge_keeps_negative_knowledge() {
        let cache = Cache::new();
        cache.connected.set(1, false);
        cache.cyclic.set(1, false);
        cache.on_mutation(Mutation::RemoveEdge, 1, 2);
        assert_eq!(cache.connected.get(2), Some(false));
        assert_eq!(cache.cyclic.get(2), Some(false));

        cache.cyclic.set(2, true);
        cache.on_mutation(Mutation::RemoveEdge, 2, 3);
        assert_eq!(cache.cyclic.get(3), None);
    }

    #[test]
    fn test_clear_edges_makes_acyclic() {
        let cache = Cache::new();
        cache.cyclic.set(1, true);
        cache.connected.set(1, true);
        cache.on_mutation(Mutation::ClearEdges, 1, 2);
        assert_eq!(cache.cyclic.get(2), Some(false));
        assert_eq!(cache.connected.get(2), None);
    }

    #[test]
    fn test_vertex_mutations_reset_everything() {
        for mutation in [Mutation::AddVertex, Mutation::RemoveVertex, Mutation::Clear] {
            let cache = Cache::new();
            cache.connected.set(1, true);
            cache.cyclic.set(1, false);
            cache.on_mutation(mutation, 1, 2);
            assert_eq!(cache.connected.get(2), None, "{mutation}");
            assert_eq!(cache.cyclic.get(2), None, "{mutation}");
        }
    }

    #[test]
    fn test_transpose_keeps_everything() {
        let cache = Cache::new();
        cache.connected.set(5, false);
        cache.cyclic.set(5, true);
        cache.on_mutation(Mutation::Transpose, 5, 6);
        assert_eq!(cache.connected.get(6), Some(false));
        assert_eq!(cache.cyclic.get(6), Some(true));
    }
}
