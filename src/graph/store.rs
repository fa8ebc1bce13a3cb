//! Adjacency storage shared by the forward and reverse indices.
//!
//! An [`AdjacencyStore`] maps every vertex to an optional row of adjacent vertices. A
//! vertex whose row is `None` is present but has no outgoing entries. Rows are never left
//! empty: removing the last entry resets the row to `None` while the vertex key stays.
//!
//! Both maps are insertion ordered ([`IndexMap`] / [`IndexSet`]) so that enumeration,
//! cursors and every algorithm built on top of the store are deterministic.

use std::hash::{BuildHasher, Hash};

use indexmap::{IndexMap, IndexSet};

/// Row of adjacent vertices.
pub(crate) type AdjacencyRow<V, S> = IndexSet<V, S>;

/// Mapping from vertex to its row of adjacent vertices.
#[derive(Debug, Clone)]
pub(crate) struct AdjacencyStore<V, S> {
    rows: IndexMap<V, Option<AdjacencyRow<V, S>>, S>,
    hasher: S,
}

impl<V, S> AdjacencyStore<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Creates an empty store using `hasher` for every map and row.
    pub(crate) fn with_hasher(hasher: S) -> Self {
        AdjacencyStore {
            rows: IndexMap::with_hasher(hasher.clone()),
            hasher,
        }
    }

    /// Creates an empty store with room for `capacity` vertices.
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        AdjacencyStore {
            rows: IndexMap::with_capacity_and_hasher(capacity, hasher.clone()),
            hasher,
        }
    }

    /// Creates an empty store sharing this store's hasher.
    pub(crate) fn empty_like(&self) -> Self {
        Self::with_capacity_and_hasher(self.rows.len(), self.hasher.clone())
    }

    /// Returns the hasher used by this store.
    pub(crate) fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Number of vertices.
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn contains_vertex(&self, vertex: &V) -> bool {
        self.rows.contains_key(vertex)
    }

    /// Returns the stored key equal to `vertex`.
    pub(crate) fn vertex(&self, vertex: &V) -> Option<&V> {
        self.rows.get_key_value(vertex).map(|(stored, _)| stored)
    }

    /// Adds `vertex` with no adjacent vertices. Returns `false` if it was already present.
    pub(crate) fn insert_vertex(&mut self, vertex: V) -> bool {
        if self.rows.contains_key(&vertex) {
            return false;
        }
        self.rows.insert(vertex, None);
        true
    }

    /// Removes `vertex` and returns its row. Entries pointing at `vertex` from other rows
    /// are left for the caller to remove.
    pub(crate) fn remove_vertex(&mut self, vertex: &V) -> Option<Option<AdjacencyRow<V, S>>> {
        self.rows.shift_remove(vertex)
    }

    /// Returns the non-empty row of `vertex`, if any.
    pub(crate) fn row(&self, vertex: &V) -> Option<&AdjacencyRow<V, S>> {
        self.rows.get(vertex).and_then(Option::as_ref)
    }

    /// Iterates the vertices adjacent to `vertex`. Empty for unknown vertices.
    pub(crate) fn adjacent<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.row(vertex).into_iter().flatten()
    }

    /// Number of entries in the row of `vertex`.
    pub(crate) fn row_len(&self, vertex: &V) -> usize {
        self.row(vertex).map_or(0, IndexSet::len)
    }

    pub(crate) fn contains_entry(&self, from: &V, to: &V) -> bool {
        self.row(from).is_some_and(|row| row.contains(to))
    }

    /// Inserts `to` into the row of `from`, registering both vertices.
    ///
    /// Returns `false` if the entry already existed.
    pub(crate) fn insert_entry(&mut self, from: V, to: V) -> bool {
        let hasher = self.hasher.clone();
        let inserted = self
            .rows
            .entry(from)
            .or_insert(None)
            .get_or_insert_with(|| IndexSet::with_hasher(hasher))
            .insert(to.clone());
        if !self.rows.contains_key(&to) {
            self.rows.insert(to, None);
        }
        inserted
    }

    /// Removes `to` from the row of `from`. Both vertices stay registered.
    ///
    /// Returns `false` if the entry did not exist.
    pub(crate) fn remove_entry(&mut self, from: &V, to: &V) -> bool {
        let Some(slot) = self.rows.get_mut(from) else {
            return false;
        };
        let Some(row) = slot.as_mut() else {
            return false;
        };
        let removed = row.shift_remove(to);
        if row.is_empty() {
            *slot = None;
        }
        removed
    }

    /// Drops every entry while keeping every vertex.
    pub(crate) fn clear_entries(&mut self) {
        for row in self.rows.values_mut() {
            *row = None;
        }
    }

    /// Drops every vertex and entry.
    pub(crate) fn clear(&mut self) {
        self.rows.clear();
    }

    /// Iterates the vertices in insertion order.
    pub(crate) fn vertices(&self) -> indexmap::map::Keys<'_, V, Option<AdjacencyRow<V, S>>> {
        self.rows.keys()
    }

    /// Returns the vertex stored at `index` in insertion order.
    pub(crate) fn vertex_at(&self, index: usize) -> Option<&V> {
        self.rows.get_index(index).map(|(vertex, _)| vertex)
    }

    /// Returns the vertex at `index` together with its non-empty row.
    pub(crate) fn row_at(&self, index: usize) -> Option<(&V, Option<&AdjacencyRow<V, S>>)> {
        self.rows
            .get_index(index)
            .map(|(vertex, row)| (vertex, row.as_ref()))
    }

    /// Iterates every `(from, to)` entry in row order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.rows.iter().flat_map(|(from, row)| {
            row.iter()
                .flat_map(move |row| row.iter().map(move |to| (from, to)))
        })
    }

    /// Total number of entries across all rows.
    pub(crate) fn entry_count(&self) -> usize {
        self.rows.values().flatten().map(IndexSet::len).sum()
    }

    /// Builds the inverse store: same vertex set, every entry reversed.
    pub(crate) fn inverted(&self) -> Self {
        let mut inverted = self.empty_like();
        for vertex in self.rows.keys() {
            inverted.rows.insert(vertex.clone(), None);
        }
        for (from, to) in self.entries() {
            inverted.insert_entry(to.clone(), from.clone());
        }
        inverted
    }
}
