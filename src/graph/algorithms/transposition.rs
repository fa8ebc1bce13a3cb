//! Edge reversal.

use std::{
    cell::OnceCell,
    hash::{BuildHasher, Hash},
    mem,
};

use crate::graph::{base::Graph, cache::Mutation};

impl<V, S> Graph<V, S>
where
    V: Eq + Hash + Clone,
    S: BuildHasher + Clone,
{
    /// Reverses every edge in place.
    ///
    /// When the reverse index is materialized the forward and reverse indices are swapped
    /// in O(1). Otherwise the forward index is inverted once and the old forward index is
    /// kept as the new reverse index. Undirected graphs are left untouched.
    pub fn transpose(&mut self) {
        if !self.config.directed {
            return;
        }
        let forward = match self.reverse.take() {
            Some(reverse) => {
                log::debug!("transposing by swapping adjacency indices");
                mem::replace(&mut self.store, reverse)
            }
            None => {
                log::debug!("transposing by inverting {} edges", self.size);
                let inverted = self.store.inverted();
                mem::replace(&mut self.store, inverted)
            }
        };
        self.reverse = OnceCell::from(forward);
        self.bump(Mutation::Transpose);
    }

    /// Returns a copy with every edge reversed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use topograph::{Edge, Graph};
    ///
    /// let graph: Graph<u8> = [Edge::new(1, 2)].into_iter().collect();
    /// let transposed = graph.get_transposition();
    ///
    /// assert!(transposed.contains_edge(&2, &1));
    /// assert!(!transposed.contains_edge(&1, &2));
    /// assert_eq!(transposed.get_transposition(), graph);
    /// ```
    #[must_use]
    pub fn get_transposition(&self) -> Self {
        let mut transposed = self.clone();
        transposed.transpose();
        transposed
    }
}
