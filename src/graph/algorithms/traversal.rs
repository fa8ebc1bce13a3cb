//! Depth-first traversal over any [`Successors`] graph.
//!
//! Traversals are iterative with an explicit stack, so path length is bounded by heap
//! memory rather than by the call stack. Each search keeps its own visited set, which
//! guarantees termination on cyclic graphs.

use std::collections::HashSet;

use crate::graph::traits::Successors;

/// Depth-first iterator over the vertices reachable from a start vertex.
///
/// The start vertex itself is never yielded, even when a cycle leads back to it. Every
/// other reachable vertex is yielded exactly once.
///
/// # Examples
///
/// ```rust
/// use topograph::{algorithms::DepthFirst, Edge, Graph};
///
/// let graph: Graph<u8> = [Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 1)]
///     .into_iter()
///     .collect();
///
/// let reached: Vec<u8> = DepthFirst::new(&graph, &1).copied().collect();
/// assert_eq!(reached.len(), 2);
/// assert!(!reached.contains(&1));
/// ```
pub struct DepthFirst<'g, G: Successors<'g>> {
    graph: G,
    stack: Vec<&'g G::Vertex>,
    visited: HashSet<&'g G::Vertex>,
}

impl<'g, G: Successors<'g>> DepthFirst<'g, G> {
    /// Starts a traversal at `start`.
    pub fn new(graph: G, start: &'g G::Vertex) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);
        let mut stack = Vec::new();
        push_unvisited(graph, start, &mut stack, &mut visited);
        DepthFirst {
            graph,
            stack,
            visited,
        }
    }
}

impl<'g, G: Successors<'g>> Iterator for DepthFirst<'g, G> {
    type Item = &'g G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.stack.pop()?;
        push_unvisited(self.graph, vertex, &mut self.stack, &mut self.visited);
        Some(vertex)
    }
}

/// Pushes the unvisited successors of `vertex` in reverse, so they pop in adjacency order.
fn push_unvisited<'g, G: Successors<'g>>(
    graph: G,
    vertex: &'g G::Vertex,
    stack: &mut Vec<&'g G::Vertex>,
    visited: &mut HashSet<&'g G::Vertex>,
) {
    let mark = stack.len();
    for successor in graph.successors(vertex) {
        if visited.insert(successor) {
            stack.push(successor);
        }
    }
    stack[mark..].reverse();
}

/// Returns `true` if a path of at least two edges leads from `from` to `to`.
///
/// The direct hop `from -> to` is skipped on the first level only, so a longer route
/// through an intermediate vertex is still found. Unknown vertices have no paths.
pub fn has_transitive_path<'g, G: Successors<'g>>(
    graph: G,
    from: &'g G::Vertex,
    to: &G::Vertex,
) -> bool {
    let mut visited: HashSet<&G::Vertex> = HashSet::new();
    visited.insert(from);
    let mut stack: Vec<&G::Vertex> = Vec::new();
    for successor in graph.successors(from) {
        if successor != to && visited.insert(successor) {
            stack.push(successor);
        }
    }

    while let Some(vertex) = stack.pop() {
        for successor in graph.successors(vertex) {
            if successor == to {
                return true;
            }
            if visited.insert(successor) {
                stack.push(successor);
            }
        }
    }
    false
}
