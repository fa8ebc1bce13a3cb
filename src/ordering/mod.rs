//! Stable topological ordering of sequences.
//!
//! [`Graph::order_topologically`](crate::Graph::order_topologically) is strict: it orders
//! the vertices of a graph and fails on a cycle. The [`OrderTopologically`] extension
//! trait instead reorders an arbitrary sequence by a dependency relation between its
//! elements and never fails:
//!
//! - dependencies come before their dependents
//! - elements without a constraint between them keep their input order
//! - elements caught in a dependency cycle keep their input order as well
//!
//! Further sort keys can be chained with [`TopologicalOrder::then_by`] and friends; they
//! only decide between elements the dependency relation leaves unordered.
//!
//! # Examples
//!
//! ```rust
//! use topograph::OrderTopologically;
//!
//! struct Task {
//!     name: &'static str,
//!     after: &'static [&'static str],
//! }
//!
//! let tasks = vec![
//!     Task { name: "deploy", after: &["test", "build"] },
//!     Task { name: "lint", after: &[] },
//!     Task { name: "test", after: &["build"] },
//!     Task { name: "build", after: &[] },
//! ];
//!
//! let order: Vec<&str> = tasks
//!     .iter()
//!     .order_topologically_by(|task| task.name, |a, b| {
//!         tasks.iter().any(|task| task.name == *a && task.after.contains(b))
//!     })
//!     .into_iter()
//!     .map(|task| task.name)
//!     .collect();
//!
//! assert_eq!(order, vec!["build", "test", "deploy", "lint"]);
//! ```

mod keys;
mod stable;

pub use keys::SortDirection;
pub use stable::{OrderTopologically, TopologicalOrder};
