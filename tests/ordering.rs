//! Sequence ordering integration tests.
//!
//! Covers the stable topological sort through every entry point of
//! `OrderTopologically`, its interaction with tie-breaking keys and reversal, and its
//! contrast with the strict graph-level order on cyclic input.

use std::collections::HashMap;

use topograph::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Package {
    name: &'static str,
    version: u32,
    requires: Vec<&'static str>,
}

fn package(name: &'static str, version: u32, requires: &[&'static str]) -> Package {
    Package {
        name,
        version,
        requires: requires.to_vec(),
    }
}

fn create_workspace() -> Vec<Package> {
    vec![
        package("cli", 3, &["engine", "config"]),
        package("docs", 1, &[]),
        package("engine", 2, &["storage", "config"]),
        package("config", 5, &[]),
        package("storage", 4, &["config"]),
    ]
}

fn names(packages: &[Package]) -> Vec<&'static str> {
    packages.iter().map(|package| package.name).collect()
}

#[test]
fn test_dependencies_come_first() {
    let workspace = create_workspace();
    let requires: HashMap<&str, Vec<&str>> = workspace
        .iter()
        .map(|package| (package.name, package.requires.clone()))
        .collect();

    let order = workspace
        .clone()
        .order_topologically_by_dependencies(
            |package| package.name,
            |name| requires.get(name).cloned().unwrap_or_default(),
        )
        .into_vec();

    assert_eq!(
        names(&order),
        vec!["config", "storage", "engine", "cli", "docs"]
    );
}

#[test]
fn test_predicate_and_dependency_sets_agree() {
    let workspace = create_workspace();
    let by_predicate = workspace
        .clone()
        .order_topologically(|a, b| a.requires.contains(&b.name))
        .into_vec();
    let by_sets = workspace
        .clone()
        .order_topologically_by_dependencies(
            |package| package.name,
            |name| {
                create_workspace()
                    .into_iter()
                    .find(|package| package.name == *name)
                    .map(|package| package.requires)
                    .unwrap_or_default()
            },
        )
        .into_vec();

    assert_eq!(by_predicate, by_sets);
}

#[test]
fn test_ready_made_graph() {
    let mut graph: Graph<&str> = Graph::new();
    for package in create_workspace() {
        graph.vertices_mut().add(package.name);
        for dependency in package.requires {
            graph.edges_mut().add(Edge::new(dependency, package.name));
        }
    }

    let order = create_workspace()
        .order_topologically_with_graph(|package| package.name, &graph)
        .unwrap()
        .into_vec();
    assert_eq!(
        names(&order),
        vec!["config", "storage", "engine", "cli", "docs"]
    );
}

#[test]
fn test_tie_breaking_by_version() {
    let order = create_workspace()
        .order_topologically(|a, b| a.requires.contains(&b.name))
        .then_by(|package| package.version)
        .into_vec();
    assert_eq!(
        names(&order),
        vec!["docs", "config", "storage", "engine", "cli"]
    );

    let order = create_workspace()
        .order_topologically(|a, b| a.requires.contains(&b.name))
        .then_by_descending(|package| package.version)
        .into_vec();
    assert_eq!(
        names(&order),
        vec!["config", "storage", "engine", "cli", "docs"]
    );
}

#[test]
fn test_reverse_orders_dependents_first() {
    let order = create_workspace()
        .order_topologically(|a, b| a.requires.contains(&b.name))
        .reverse()
        .into_vec();
    assert_eq!(
        names(&order),
        vec!["cli", "docs", "engine", "storage", "config"]
    );
}

#[test]
fn test_sequence_sort_tolerates_cycle_strict_order_does_not() {
    let cycle = [('a', 'b'), ('b', 'c'), ('c', 'a')];

    let order = vec!['a', 'b', 'c']
        .order_topologically(|x, y| cycle.contains(&(*y, *x)))
        .into_vec();
    assert_eq!(order, vec!['a', 'b', 'c']);

    let graph: Graph<char> = cycle.into_iter().map(Edge::from).collect();
    assert!(matches!(
        graph.order_topologically(),
        Err(Error::UnresolvedCycle { remaining: 3 })
    ));
}

#[test]
fn test_identity_without_constraints() {
    let input: Vec<u32> = vec![9, 4, 7, 4, 1, 8];
    let order = input.clone().order_topologically(|_, _| false).into_vec();
    assert_eq!(order, input);

    let iterated: Vec<u32> = input
        .iter()
        .order_topologically(|_, _| false)
        .into_iter()
        .copied()
        .collect();
    assert_eq!(iterated, input);
}

#[test]
fn test_descending_comparer_with_direction() {
    let order = vec!["b", "C", "a"]
        .order_topologically(|_, _| false)
        .then_by_with(
            |name| name.to_ascii_lowercase(),
            |a: &String, b: &String| a.cmp(b),
            SortDirection::Descending,
        )
        .into_vec();
    assert_eq!(order, vec!["C", "b", "a"]);
}
