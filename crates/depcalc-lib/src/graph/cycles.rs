//! Require-cycle probe
//!
//! The resolver terminates on cyclic require graphs, but the ordering inside
//! a cycle is best-effort: one participant is necessarily placed before a
//! file it depends on. This probe names one offending path up front so a
//! broken manifest can be traced back to its cycle instead of discovered at
//! load time.

use super::index::DependencyIndex;
use super::registry::NamespaceRegistry;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Build the file-level require graph over the index and return one cycle
/// path if any exists. Requires without a provider contribute no edge.
pub fn find_require_cycle(
    index: &DependencyIndex,
    registry: &NamespaceRegistry,
) -> Option<Vec<PathBuf>> {
    let mut graph: DiGraph<&Path, ()> = DiGraph::new();
    let mut nodes: HashMap<&Path, NodeIndex> = HashMap::new();

    for dep in index.values() {
        let from = node_for(&mut graph, &mut nodes, &dep.file);
        for namespace in &dep.requires {
            let Some(provider) = registry.lookup(namespace) else {
                continue;
            };
            let to = node_for(&mut graph, &mut nodes, &provider.file);
            graph.add_edge(from, to, ());
        }
    }

    if !is_cyclic_directed(&graph) {
        return None;
    }

    // Walk every root until the cycle that is_cyclic_directed promised shows up
    let mut visited: HashMap<NodeIndex, bool> = HashMap::new();
    let mut stack = Vec::new();
    for node in graph.node_indices() {
        if !visited.contains_key(&node) {
            if let Some(cycle) = dfs_cycle_path(&graph, node, &mut visited, &mut stack) {
                return Some(cycle);
            }
        }
    }

    None
}

fn node_for<'a>(
    graph: &mut DiGraph<&'a Path, ()>,
    nodes: &mut HashMap<&'a Path, NodeIndex>,
    file: &'a Path,
) -> NodeIndex {
    *nodes
        .entry(file)
        .or_insert_with(|| graph.add_node(file))
}

/// DFS that reports the segment of the active stack forming a cycle
fn dfs_cycle_path(
    graph: &DiGraph<&Path, ()>,
    node: NodeIndex,
    visited: &mut HashMap<NodeIndex, bool>,
    stack: &mut Vec<NodeIndex>,
) -> Option<Vec<PathBuf>> {
    visited.insert(node, true);
    stack.push(node);

    for neighbor in graph.neighbors(node) {
        if !visited.contains_key(&neighbor) {
            if let Some(cycle) = dfs_cycle_path(graph, neighbor, visited, stack) {
                return Some(cycle);
            }
        } else if let Some(start) = stack.iter().position(|&n| n == neighbor) {
            let members = stack[start..]
                .iter()
                .map(|&idx| graph[idx].to_path_buf())
                .collect();
            return Some(members);
        }
    }

    stack.pop();
    None
}

#[cfg(test)]
mod tests {
    include!("cycles.test.rs");
}
