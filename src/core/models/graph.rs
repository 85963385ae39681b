//! Undirected citation graph of zettels

use petgraph::stable_graph::{NodeIndex, StableUnGraph};
use std::collections::{HashMap, HashSet};

/// Node weight stored in the graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZettelNode {
    /// Zettel identifier
    pub id: String,
    /// Optional label, typically the zettel title
    pub label: Option<String>,
}

/// Citation graph keyed by zettel identifier
///
/// The graph is simple and undirected: citing a zettel twice, or two zettels
/// citing each other, yields a single edge. Each edge keeps the direction of
/// the citation that created it so arrows can still be drawn source to
/// target. A stable graph is used so that removing isolates does not
/// invalidate the indices held in `index`.
#[derive(Debug, Clone, Default)]
pub struct ZettelGraph {
    graph: StableUnGraph<ZettelNode, ()>,
    index: HashMap<String, NodeIndex>,
}

impl ZettelGraph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, returning its index. Adding an existing id is a no-op.
    pub fn add_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(ZettelNode {
            id: id.to_string(),
            label: None,
        });
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Add a node carrying a label. An existing node gets its label replaced.
    pub fn add_labeled_node(&mut self, id: &str, label: &str) -> NodeIndex {
        let idx = self.add_node(id);
        if let Some(node) = self.graph.node_weight_mut(idx) {
            node.label = Some(label.to_string());
        }
        idx
    }

    /// Add an edge `source -> target`, creating missing endpoints
    ///
    /// Returns `false` when the edge (in either direction) already existed.
    pub fn add_edge(&mut self, source: &str, target: &str) -> bool {
        let a = self.add_node(source);
        let b = self.add_node(target);
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    /// Whether a node with this id exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Node ids in index order (insertion order until nodes are removed)
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
            .map(|node| node.id.as_str())
    }

    /// Nodes in index order
    pub fn nodes(&self) -> impl Iterator<Item = &ZettelNode> + '_ {
        self.graph
            .node_indices()
            .filter_map(|idx| self.graph.node_weight(idx))
    }

    /// Label of a node, if it has one
    #[must_use]
    pub fn label(&self, id: &str) -> Option<&str> {
        let idx = self.index.get(id)?;
        self.graph.node_weight(*idx)?.label.as_deref()
    }

    /// Number of distinct nodes adjacent to `id` (a self-loop counts the node itself once)
    #[must_use]
    pub fn degree(&self, id: &str) -> usize {
        self.index.get(id).map_or(0, |&idx| {
            self.graph.neighbors(idx).collect::<HashSet<_>>().len()
        })
    }

    /// Ids of nodes without any incident edge
    #[must_use]
    pub fn isolates(&self) -> Vec<String> {
        self.graph
            .node_indices()
            .filter(|&idx| self.graph.neighbors(idx).next().is_none())
            .filter_map(|idx| self.graph.node_weight(idx))
            .map(|node| node.id.clone())
            .collect()
    }

    /// Remove every isolated node, returning the removed ids
    pub fn remove_isolates(&mut self) -> Vec<String> {
        let isolates = self.isolates();
        for id in &isolates {
            if let Some(idx) = self.index.remove(id) {
                self.graph.remove_node(idx);
            }
        }
        isolates
    }

    /// Edges as `(source, target)` ids, in the direction they were first added
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.graph.edge_indices().filter_map(|edge| {
            let (a, b) = self.graph.edge_endpoints(edge)?;
            let source = self.graph.node_weight(a)?;
            let target = self.graph.node_weight(b)?;
            Some((source.id.as_str(), target.id.as_str()))
        })
    }
}
