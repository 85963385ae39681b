//! Node placement for the citation graph
//!
//! Small graphs are placed with a force-directed simulation; graphs at or
//! above the configured threshold fall back to a uniform random layout since
//! every simulation step is quadratic in the node count.

use crate::core::config::LayoutConfig;
use crate::core::models::ZettelGraph;
use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::fmt;

/// Time step fed to the simulation for each iteration
const SIMULATION_STEP: f32 = 0.035;

/// Distance between initial positions, scaled by the square root of the node count
const INITIAL_SPREAD: f32 = 50.0;

/// Positions of graph nodes keyed by zettel id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    positions: HashMap<String, (f64, f64)>,
}

impl Layout {
    /// Create an empty layout
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position of a node
    pub fn insert(&mut self, id: impl Into<String>, x: f64, y: f64) {
        self.positions.insert(id.into(), (x, y));
    }

    /// Position of a node
    #[must_use]
    pub fn get(&self, id: &str) -> Option<(f64, f64)> {
        self.positions.get(id).copied()
    }

    /// Number of positioned nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether no node is positioned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = (&str, (f64, f64))> + '_ {
        self.positions.iter().map(|(id, &pos)| (id.as_str(), pos))
    }
}

impl<S: Into<String>> FromIterator<(S, (f64, f64))> for Layout {
    fn from_iter<I: IntoIterator<Item = (S, (f64, f64))>>(iter: I) -> Self {
        Self {
            positions: iter
                .into_iter()
                .map(|(id, pos)| (id.into(), pos))
                .collect(),
        }
    }
}

/// Layout algorithm used for a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAlgorithm {
    /// Spring/charge simulation
    ForceDirected,
    /// Uniform random positions in the unit square
    Random,
}

impl LayoutAlgorithm {
    /// Pick the algorithm for a graph of `node_count` nodes
    #[must_use]
    pub const fn select(node_count: usize, config: &LayoutConfig) -> Self {
        if node_count < config.random_threshold {
            Self::ForceDirected
        } else {
            Self::Random
        }
    }

    /// Compute a layout for `graph` with this algorithm
    #[must_use]
    pub fn compute(self, graph: &ZettelGraph, config: &LayoutConfig) -> Layout {
        match self {
            Self::ForceDirected => force_directed(graph, config.iterations, config.seed),
            Self::Random => random(graph, config.seed),
        }
    }
}

impl fmt::Display for LayoutAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForceDirected => write!(f, "force-directed"),
            Self::Random => write!(f, "random"),
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

/// Uniform random layout in `[0, 1) x [0, 1)`
#[must_use]
pub fn random(graph: &ZettelGraph, seed: Option<u64>) -> Layout {
    let mut rng = make_rng(seed);
    graph
        .node_ids()
        .map(|id| (id, (rng.gen::<f64>(), rng.gen::<f64>())))
        .collect()
}

/// Force-directed layout
///
/// Nodes start at random positions, the simulation runs `iterations` steps,
/// and the result is centered on the origin and scaled to fit `[-1, 1]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn force_directed(graph: &ZettelGraph, iterations: usize, seed: Option<u64>) -> Layout {
    let mut rng = make_rng(seed);
    let mut simulation: ForceGraph<(), ()> = ForceGraph::new(SimulationParameters {
        force_charge: 150.0,
        force_spring: 0.05,
        force_max: 100.0,
        node_speed: 3000.0,
        damping_factor: 0.9,
    });

    let spread = INITIAL_SPREAD * (graph.node_count() as f32).sqrt().max(1.0);
    let mut sim_index: HashMap<&str, DefaultNodeIdx> = HashMap::new();
    let mut ids: HashMap<DefaultNodeIdx, &str> = HashMap::new();
    for id in graph.node_ids() {
        let idx = simulation.add_node(NodeData {
            x: rng.gen::<f32>() * spread,
            y: rng.gen::<f32>() * spread,
            mass: 10.0,
            is_anchor: false,
            user_data: (),
        });
        sim_index.insert(id, idx);
        ids.insert(idx, id);
    }

    for (source, target) in graph.edges() {
        // springs of zero length have no direction
        if source == target {
            continue;
        }
        if let (Some(&a), Some(&b)) = (sim_index.get(source), sim_index.get(target)) {
            simulation.add_edge(a, b, EdgeData::default());
        }
    }

    for _ in 0..iterations {
        simulation.update(SIMULATION_STEP);
    }

    let mut raw = Vec::with_capacity(ids.len());
    simulation.visit_nodes(|node| {
        if let Some(&id) = ids.get(&node.index()) {
            raw.push((id, (f64::from(node.x()), f64::from(node.y()))));
        }
    });

    rescale(raw).into_iter().collect()
}

/// Center positions on their mean and scale so the largest coordinate is 1
///
/// Non-finite coordinates are replaced by the center.
#[allow(clippy::cast_precision_loss)]
fn rescale(mut positions: Vec<(&str, (f64, f64))>) -> Vec<(&str, (f64, f64))> {
    for (_, (x, y)) in &mut positions {
        if !x.is_finite() || !y.is_finite() {
            *x = 0.0;
            *y = 0.0;
        }
    }
    if positions.is_empty() {
        return positions;
    }

    let n = positions.len() as f64;
    let (sum_x, sum_y) = positions
        .iter()
        .fold((0.0, 0.0), |(sx, sy), (_, (x, y))| (sx + x, sy + y));
    let (mean_x, mean_y) = (sum_x / n, sum_y / n);

    let mut limit: f64 = 0.0;
    for (_, (x, y)) in &mut positions {
        *x -= mean_x;
        *y -= mean_y;
        limit = limit.max(x.abs()).max(y.abs());
    }

    if limit > 0.0 {
        for (_, (x, y)) in &mut positions {
            *x /= limit;
            *y /= limit;
        }
    }
    positions
}
