//! Random road map generation
//!
//! Produces the maps the colony searches: node 0 (start) and node 1 (end) sit
//! at fixed positions, every other node is scattered uniformly over a
//! rectangular region, and edges join uniformly drawn node pairs. A direct
//! start-end edge and self-loops are never produced, so the search always
//! has to route through intermediate nodes.
//!
//! Rejected draws are retried without counting toward the requested edge
//! count. A run of consecutive rejections is bounded so that degenerate
//! requests fail with [`AlgorithmError::GraphConstructionFailed`] instead of
//! spinning; every accepted edge starts a fresh run.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::algorithm::random::RandomSource;
use crate::algorithm::traits::{AlgorithmError, NodeId};
use crate::data_structures::graph::{Edge, Graph, Position};

/// Fixed index of the start node in generated maps
pub const START_NODE: NodeId = NodeId(0);

/// Fixed index of the end node in generated maps
pub const END_NODE: NodeId = NodeId(1);

#[inline]
fn is_endpoint_pair(u: NodeId, v: NodeId) -> bool {
    (u == START_NODE && v == END_NODE) || (u == END_NODE && v == START_NODE)
}

/// Placement and sampling settings for [`GraphBuilder`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphBuilderConfig {
    /// Position of node 0
    pub start: Position,
    /// Position of node 1
    pub end: Position,
    /// Inclusive lower corner of the scatter region
    pub region_min: Position,
    /// Exclusive upper corner of the scatter region
    pub region_max: Position,
    /// Consecutive rejected draws tolerated before giving up
    pub max_rejections: usize,
}

impl Default for GraphBuilderConfig {
    fn default() -> Self {
        Self {
            start: Position::new(50.0, 300.0),
            end: Position::new(750.0, 300.0),
            region_min: Position::new(51.0, 50.0),
            region_max: Position::new(750.0, 550.0),
            max_rejections: 64,
        }
    }
}

impl GraphBuilderConfig {
    pub fn validate(&self) -> Result<(), AlgorithmError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(AlgorithmError::invalid_config(
                "graph.start/end",
                "endpoint coordinates must be finite",
            ));
        }
        if self.start == self.end {
            return Err(AlgorithmError::invalid_config(
                "graph.start/end",
                "start and end must be distinct positions",
            ));
        }
        if !self.region_min.is_finite() || !self.region_max.is_finite() {
            return Err(AlgorithmError::invalid_config(
                "graph.region",
                "region bounds must be finite",
            ));
        }
        if self.region_min.x >= self.region_max.x || self.region_min.y >= self.region_max.y {
            return Err(AlgorithmError::invalid_config(
                "graph.region",
                "region_min must be strictly below region_max on both axes",
            ));
        }
        if self.max_rejections == 0 {
            return Err(AlgorithmError::invalid_config(
                "graph.max_rejections",
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// Random road map generator
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    config: GraphBuilderConfig,
}

impl GraphBuilder {
    pub fn new(config: GraphBuilderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphBuilderConfig {
        &self.config
    }

    /// Generates a map with `node_count` nodes and exactly `edge_count` edges
    pub fn generate(
        &self,
        node_count: usize,
        edge_count: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Graph, AlgorithmError> {
        self.config.validate()?;
        if node_count < 2 {
            return Err(AlgorithmError::invalid_config(
                "node_count",
                format!("a map needs start and end nodes, got {node_count}"),
            ));
        }
        // With only the two endpoints, the single candidate pair is forbidden.
        if edge_count > 0 && node_count < 3 {
            return Err(AlgorithmError::GraphConstructionFailed(format!(
                "no admissible node pair for {edge_count} edges among {node_count} nodes"
            )));
        }

        let positions = self.place_nodes(node_count, rng);
        let edges = self.draw_edges(&positions, edge_count, rng)?;

        info!(
            "Generated road map with {} nodes and {} edges",
            node_count, edge_count
        );
        Graph::new(positions, edges)
    }

    fn place_nodes(&self, node_count: usize, rng: &mut dyn RandomSource) -> Vec<Position> {
        let GraphBuilderConfig {
            start,
            end,
            region_min,
            region_max,
            ..
        } = self.config;

        let mut positions = Vec::with_capacity(node_count);
        positions.push(start);
        positions.push(end);
        for _ in 2..node_count {
            let x = rng.next_in_range(region_min.x, region_max.x);
            let y = rng.next_in_range(region_min.y, region_max.y);
            positions.push(Position::new(x, y));
        }
        positions
    }

    fn draw_edges(
        &self,
        positions: &[Position],
        edge_count: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<Edge>, AlgorithmError> {
        let node_count = positions.len();
        let budget = self.config.max_rejections;

        let mut edges = Vec::with_capacity(edge_count);
        let mut rejections = 0usize;
        let mut total_rejections = 0usize;
        while edges.len() < edge_count {
            let u = NodeId(rng.next_index(node_count));
            let v = NodeId(rng.next_index(node_count));

            if u == v || is_endpoint_pair(u, v) {
                rejections += 1;
                total_rejections += 1;
                if rejections > budget {
                    warn!(
                        "Edge sampling hit {} consecutive rejections after {} of {} edges",
                        budget,
                        edges.len(),
                        edge_count
                    );
                    return Err(AlgorithmError::GraphConstructionFailed(format!(
                        "placed {} of {} edges before exceeding {} consecutive rejected draws",
                        edges.len(),
                        edge_count,
                        budget
                    )));
                }
                continue;
            }

            let distance = positions[u.as_usize()].distance_to(&positions[v.as_usize()]);
            edges.push(Edge::new(u, v, distance));
            rejections = 0;
        }

        debug!(
            "Placed {} edges with {} rejected draws",
            edge_count, total_rejections
        );
        Ok(edges)
    }
}
