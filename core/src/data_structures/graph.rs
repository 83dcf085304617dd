//! Road map graph with dense weight matrix
//!
//! Nodes are identified by their position in an arena of coordinates and
//! every per-node structure (weights, pheromones, visited flags) is a dense
//! array indexed by that position. The edge list is kept verbatim, parallel
//! edges included, while the derived symmetric weight matrix answers
//! adjacency queries in O(1).
//!
//! # Weight Matrix Semantics
//! `0.0` marks "no edge" and zero-length edges (coincident endpoints) are
//! not traversable. Parallel edges collapse to the lightest one regardless of
//! their order in the edge list, so the matrix never depends on how the list
//! was shuffled. A map that relied on the last listed duplicate winning will
//! see a shorter or equal weight here.

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::{AlgorithmError, NodeId};

/// 2D position of a map node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Edge weight, frozen at construction time
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeWeight(pub f64);

impl EdgeWeight {
    #[inline]
    pub fn new(weight: f64) -> Self {
        debug_assert!(!weight.is_nan(), "Edge weight cannot be NaN");
        Self(weight)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Undirected edge between two distinct nodes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: EdgeWeight,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId, weight: f64) -> Self {
        Self {
            source,
            target,
            weight: EdgeWeight::new(weight),
        }
    }

    /// Whether the edge joins `a` and `b` in either orientation
    #[cfg(test)]
    pub(crate) fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }
}

/// Serialized form: nodes and edges only, the matrix is derived on load
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphRepr {
    nodes: Vec<Position>,
    edges: Vec<Edge>,
}

/// Immutable weighted undirected road map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GraphRepr", into = "GraphRepr")]
pub struct Graph {
    positions: Vec<Position>,
    edges: Vec<Edge>,
    /// Row-major `n × n` symmetric weight matrix
    weights: Vec<f64>,
}

impl Graph {
    /// Builds a graph from node coordinates and explicitly weighted edges
    pub fn new(positions: Vec<Position>, edges: Vec<Edge>) -> Result<Self, AlgorithmError> {
        let n = positions.len();

        if let Some(index) = positions.iter().position(|p| !p.is_finite()) {
            return Err(AlgorithmError::InvalidGraph(format!(
                "node {index} has a non-finite coordinate"
            )));
        }

        let mut weights = vec![0.0; n * n];
        for edge in &edges {
            let (u, v) = (edge.source.as_usize(), edge.target.as_usize());
            let w = edge.weight.value();

            if u >= n || v >= n {
                return Err(AlgorithmError::InvalidGraph(format!(
                    "edge {}-{} references a node outside 0..{n}",
                    edge.source, edge.target
                )));
            }
            if u == v {
                return Err(AlgorithmError::InvalidGraph(format!(
                    "self-loop on node {}",
                    edge.source
                )));
            }
            if !w.is_finite() || w < 0.0 {
                return Err(AlgorithmError::InvalidGraph(format!(
                    "edge {}-{} has invalid weight {w}",
                    edge.source, edge.target
                )));
            }

            if w > 0.0 {
                let cell = weights[u * n + v];
                if cell == 0.0 || w < cell {
                    weights[u * n + v] = w;
                    weights[v * n + u] = w;
                }
            }
        }

        Ok(Self {
            positions,
            edges,
            weights,
        })
    }

    /// Builds a graph whose edge weights are the Euclidean endpoint distances
    pub fn from_pairs(
        positions: Vec<Position>,
        pairs: &[(usize, usize)],
    ) -> Result<Self, AlgorithmError> {
        let mut edges = Vec::with_capacity(pairs.len());
        for &(u, v) in pairs {
            let (a, b) = match (positions.get(u), positions.get(v)) {
                (Some(a), Some(b)) => (a, b),
                _ => {
                    return Err(AlgorithmError::InvalidGraph(format!(
                        "edge {u}-{v} references a node outside 0..{}",
                        positions.len()
                    )))
                }
            };
            edges.push(Edge::new(NodeId(u), NodeId(v), a.distance_to(b)));
        }
        Self::new(positions, edges)
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.as_usize() < self.positions.len()
    }

    pub fn position(&self, node: NodeId) -> Option<Position> {
        self.positions.get(node.as_usize()).copied()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Weight of the traversable edge between `u` and `v`, if any
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        if !self.contains(u) || !self.contains(v) {
            return None;
        }
        let w = self.raw_weight(u.as_usize(), v.as_usize());
        (w > 0.0).then_some(w)
    }

    #[inline]
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.weight(u, v).is_some()
    }

    /// Matrix entry without bounds translation; `0.0` means no edge
    #[inline]
    pub(crate) fn raw_weight(&self, u: usize, v: usize) -> f64 {
        self.weights[u * self.positions.len() + v]
    }

    /// Traversable neighbors of `node` in increasing index order
    #[cfg(test)]
    pub(crate) fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let n = self.positions.len();
        let row: &[f64] = if self.contains(node) {
            &self.weights[node.as_usize() * n..(node.as_usize() + 1) * n]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter(|&(_, &w)| w > 0.0)
            .map(|(i, &w)| (NodeId(i), w))
    }

    /// Total weight of a walk, or `None` if any step is not an edge
    pub fn path_length(&self, path: &[NodeId]) -> Option<f64> {
        path.windows(2)
            .map(|step| self.weight(step[0], step[1]))
            .sum()
    }
}

impl TryFrom<GraphRepr> for Graph {
    type Error = AlgorithmError;

    fn try_from(repr: GraphRepr) -> Result<Self, Self::Error> {
        Graph::new(repr.nodes, repr.edges)
    }
}

impl From<Graph> for GraphRepr {
    fn from(graph: Graph) -> Self {
        GraphRepr {
            nodes: graph.positions,
            edges: graph.edges,
        }
    }
}
