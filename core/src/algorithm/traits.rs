//! Core algorithm trait definitions for the roadmap optimizer
//!
//! This module establishes the shared vocabulary for path search over road
//! maps: node identity, the error taxonomy, the path outcome consumed by
//! renderers, and the pathfinding trait every search strategy implements.
//!
//! # Key Design Principles
//! - Nodes are stable integer indices into dense per-graph arrays
//! - "No route" is a result, never an error
//! - Randomness is always injected, never global

use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::algorithm::random::RandomSource;
use crate::data_structures::graph::Graph;

/// Node identifier ensuring type safety and preventing mixing with other numeric types
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

/// Comprehensive error types for graph construction and search
#[derive(Debug, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Invalid configuration: {name} - {reason}")]
    InvalidConfiguration { name: String, reason: String },

    #[error("Graph construction failed: {0}")]
    GraphConstructionFailed(String),

    #[error("Invalid graph state: {0}")]
    InvalidGraph(String),

    #[error("Invalid node: {0}")]
    InvalidNode(NodeId),

    #[error("Search already executed; reset before running again")]
    AlreadyExecuted,

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AlgorithmError {
    pub(crate) fn invalid_config(name: &str, reason: impl Into<String>) -> Self {
        AlgorithmError::InvalidConfiguration {
            name: name.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Outcome of a path search
///
/// `NotFound` is the defined answer when no complete route was ever
/// discovered; it is consumed by renderers as a "no route" notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathResult {
    Found { path: Vec<NodeId>, length: f64 },
    NotFound,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }

    pub fn path(&self) -> Option<&[NodeId]> {
        match self {
            PathResult::Found { path, .. } => Some(path),
            PathResult::NotFound => None,
        }
    }

    pub fn length(&self) -> Option<f64> {
        match self {
            PathResult::Found { length, .. } => Some(*length),
            PathResult::NotFound => None,
        }
    }
}

/// Search execution metrics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmMetrics {
    /// Colony iterations executed
    pub steps_executed: usize,
    /// Node moves made by all ants
    pub nodes_explored: usize,
    /// Ant tours that reached the end node
    pub tours_completed: usize,
    /// Ant tours that stalled before the end node
    pub tours_dead_ended: usize,
    /// Of the completed tours, how many needed the one-hop rescue
    pub tours_rescued: usize,
    pub execution_time: Duration,
}

/// Pathfinding algorithm trait
///
/// # Guarantees
/// - State isolation between runs: no residue from previous calls
/// - Deterministic behavior for a given random sequence
pub trait PathfindingAlgorithm {
    /// Returns the algorithm's descriptive name
    fn name(&self) -> &'static str;

    /// Finds a path between two nodes of `graph`
    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
        rng: &mut dyn RandomSource,
    ) -> Result<PathResult, AlgorithmError>;

    /// Returns whether the algorithm guarantees optimal paths
    fn guarantees_optimal_path(&self) -> bool;
}

/// Lightweight profiler feeding [`AlgorithmMetrics`]
#[derive(Debug, Default)]
pub struct AlgorithmProfiler {
    metrics: AlgorithmMetrics,
    start_time: Option<Instant>,
}

impl AlgorithmProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        if let Some(start) = self.start_time.take() {
            self.metrics.execution_time = start.elapsed();
        }
    }

    pub fn record_step(&mut self) {
        self.metrics.steps_executed += 1;
    }

    pub fn record_node_exploration(&mut self, count: usize) {
        self.metrics.nodes_explored += count;
    }

    pub fn record_tour(&mut self, completed: bool, rescued: bool) {
        if completed {
            self.metrics.tours_completed += 1;
            if rescued {
                self.metrics.tours_rescued += 1;
            }
        } else {
            self.metrics.tours_dead_ended += 1;
        }
    }

    pub fn get_metrics(&self) -> AlgorithmMetrics {
        self.metrics.clone()
    }
}
