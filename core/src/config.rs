//! Run configuration
//!
//! A single JSON document describes one roadmap run: the map to generate,
//! where the search starts and ends, the seed, and the colony parameters.
//! Every field is optional and defaults to the classic settings (5 nodes,
//! 20 edges, 20 ants, 100 iterations).

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::path_finding::ant_colony::AntColonyConfig;
use crate::algorithm::traits::{AlgorithmError, NodeId};
use crate::data_structures::generator::{GraphBuilderConfig, END_NODE, START_NODE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoadmapConfig {
    pub node_count: usize,
    pub edge_count: usize,
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
    pub start: NodeId,
    pub end: NodeId,
    pub graph: GraphBuilderConfig,
    pub colony: AntColonyConfig,
}

impl Default for RoadmapConfig {
    fn default() -> Self {
        Self {
            node_count: 5,
            edge_count: 20,
            seed: None,
            start: START_NODE,
            end: END_NODE,
            graph: GraphBuilderConfig::default(),
            colony: AntColonyConfig::default(),
        }
    }
}

impl RoadmapConfig {
    pub fn from_json_str(json: &str) -> Result<Self, AlgorithmError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AlgorithmError> {
        let path = path.as_ref();
        debug!("Loading roadmap configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn validate(&self) -> Result<(), AlgorithmError> {
        if self.node_count < 2 {
            return Err(AlgorithmError::invalid_config(
                "node_count",
                format!("must be at least 2, got {}", self.node_count),
            ));
        }
        for (name, node) in [("start", self.start), ("end", self.end)] {
            if node.as_usize() >= self.node_count {
                return Err(AlgorithmError::invalid_config(
                    name,
                    format!("node {} is outside a map of {} nodes", node, self.node_count),
                ));
            }
        }
        self.graph.validate()?;
        self.colony.validate()
    }
}
