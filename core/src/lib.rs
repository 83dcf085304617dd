//! Ant colony roadmap optimizer
//!
//! Generates random road maps and searches them for a short start-to-end
//! route with Ant Colony Optimization.
//!
//! ```no_run
//! use roadmap_core::{AntColony, GraphBuilder, PathResult, RngSource, END_NODE, START_NODE};
//!
//! let mut rng = RngSource::seeded(42);
//! let graph = GraphBuilder::default().generate(10, 25, &mut rng)?;
//! let report = AntColony::default().search(&graph, START_NODE, END_NODE, &mut rng, None)?;
//! if let PathResult::Found { path, length } = report.result {
//!     println!("{} hops, length {length:.2}", path.len() - 1);
//! }
//! # Ok::<(), roadmap_core::AlgorithmError>(())
//! ```
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod config;
pub mod data_structures;

pub use crate::algorithm::{
    AlgorithmError, AlgorithmMetrics, AntColony, AntColonyConfig, CancellationToken, NodeId,
    PathResult, PathfindingAlgorithm, RandomSource, RngSource, SearchReport, SingleShot,
};
pub use crate::config::RoadmapConfig;
pub use crate::data_structures::{
    Edge, EdgeWeight, Graph, GraphBuilder, GraphBuilderConfig, Position, END_NODE, START_NODE,
};
