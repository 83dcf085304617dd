//! Road map data structures
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod graph;
pub mod generator;

pub use self::graph::{Edge, EdgeWeight, Graph, Position};
pub use self::generator::{GraphBuilder, GraphBuilderConfig, END_NODE, START_NODE};
