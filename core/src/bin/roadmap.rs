//! Headless roadmap driver
//!
//! Usage: `roadmap [CONFIG.json]`
//!
//! Generates a random road map, runs the ant colony from the start node to
//! the end node and prints the map together with the search report as JSON.
//! Set `RUST_LOG=debug` to follow the search.

use std::env;
use std::process::ExitCode;

use log::{error, info};
use serde_json::json;

use roadmap_core::{
    AlgorithmError, AntColony, GraphBuilder, PathResult, RngSource, RoadmapConfig,
};

fn run() -> Result<(), AlgorithmError> {
    let config = match env::args().nth(1) {
        Some(path) => RoadmapConfig::from_file(path)?,
        None => RoadmapConfig::default(),
    };

    let mut rng = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    let graph = GraphBuilder::new(config.graph.clone()).generate(
        config.node_count,
        config.edge_count,
        &mut rng,
    )?;
    let colony = AntColony::new(config.colony.clone())?;
    let report = colony.search(&graph, config.start, config.end, &mut rng, None)?;

    match &report.result {
        PathResult::Found { path, length } => {
            info!("Best route has {} nodes and length {:.2}", path.len(), length)
        }
        PathResult::NotFound => {
            info!("No route exists between {} and {}", config.start, config.end)
        }
    }

    let output = json!({
        "graph": graph,
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("roadmap: {err}");
            ExitCode::FAILURE
        }
    }
}
