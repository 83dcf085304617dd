//! Stochastic pathfinding over road maps
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod ant_colony;
pub mod pheromone;
pub mod single_shot;

pub use self::ant_colony::{AntColony, AntColonyConfig, CancellationToken, SearchReport};
pub use self::pheromone::PheromoneMatrix;
pub use self::single_shot::SingleShot;
