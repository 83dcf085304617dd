//! Ant Colony Optimization for start-to-end routing
//!
//! A colony of ants repeatedly walks the road map from the start node toward
//! the end node. Each step is chosen by roulette-wheel selection over the
//! unvisited neighbors, weighted by
//!
//! ```text
//! score(i, j) = pheromone(i, j)^alpha * (1 / weight(i, j))^beta
//! ```
//!
//! After every ant of an iteration has finished, the whole pheromone matrix
//! evaporates by a constant fraction and every ant that reached the end
//! deposits `Q / length` on each edge of its tour. The shortest complete tour
//! seen across all iterations is the answer.
//!
//! # Iteration Phases
//! 1. Construction: ants only read the pheromone and weight matrices, so
//!    they may be built in parallel
//! 2. Evaporation: applied to every entry before any deposit
//! 3. Deposit: complete tours only; their length is always positive
//! 4. Best update: a strictly shorter complete tour replaces the record
//!
//! The search carries no state between calls. Every call allocates a fresh
//! pheromone matrix and draws all randomness from the source it is given.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::path_finding::pheromone::PheromoneMatrix;
use crate::algorithm::random::{RandomSource, RngSource};
use crate::algorithm::traits::{
    AlgorithmError, AlgorithmMetrics, AlgorithmProfiler, NodeId, PathResult,
    PathfindingAlgorithm,
};
use crate::data_structures::graph::Graph;

/// Colony parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AntColonyConfig {
    /// Ants released per iteration
    pub num_ants: usize,
    /// Construction/evaporation/deposit rounds
    pub num_iterations: usize,
    /// Pheromone influence exponent
    pub alpha: f64,
    /// Inverse-distance influence exponent
    pub beta: f64,
    /// Fraction of pheromone removed each iteration, in `[0, 1]`
    pub evaporation: f64,
    /// Deposit constant `Q`
    pub deposit: f64,
    /// Uniform starting pheromone level
    pub initial_pheromone: f64,
    /// Complete a stalled ant with a direct edge to the end node
    pub allow_direct_rescue: bool,
    /// Build the ants of an iteration on the rayon pool
    pub parallel_construction: bool,
}

impl Default for AntColonyConfig {
    fn default() -> Self {
        Self {
            num_ants: 20,
            num_iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation: 0.5,
            deposit: 100.0,
            initial_pheromone: 1.0,
            allow_direct_rescue: true,
            parallel_construction: false,
        }
    }
}

impl AntColonyConfig {
    pub fn validate(&self) -> Result<(), AlgorithmError> {
        if self.num_ants == 0 {
            return Err(AlgorithmError::invalid_config("num_ants", "must be positive"));
        }
        if self.num_iterations == 0 {
            return Err(AlgorithmError::invalid_config(
                "num_iterations",
                "must be positive",
            ));
        }
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("deposit", self.deposit),
            ("initial_pheromone", self.initial_pheromone),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(AlgorithmError::invalid_config(
                    name,
                    format!("must be a positive finite number, got {value}"),
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return Err(AlgorithmError::invalid_config(
                "evaporation",
                format!("must lie in [0, 1], got {}", self.evaporation),
            ));
        }
        Ok(())
    }
}

/// Cooperative cancellation flag, checked between iterations
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Full outcome of a colony run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchReport {
    pub result: PathResult,
    pub iterations_completed: usize,
    pub cancelled: bool,
    /// Best complete length after each finished iteration
    pub best_length_history: Vec<Option<f64>>,
    pub metrics: AlgorithmMetrics,
}

/// One ant's walk
#[derive(Debug, Clone, PartialEq)]
enum AntTour {
    /// Ends exactly at the end node; `length` is positive
    Complete {
        path: Vec<NodeId>,
        length: f64,
        rescued: bool,
    },
    DeadEnd {
        path: Vec<NodeId>,
    },
}

impl AntTour {
    fn steps(&self) -> usize {
        match self {
            AntTour::Complete { path, .. } | AntTour::DeadEnd { path } => path.len() - 1,
        }
    }
}

/// Ant colony path optimizer
#[derive(Debug, Clone, Default)]
pub struct AntColony {
    config: AntColonyConfig,
}

impl AntColony {
    pub fn new(config: AntColonyConfig) -> Result<Self, AlgorithmError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AntColonyConfig {
        &self.config
    }

    /// Runs the colony and reports the best route with run statistics
    pub fn search(
        &self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
        rng: &mut dyn RandomSource,
        cancel: Option<&CancellationToken>,
    ) -> Result<SearchReport, AlgorithmError> {
        for node in [start, end] {
            if !graph.contains(node) {
                return Err(AlgorithmError::InvalidNode(node));
            }
        }

        let mut profiler = AlgorithmProfiler::new();
        profiler.start();

        if start == end {
            profiler.stop();
            return Ok(SearchReport {
                result: PathResult::Found {
                    path: vec![start],
                    length: 0.0,
                },
                iterations_completed: 0,
                cancelled: false,
                best_length_history: Vec::new(),
                metrics: profiler.get_metrics(),
            });
        }

        info!(
            "Ant colony search {} -> {} over {} nodes: {} ants x {} iterations",
            start,
            end,
            graph.node_count(),
            self.config.num_ants,
            self.config.num_iterations
        );

        let mut pheromones =
            PheromoneMatrix::new(graph.node_count(), self.config.initial_pheromone);
        let mut best: Option<(Vec<NodeId>, f64)> = None;
        let mut history = Vec::with_capacity(self.config.num_iterations);
        let mut cancelled = false;

        for iteration in 0..self.config.num_iterations {
            if cancel.map_or(false, CancellationToken::is_cancelled) {
                debug!("Search cancelled before iteration {}", iteration);
                cancelled = true;
                break;
            }

            let tours = self.construct_tours(graph, &pheromones, start, end, rng);

            self.update_pheromones(&mut pheromones, &tours);

            for tour in tours {
                profiler.record_node_exploration(tour.steps());
                match tour {
                    AntTour::Complete {
                        path,
                        length,
                        rescued,
                    } => {
                        profiler.record_tour(true, rescued);
                        let improves = best
                            .as_ref()
                            .map_or(true, |(_, best_length)| length < *best_length);
                        if improves {
                            debug!(
                                "Iteration {}: new best length {:.3} over {} nodes",
                                iteration,
                                length,
                                path.len()
                            );
                            best = Some((path, length));
                        }
                    }
                    AntTour::DeadEnd { .. } => profiler.record_tour(false, false),
                }
            }

            let best_length = best.as_ref().map(|(_, length)| *length);
            trace!("Iteration {} finished, best {:?}", iteration, best_length);
            history.push(best_length);
            profiler.record_step();
        }

        profiler.stop();
        let result = match best {
            Some((path, length)) => PathResult::Found { path, length },
            None => PathResult::NotFound,
        };
        info!(
            "Ant colony search finished after {} iterations: {}",
            history.len(),
            match result.length() {
                Some(length) => format!("best length {length:.3}"),
                None => "no route".to_owned(),
            }
        );

        Ok(SearchReport {
            result,
            iterations_completed: history.len(),
            cancelled,
            best_length_history: history,
            metrics: profiler.get_metrics(),
        })
    }

    /// Evaporates the whole matrix, then lets complete tours deposit `Q / length`
    fn update_pheromones(&self, pheromones: &mut PheromoneMatrix, tours: &[AntTour]) {
        pheromones.evaporate(self.config.evaporation);
        for tour in tours {
            if let AntTour::Complete { path, length, .. } = tour {
                pheromones.reinforce(path, self.config.deposit / length);
            }
        }
    }

    fn construct_tours(
        &self,
        graph: &Graph,
        pheromones: &PheromoneMatrix,
        start: NodeId,
        end: NodeId,
        rng: &mut dyn RandomSource,
    ) -> Vec<AntTour> {
        if self.config.parallel_construction {
            // Seeds are drawn in ant order so the outcome is independent of scheduling.
            let seeds: Vec<u64> = (0..self.config.num_ants).map(|_| rng.next_seed()).collect();
            seeds
                .into_par_iter()
                .map(|seed| {
                    let mut ant_rng = RngSource::seeded(seed);
                    self.construct_tour(graph, pheromones, start, end, &mut ant_rng)
                })
                .collect()
        } else {
            (0..self.config.num_ants)
                .map(|_| self.construct_tour(graph, pheromones, start, end, &mut *rng))
                .collect()
        }
    }

    fn construct_tour(
        &self,
        graph: &Graph,
        pheromones: &PheromoneMatrix,
        start: NodeId,
        end: NodeId,
        rng: &mut dyn RandomSource,
    ) -> AntTour {
        let n = graph.node_count();
        let (target, mut current) = (end.as_usize(), start.as_usize());

        let mut visited = vec![false; n];
        let mut scores = vec![0.0; n];
        let mut path = vec![start];
        let mut length = 0.0;
        visited[current] = true;

        while current != target {
            let mut total = 0.0;
            for (candidate, score) in scores.iter_mut().enumerate() {
                let weight = graph.raw_weight(current, candidate);
                *score = if !visited[candidate] && weight > 0.0 {
                    pheromones.level(current, candidate).powf(self.config.alpha)
                        * (1.0 / weight).powf(self.config.beta)
                } else {
                    0.0
                };
                total += *score;
            }

            if !(total > 0.0) {
                break;
            }

            let draw = rng.next_f64() * total;
            let Some(next) = roulette_select(&scores, draw) else {
                break;
            };

            length += graph.raw_weight(current, next);
            visited[next] = true;
            path.push(NodeId(next));
            current = next;
        }

        let mut rescued = false;
        if current != target && self.config.allow_direct_rescue {
            let weight = graph.raw_weight(current, target);
            if weight > 0.0 {
                length += weight;
                path.push(end);
                current = target;
                rescued = true;
            }
        }

        if current == target {
            debug_assert!(length > 0.0);
            AntTour::Complete {
                path,
                length,
                rescued,
            }
        } else {
            AntTour::DeadEnd { path }
        }
    }
}

/// First candidate whose cumulative score reaches `draw`, in index order
///
/// Falls through to the last positive candidate when rounding leaves the
/// cumulative sum just short of `draw`.
fn roulette_select(scores: &[f64], draw: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    let mut last = None;
    for (index, &score) in scores.iter().enumerate() {
        if score > 0.0 {
            cumulative += score;
            last = Some(index);
            if cumulative >= draw {
                return last;
            }
        }
    }
    last
}

impl PathfindingAlgorithm for AntColony {
    fn name(&self) -> &'static str {
        "Ant Colony Optimization"
    }

    fn find_path(
        &self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
        rng: &mut dyn RandomSource,
    ) -> Result<PathResult, AlgorithmError> {
        self.search(graph, start, goal, rng, None)
            .map(|report| report.result)
    }

    fn guarantees_optimal_path(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::random::testing::ScriptedSource;
    use crate::data_structures::generator::{GraphBuilder, END_NODE, START_NODE};
    use crate::data_structures::graph::{Edge, Position};
    use approx::assert_relative_eq;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// 0 -(1)- 2 -(1)- 3 -(1)- 1 on a line
    fn chain() -> Graph {
        Graph::from_pairs(
            vec![
                Position::new(0.0, 0.0),
                Position::new(3.0, 0.0),
                Position::new(1.0, 0.0),
                Position::new(2.0, 0.0),
            ],
            &[(0, 2), (2, 3), (3, 1)],
        )
        .unwrap()
    }

    fn colony(config: AntColonyConfig) -> AntColony {
        AntColony::new(config).unwrap()
    }

    fn assert_valid_route(graph: &Graph, result: &PathResult, start: NodeId, end: NodeId) {
        if let PathResult::Found { path, length } = result {
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            let walked = graph.path_length(path).expect("every step must be an edge");
            assert_relative_eq!(walked, *length, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_chain_route_is_found() {
        init_logging();
        let graph = chain();
        let colony = colony(AntColonyConfig {
            num_iterations: 10,
            ..AntColonyConfig::default()
        });
        let mut rng = RngSource::seeded(1);

        let result = colony.find_path(&graph, NodeId(0), NodeId(1), &mut rng).unwrap();
        match result {
            PathResult::Found { path, length } => {
                assert_eq!(path, vec![NodeId(0), NodeId(2), NodeId(3), NodeId(1)]);
                assert_relative_eq!(length, 3.0);
            }
            PathResult::NotFound => panic!("chain route must be found"),
        }
    }

    #[test]
    fn test_disconnected_endpoints_not_found() {
        let graph = Graph::from_pairs(
            vec![
                Position::new(0.0, 0.0),
                Position::new(10.0, 0.0),
                Position::new(5.0, 5.0),
                Position::new(5.0, -5.0),
            ],
            &[(2, 3)],
        )
        .unwrap();
        let mut rng = RngSource::seeded(5);
        let result = AntColony::default()
            .find_path(&graph, NodeId(0), NodeId(1), &mut rng)
            .unwrap();
        assert_eq!(result, PathResult::NotFound);
    }

    #[test]
    fn test_endpoints_only_map_not_found() {
        let mut rng = RngSource::seeded(9);
        let graph = GraphBuilder::default().generate(2, 0, &mut rng).unwrap();
        let result = AntColony::default()
            .find_path(&graph, START_NODE, END_NODE, &mut rng)
            .unwrap();
        assert_eq!(result, PathResult::NotFound);
    }

    #[test]
    fn test_found_routes_are_valid_on_random_maps() {
        let builder = GraphBuilder::default();
        let colony = colony(AntColonyConfig {
            num_iterations: 25,
            ..AntColonyConfig::default()
        });

        for seed in 0..15 {
            let mut rng = RngSource::seeded(seed);
            let graph = builder.generate(12, 30, &mut rng).unwrap();
            let result = colony.find_path(&graph, START_NODE, END_NODE, &mut rng).unwrap();
            assert_valid_route(&graph, &result, START_NODE, END_NODE);
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let mut rng = RngSource::seeded(21);
        let graph = GraphBuilder::default().generate(15, 40, &mut rng).unwrap();
        let colony = colony(AntColonyConfig {
            num_iterations: 30,
            ..AntColonyConfig::default()
        });

        let a = colony
            .find_path(&graph, START_NODE, END_NODE, &mut RngSource::seeded(77))
            .unwrap();
        let b = colony
            .find_path(&graph, START_NODE, END_NODE, &mut RngSource::seeded(77))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_construction_is_deterministic() {
        let mut rng = RngSource::seeded(8);
        let graph = GraphBuilder::default().generate(15, 40, &mut rng).unwrap();
        let colony = colony(AntColonyConfig {
            num_iterations: 20,
            parallel_construction: true,
            ..AntColonyConfig::default()
        });

        let a = colony
            .search(&graph, START_NODE, END_NODE, &mut RngSource::seeded(3), None)
            .unwrap();
        let b = colony
            .search(&graph, START_NODE, END_NODE, &mut RngSource::seeded(3), None)
            .unwrap();
        assert_eq!(a.result, b.result);
        assert_eq!(a.best_length_history, b.best_length_history);
        assert_valid_route(&graph, &a.result, START_NODE, END_NODE);
    }

    #[test]
    fn test_roulette_selection() {
        let scores = [0.0, 2.0, 0.0, 1.0, 3.0];
        assert_eq!(roulette_select(&scores, 0.0), Some(1));
        assert_eq!(roulette_select(&scores, 2.0), Some(1));
        assert_eq!(roulette_select(&scores, 2.5), Some(3));
        assert_eq!(roulette_select(&scores, 5.9), Some(4));
        assert_eq!(roulette_select(&scores, 6.5), Some(4));
        assert_eq!(roulette_select(&[0.0, 0.0], 0.0), None);
    }

    #[test]
    fn test_scripted_draws_pick_branch() {
        // Two parallel routes from 0: via 2 (short) and via 3 (long).
        let graph = Graph::new(
            vec![Position::new(0.0, 0.0); 4],
            vec![
                Edge::new(NodeId(0), NodeId(2), 1.0),
                Edge::new(NodeId(2), NodeId(1), 1.0),
                Edge::new(NodeId(0), NodeId(3), 2.0),
                Edge::new(NodeId(3), NodeId(1), 2.0),
            ],
        )
        .unwrap();
        let single_ant = colony(AntColonyConfig {
            num_ants: 1,
            num_iterations: 1,
            ..AntColonyConfig::default()
        });

        // From 0 the scores are 1.0 (node 2) and 0.25 (node 3).
        let mut low = ScriptedSource::new(vec![0.5]);
        let via_two = single_ant.find_path(&graph, NodeId(0), NodeId(1), &mut low).unwrap();
        assert_eq!(via_two.length(), Some(2.0));

        let mut high = ScriptedSource::new(vec![0.9]);
        let via_three = single_ant.find_path(&graph, NodeId(0), NodeId(1), &mut high).unwrap();
        assert_eq!(
            via_three.path(),
            Some(&[NodeId(0), NodeId(3), NodeId(1)][..])
        );
        assert_eq!(via_three.length(), Some(4.0));
    }

    #[test]
    fn test_best_is_global_and_monotone() {
        let mut rng = RngSource::seeded(13);
        let graph = GraphBuilder::default().generate(20, 60, &mut rng).unwrap();
        let report = colony(AntColonyConfig {
            num_iterations: 40,
            ..AntColonyConfig::default()
        })
        .search(&graph, START_NODE, END_NODE, &mut rng, None)
        .unwrap();

        assert_eq!(report.iterations_completed, 40);
        assert_eq!(report.best_length_history.len(), 40);
        for pair in report.best_length_history.windows(2) {
            if let (Some(before), Some(after)) = (pair[0], pair[1]) {
                assert!(after <= before);
            }
            assert!(!(pair[0].is_some() && pair[1].is_none()));
        }
        assert_eq!(report.result.length(), *report.best_length_history.last().unwrap());
        assert_eq!(report.metrics.steps_executed, 40);
        assert_eq!(
            report.metrics.tours_completed + report.metrics.tours_dead_ended,
            40 * 20
        );
    }

    /// The edge into the end is so long that its score underflows to zero,
    /// so ants stall at node 2 one hop short of the goal.
    fn unreachable_by_score() -> Graph {
        Graph::new(
            vec![Position::new(0.0, 0.0); 3],
            vec![
                Edge::new(NodeId(0), NodeId(2), 1.0),
                Edge::new(NodeId(2), NodeId(1), 1e200),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_direct_rescue_completes_stalled_ant() {
        let graph = unreachable_by_score();
        let report = colony(AntColonyConfig {
            num_iterations: 3,
            ..AntColonyConfig::default()
        })
        .search(&graph, NodeId(0), NodeId(1), &mut RngSource::seeded(0), None)
        .unwrap();

        assert_eq!(
            report.result.path(),
            Some(&[NodeId(0), NodeId(2), NodeId(1)][..])
        );
        assert_relative_eq!(report.result.length().unwrap(), 1e200 + 1.0);
        assert_eq!(report.metrics.tours_rescued, report.metrics.tours_completed);
    }

    #[test]
    fn test_rescue_can_be_disabled() {
        let graph = unreachable_by_score();
        let report = colony(AntColonyConfig {
            num_iterations: 3,
            allow_direct_rescue: false,
            ..AntColonyConfig::default()
        })
        .search(&graph, NodeId(0), NodeId(1), &mut RngSource::seeded(0), None)
        .unwrap();

        assert_eq!(report.result, PathResult::NotFound);
        assert_eq!(report.metrics.tours_completed, 0);
        assert_eq!(report.metrics.tours_dead_ended, 3 * 20);
    }

    #[test]
    fn test_full_evaporation_keeps_searching() {
        let graph = chain();
        let result = colony(AntColonyConfig {
            evaporation: 1.0,
            num_iterations: 5,
            ..AntColonyConfig::default()
        })
        .find_path(&graph, NodeId(0), NodeId(1), &mut RngSource::seeded(2))
        .unwrap();
        assert_eq!(result.length(), Some(3.0));
    }

    #[test]
    fn test_start_equals_end() {
        let graph = chain();
        let report = AntColony::default()
            .search(&graph, NodeId(2), NodeId(2), &mut RngSource::seeded(0), None)
            .unwrap();
        assert_eq!(
            report.result,
            PathResult::Found {
                path: vec![NodeId(2)],
                length: 0.0
            }
        );
        assert_eq!(report.iterations_completed, 0);
    }

    #[test]
    fn test_invalid_nodes_rejected() {
        let graph = chain();
        let result = AntColony::default().find_path(
            &graph,
            NodeId(0),
            NodeId(4),
            &mut RngSource::seeded(0),
        );
        assert!(matches!(result, Err(AlgorithmError::InvalidNode(NodeId(4)))));
    }

    #[test]
    fn test_cancelled_before_start() {
        let graph = chain();
        let token = CancellationToken::new();
        token.cancel();

        let report = AntColony::default()
            .search(&graph, NodeId(0), NodeId(1), &mut RngSource::seeded(0), Some(&token))
            .unwrap();
        assert!(report.cancelled);
        assert_eq!(report.iterations_completed, 0);
        assert_eq!(report.result, PathResult::NotFound);
    }

    #[test]
    fn test_graph_reuse_has_no_residue() {
        let graph = chain();
        let colony = AntColony::default();
        let first = colony
            .search(&graph, NodeId(0), NodeId(1), &mut RngSource::seeded(4), None)
            .unwrap();
        let second = colony
            .search(&graph, NodeId(0), NodeId(1), &mut RngSource::seeded(4), None)
            .unwrap();
        assert_eq!(first.result, second.result);
        assert_eq!(first.best_length_history, second.best_length_history);
    }

    #[test]
    fn test_config_validation() {
        let cases = [
            AntColonyConfig {
                num_ants: 0,
                ..AntColonyConfig::default()
            },
            AntColonyConfig {
                num_iterations: 0,
                ..AntColonyConfig::default()
            },
            AntColonyConfig {
                alpha: 0.0,
                ..AntColonyConfig::default()
            },
            AntColonyConfig {
                beta: -1.0,
                ..AntColonyConfig::default()
            },
            AntColonyConfig {
                deposit: f64::NAN,
                ..AntColonyConfig::default()
            },
            AntColonyConfig {
                evaporation: 1.5,
                ..AntColonyConfig::default()
            },
            AntColonyConfig {
                evaporation: -0.1,
                ..AntColonyConfig::default()
            },
            AntColonyConfig {
                initial_pheromone: 0.0,
                ..AntColonyConfig::default()
            },
        ];
        for config in cases {
            assert!(matches!(
                AntColony::new(config),
                Err(AlgorithmError::InvalidConfiguration { .. })
            ));
        }

        for evaporation in [0.0, 1.0] {
            let config = AntColonyConfig {
                evaporation,
                ..AntColonyConfig::default()
            };
            assert!(AntColony::new(config).is_ok());
        }
    }

    #[test]
    fn test_dead_end_tours_only_evaporate() {
        let colony = colony(AntColonyConfig {
            evaporation: 0.25,
            initial_pheromone: 2.0,
            ..AntColonyConfig::default()
        });
        let mut pheromones = PheromoneMatrix::new(4, 2.0);
        let stalled = AntTour::DeadEnd {
            path: vec![NodeId(0), NodeId(2), NodeId(3)],
        };

        colony.update_pheromones(&mut pheromones, &[stalled]);

        for (from, to) in [(0, 2), (2, 0), (2, 3), (3, 2), (0, 1)] {
            assert_relative_eq!(pheromones.level(from, to), 2.0 * 0.75);
        }
    }

    #[test]
    fn test_complete_tours_deposit_after_evaporation() {
        let colony = colony(AntColonyConfig {
            evaporation: 0.25,
            deposit: 10.0,
            initial_pheromone: 2.0,
            ..AntColonyConfig::default()
        });
        let mut pheromones = PheromoneMatrix::new(4, 2.0);
        let tours = [
            AntTour::Complete {
                path: vec![NodeId(0), NodeId(2), NodeId(1)],
                length: 4.0,
                rescued: false,
            },
            AntTour::DeadEnd {
                path: vec![NodeId(0), NodeId(3)],
            },
        ];

        colony.update_pheromones(&mut pheromones, &tours);

        let reinforced = 2.0 * 0.75 + 10.0 / 4.0;
        for (from, to) in [(0, 2), (2, 0), (2, 1), (1, 2)] {
            assert_relative_eq!(pheromones.level(from, to), reinforced);
        }
        assert_relative_eq!(pheromones.level(0, 3), 2.0 * 0.75);
        assert_relative_eq!(pheromones.level(3, 0), 2.0 * 0.75);
    }

    #[test]
    fn test_report_serializes() {
        let report = AntColony::default()
            .search(&chain(), NodeId(0), NodeId(1), &mut RngSource::seeded(0), None)
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["result"]["status"], "found");
        assert_eq!(json["iterations_completed"], 100);
    }

    #[test]
    fn test_trait_metadata() {
        let colony = AntColony::default();
        assert_eq!(colony.name(), "Ant Colony Optimization");
        assert!(!colony.guarantees_optimal_path());
    }
}
