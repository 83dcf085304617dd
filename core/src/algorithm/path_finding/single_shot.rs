//! One-shot search guard
//!
//! Interactive front-ends sometimes want a map to be solved only once until
//! a new map is generated. That policy lives here as a wrapper around any
//! [`PathfindingAlgorithm`] instead of inside the algorithm itself.

use log::debug;

use crate::algorithm::random::RandomSource;
use crate::algorithm::traits::{AlgorithmError, NodeId, PathResult, PathfindingAlgorithm};
use crate::data_structures::graph::Graph;

#[derive(Debug, Clone)]
pub struct SingleShot<A> {
    inner: A,
    executed: bool,
}

impl<A: PathfindingAlgorithm> SingleShot<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            executed: false,
        }
    }

    pub fn has_executed(&self) -> bool {
        self.executed
    }

    /// Re-arms the guard, typically after a new map was generated
    pub fn reset(&mut self) {
        self.executed = false;
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    /// Delegates the first call; every later call fails until [`reset`](Self::reset)
    pub fn find_path(
        &mut self,
        graph: &Graph,
        start: NodeId,
        goal: NodeId,
        rng: &mut dyn RandomSource,
    ) -> Result<PathResult, AlgorithmError> {
        if self.executed {
            debug!("{} already executed; ignoring request", self.inner.name());
            return Err(AlgorithmError::AlreadyExecuted);
        }
        let result = self.inner.find_path(graph, start, goal, rng)?;
        self.executed = true;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::path_finding::ant_colony::AntColony;
    use crate::algorithm::random::RngSource;
    use crate::data_structures::graph::Position;

    fn line() -> Graph {
        Graph::from_pairs(
            vec![
                Position::new(0.0, 0.0),
                Position::new(2.0, 0.0),
                Position::new(1.0, 0.0),
            ],
            &[(0, 2), (2, 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_second_run_is_refused() {
        let graph = line();
        let mut rng = RngSource::seeded(0);
        let mut guarded = SingleShot::new(AntColony::default());

        let first = guarded.find_path(&graph, NodeId(0), NodeId(1), &mut rng).unwrap();
        assert_eq!(first.length(), Some(2.0));
        assert!(guarded.has_executed());

        let second = guarded.find_path(&graph, NodeId(0), NodeId(1), &mut rng);
        assert!(matches!(second, Err(AlgorithmError::AlreadyExecuted)));
    }

    #[test]
    fn test_reset_rearms() {
        let graph = line();
        let mut rng = RngSource::seeded(0);
        let mut guarded = SingleShot::new(AntColony::default());

        guarded.find_path(&graph, NodeId(0), NodeId(1), &mut rng).unwrap();
        guarded.reset();
        assert!(!guarded.has_executed());
        assert!(guarded.find_path(&graph, NodeId(0), NodeId(1), &mut rng).is_ok());
    }

    #[test]
    fn test_failed_run_does_not_consume_the_shot() {
        let graph = line();
        let mut rng = RngSource::seeded(0);
        let mut guarded = SingleShot::new(AntColony::default());

        let invalid = guarded.find_path(&graph, NodeId(0), NodeId(9), &mut rng);
        assert!(matches!(invalid, Err(AlgorithmError::InvalidNode(_))));
        assert!(!guarded.has_executed());
        assert_eq!(guarded.inner().name(), "Ant Colony Optimization");
    }
}
