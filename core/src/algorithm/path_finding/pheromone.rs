//! Dense symmetric pheromone matrix
//!
//! One matrix is created per colony run and dropped when the run ends.
//! Values only ever shrink through [`PheromoneMatrix::evaporate`] with a
//! factor in `[0, 1]` and grow through non-negative deposits, so every entry
//! stays non-negative for the lifetime of the run.

use crate::algorithm::traits::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    size: usize,
    levels: Vec<f64>,
}

impl PheromoneMatrix {
    /// Uniformly initialised `size × size` matrix
    pub fn new(size: usize, initial: f64) -> Self {
        debug_assert!(initial >= 0.0);
        Self {
            size,
            levels: vec![initial; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn level(&self, from: usize, to: usize) -> f64 {
        self.levels[from * self.size + to]
    }

    /// Multiplies every entry by `1 - rate`
    pub fn evaporate(&mut self, rate: f64) {
        debug_assert!((0.0..=1.0).contains(&rate));
        let retained = (1.0 - rate).max(0.0);
        for level in &mut self.levels {
            *level *= retained;
        }
    }

    /// Adds `amount` to both directions of every consecutive step of `path`
    pub fn reinforce(&mut self, path: &[NodeId], amount: f64) {
        debug_assert!(amount >= 0.0);
        for step in path.windows(2) {
            let (from, to) = (step[0].as_usize(), step[1].as_usize());
            self.levels[from * self.size + to] += amount;
            self.levels[to * self.size + from] += amount;
        }
    }

    #[cfg(test)]
    pub(crate) fn min_level(&self) -> f64 {
        self.levels.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_initialisation() {
        let matrix = PheromoneMatrix::new(4, 1.0);
        assert_eq!(matrix.size(), 4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(matrix.level(i, j), 1.0);
            }
        }
    }

    #[test]
    fn test_reinforce_is_symmetric() {
        let mut matrix = PheromoneMatrix::new(4, 1.0);
        matrix.reinforce(&[NodeId(0), NodeId(2), NodeId(3)], 0.5);

        assert_relative_eq!(matrix.level(0, 2), 1.5);
        assert_relative_eq!(matrix.level(2, 0), 1.5);
        assert_relative_eq!(matrix.level(2, 3), 1.5);
        assert_relative_eq!(matrix.level(3, 2), 1.5);
        assert_relative_eq!(matrix.level(0, 3), 1.0);
    }

    #[test]
    fn test_evaporate_then_reinforce() {
        let mut matrix = PheromoneMatrix::new(3, 1.0);
        matrix.evaporate(0.5);
        matrix.reinforce(&[NodeId(0), NodeId(1)], 2.0);

        assert_relative_eq!(matrix.level(0, 1), 2.5);
        assert_relative_eq!(matrix.level(1, 2), 0.5);
    }

    #[test]
    fn test_levels_never_negative() {
        let mut matrix = PheromoneMatrix::new(5, 1.0);
        for cycle in 0..200 {
            let rate = (cycle % 11) as f64 / 10.0;
            matrix.evaporate(rate);
            if cycle % 3 == 0 {
                let amount = 1.0 / (cycle + 1) as f64;
                matrix.reinforce(&[NodeId(0), NodeId(4), NodeId(1)], amount);
            }
            assert!(matrix.min_level() >= 0.0);
        }
    }

    #[test]
    fn test_full_evaporation_clears_matrix() {
        let mut matrix = PheromoneMatrix::new(3, 7.0);
        matrix.evaporate(1.0);
        assert_eq!(matrix.min_level(), 0.0);
        assert_eq!(matrix.level(2, 1), 0.0);
    }
}
