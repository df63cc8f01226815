use decision_tree::{DecisionTree, StateId, TreeError};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Strategy, StrategyError};

/// Baseline strategy choosing uniformly among the children.
pub struct RandomStrategy<R = ThreadRng> {
    rng: R,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomStrategy<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<T: DecisionTree, R: Rng> Strategy<T> for RandomStrategy<R> {
    fn select_child(&mut self, tree: &T, state: StateId) -> Result<Option<StateId>, StrategyError> {
        if !tree.contains(state) {
            return Err(TreeError::UnknownState(state).into());
        }
        Ok(tree.children(state).choose(&mut self.rng).copied())
    }
}
