use decision_tree::{DecisionTree, StateId};

use crate::StrategyError;

/// Picks the next decision an agent takes from a state.
pub trait Strategy<T: DecisionTree> {
    /// Returns one of the children of `state`, or `None` if `state` is a leaf.
    fn select_child(&mut self, tree: &T, state: StateId) -> Result<Option<StateId>, StrategyError>;
}
