use decision_tree::{DecisionTree, StateId, TreeError};
use max_utility_path::{MaxUtilityPath, MaxUtilityPathFinder};
use tracing::debug;

use crate::{Strategy, StrategyError};

/// Follows the max utility path.
///
/// The path planned from the first state asked about is kept and followed
/// for as long as the agent stays on it; leaving it triggers a new search
/// from wherever the agent ended up.
#[derive(Debug, Clone, Default)]
pub struct MaxUtilityStrategy {
    finder: MaxUtilityPathFinder,
    plan: Option<MaxUtilityPath>,
}

impl MaxUtilityStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_finder(finder: MaxUtilityPathFinder) -> Self {
        Self { finder, plan: None }
    }

    pub fn plan(&self) -> Option<&MaxUtilityPath> {
        self.plan.as_ref()
    }

    /// The planned next state, provided it is still a child of `state` in
    /// `tree`.
    fn planned_successor<T: DecisionTree>(&self, tree: &T, state: StateId) -> Option<StateId> {
        let states = self.plan.as_ref()?.states();
        let index = states.iter().position(|&s| s == state)?;
        states
            .get(index + 1)
            .copied()
            .filter(|next| tree.children(state).contains(next))
    }
}

impl<T: DecisionTree> Strategy<T> for MaxUtilityStrategy {
    fn select_child(&mut self, tree: &T, state: StateId) -> Result<Option<StateId>, StrategyError> {
        if !tree.contains(state) {
            return Err(TreeError::UnknownState(state).into());
        }
        if tree.is_leaf(state) {
            return Ok(None);
        }
        if let Some(next) = self.planned_successor(tree, state) {
            return Ok(Some(next));
        }

        let plan = self.finder.find(tree, state)?;
        debug!(%state, %plan, "planned max utility path");
        let next = plan.first_decision();
        self.plan = Some(plan);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decision_tree::{State, StateTree};
    use max_utility_path::{Error, FinderConfig};

    fn two_level_tree() -> (StateTree, [StateId; 4]) {
        let mut tree = StateTree::new(State::new("root", [0]));
        let root = tree.root();
        let a = tree.add_child(root, State::new("a", [5])).expect("root exists");
        let leaf = tree.add_child(a, State::new("leaf", [3])).expect("a exists");
        let b = tree.add_child(root, State::new("b", [2])).expect("root exists");
        (tree, [root, a, leaf, b])
    }

    #[test]
    fn follows_the_planned_path() {
        let (tree, [root, a, leaf, _]) = two_level_tree();
        let mut strategy = MaxUtilityStrategy::new();

        assert_eq!(strategy.select_child(&tree, root), Ok(Some(a)));
        assert_eq!(strategy.plan().map(MaxUtilityPath::states), Some(&[root, a, leaf][..]));
        assert_eq!(strategy.select_child(&tree, a), Ok(Some(leaf)));
        assert_eq!(strategy.select_child(&tree, leaf), Ok(None));
    }

    #[test]
    fn replans_after_leaving_the_path() {
        let mut tree = StateTree::new(State::new("root", [0]));
        let root = tree.root();
        let a = tree.add_child(root, State::new("a", [5])).expect("root exists");
        tree.add_child(a, State::new("a end", [3])).expect("a exists");
        let b = tree.add_child(root, State::new("b", [2])).expect("root exists");
        tree.add_child(b, State::new("b low", [-4])).expect("b exists");
        let b_high = tree.add_child(b, State::new("b high", [1])).expect("b exists");

        let mut strategy = MaxUtilityStrategy::new();
        assert_eq!(strategy.select_child(&tree, root), Ok(Some(a)));
        assert_eq!(strategy.select_child(&tree, b), Ok(Some(b_high)));
        assert_eq!(strategy.plan().map(MaxUtilityPath::root), Some(b));
    }

    #[test]
    fn unknown_state_is_rejected() {
        let (other, _) = two_level_tree();
        let tree = StateTree::new(State::new("root", [0]));
        let foreign = other.children(other.root())[0];

        assert_eq!(
            MaxUtilityStrategy::new().select_child(&tree, foreign),
            Err(StrategyError::Tree(TreeError::UnknownState(foreign)))
        );
    }

    #[test]
    fn finder_limits_apply_when_planning() {
        let (tree, [root, ..]) = two_level_tree();
        let finder = MaxUtilityPathFinder::new().with_config(FinderConfig { max_states: 2 });
        let mut strategy = MaxUtilityStrategy::with_finder(finder);

        assert_eq!(
            strategy.select_child(&tree, root),
            Err(StrategyError::Path(Error::TooManyStates { limit: 2, found: 4 }))
        );
        assert!(strategy.plan().is_none());
    }

    #[test]
    fn plan_is_not_reused_for_a_diverged_copy() {
        let mut tree = StateTree::new(State::new("root", [0]));
        let root = tree.root();
        let a = tree.add_child(root, State::new("a", [1])).expect("root exists");

        let mut copy = tree.clone();
        let a_end = tree.add_child(a, State::new("a end", [5])).expect("a exists");
        let b = copy.add_child(root, State::new("b", [0])).expect("root exists");
        let copy_a_end = copy.add_child(a, State::new("other a end", [2])).expect("a exists");
        assert_eq!(a_end, b, "both trees minted the same next id");

        let mut strategy = MaxUtilityStrategy::new();
        assert_eq!(strategy.select_child(&tree, root), Ok(Some(a)));
        assert_eq!(strategy.select_child(&copy, a), Ok(Some(copy_a_end)));
        assert_eq!(strategy.plan().map(MaxUtilityPath::root), Some(a));
    }
}
