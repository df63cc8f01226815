use std::collections::HashSet;

use crate::{StateId, TreeError, Utility};

/// Read-only view of a decision tree, as required by path finding and
/// strategies.
pub trait DecisionTree {
    /// Whether `state` is a handle into this tree.
    fn contains(&self, state: StateId) -> bool;

    fn label(&self, state: StateId) -> &str;

    /// The fixed utility contribution of reaching `state`.
    fn contribution(&self, state: StateId) -> Utility;

    fn children(&self, state: StateId) -> &[StateId];

    fn is_leaf(&self, state: StateId) -> bool {
        self.children(state).is_empty()
    }

    /// Flattens the subtree rooted at `root` into its set of states, in
    /// depth-first pre-order with children visited in their stored order.
    ///
    /// Membership is by identity. A state reached twice means the structure
    /// is not a tree, which is reported instead of walked again.
    fn reachable_states(&self, root: StateId) -> Result<Vec<StateId>, TreeError> {
        if !self.contains(root) {
            return Err(TreeError::UnknownState(root));
        }

        let mut seen = HashSet::new();
        let mut ordered = vec![];
        let mut stack = vec![root];
        while let Some(state) = stack.pop() {
            if !seen.insert(state) {
                return Err(TreeError::NotATree { state });
            }
            ordered.push(state);

            let children = self.children(state);
            for &child in children.iter().rev() {
                if !self.contains(child) {
                    return Err(TreeError::UnknownState(child));
                }
                stack.push(child);
            }
        }

        Ok(ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(index: usize) -> StateId {
        StateId::new(0, index)
    }

    /// Adjacency-list tree that can be wired into shapes `StateTree` refuses
    /// to build.
    struct Wiring {
        children: Vec<Vec<StateId>>,
    }

    impl Wiring {
        fn new(children: Vec<Vec<usize>>) -> Self {
            Self {
                children: children
                    .into_iter()
                    .map(|c| c.into_iter().map(id).collect())
                    .collect(),
            }
        }
    }

    impl DecisionTree for Wiring {
        fn contains(&self, state: StateId) -> bool {
            state.index < self.children.len()
        }

        fn label(&self, _state: StateId) -> &str {
            ""
        }

        fn contribution(&self, _state: StateId) -> Utility {
            1
        }

        fn children(&self, state: StateId) -> &[StateId] {
            &self.children[state.index]
        }
    }

    #[test]
    fn reachable_states_are_in_pre_order() {
        let wiring = Wiring::new(vec![vec![1, 3], vec![2], vec![], vec![]]);
        let states = wiring.reachable_states(id(0)).expect("is a tree");
        assert_eq!(states, vec![id(0), id(1), id(2), id(3)]);
    }

    #[test]
    fn reachable_states_from_inner_state_only_cover_subtree() {
        let wiring = Wiring::new(vec![vec![1, 3], vec![2], vec![], vec![]]);
        let states = wiring.reachable_states(id(1)).expect("is a tree");
        assert_eq!(states, vec![id(1), id(2)]);
    }

    #[test]
    fn cycle_is_rejected() {
        let wiring = Wiring::new(vec![vec![1], vec![2], vec![0]]);
        assert_eq!(
            wiring.reachable_states(id(0)),
            Err(TreeError::NotATree { state: id(0) })
        );
    }

    #[test]
    fn shared_child_is_rejected() {
        let wiring = Wiring::new(vec![vec![1, 2], vec![3], vec![3], vec![]]);
        assert_eq!(
            wiring.reachable_states(id(0)),
            Err(TreeError::NotATree { state: id(3) })
        );
    }

    #[test]
    fn unknown_root_is_rejected() {
        let wiring = Wiring::new(vec![vec![]]);
        assert_eq!(
            wiring.reachable_states(id(7)),
            Err(TreeError::UnknownState(id(7)))
        );
    }

    #[test]
    fn leaf_detection_follows_children() {
        let wiring = Wiring::new(vec![vec![1], vec![]]);
        assert!(!wiring.is_leaf(id(0)));
        assert!(wiring.is_leaf(id(1)));
    }
}
