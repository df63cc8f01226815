use decision_tree::{DecisionTree, StateId, Utility};
use std::fmt;

/// Root-to-leaf sequence of decisions with the highest cumulative utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxUtilityPath {
    /// Never empty; starts at the search root and ends at a leaf.
    states: Vec<StateId>,

    /// Sum of the contributions of every state after the root.
    utility: Utility,
}

impl MaxUtilityPath {
    pub(crate) fn new(states: Vec<StateId>, utility: Utility) -> Self {
        debug_assert!(!states.is_empty());
        Self { states, utility }
    }

    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    pub fn root(&self) -> StateId {
        self.states[0]
    }

    pub fn leaf(&self) -> StateId {
        self.states[self.states.len() - 1]
    }

    pub fn utility(&self) -> Utility {
        self.utility
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// The decision taken at the root, if the root is not itself a leaf.
    pub fn first_decision(&self) -> Option<StateId> {
        self.states.get(1).copied()
    }

    pub fn labels<'t, T: DecisionTree>(&self, tree: &'t T) -> Vec<&'t str> {
        self.states.iter().map(|&state| tree.label(state)).collect()
    }
}

impl fmt::Display for MaxUtilityPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", state)?;
        }
        write!(f, " (utility {})", self.utility)
    }
}
