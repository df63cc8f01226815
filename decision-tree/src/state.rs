use std::fmt;

/// Utility values are plain integers and accumulate additively along a path.
pub type Utility = i64;

/// Identity of a state inside the tree that owns it.
///
/// Two states are the same entity iff their ids are equal; labels and
/// outcome values play no part in identity. Ids carry the tag of the tree
/// that minted them, so an id is never mistaken for a state of another tree.
/// A cloned tree keeps its tag and accepts the original's ids.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct StateId {
    pub(crate) tree: u64,
    pub(crate) index: usize,
}

impl StateId {
    pub(crate) fn new(tree: u64, index: usize) -> Self {
        Self { tree, index }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// One decision point of a decision tree.
#[derive(Debug, Clone)]
pub struct State {
    label: String,

    /// The per-outcome utility values of reaching this state.
    outcomes: Vec<Utility>,

    /// Sum of `outcomes`, fixed at construction.
    contribution: Utility,

    pub(crate) children: Vec<StateId>,
}

impl State {
    pub fn new(label: impl Into<String>, outcomes: impl Into<Vec<Utility>>) -> Self {
        let outcomes = outcomes.into();
        let contribution = outcomes.iter().sum();
        Self {
            label: label.into(),
            outcomes,
            contribution,
            children: vec![],
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn outcomes(&self) -> &[Utility] {
        &self.outcomes
    }

    pub fn contribution(&self) -> Utility {
        self.contribution
    }

    pub fn children(&self) -> &[StateId] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
