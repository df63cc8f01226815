use decision_tree::{StateId, Utility};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct StateScore {
    /// Best cumulative utility found so far for reaching the state from the
    /// root. `None` stands for negative infinity: the state has not been
    /// reached yet.
    expected_utility: Option<Utility>,

    /// Predecessor yielding `expected_utility`.
    parent: Option<StateId>,

    visited: bool,
}

/// Per-search scores of every state covered by one search.
///
/// Lives beside the tree rather than on its states, so a fresh table is all
/// a new search needs to start from a clean slate.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    scores: HashMap<StateId, StateScore>,
}

impl ScoreTable {
    /// Every state starts unreached and without a parent, except `root`
    /// which starts at zero.
    pub(crate) fn initialize(states: &[StateId], root: StateId) -> Self {
        let mut scores: HashMap<_, _> = states
            .iter()
            .map(|&state| (state, StateScore::default()))
            .collect();
        scores.entry(root).or_default().expected_utility = Some(0);

        Self { scores }
    }

    pub fn expected_utility(&self, state: StateId) -> Option<Utility> {
        self.scores
            .get(&state)
            .and_then(|score| score.expected_utility)
    }

    pub(crate) fn set_expected_utility(&mut self, state: StateId, utility: Utility) {
        self.scores.entry(state).or_default().expected_utility = Some(utility);
    }

    pub fn parent(&self, state: StateId) -> Option<StateId> {
        self.scores.get(&state).and_then(|score| score.parent)
    }

    pub(crate) fn set_parent(&mut self, state: StateId, parent: StateId) {
        self.scores.entry(state).or_default().parent = Some(parent);
    }

    pub fn is_visited(&self, state: StateId) -> bool {
        self.scores.get(&state).map_or(false, |score| score.visited)
    }

    pub(crate) fn mark_visited(&mut self, state: StateId) {
        self.scores.entry(state).or_default().visited = true;
    }

    /// Number of states covered by the search.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
