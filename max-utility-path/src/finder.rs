use decision_tree::{DecisionTree, StateId, Utility};
use tracing::{debug, trace};

use crate::priority_queue::StatePriorityQueue;
use crate::{Error, FinderConfig, MaxUtilityPath, Result, ScoreTable};

/// Finds the root-to-leaf path of a decision tree with the highest
/// cumulative utility, using the default configuration.
pub fn find_max_utility_path<T: DecisionTree>(tree: &T, root: StateId) -> Result<MaxUtilityPath> {
    MaxUtilityPathFinder::new().find(tree, root)
}

#[derive(Debug, Clone, Default)]
pub struct MaxUtilityPathFinder {
    config: FinderConfig,
}

/// Outcome of a single search: the best path plus the scores every covered
/// state ended up with.
#[derive(Debug, Clone)]
pub struct Search {
    path: MaxUtilityPath,
    scores: ScoreTable,
}

impl Search {
    pub fn path(&self) -> &MaxUtilityPath {
        &self.path
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    pub fn into_path(self) -> MaxUtilityPath {
        self.path
    }
}

impl MaxUtilityPathFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: FinderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn find<T: DecisionTree>(&self, tree: &T, root: StateId) -> Result<MaxUtilityPath> {
        self.search(tree, root).map(Search::into_path)
    }

    /// Scores every state reachable from `root`, then backtracks from the
    /// best scoring leaf.
    ///
    /// The root itself scores zero; every other state scores the sum of the
    /// contributions along the path leading to it, root excluded. Among
    /// leaves with equal scores the first in pre-order wins.
    pub fn search<T: DecisionTree>(&self, tree: &T, root: StateId) -> Result<Search> {
        let states = tree.reachable_states(root)?;
        if states.len() > self.config.max_states {
            return Err(Error::TooManyStates {
                limit: self.config.max_states,
                found: states.len(),
            });
        }
        debug!(%root, states = states.len(), "searching for max utility path");

        let mut scores = ScoreTable::initialize(&states, root);
        let mut queue = StatePriorityQueue::with_capacity(states.len());
        for &state in &states {
            queue.push(state, scores.expected_utility(state));
        }

        while let Some((current, utility)) = queue.pop() {
            trace!(state = %current, ?utility, queued = queue.len(), "expanding");
            scores.mark_visited(current);

            for &child in tree.children(current) {
                // Children are always still queued: a state stays unreached,
                // and so ranks below its parent, until that parent expands.
                let was_queued = queue.remove(child).is_some();
                relax(tree, &mut scores, current, child)?;
                if was_queued {
                    queue.push(child, scores.expected_utility(child));
                }
            }
        }

        let (leaf, utility) = best_leaf(tree, &states, &scores).ok_or(Error::NoLeaf)?;
        let path = MaxUtilityPath::new(backtrack(&scores, leaf), utility);
        debug!(%leaf, utility, length = path.len(), "found max utility path");

        Ok(Search { path, scores })
    }
}

/// Raises the score of `child` if going through `parent` beats its current
/// best. Equal scores keep the existing parent.
fn relax<T: DecisionTree>(
    tree: &T,
    scores: &mut ScoreTable,
    parent: StateId,
    child: StateId,
) -> Result<()> {
    let base = match scores.expected_utility(parent) {
        Some(utility) => utility,
        None => return Ok(()),
    };
    let candidate = base
        .checked_add(tree.contribution(child))
        .ok_or(Error::UtilityOverflow { parent, child })?;

    let improves = match scores.expected_utility(child) {
        Some(current) => current < candidate,
        None => true,
    };
    if improves {
        trace!(%parent, %child, utility = candidate, "relaxed");
        scores.set_expected_utility(child, candidate);
        scores.set_parent(child, parent);
    }
    Ok(())
}

/// The visited leaf with the strictly highest score, first in `states` order
/// on ties.
fn best_leaf<T: DecisionTree>(
    tree: &T,
    states: &[StateId],
    scores: &ScoreTable,
) -> Option<(StateId, Utility)> {
    let mut best: Option<(StateId, Utility)> = None;
    for &state in states {
        if !scores.is_visited(state) || !tree.is_leaf(state) {
            continue;
        }
        let utility = match scores.expected_utility(state) {
            Some(utility) => utility,
            None => continue,
        };

        match best {
            Some((_, best_utility)) if utility <= best_utility => {}
            _ => best = Some((state, utility)),
        }
    }
    best
}

fn backtrack(scores: &ScoreTable, leaf: StateId) -> Vec<StateId> {
    let mut path = vec![];
    let mut current = Some(leaf);
    while let Some(state) = current {
        path.push(state);
        current = scores.parent(state);
    }
    path.reverse();
    path
}
