use std::collections::HashSet;

use decision_tree::{DecisionTree, StateId, TreeError, Utility};
use tracing::trace;

use crate::{Strategy, StrategyError};

/// The states an agent went through when letting a strategy decide, from the
/// starting state down to a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playout {
    pub states: Vec<StateId>,

    /// Sum of the contributions of every state entered after the start.
    pub utility: Utility,
}

/// Lets `strategy` pick decisions from `start` until it reaches a leaf.
pub fn play_out<T, S>(tree: &T, start: StateId, strategy: &mut S) -> Result<Playout, StrategyError>
where
    T: DecisionTree,
    S: Strategy<T> + ?Sized,
{
    if !tree.contains(start) {
        return Err(TreeError::UnknownState(start).into());
    }

    let mut seen = HashSet::new();
    seen.insert(start);
    let mut states = vec![start];
    let mut utility: Utility = 0;
    let mut current = start;
    loop {
        let child = match strategy.select_child(tree, current)? {
            Some(child) => child,
            None if tree.is_leaf(current) => break,
            None => return Err(StrategyError::Stalled { state: current }),
        };

        if !tree.children(current).contains(&child) {
            return Err(StrategyError::IllegalChoice {
                state: current,
                child,
            });
        }
        if !seen.insert(child) {
            return Err(TreeError::NotATree { state: child }.into());
        }

        utility = utility.checked_add(tree.contribution(child)).ok_or(
            max_utility_path::Error::UtilityOverflow {
                parent: current,
                child,
            },
        )?;
        trace!(state = %current, %child, utility, "decided");
        states.push(child);
        current = child;
    }

    Ok(Playout { states, utility })
}
