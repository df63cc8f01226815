use decision_tree::{StateId, TreeError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Path(#[from] max_utility_path::Error),

    #[error("strategy chose {child}, which is not a child of {state}")]
    IllegalChoice { state: StateId, child: StateId },

    #[error("strategy made no choice at {state}, which is not a leaf")]
    Stalled { state: StateId },
}
