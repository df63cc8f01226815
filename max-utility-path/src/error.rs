use decision_tree::{StateId, TreeError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("tree has {found} reachable states, more than the limit of {limit}")]
    TooManyStates { limit: usize, found: usize },

    #[error("expected utility of {child} overflows when reached from {parent}")]
    UtilityOverflow { parent: StateId, child: StateId },

    #[error("no leaf state is reachable from the root")]
    NoLeaf,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
