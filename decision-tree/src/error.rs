use thiserror::Error;

use crate::StateId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("state {0} does not belong to this tree")]
    UnknownState(StateId),

    /// A state was reached through more than one edge, so the structure is
    /// either cyclic or shares a child between parents.
    #[error("state {state} is reachable through more than one edge")]
    NotATree { state: StateId },
}
