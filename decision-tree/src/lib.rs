mod decision_tree;
mod error;
mod state;
mod state_tree;

pub use self::decision_tree::DecisionTree;
pub use self::error::TreeError;
pub use self::state::{State, StateId, Utility};
pub use self::state_tree::StateTree;
