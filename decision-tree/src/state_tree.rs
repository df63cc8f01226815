use std::ops::Index;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{DecisionTree, State, StateId, TreeError, Utility};

static NEXT_TREE_TAG: AtomicU64 = AtomicU64::new(1);

/// Arena owning every state of one decision tree.
///
/// States are only ever added as the child of an existing state, so every
/// non-root state has exactly one parent and the structure cannot contain a
/// cycle.
#[derive(Debug, Clone)]
pub struct StateTree {
    tag: u64,
    states: Vec<State>,
}

impl StateTree {
    pub fn new(root: State) -> Self {
        Self {
            tag: NEXT_TREE_TAG.fetch_add(1, Ordering::SeqCst),
            states: vec![root],
        }
    }

    pub fn root(&self) -> StateId {
        StateId::new(self.tag, 0)
    }

    /// Adds `state` as the last child of `parent`.
    pub fn add_child(&mut self, parent: StateId, state: State) -> Result<StateId, TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownState(parent));
        }

        let id = StateId::new(self.tag, self.states.len());
        self.states.push(state);
        self.states[parent.index].children.push(id);
        Ok(id)
    }

    pub fn get(&self, state: StateId) -> Option<&State> {
        if state.tree != self.tag {
            return None;
        }
        self.states.get(state.index)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl Index<StateId> for StateTree {
    type Output = State;

    /// Panics if `state` does not belong to this tree.
    fn index(&self, state: StateId) -> &State {
        match self.get(state) {
            Some(found) => found,
            None => panic!("state {} does not belong to this tree", state),
        }
    }
}

impl DecisionTree for StateTree {
    fn contains(&self, state: StateId) -> bool {
        self.get(state).is_some()
    }

    fn label(&self, state: StateId) -> &str {
        self[state].label()
    }

    fn contribution(&self, state: StateId) -> Utility {
        self[state].contribution()
    }

    fn children(&self, state: StateId) -> &[StateId] {
        self[state].children()
    }
}
