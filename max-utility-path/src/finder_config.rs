#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Upper bound on the number of states a single search may cover.
    /// Larger trees are rejected before any scoring starts.
    pub max_states: usize,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_states: 1_000_000,
        }
    }
}
