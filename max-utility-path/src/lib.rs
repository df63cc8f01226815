mod error;
mod finder;
mod finder_config;
mod path;
mod priority_queue;
mod score_table;

pub use self::error::{Error, Result};
pub use self::finder::{find_max_utility_path, MaxUtilityPathFinder, Search};
pub use self::finder_config::FinderConfig;
pub use self::path::MaxUtilityPath;
pub use self::score_table::ScoreTable;
