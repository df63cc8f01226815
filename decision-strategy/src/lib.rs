mod error;
mod playout;
pub mod strategies;
mod strategy;

pub use self::error::StrategyError;
pub use self::playout::{play_out, Playout};
pub use self::strategy::Strategy;
