pub mod max_utility;
pub mod random;
