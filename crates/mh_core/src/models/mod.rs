pub mod statistics;

pub use statistics::{SessionStats, Strategy, StrategyTally};
