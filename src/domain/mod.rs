pub mod board;
pub mod filters;
pub mod format;
pub mod property;
pub mod stats;

pub use board::BoardState;
pub use filters::Selector;
pub use property::{Property, SEED_PROPERTIES};
pub use stats::DealStats;
