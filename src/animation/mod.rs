pub mod hook;
pub mod ticker;
pub mod typewriter;

pub use hook::{HookFrame, HookPlayer};
