pub mod emit;
pub mod scheduler;

pub use emit::emit_action;
pub use scheduler::{CognitiveScheduler, RunState};
