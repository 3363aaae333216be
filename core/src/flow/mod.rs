pub mod control;
pub mod shared;
pub mod stage;

pub use control::{Flow, Outcome};
pub use shared::Shared;
pub use stage::{Handler, Phase, SkipCondition, StageDef};
