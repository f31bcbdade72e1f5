//! Shared value types for the lift workspace.

/// Vector math.
pub mod math;

mod types;

pub use types::{BlockPos, ResourceLocation};
