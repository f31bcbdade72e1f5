//! The seam between the elevator mechanic and the host world.
//!
//! The mechanic never owns blocks or players; it reads both through these
//! traits and issues teleports back through them. Hosts are expected to be
//! best-effort: a failed lookup is an absent block, and teleport failures are
//! the host's problem, never reported back to the mechanic.

use std::sync::Arc;

use lift_utils::{BlockPos, ResourceLocation, math::Vector3};
use uuid::Uuid;

use crate::dimension::DimensionId;

/// Read access to one player, plus the two inputs driving the mechanic.
pub trait PlayerView: Send + Sync {
    /// Stable identity of the player; keys the cooldown records.
    fn id(&self) -> Uuid;

    /// Display name, used in log lines only.
    fn name(&self) -> &str;

    /// The player's continuous position (feet).
    fn position(&self) -> Vector3<f64>;

    /// Whether the sneak input is currently held.
    fn is_sneaking(&self) -> bool;

    /// Whether the jump input is currently held.
    fn is_jumping(&self) -> bool;
}

/// Read access to the world, plus the teleport side effect.
pub trait WorldView: Send + Sync {
    /// All players currently in the given dimension.
    fn players_in(&self, dimension: DimensionId) -> Vec<Arc<dyn PlayerView>>;

    /// The block type at a position, or `None` where nothing is loaded.
    fn block_at(&self, dimension: DimensionId, pos: BlockPos) -> Option<ResourceLocation>;

    /// Moves a player to a destination within their current dimension.
    ///
    /// Fire-and-forget: hosts handle (or ignore) their own failures.
    fn teleport(&self, player: &dyn PlayerView, destination: Vector3<f64>);
}
