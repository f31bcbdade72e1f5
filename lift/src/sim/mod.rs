//! An in-memory host world for running the elevator without a client.

mod player;

pub use player::SimPlayer;

use std::sync::Arc;

use lift_core::dimension::DimensionId;
use lift_core::world::{PlayerView, WorldView};
use lift_utils::math::Vector3;
use lift_utils::{BlockPos, ResourceLocation};
use scc::HashMap;
use uuid::Uuid;

/// A sparse block-and-player store backed by concurrent maps.
///
/// Positions without an entry read as unloaded, which the elevator treats
/// the same as a non-matching block.
#[derive(Default)]
pub struct SimWorld {
    blocks: HashMap<(DimensionId, BlockPos), ResourceLocation>,
    players: HashMap<Uuid, Arc<SimPlayer>>,
}

impl SimWorld {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a block, replacing whatever was there.
    pub fn set_block(&self, dimension: DimensionId, pos: BlockPos, key: ResourceLocation) {
        let slot = (dimension, pos);
        if self
            .blocks
            .update_sync(&slot, |_, current| *current = key.clone())
            .is_none()
        {
            let _ = self.blocks.insert_sync(slot, key);
        }
    }

    /// Removes a block, leaving the position unloaded.
    pub fn clear_block(&self, dimension: DimensionId, pos: BlockPos) {
        self.blocks.remove_sync(&(dimension, pos));
    }

    /// Adds a player to the world.
    pub fn add_player(&self, player: Arc<SimPlayer>) {
        let _ = self.players.insert_sync(player.id(), player);
    }

    /// Removes a player, returning them if they were present.
    pub fn remove_player(&self, id: &Uuid) -> Option<Arc<SimPlayer>> {
        self.players.remove_sync(id).map(|(_, player)| player)
    }

    /// The number of players currently in the world.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

impl WorldView for SimWorld {
    fn players_in(&self, dimension: DimensionId) -> Vec<Arc<dyn PlayerView>> {
        let mut players: Vec<Arc<dyn PlayerView>> = Vec::new();
        self.players.iter_sync(|_, player| {
            if player.dimension == dimension {
                players.push(Arc::clone(player) as Arc<dyn PlayerView>);
            }
            true
        });
        players
    }

    fn block_at(&self, dimension: DimensionId, pos: BlockPos) -> Option<ResourceLocation> {
        self.blocks.read_sync(&(dimension, pos), |_, key| key.clone())
    }

    fn teleport(&self, player: &dyn PlayerView, destination: Vector3<f64>) {
        let moved = self
            .players
            .read_sync(&player.id(), |_, rider| rider.set_position(destination));
        if moved.is_none() {
            log::warn!("Dropping teleport for unknown player {}", player.name());
        }
    }
}
