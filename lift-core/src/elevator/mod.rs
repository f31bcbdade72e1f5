//! The per-tick elevator pass.
//!
//! Each tick walks every configured dimension and every player in it. A
//! player qualifies when the block directly under their feet is one of the
//! configured elevator types. Sneaking (without jumping) rides down to the
//! nearest aligned block of the same type, jumping (without sneaking) rides
//! up, and each direction stays on cooldown until its input is released
//! while the player still stands on an elevator block.

mod dispatch;
mod scan;
mod state;

pub use scan::{ScanDirection, find_aligned_block};
pub use state::{TeleportState, TeleportTracker};

use lift_utils::{BlockPos, ResourceLocation};

use crate::config::LiftConfig;
use crate::dimension::DimensionId;
use crate::world::{PlayerView, WorldView};

/// Drives the elevator mechanic over a host world.
pub struct ElevatorSystem {
    config: LiftConfig,
    tracker: TeleportTracker,
}

impl ElevatorSystem {
    /// Creates a system driven by the given configuration.
    #[must_use]
    pub fn new(config: LiftConfig) -> Self {
        Self {
            config,
            tracker: TeleportTracker::new(),
        }
    }

    /// The per-player cooldown records.
    ///
    /// Hosts call [`TeleportTracker::forget`] here when a player disconnects;
    /// the tick itself never prunes.
    #[must_use]
    pub fn tracker(&self) -> &TeleportTracker {
        &self.tracker
    }

    /// Runs one complete pass over every configured dimension.
    pub fn tick(&self, world: &dyn WorldView) {
        for dimension in &self.config.dimensions {
            for player in world.players_in(*dimension) {
                self.tick_player(world, *dimension, player.as_ref());
            }
        }
    }

    fn tick_player(&self, world: &dyn WorldView, dimension: DimensionId, player: &dyn PlayerView) {
        let feet = BlockPos::containing(player.position());
        let support = world.block_at(dimension, feet.below());

        for target in &self.config.elevator_blocks {
            if support.as_ref() != Some(target) {
                continue;
            }

            let sneaking = player.is_sneaking();
            let jumping = player.is_jumping();
            // Cooldowns only re-arm while the player stands on an elevator
            // block, so stepping off with the input held changes nothing.
            let state = self.tracker.rearm(player.id(), sneaking, jumping);

            if sneaking && !jumping && !state.teleported_down {
                self.ride(world, dimension, player, feet, target, ScanDirection::Down);
            }

            if jumping && !sneaking && !state.teleported_up {
                self.ride(world, dimension, player, feet, target, ScanDirection::Up);
            }
        }
    }

    fn ride(
        &self,
        world: &dyn WorldView,
        dimension: DimensionId,
        player: &dyn PlayerView,
        origin: BlockPos,
        target: &ResourceLocation,
        direction: ScanDirection,
    ) {
        if let Some(block) = find_aligned_block(
            world,
            dimension,
            origin,
            direction,
            target,
            self.config.scan_range,
            self.config.bounds_for(dimension),
        ) {
            dispatch::send_to_block(world, &self.tracker, player, direction, block);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lift_utils::ResourceLocation;
    use lift_utils::math::Vector3;

    use super::*;
    use crate::testing::{TestPlayer, TestWorld};

    const DIAMOND: ResourceLocation = ResourceLocation::vanilla("diamond_block");

    /// A rider at (0.5, 10.0, 0.5) on a diamond support at y 9, with
    /// diamond stops at y 5 and y 14.
    fn shaft(dimension: DimensionId) -> (TestWorld, Arc<TestPlayer>) {
        let mut world = TestWorld::new();
        world.set_block(dimension, BlockPos::new(0, 9, 0), DIAMOND);
        world.set_block(dimension, BlockPos::new(0, 5, 0), DIAMOND);
        world.set_block(dimension, BlockPos::new(0, 14, 0), DIAMOND);
        let player = TestPlayer::new("rider", dimension, Vector3::new(0.5, 10.0, 0.5));
        world.add_player(Arc::clone(&player));
        (world, player)
    }

    #[test]
    fn test_sneak_rides_down_to_nearest_stop() {
        let (world, player) = shaft(DimensionId::Overworld);
        let system = ElevatorSystem::new(LiftConfig::default());

        player.set_sneaking(true);
        system.tick(&world);

        assert_eq!(world.last_teleport(), Some((player_id(&player), Vector3::new(0.5, 6.0, 0.5))));
    }

    #[test]
    fn test_jump_rides_up_to_nearest_stop() {
        let (world, player) = shaft(DimensionId::Overworld);
        let system = ElevatorSystem::new(LiftConfig::default());

        player.set_jumping(true);
        system.tick(&world);

        assert_eq!(world.last_teleport(), Some((player_id(&player), Vector3::new(0.5, 15.0, 0.5))));
    }

    #[test]
    fn test_plain_floor_never_rides() {
        let (mut world, player) = shaft(DimensionId::Overworld);
        world.set_block(
            DimensionId::Overworld,
            BlockPos::new(0, 9, 0),
            ResourceLocation::vanilla("stone"),
        );
        let system = ElevatorSystem::new(LiftConfig::default());

        player.set_sneaking(true);
        system.tick(&world);

        assert_eq!(world.teleport_count(), 0);
    }

    #[test]
    fn test_held_sneak_rides_once() {
        let (world, player) = shaft(DimensionId::Overworld);
        let system = ElevatorSystem::new(LiftConfig::default());

        player.set_sneaking(true);
        system.tick(&world);
        system.tick(&world);
        system.tick(&world);

        assert_eq!(world.teleport_count(), 1);
    }

    #[test]
    fn test_release_re_arms_the_direction() {
        let (world, player) = shaft(DimensionId::Overworld);
        let system = ElevatorSystem::new(LiftConfig::default());

        player.set_sneaking(true);
        system.tick(&world);
        player.set_sneaking(false);
        system.tick(&world);
        player.set_sneaking(true);
        system.tick(&world);

        assert_eq!(world.teleport_count(), 2);
    }

    #[test]
    fn test_both_inputs_ride_neither_way() {
        let (world, player) = shaft(DimensionId::Overworld);
        let system = ElevatorSystem::new(LiftConfig::default());

        player.set_sneaking(true);
        player.set_jumping(true);
        system.tick(&world);

        assert_eq!(world.teleport_count(), 0);
    }

    #[test]
    fn test_cooldowns_are_tracked_per_direction() {
        let (world, player) = shaft(DimensionId::Overworld);
        let system = ElevatorSystem::new(LiftConfig::default());

        player.set_sneaking(true);
        system.tick(&world);
        player.set_sneaking(false);
        player.set_jumping(true);
        system.tick(&world);

        assert_eq!(world.teleport_count(), 2);
        assert_eq!(world.last_teleport(), Some((player_id(&player), Vector3::new(0.5, 15.0, 0.5))));
    }

    #[test]
    fn test_astronomical_position_rides_nowhere() {
        // Hosts may report positions far outside any world.
        let mut world = TestWorld::new();
        let falling =
            TestPlayer::new("falling", DimensionId::Overworld, Vector3::new(0.5, -1.0e300, 0.5));
        world.add_player(Arc::clone(&falling));
        let system = ElevatorSystem::new(LiftConfig::default());

        falling.set_sneaking(true);
        system.tick(&world);

        assert_eq!(world.teleport_count(), 0);
    }

    #[test]
    fn test_unconfigured_dimension_is_skipped() {
        let (world, player) = shaft(DimensionId::Nether);
        let config = LiftConfig {
            dimensions: vec![DimensionId::Overworld],
            ..LiftConfig::default()
        };
        let system = ElevatorSystem::new(config);

        player.set_sneaking(true);
        system.tick(&world);

        assert_eq!(world.teleport_count(), 0);
    }

    #[test]
    fn test_shared_build_limit_caps_the_nether() {
        let mut world = TestWorld::new();
        for dimension in [DimensionId::Overworld, DimensionId::Nether] {
            world.set_block(dimension, BlockPos::new(0, 249, 0), DIAMOND);
            world.set_block(dimension, BlockPos::new(0, 260, 0), DIAMOND);
        }
        let surface =
            TestPlayer::new("surface", DimensionId::Overworld, Vector3::new(0.5, 250.0, 0.5));
        let lava_side =
            TestPlayer::new("lava_side", DimensionId::Nether, Vector3::new(0.5, 250.0, 0.5));
        world.add_player(Arc::clone(&surface));
        world.add_player(Arc::clone(&lava_side));
        let system = ElevatorSystem::new(LiftConfig::default());

        surface.set_jumping(true);
        lava_side.set_jumping(true);
        system.tick(&world);

        assert_eq!(world.teleport_count(), 1);
        assert_eq!(
            world.last_teleport(),
            Some((player_id(&surface), Vector3::new(0.5, 261.0, 0.5)))
        );
    }

    #[test]
    fn test_tracker_forgets_on_request() {
        let (world, player) = shaft(DimensionId::Overworld);
        let system = ElevatorSystem::new(LiftConfig::default());

        player.set_sneaking(true);
        system.tick(&world);
        assert_eq!(system.tracker().tracked_players(), 1);

        system.tracker().forget(&player_id(&player));
        assert_eq!(system.tracker().tracked_players(), 0);
    }

    fn player_id(player: &TestPlayer) -> uuid::Uuid {
        PlayerView::id(player)
    }
}
