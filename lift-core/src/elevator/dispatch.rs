//! Turning a matched block into a landing spot and moving the rider there.

use lift_utils::BlockPos;
use lift_utils::math::Vector3;

use super::scan::ScanDirection;
use super::state::TeleportTracker;
use crate::world::{PlayerView, WorldView};

/// Where a rider lands on a block: horizontally centered, standing on top.
pub(super) fn landing_position(block: BlockPos) -> Vector3<f64> {
    Vector3::new(
        f64::from(block.x()) + 0.5,
        f64::from(block.y() + 1),
        f64::from(block.z()) + 0.5,
    )
}

/// Teleports `player` onto `block` and raises the direction's cooldown flag.
///
/// The flag is raised in the same pass so a held input cannot fire again
/// next tick.
pub(super) fn send_to_block(
    world: &dyn WorldView,
    tracker: &TeleportTracker,
    player: &dyn PlayerView,
    direction: ScanDirection,
    block: BlockPos,
) {
    let destination = landing_position(block);
    world.teleport(player, destination);
    tracker.mark(player.id(), direction);
    log::info!(
        "{} rode the elevator {} to {destination}",
        player.name(),
        direction.label()
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::dimension::DimensionId;
    use crate::testing::{TestPlayer, TestWorld};

    #[test]
    fn test_landing_is_centered_on_top() {
        assert_eq!(landing_position(BlockPos::new(0, 5, 0)), Vector3::new(0.5, 6.0, 0.5));
    }

    #[test]
    fn test_landing_with_negative_coordinates() {
        assert_eq!(
            landing_position(BlockPos::new(-3, 9, -7)),
            Vector3::new(-2.5, 10.0, -6.5)
        );
    }

    #[test]
    fn test_send_teleports_and_raises_flag() {
        let mut world = TestWorld::new();
        let player = TestPlayer::new("rider", DimensionId::Overworld, Vector3::new(0.5, 10.0, 0.5));
        world.add_player(Arc::clone(&player));

        let tracker = TeleportTracker::new();
        send_to_block(
            &world,
            &tracker,
            player.as_ref(),
            ScanDirection::Down,
            BlockPos::new(0, 5, 0),
        );

        assert_eq!(world.last_teleport(), Some((player.id(), Vector3::new(0.5, 6.0, 0.5))));
        let state = tracker.rearm(player.id(), true, false);
        assert!(state.teleported_down);
        assert!(!state.teleported_up);
    }
}
