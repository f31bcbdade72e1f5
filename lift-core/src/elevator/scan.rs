//! Bounded vertical search for the nearest matching block.

use lift_utils::{BlockPos, ResourceLocation};

use crate::dimension::{DimensionId, VerticalBounds};
use crate::world::WorldView;

/// Which way a scan travels from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Toward the floor.
    Down,
    /// Toward the build limit.
    Up,
}

impl ScanDirection {
    /// Lowercase label for log lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
        }
    }
}

/// Finds the nearest block of the target type vertically aligned with `origin`.
///
/// Probes move away from the origin one block at a time, so the first match is
/// the nearest. The downward scan starts two below the origin because the
/// block directly underneath is the one the rider is standing on, which the
/// caller has already matched; the upward scan starts one above.
///
/// Returns `None` once the scan reaches `bounds` or exhausts `range` without
/// a match. Unloaded positions are skipped, never treated as errors.
#[must_use]
pub fn find_aligned_block(
    world: &dyn WorldView,
    dimension: DimensionId,
    origin: BlockPos,
    direction: ScanDirection,
    target: &ResourceLocation,
    range: u32,
    bounds: VerticalBounds,
) -> Option<BlockPos> {
    let range = i32::try_from(range).unwrap_or(i32::MAX);
    let first_step = match direction {
        ScanDirection::Down => 2,
        ScanDirection::Up => 1,
    };

    for step in first_step..=range {
        // Saturation at the i32 edges falls into the out-of-world stop.
        let check_y = match direction {
            ScanDirection::Down => origin.y().saturating_sub(step),
            ScanDirection::Up => origin.y().saturating_add(step),
        };

        let out_of_world = match direction {
            ScanDirection::Down => check_y <= bounds.floor,
            ScanDirection::Up => check_y >= bounds.build_limit,
        };
        if out_of_world {
            return None;
        }

        let probe = origin.with_y(check_y);
        if world
            .block_at(dimension, probe)
            .is_some_and(|key| key == *target)
        {
            return Some(probe);
        }
    }

    None
}
