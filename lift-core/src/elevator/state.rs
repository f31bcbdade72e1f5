//! Per-player teleport cooldown records.

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use super::scan::ScanDirection;

/// Cooldown flags for one player.
///
/// A flag goes up when a teleport fires in its direction and only comes back
/// down once the triggering input is released, so holding sneak or jump rides
/// the elevator exactly once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeleportState {
    /// A sneak-triggered teleport has fired and sneak is still held.
    pub teleported_down: bool,
    /// A jump-triggered teleport has fired and jump is still held.
    pub teleported_up: bool,
}

/// Cooldown records for every player ever seen, keyed by player id.
///
/// Records are created lazily on first sight and are not removed by the tick
/// path; a host that wants to reclaim the memory of departed players calls
/// [`TeleportTracker::forget`] on disconnect.
#[derive(Debug, Default)]
pub struct TeleportTracker {
    states: Mutex<FxHashMap<Uuid, TeleportState>>,
}

impl TeleportTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-arms released directions and returns the player's current flags.
    ///
    /// Clears `teleported_down` while sneak is not held and `teleported_up`
    /// while jump is not held. This is the only way a flag is ever cleared.
    pub fn rearm(&self, id: Uuid, sneaking: bool, jumping: bool) -> TeleportState {
        let mut states = self.states.lock();
        let state = states.entry(id).or_default();
        if !sneaking {
            state.teleported_down = false;
        }
        if !jumping {
            state.teleported_up = false;
        }
        *state
    }

    /// Records that a teleport fired in the given direction.
    pub fn mark(&self, id: Uuid, direction: ScanDirection) {
        let mut states = self.states.lock();
        let state = states.entry(id).or_default();
        match direction {
            ScanDirection::Down => state.teleported_down = true,
            ScanDirection::Up => state.teleported_up = true,
        }
    }

    /// Drops the record for a player, typically on disconnect.
    pub fn forget(&self, id: &Uuid) {
        self.states.lock().remove(id);
    }

    /// Number of players with a record.
    #[must_use]
    pub fn tracked_players(&self) -> usize {
        self.states.lock().len()
    }
}
