//! A scripted player for the demo world.

use std::sync::atomic::{AtomicBool, Ordering};

use lift_core::dimension::DimensionId;
use lift_core::world::PlayerView;
use lift_utils::math::Vector3;
use parking_lot::Mutex;
use uuid::Uuid;

/// A player whose inputs are set by the host instead of a network
/// connection.
pub struct SimPlayer {
    id: Uuid,
    name: String,
    /// The dimension the player stands in.
    pub dimension: DimensionId,
    position: Mutex<Vector3<f64>>,
    sneaking: AtomicBool,
    jumping: AtomicBool,
}

impl SimPlayer {
    /// Creates a player at the given position with both inputs released.
    #[must_use]
    pub fn new(name: &str, dimension: DimensionId, position: Vector3<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            dimension,
            position: Mutex::new(position),
            sneaking: AtomicBool::new(false),
            jumping: AtomicBool::new(false),
        }
    }

    /// Presses or releases the sneak input.
    pub fn set_sneaking(&self, held: bool) {
        self.sneaking.store(held, Ordering::Relaxed);
    }

    /// Presses or releases the jump input.
    pub fn set_jumping(&self, held: bool) {
        self.jumping.store(held, Ordering::Relaxed);
    }

    /// Moves the player.
    pub fn set_position(&self, position: Vector3<f64>) {
        *self.position.lock() = position;
    }
}

impl PlayerView for SimPlayer {
    fn id(&self) -> Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Vector3<f64> {
        *self.position.lock()
    }

    fn is_sneaking(&self) -> bool {
        self.sneaking.load(Ordering::Relaxed)
    }

    fn is_jumping(&self) -> bool {
        self.jumping.load(Ordering::Relaxed)
    }
}
