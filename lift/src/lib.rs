//! # Lift
//!
//! A self-contained host for the block-elevator mechanic: an in-memory
//! world, scripted players, and a tick loop that drives
//! [`lift_core::elevator::ElevatorSystem`] at a fixed cadence.

use std::sync::Arc;
use std::time::Duration;

use lift_core::config::LiftConfig;
use lift_core::elevator::ElevatorSystem;
use tokio::time::sleep;
use tokio::{select, spawn};
use tokio_util::sync::CancellationToken;

use crate::sim::SimWorld;

/// The demo world and its players.
pub mod sim;

/// The main server struct.
pub struct LiftServer {
    /// The cancellation token for graceful shutdown.
    pub cancel_token: CancellationToken,
    /// The world the elevator runs over.
    pub world: Arc<SimWorld>,
    /// The elevator mechanic.
    pub system: Arc<ElevatorSystem>,
    tick: Duration,
}

impl LiftServer {
    /// Creates a new server around an empty world.
    #[must_use]
    pub fn new(config: LiftConfig) -> Self {
        log::info!("Starting Lift Server");

        let tick = Duration::from_millis(config.tick_interval_ms);

        Self {
            cancel_token: CancellationToken::new(),
            world: Arc::new(SimWorld::new()),
            system: Arc::new(ElevatorSystem::new(config)),
            tick,
        }
    }

    /// Starts the tick loop.
    pub fn start(&self) {
        log::info!("Started Lift Server");

        let world = self.world.clone();
        let system = self.system.clone();
        let cancel_token = self.cancel_token.clone();
        let tick = self.tick;

        spawn(async move {
            loop {
                select! {
                    () = cancel_token.cancelled() => {
                        break;
                    }
                    () = sleep(tick) => {
                        system.tick(world.as_ref());
                    }
                }
            }
        });
    }

    /// Stops the server.
    pub fn stop(&self) {
        self.cancel_token.cancel();
    }
}
