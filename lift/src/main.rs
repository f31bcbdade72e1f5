//! Runs a demo world with one rider looping up and down a diamond shaft.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use lift::LiftServer;
use lift::sim::SimPlayer;
use lift_core::config::LIFT_CONFIG;
use lift_core::dimension::DimensionId;
use lift_utils::math::Vector3;
use lift_utils::{BlockPos, ResourceLocation};
use tokio::runtime::{Builder, Runtime};
use tokio::signal;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

static RUNTIME: LazyLock<Runtime> = LazyLock::new(|| {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build tokio runtime")
});

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    RUNTIME.block_on(async {
        let server = LiftServer::new(LIFT_CONFIG.clone());
        build_shaft(&server);

        let rider = Arc::new(SimPlayer::new(
            "steve",
            DimensionId::Overworld,
            Vector3::new(0.5, 10.0, 0.5),
        ));
        server.world.add_player(Arc::clone(&rider));

        server.start();
        RUNTIME.spawn(ride_forever(rider, server.cancel_token.clone()));

        signal::ctrl_c().await?;
        log::info!("Shutting down");
        server.stop();

        Ok(())
    })
}

/// A diamond shaft at the origin with stops at y 9, 5, and 2.
fn build_shaft(server: &LiftServer) {
    let diamond = ResourceLocation::vanilla("diamond_block");
    for y in [9, 5, 2] {
        server
            .world
            .set_block(DimensionId::Overworld, BlockPos::new(0, y, 0), diamond.clone());
    }
}

/// Holds sneak twice and jump twice in a loop, riding the shaft down to
/// its lowest stop and back up to the top.
async fn ride_forever(rider: Arc<SimPlayer>, cancel_token: CancellationToken) {
    // Long enough for several ticks at the default cadence.
    let hold = Duration::from_millis(250);

    loop {
        for sneak in [true, true, false, false] {
            if cancel_token.is_cancelled() {
                return;
            }

            if sneak {
                rider.set_sneaking(true);
            } else {
                rider.set_jumping(true);
            }
            sleep(hold).await;

            rider.set_sneaking(false);
            rider.set_jumping(false);
            sleep(hold).await;
        }
    }
}
