//! In-memory world and player doubles shared by the unit tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use lift_utils::math::Vector3;
use lift_utils::{BlockPos, ResourceLocation};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use uuid::Uuid;

use crate::dimension::DimensionId;
use crate::world::{PlayerView, WorldView};

pub(crate) struct TestPlayer {
    id: Uuid,
    name: String,
    pub dimension: DimensionId,
    pub position: Mutex<Vector3<f64>>,
    sneaking: AtomicBool,
    jumping: AtomicBool,
}

impl TestPlayer {
    pub fn new(name: &str, dimension: DimensionId, position: Vector3<f64>) -> Arc<Self> {
        Arc::new(Self {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            dimension,
            position: Mutex::new(position),
            sneaking: AtomicBool::new(false),
            jumping: AtomicBool::new(false),
        })
    }

    pub fn set_sneaking(&self, held: bool) {
        self.sneaking.store(held, Ordering::Relaxed);
    }

    pub fn set_jumping(&self, held: bool) {
        self.jumping.store(held, Ordering::Relaxed);
    }
}

impl PlayerView for TestPlayer {
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

#[derive(Default)]
pub(crate) struct TestWorld {
    blocks: FxHashMap<(DimensionId, BlockPos), ResourceLocation>,
    players: Vec<Arc<TestPlayer>>,
    teleports: Mutex<Vec<(Uuid, Vector3<f64>)>>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_block(&mut self, dimension: DimensionId, pos: BlockPos, key: ResourceLocation) {
        self.blocks.insert((dimension, pos), key);
    }

    pub fn add_player(&mut self, player: Arc<TestPlayer>) {
        self.players.push(player);
    }

    pub fn teleport_count(&self) -> usize {
        self.teleports.lock().len()
    }

    pub fn last_teleport(&self) -> Option<(Uuid, Vector3<f64>)> {
        self.teleports.lock().last().copied()
    }
}

impl WorldView for TestWorld {
    fn players_in(&self, dimension: DimensionId) -> Vec<Arc<dyn PlayerView>> {
        self.players
            .iter()
            .filter(|player| player.dimension == dimension)
            .map(|player| Arc::clone(player) as Arc<dyn PlayerView>)
            .collect()
    }

    fn block_at(&self, dimension: DimensionId, pos: BlockPos) -> Option<ResourceLocation> {
        self.blocks.get(&(dimension, pos)).cloned()
    }

    fn teleport(&self, player: &dyn PlayerView, destination: Vector3<f64>) {
        self.teleports.lock().push((player.id(), destination));
    }
}
