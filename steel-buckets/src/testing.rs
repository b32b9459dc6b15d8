//! In-memory world, player and criteria used by the unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};
use steel_registry::blocks::properties::Direction;
use steel_registry::blocks::{BlockConfig, BlockState};
use steel_registry::item_stack::ItemStack;
use steel_registry::items::{BucketVariant, families};
use steel_registry::sound_events::SoundEventRef;
use steel_registry::{FluidId, FluidState, vanilla_blocks};
use steel_utils::math::Vector3;
use steel_utils::{BlockPos, Identifier};
use uuid::Uuid;

use crate::criteria::CriteriaTriggers;
use crate::player::{InteractionHand, Player, Stat};
use crate::world::{BlockHitResult, EntityHitResult, World};

/// A flat map of blocks; everything not set is air.
#[derive(Default)]
pub struct TestWorld {
    client_side: bool,
    blocks: Mutex<FxHashMap<BlockPos, BlockState>>,
    protected: Mutex<FxHashSet<BlockPos>>,
    entity_in_reach: AtomicBool,
    mutation_calls: AtomicUsize,
    sounds: Mutex<Vec<Identifier>>,
    placed_hooks: Mutex<Vec<(BlockPos, FluidId)>>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client's prediction copy.
    pub fn client() -> Self {
        Self {
            client_side: true,
            ..Self::default()
        }
    }

    pub fn set_block(&self, pos: BlockPos, block: &'static BlockConfig) {
        self.set_state(pos, BlockState::default_state(block));
    }

    pub fn set_flowing_water(&self, pos: BlockPos, level: u8) {
        let fluid = FluidState::from_block_level(FluidId::WATER, FluidId::FLOWING_WATER, level);
        self.set_state(
            pos,
            BlockState::default_state(&vanilla_blocks::WATER).with_fluid(fluid),
        );
    }

    fn set_state(&self, pos: BlockPos, state: BlockState) {
        self.blocks.lock().insert(pos, state);
    }

    pub fn protect(&self, pos: BlockPos) {
        self.protected.lock().insert(pos);
    }

    /// Puts an entity just in front of every ray.
    pub fn put_entity_in_reach(&self) {
        self.entity_in_reach.store(true, Ordering::Relaxed);
    }

    /// Number of drain and place requests, successful or not.
    pub fn mutation_calls(&self) -> usize {
        self.mutation_calls.load(Ordering::Relaxed)
    }

    pub fn sounds(&self) -> Vec<Identifier> {
        self.sounds.lock().clone()
    }

    pub fn placed_hooks(&self) -> Vec<(BlockPos, FluidId)> {
        self.placed_hooks.lock().clone()
    }
}

impl World for TestWorld {
    fn is_client_side(&self) -> bool {
        self.client_side
    }

    fn get_block_state(&self, pos: &BlockPos) -> BlockState {
        self.blocks
            .lock()
            .get(pos)
            .copied()
            .unwrap_or_else(|| BlockState::default_state(&vanilla_blocks::AIR))
    }

    fn may_interact(&self, _player: &dyn Player, pos: &BlockPos) -> bool {
        !self.protected.lock().contains(pos)
    }

    fn try_drain_fluid(&self, pos: &BlockPos, state: BlockState) -> FluidId {
        self.mutation_calls.fetch_add(1, Ordering::Relaxed);
        let fluid = state.fluid_state();
        if !fluid.is_source() {
            return FluidId::EMPTY;
        }

        if state.get_block().liquid_container {
            self.set_state(*pos, state.with_fluid(FluidState::EMPTY));
        } else if !state.get_block().liquid.is_empty() {
            self.set_block(*pos, &vanilla_blocks::AIR);
        } else {
            return FluidId::EMPTY;
        }
        fluid.fluid_id
    }

    fn try_place_fluid(
        &self,
        _player: &dyn Player,
        pos: &BlockPos,
        fluid: FluidId,
        _hit: &BlockHitResult,
    ) -> bool {
        self.mutation_calls.fetch_add(1, Ordering::Relaxed);
        let state = self.get_block_state(pos);
        let block = state.get_block();

        // Waterloggable blocks only take water, and only while dry.
        if block.liquid_container
            && fluid == FluidId::WATER
            && state.fluid_state().is_empty()
        {
            self.set_state(*pos, state.with_fluid(FluidState::source(fluid)));
            return true;
        }
        if !block.replaceable {
            return false;
        }
        match vanilla_blocks::liquid_block(fluid) {
            Some(liquid) => {
                self.set_block(*pos, liquid);
                true
            }
            None => false,
        }
    }

    fn on_fluid_placed(&self, pos: &BlockPos, fluid: FluidId) {
        self.placed_hooks.lock().push((*pos, fluid));
    }

    fn play_sound(&self, sound: SoundEventRef, _at: Vector3<f64>, _source: Option<Uuid>) {
        self.sounds.lock().push(sound.key.clone());
    }

    fn clip_entities(&self, start: Vector3<f64>, end: Vector3<f64>) -> Option<EntityHitResult> {
        self.entity_in_reach
            .load(Ordering::Relaxed)
            .then(|| EntityHitResult {
                entity: Uuid::from_u128(2),
                location: start.lerp(&end, 0.01),
            })
    }
}

/// A player standing still, recording everything done to it.
pub struct TestPlayer {
    eye: Vector3<f64>,
    yaw: f32,
    pitch: f32,
    creative: AtomicBool,
    hands: Mutex<FxHashMap<InteractionHand, ItemStack>>,
    denied: Mutex<FxHashSet<BlockPos>>,
    stats: Mutex<Vec<Stat>>,
    received: Mutex<Vec<ItemStack>>,
    broken_hands: Mutex<Vec<InteractionHand>>,
}

impl TestPlayer {
    /// Eyes a little over two blocks above `target`, looking straight down at it.
    pub fn looking_at(target: BlockPos) -> Self {
        Self::at_eye(target.center().add(&Vector3::new(0.0, 2.12, 0.0)), 0.0, 90.0)
    }

    pub fn at_eye(eye: Vector3<f64>, yaw: f32, pitch: f32) -> Self {
        Self {
            eye,
            yaw,
            pitch,
            creative: AtomicBool::new(false),
            hands: Mutex::default(),
            denied: Mutex::default(),
            stats: Mutex::default(),
            received: Mutex::default(),
            broken_hands: Mutex::default(),
        }
    }

    pub fn eye(&self) -> Vector3<f64> {
        self.eye
    }

    pub fn set_creative(&self, creative: bool) {
        self.creative.store(creative, Ordering::Relaxed);
    }

    pub fn hold(&self, hand: InteractionHand, stack: ItemStack) {
        self.hands.lock().insert(hand, stack);
    }

    pub fn deny_building_at(&self, pos: BlockPos) {
        self.denied.lock().insert(pos);
    }

    pub fn stats(&self) -> Vec<Stat> {
        self.stats.lock().clone()
    }

    /// Stacks added to the inventory.
    pub fn received(&self) -> Vec<ItemStack> {
        self.received.lock().clone()
    }

    pub fn broken_hands(&self) -> Vec<InteractionHand> {
        self.broken_hands.lock().clone()
    }
}

impl Player for TestPlayer {
    fn id(&self) -> Uuid {
        Uuid::from_u128(1)
    }

    fn eye_position(&self) -> Vector3<f64> {
        self.eye
    }

    fn rotation(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }

    fn has_infinite_materials(&self) -> bool {
        self.creative.load(Ordering::Relaxed)
    }

    fn may_build_at(&self, pos: &BlockPos, _face: Direction, _stack: &ItemStack) -> bool {
        !self.denied.lock().contains(pos)
    }

    fn item_in_hand(&self, hand: InteractionHand) -> ItemStack {
        self.hands.lock().get(&hand).cloned().unwrap_or_else(|| {
            ItemStack::with_count(BucketVariant::empty(&families::WOODEN), 0)
        })
    }

    fn award_stat(&self, stat: Stat) {
        self.stats.lock().push(stat);
    }

    fn inventory_contains(&self, variant: BucketVariant) -> bool {
        let in_hand = self.hands.lock().values().any(|s| s.variant() == variant);
        in_hand || self.received.lock().iter().any(|s| s.variant() == variant)
    }

    fn add_or_drop(&self, stack: ItemStack) {
        self.received.lock().push(stack);
    }

    fn on_item_broken(&self, hand: InteractionHand) {
        self.broken_hands.lock().push(hand);
    }
}

/// Records every trigger.
#[derive(Default)]
pub struct TestCriteria {
    filled: Mutex<Vec<ItemStack>>,
    placed: Mutex<Vec<(BlockPos, ItemStack)>>,
}

impl TestCriteria {
    pub fn filled(&self) -> Vec<ItemStack> {
        self.filled.lock().clone()
    }

    pub fn placed(&self) -> Vec<(BlockPos, ItemStack)> {
        self.placed.lock().clone()
    }
}

impl CriteriaTriggers for TestCriteria {
    fn filled_bucket(&self, _player: &dyn Player, stack: &ItemStack) {
        self.filled.lock().push(stack.clone());
    }

    fn placed_block(&self, _player: &dyn Player, pos: BlockPos, stack: &ItemStack) {
        self.placed.lock().push((pos, stack.clone()));
    }
}
