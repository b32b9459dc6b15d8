//! Block configuration and block states.

pub mod properties;

use steel_utils::Identifier;

use crate::fluid::{FluidId, FluidState};

/// Static per-block configuration.
#[derive(Debug, PartialEq)]
pub struct BlockConfig {
    /// Registry key.
    pub key: Identifier,
    /// Air blocks are skipped by every ray.
    pub is_air: bool,
    /// Placing a block or fluid here overwrites it.
    pub replaceable: bool,
    /// Whether the block has an outline shape, which is what rays stop on.
    pub has_outline: bool,
    /// The still fluid this block is made of, [`FluidId::EMPTY`] for non-liquid blocks.
    pub liquid: FluidId,
    /// The block's fluid can be scooped up with a bucket.
    pub bucket_pickup: bool,
    /// The block can hold fluid without being replaced (waterloggable).
    pub liquid_container: bool,
}

impl BlockConfig {
    /// A plain solid block with an outline and no fluid behaviour.
    #[must_use]
    pub const fn solid(key: Identifier) -> Self {
        Self {
            key,
            is_air: false,
            replaceable: false,
            has_outline: true,
            liquid: FluidId::EMPTY,
            bucket_pickup: false,
            liquid_container: false,
        }
    }

    /// An air block.
    #[must_use]
    pub const fn air(key: Identifier) -> Self {
        let mut config = Self::solid(key);
        config.is_air = true;
        config.replaceable = true;
        config.has_outline = false;
        config
    }

    /// A liquid block made of the still fluid `liquid`.
    #[must_use]
    pub const fn liquid(key: Identifier, liquid: FluidId) -> Self {
        let mut config = Self::solid(key);
        config.replaceable = true;
        config.has_outline = false;
        config.liquid = liquid;
        config.bucket_pickup = true;
        config
    }

    /// Marks the block as replaceable.
    #[must_use]
    pub const fn replaceable(mut self) -> Self {
        self.replaceable = true;
        self
    }

    /// Marks the block as waterloggable: it holds fluid and gives it back to buckets.
    #[must_use]
    pub const fn waterloggable(mut self) -> Self {
        self.liquid_container = true;
        self.bucket_pickup = true;
        self
    }
}

/// A reference to a registered block.
pub type BlockRef = &'static BlockConfig;

/// A block together with the fluid it currently holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockState {
    block: BlockRef,
    fluid: FluidState,
}

impl BlockState {
    /// The default state of `block`: liquids are full sources, everything else is dry.
    #[must_use]
    pub fn default_state(block: BlockRef) -> Self {
        let fluid = if block.liquid.is_empty() {
            FluidState::EMPTY
        } else {
            FluidState::source(block.liquid)
        };
        Self { block, fluid }
    }

    /// Returns this state holding `fluid` instead.
    #[must_use]
    pub const fn with_fluid(self, fluid: FluidState) -> Self {
        Self {
            block: self.block,
            fluid,
        }
    }

    /// The block.
    #[must_use]
    pub const fn get_block(&self) -> BlockRef {
        self.block
    }

    /// The fluid held by the block.
    #[must_use]
    pub const fn fluid_state(&self) -> FluidState {
        self.fluid
    }

    /// Returns true for air.
    #[must_use]
    pub const fn is_air(&self) -> bool {
        self.block.is_air
    }
}
