//! The vanilla blocks the bucket logic cares about.

use steel_utils::Identifier;

use crate::blocks::BlockConfig;
use crate::fluid::FluidId;

/// Air.
pub static AIR: BlockConfig = BlockConfig::air(Identifier::vanilla_static("air"));

/// Stone.
pub static STONE: BlockConfig = BlockConfig::solid(Identifier::vanilla_static("stone"));

/// Glass.
pub static GLASS: BlockConfig = BlockConfig::solid(Identifier::vanilla_static("glass"));

/// Short grass, replaced by anything placed into it.
pub static SHORT_GRASS: BlockConfig =
    BlockConfig::solid(Identifier::vanilla_static("short_grass")).replaceable();

/// An oak slab, which can be waterlogged.
pub static OAK_SLAB: BlockConfig =
    BlockConfig::solid(Identifier::vanilla_static("oak_slab")).waterloggable();

/// Water.
pub static WATER: BlockConfig =
    BlockConfig::liquid(Identifier::vanilla_static("water"), FluidId::WATER);

/// Lava.
pub static LAVA: BlockConfig =
    BlockConfig::liquid(Identifier::vanilla_static("lava"), FluidId::LAVA);

/// Returns the liquid block for a still fluid, if there is one.
#[must_use]
pub fn liquid_block(fluid: FluidId) -> Option<&'static BlockConfig> {
    match fluid {
        FluidId::WATER => Some(&WATER),
        FluidId::LAVA => Some(&LAVA),
        _ => None,
    }
}
