//! Fluid tags the bucket logic reads.

use steel_utils::Identifier;

/// `#minecraft:water`
pub const WATER: Identifier = Identifier::vanilla_static("water");

/// `#minecraft:lava`. Scalding fluids: pouring them costs more durability and they use the
/// lava bucket sounds.
pub const LAVA: Identifier = Identifier::vanilla_static("lava");
