//! The vanilla fluids and fluid tags.

use super::{FluidEntry, FluidId, FluidRegistry, fluid_tags};

/// Registers the vanilla fluids and their tags.
pub fn register_fluids(registry: &mut FluidRegistry) {
    registry.register(FluidEntry {
        id: FluidId::EMPTY,
        name: "empty",
    });
    registry.register(FluidEntry {
        id: FluidId::FLOWING_WATER,
        name: "flowing_water",
    });
    registry.register(FluidEntry {
        id: FluidId::WATER,
        name: "water",
    });
    registry.register(FluidEntry {
        id: FluidId::FLOWING_LAVA,
        name: "flowing_lava",
    });
    registry.register(FluidEntry {
        id: FluidId::LAVA,
        name: "lava",
    });

    registry.register_tag(fluid_tags::WATER, &[FluidId::WATER, FluidId::FLOWING_WATER]);
    registry.register_tag(fluid_tags::LAVA, &[FluidId::LAVA, FluidId::FLOWING_LAVA]);
}
