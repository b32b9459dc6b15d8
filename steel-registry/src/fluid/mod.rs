//! Fluid ids, per-block fluid states and fluid tags.

#[allow(clippy::module_inception)]
mod fluid;
pub mod fluid_tags;
mod registry;
pub mod vanilla;

pub use fluid::*;
pub use registry::*;

use crate::REGISTRY;

/// Checks if a fluid is in the water tag (includes water and `flowing_water`).
#[must_use]
pub fn is_water(fluid: FluidId) -> bool {
    REGISTRY.fluids.is_in_tag(fluid, &fluid_tags::WATER)
}

/// Checks if a fluid is in the lava tag (includes lava and `flowing_lava`).
#[must_use]
pub fn is_lava(fluid: FluidId) -> bool {
    REGISTRY.fluids.is_in_tag(fluid, &fluid_tags::LAVA)
}
