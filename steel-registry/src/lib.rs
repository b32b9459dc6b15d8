//! # Steel Registry
//!
//! Static game data for buckets: fluids and fluid tags, the blocks buckets interact with,
//! bucket families and the item stacks that carry them.

use std::sync::LazyLock;

pub mod blocks;
pub mod fluid;
pub mod item_stack;
pub mod items;
pub mod sound_events;
pub mod vanilla_blocks;

pub use fluid::{FluidId, FluidState, fluid_tags};

use crate::fluid::FluidRegistry;

/// Registries that stop accepting entries once loading is done.
pub trait RegistryExt {
    /// Rejects any further registration.
    fn freeze(&mut self);
}

/// Every runtime registry.
pub struct Registry {
    /// Fluids and fluid tags.
    pub fluids: FluidRegistry,
}

impl Registry {
    /// Builds and freezes the vanilla registries.
    #[must_use]
    pub fn new_vanilla() -> Self {
        let mut fluids = FluidRegistry::new();
        fluid::vanilla::register_fluids(&mut fluids);
        fluids.freeze();

        log::debug!("Fluid registry frozen");
        Self { fluids }
    }
}

/// The global registry.
pub static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new_vanilla);
