use rustc_hash::{FxHashMap, FxHashSet};
use steel_utils::Identifier;

use super::{FluidEntry, FluidId};
use crate::RegistryExt;

/// Fluids by id and name, plus fluid tags.
pub struct FluidRegistry {
    by_id: FxHashMap<FluidId, FluidEntry>,
    by_name: FxHashMap<&'static str, FluidId>,
    tags: FxHashMap<Identifier, FxHashSet<FluidId>>,
    allows_registering: bool,
}

impl Default for FluidRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FluidRegistry {
    /// Creates an empty, unfrozen registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            by_id: FxHashMap::default(),
            by_name: FxHashMap::default(),
            tags: FxHashMap::default(),
            allows_registering: true,
        }
    }

    /// Registers a fluid.
    ///
    /// # Panics
    /// If the registry is frozen.
    pub fn register(&mut self, entry: FluidEntry) {
        assert!(
            self.allows_registering,
            "Cannot register fluid after registry is frozen"
        );
        self.by_name.insert(entry.name, entry.id);
        self.by_id.insert(entry.id, entry);
    }

    /// Adds fluids to a tag, creating it if needed.
    ///
    /// # Panics
    /// If the registry is frozen.
    pub fn register_tag(&mut self, tag: Identifier, fluids: &[FluidId]) {
        assert!(
            self.allows_registering,
            "Cannot register fluid tag after registry is frozen"
        );
        self.tags.entry(tag).or_default().extend(fluids.iter().copied());
    }

    /// Looks a fluid up by id.
    #[must_use]
    pub fn get(&self, id: FluidId) -> Option<&FluidEntry> {
        self.by_id.get(&id)
    }

    /// Looks a fluid id up by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<FluidId> {
        self.by_name.get(name).copied()
    }

    /// Resolves an identifier such as `minecraft:water` to a fluid id.
    #[must_use]
    pub fn by_key(&self, key: &Identifier) -> Option<FluidId> {
        if key.namespace != Identifier::VANILLA_NAMESPACE {
            return None;
        }
        self.get_by_name(&key.path)
    }

    /// Returns true if `fluid` is in `tag`. Unknown tags contain nothing.
    #[must_use]
    pub fn is_in_tag(&self, fluid: FluidId, tag: &Identifier) -> bool {
        self.tags.get(tag).is_some_and(|fluids| fluids.contains(&fluid))
    }
}

impl RegistryExt for FluidRegistry {
    fn freeze(&mut self) {
        self.allows_registering = false;
    }
}
