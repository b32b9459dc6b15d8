//! Bucket tunables, loaded from a JSON5 file.

use std::{fs, path::Path};

use serde::Deserialize;
use steel_registry::{FluidId, REGISTRY};
use steel_utils::Identifier;

use crate::error::ConfigError;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/bucket_config.json5");

/// Tunables for bucket interactions.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BucketConfig {
    /// How far the targeting ray reaches, in blocks.
    pub interaction_range: f64,
    /// Fluids that merge into a waterloggable block instead of being placed next to it.
    pub mergeable_fluids: Vec<Identifier>,
    /// Whether creative players still award statistics and trigger criteria.
    pub track_privileged_usage: bool,
}

impl BucketConfig {
    /// Reads the config at `path`, writing the bundled default first if it is missing.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config_str = fs::read_to_string(path)?;
            let config = Self::from_json5_str(&config_str)?;
            log::info!("Loaded bucket config from {}", path.display());
            return Ok(config);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        log::info!("Wrote default bucket config to {}", path.display());
        Self::from_json5_str(DEFAULT_CONFIG)
    }

    /// Parses and validates a JSON5 document. Missing keys take their defaults.
    pub fn from_json5_str(config_str: &str) -> Result<Self, ConfigError> {
        let config: BucketConfig = serde_json5::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges and that every mergeable fluid is a registered still fluid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.interaction_range > 0.0 && self.interaction_range <= 64.0) {
            return Err(ConfigError::Invalid(
                "Interaction range must be in range (0, 64]".to_string(),
            ));
        }
        for key in &self.mergeable_fluids {
            match REGISTRY.fluids.by_key(key) {
                Some(FluidId::WATER | FluidId::LAVA) => {}
                Some(_) => {
                    return Err(ConfigError::Invalid(format!(
                        "Mergeable fluid {key} is not a still fluid"
                    )));
                }
                None => {
                    return Err(ConfigError::Invalid(format!("Unknown fluid {key}")));
                }
            }
        }
        Ok(())
    }

    /// Whether `fluid` is poured into a waterloggable target rather than beside it.
    #[must_use]
    pub fn is_mergeable(&self, fluid: FluidId) -> bool {
        !fluid.is_empty()
            && self
                .mergeable_fluids
                .iter()
                .any(|key| REGISTRY.fluids.by_key(key) == Some(fluid))
    }
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self {
            interaction_range: 5.0,
            mergeable_fluids: vec![Identifier::vanilla_static("water")],
            track_privileged_usage: false,
        }
    }
}
