//! Error types for bucket interactions and configuration.

use steel_utils::BlockPos;

use crate::behavior::context::InteractionResult;

/// Why a bucket use did not go through.
///
/// Every variant is an expected outcome; none of them leaves the world or the held stack
/// changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InteractionError {
    /// The ray reached its end without striking anything.
    #[error("nothing within reach")]
    Miss,
    /// The ray struck something that is not a block.
    #[error("target is not a block")]
    NotApplicable,
    /// The player may not modify the struck block or build next to it.
    #[error("not allowed to modify {0}")]
    PermissionDenied(BlockPos),
    /// The struck block holds no fluid this bucket can carry.
    #[error("cannot drain {0} into this bucket")]
    UnsupportedExtraction(BlockPos),
    /// The world refused to put the fluid down.
    #[error("fluid placement rejected at {0}")]
    PlacementRejected(BlockPos),
}

impl InteractionError {
    /// Misses pass the interaction on; everything else is an active failure.
    #[must_use]
    pub const fn result(self) -> InteractionResult {
        match self {
            Self::Miss | Self::NotApplicable => InteractionResult::Pass,
            Self::PermissionDenied(_)
            | Self::UnsupportedExtraction(_)
            | Self::PlacementRejected(_) => InteractionResult::Fail,
        }
    }
}

/// Errors loading [`crate::config::BucketConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading or writing the file failed.
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid JSON5 or has unknown keys.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}
