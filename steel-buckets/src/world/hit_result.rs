//! Raycast results.

use steel_registry::blocks::properties::Direction;
use steel_utils::BlockPos;
use steel_utils::math::Vector3;
use uuid::Uuid;

/// Which fluids a ray may stop on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluidHandling {
    /// Fluids are transparent.
    None,
    /// Only full source blocks stop the ray.
    SourceOnly,
    /// Any fluid stops the ray.
    Any,
}

/// A ray striking a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockHitResult {
    /// The struck block.
    pub block_pos: BlockPos,
    /// The face the ray entered through.
    pub direction: Direction,
    /// Where the ray met the block.
    pub location: Vector3<f64>,
    /// The ray started inside the block.
    pub inside: bool,
}

/// A ray striking an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityHitResult {
    /// The struck entity.
    pub entity: Uuid,
    /// Where the ray met the entity.
    pub location: Vector3<f64>,
}

/// The outcome of a raycast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitResult {
    /// Nothing in range; `location` is the end of the ray.
    Miss {
        /// End of the ray.
        location: Vector3<f64>,
    },
    /// A block.
    Block(BlockHitResult),
    /// An entity.
    Entity(EntityHitResult),
}

impl HitResult {
    /// Where the ray stopped.
    #[must_use]
    pub const fn location(&self) -> Vector3<f64> {
        match self {
            Self::Miss { location } => *location,
            Self::Block(hit) => hit.location,
            Self::Entity(hit) => hit.location,
        }
    }
}
