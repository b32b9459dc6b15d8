//! # Steel Utils
//!
//! Shared primitives: math, positions and identifiers, logging bootstrap.

pub mod logging;
pub mod math;
/// Positions and identifiers.
pub mod types;

pub use types::{BlockPos, Identifier};
