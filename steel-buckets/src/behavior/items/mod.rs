//! Item behavior implementations.

pub mod bucket;

pub use bucket::BucketBehavior;
