//! Bucket items and their stack-level data.

pub mod bucket;
pub mod enchantments;
pub mod families;

pub use bucket::{BucketFamily, BucketFamilyRef, BucketVariant};
pub use enchantments::ItemEnchantments;
