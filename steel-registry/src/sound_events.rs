//! Sound events played by buckets.

use steel_utils::Identifier;

/// A sound event key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SoundEvent {
    /// Registry key, e.g. `minecraft:item.bucket.fill`.
    pub key: Identifier,
}

/// A reference to a sound event.
pub type SoundEventRef = &'static SoundEvent;

/// Filling a bucket.
pub static ITEM_BUCKET_FILL: SoundEvent = SoundEvent {
    key: Identifier::vanilla_static("item.bucket.fill"),
};

/// Filling a bucket with lava.
pub static ITEM_BUCKET_FILL_LAVA: SoundEvent = SoundEvent {
    key: Identifier::vanilla_static("item.bucket.fill_lava"),
};

/// Pouring a bucket out.
pub static ITEM_BUCKET_EMPTY: SoundEvent = SoundEvent {
    key: Identifier::vanilla_static("item.bucket.empty"),
};

/// Pouring lava out of a bucket.
pub static ITEM_BUCKET_EMPTY_LAVA: SoundEvent = SoundEvent {
    key: Identifier::vanilla_static("item.bucket.empty_lava"),
};
