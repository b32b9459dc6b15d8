//! Bucket families and variants.
//!
//! Every bucket item belongs to a [`BucketFamily`]: the empty bucket plus one filled item
//! per fluid the material can carry. A [`BucketVariant`] is one item of a family,
//! identified by the fluid it holds. All per-fluid behaviour (counterparts, durability
//! cost, sounds) is read from the family table rather than from separate item types.

use std::fmt;
use std::ptr;

use steel_utils::Identifier;

use crate::fluid::{FluidId, is_lava};
use crate::sound_events::{self, SoundEventRef};

/// A material line of buckets sharing durability and repair ingredient.
#[derive(Debug)]
pub struct BucketFamily {
    /// Family key, used in logs.
    pub key: Identifier,
    /// Item key of the empty bucket.
    pub empty: Identifier,
    /// Item keys of the filled buckets, by the still fluid they hold.
    pub filled: &'static [(FluidId, Identifier)],
    /// Durability; 0 means the bucket never wears out.
    pub max_damage: i32,
    /// Durability cost of pouring a scalding (lava tagged) fluid.
    pub scalding_damage: i32,
    /// Durability cost of pouring any other fluid.
    pub pour_damage: i32,
    /// Anvil repair ingredient for the empty bucket.
    pub repair_ingredient: Option<Identifier>,
}

/// A reference to a bucket family.
pub type BucketFamilyRef = &'static BucketFamily;

/// One bucket item: a family and the fluid it holds.
///
/// Only constructible through [`BucketVariant::empty`] and [`BucketVariant::filled`], so a
/// variant holds a fluid exactly when its family has a filled item for it.
#[derive(Clone, Copy)]
pub struct BucketVariant {
    family: BucketFamilyRef,
    fluid: FluidId,
}

impl BucketVariant {
    /// The empty bucket of `family`.
    #[must_use]
    pub const fn empty(family: BucketFamilyRef) -> Self {
        Self {
            family,
            fluid: FluidId::EMPTY,
        }
    }

    /// The bucket of `family` holding `fluid`, or `None` if the family has no such item.
    #[must_use]
    pub fn filled(family: BucketFamilyRef, fluid: FluidId) -> Option<Self> {
        if fluid.is_empty() {
            return None;
        }
        family
            .filled
            .iter()
            .any(|(id, _)| *id == fluid)
            .then_some(Self { family, fluid })
    }

    /// The family this bucket belongs to.
    #[must_use]
    pub const fn family(&self) -> BucketFamilyRef {
        self.family
    }

    /// The carried fluid, [`FluidId::EMPTY`] for the empty bucket.
    #[must_use]
    pub const fn fluid(&self) -> FluidId {
        self.fluid
    }

    /// Returns true for the empty bucket.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fluid.is_empty()
    }

    /// The item key of this variant.
    #[must_use]
    pub fn item_key(&self) -> &'static Identifier {
        let family = self.family;
        if self.is_empty() {
            return &family.empty;
        }
        family
            .filled
            .iter()
            .find(|(id, _)| *id == self.fluid)
            .map_or(&family.empty, |(_, key)| key)
    }

    /// The bucket left behind after pouring this one out.
    #[must_use]
    pub const fn empty_counterpart(&self) -> Self {
        Self::empty(self.family)
    }

    /// The bucket produced by scooping up `fluid`, or `None` if this family cannot hold it.
    #[must_use]
    pub fn filled_counterpart(&self, fluid: FluidId) -> Option<Self> {
        Self::filled(self.family, fluid)
    }

    /// Durability cost of pouring `fluid` out of a bucket of this family.
    #[must_use]
    pub fn damage_for_fluid(&self, fluid: FluidId) -> i32 {
        if fluid.is_empty() {
            0
        } else if is_lava(fluid) {
            self.family.scalding_damage
        } else {
            self.family.pour_damage
        }
    }

    /// Sound played when `fluid` is scooped into a bucket.
    #[must_use]
    pub fn fill_sound(fluid: FluidId) -> SoundEventRef {
        if is_lava(fluid) {
            &sound_events::ITEM_BUCKET_FILL_LAVA
        } else {
            &sound_events::ITEM_BUCKET_FILL
        }
    }

    /// Sound played when this bucket's fluid is poured out.
    #[must_use]
    pub fn empty_sound(&self) -> SoundEventRef {
        if is_lava(self.fluid) {
            &sound_events::ITEM_BUCKET_EMPTY_LAVA
        } else {
            &sound_events::ITEM_BUCKET_EMPTY
        }
    }
}

impl PartialEq for BucketVariant {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.family, other.family) && self.fluid == other.fluid
    }
}

impl Eq for BucketVariant {}

impl fmt::Debug for BucketVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BucketVariant({})", self.item_key())
    }
}

impl fmt::Display for BucketVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.item_key(), f)
    }
}
