//! The registered bucket families.

use steel_utils::Identifier;

use super::bucket::{BucketFamily, BucketFamilyRef, BucketVariant};
use crate::fluid::FluidId;

/// Wooden buckets. Cheap, short lived, and they can't hold lava.
pub static WOODEN: BucketFamily = BucketFamily {
    key: Identifier::new_static("steel", "wooden"),
    empty: Identifier::new_static("steel", "wooden_bucket"),
    filled: &[(
        FluidId::WATER,
        Identifier::new_static("steel", "wooden_water_bucket"),
    )],
    max_damage: 32,
    scalding_damage: 2,
    pour_damage: 1,
    repair_ingredient: Some(Identifier::vanilla_static("oak_planks")),
};

/// Fired clay buckets. Hold both water and lava.
pub static CERAMIC: BucketFamily = BucketFamily {
    key: Identifier::new_static("steel", "ceramic"),
    empty: Identifier::new_static("steel", "ceramic_bucket"),
    filled: &[
        (
            FluidId::WATER,
            Identifier::new_static("steel", "ceramic_water_bucket"),
        ),
        (
            FluidId::LAVA,
            Identifier::new_static("steel", "ceramic_lava_bucket"),
        ),
    ],
    max_damage: 128,
    scalding_damage: 2,
    pour_damage: 1,
    repair_ingredient: Some(Identifier::vanilla_static("brick")),
};

/// Every family, in registration order.
pub static ALL: [BucketFamilyRef; 2] = [&WOODEN, &CERAMIC];

/// Finds the variant registered under `key`.
#[must_use]
pub fn variant_by_key(key: &Identifier) -> Option<BucketVariant> {
    ALL.iter().copied().find_map(|family| {
        if family.empty == *key {
            return Some(BucketVariant::empty(family));
        }
        family
            .filled
            .iter()
            .find(|(_, filled)| filled == key)
            .and_then(|(fluid, _)| BucketVariant::filled(family, *fluid))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_by_key_round_trips_item_keys() {
        for family in ALL {
            let empty = BucketVariant::empty(family);
            assert_eq!(variant_by_key(empty.item_key()), Some(empty));
            for (fluid, _) in family.filled {
                let variant = BucketVariant::filled(family, *fluid).expect("registered fluid");
                assert_eq!(variant_by_key(variant.item_key()), Some(variant));
            }
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(variant_by_key(&Identifier::vanilla_static("bucket")), None);
    }
}
