//! Item stacks of bucket items.

use rand::Rng;

use crate::items::enchantments::{self, ItemEnchantments};
use crate::items::{BucketFamilyRef, BucketVariant};

/// A stack of bucket items with durability and modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    variant: BucketVariant,
    count: i32,
    damage: i32,
    enchantments: ItemEnchantments,
    repair_cost: i32,
}

impl ItemStack {
    /// A single, undamaged item.
    #[must_use]
    pub fn new(variant: BucketVariant) -> Self {
        Self::with_count(variant, 1)
    }

    /// An undamaged stack of `count` items.
    #[must_use]
    pub fn with_count(variant: BucketVariant, count: i32) -> Self {
        Self {
            variant,
            count,
            damage: 0,
            enchantments: ItemEnchantments::default(),
            repair_cost: 0,
        }
    }

    /// The bucket variant.
    #[must_use]
    pub const fn variant(&self) -> BucketVariant {
        self.variant
    }

    /// The family of the bucket variant.
    #[must_use]
    pub const fn family(&self) -> BucketFamilyRef {
        self.variant.family()
    }

    /// Number of items.
    #[must_use]
    pub const fn count(&self) -> i32 {
        self.count
    }

    /// An empty stack is air, whatever its variant says.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count <= 0
    }

    /// Removes `amount` items.
    pub fn shrink(&mut self, amount: i32) {
        self.count = (self.count - amount).max(0);
    }

    /// Takes up to `amount` items off this stack into a new one with the same damage and
    /// modifiers.
    #[must_use]
    pub fn split(&mut self, amount: i32) -> ItemStack {
        let taken = amount.clamp(0, self.count);
        let mut split = self.clone();
        split.count = taken;
        self.shrink(taken);
        split
    }

    /// Durability lost so far.
    #[must_use]
    pub const fn damage(&self) -> i32 {
        self.damage
    }

    /// Sets the damage, clamped to `0..=max_damage`.
    pub fn set_damage(&mut self, damage: i32) {
        self.damage = damage.clamp(0, self.max_damage());
    }

    /// Durability of the item.
    #[must_use]
    pub const fn max_damage(&self) -> i32 {
        self.family().max_damage
    }

    /// Returns true if the item wears out.
    #[must_use]
    pub const fn is_damageable_item(&self) -> bool {
        self.max_damage() > 0
    }

    /// The enchantments on this stack.
    #[must_use]
    pub const fn enchantments(&self) -> &ItemEnchantments {
        &self.enchantments
    }

    /// Mutable access to the enchantments.
    pub fn enchantments_mut(&mut self) -> &mut ItemEnchantments {
        &mut self.enchantments
    }

    /// Experience cost added to the next anvil operation.
    #[must_use]
    pub const fn repair_cost(&self) -> i32 {
        self.repair_cost
    }

    /// Sets the anvil repair cost.
    pub fn set_repair_cost(&mut self, repair_cost: i32) {
        self.repair_cost = repair_cost;
    }

    /// Copies enchantments and repair cost from `source`, replacing this stack's own.
    pub fn copy_modifiers_from(&mut self, source: &ItemStack) {
        self.enchantments = source.enchantments.clone();
        self.repair_cost = source.repair_cost;
    }

    /// Applies `amount` points of durability damage.
    ///
    /// Each point may be negated by Unbreaking. Returns true if the item broke, in which
    /// case one item was removed and the damage reset.
    pub fn hurt_and_break<R: Rng + ?Sized>(&mut self, amount: i32, rng: &mut R) -> bool {
        if !self.is_damageable_item() || amount <= 0 {
            return false;
        }

        let unbreaking = i32::from(self.enchantments.level(&enchantments::UNBREAKING));
        let mut taken = 0;
        for _ in 0..amount {
            if unbreaking > 0 && rng.random_range(0..=unbreaking) > 0 {
                continue;
            }
            taken += 1;
        }
        if taken == 0 {
            return false;
        }

        self.damage += taken;
        if self.damage >= self.max_damage() {
            self.shrink(1);
            self.damage = 0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::fluid::FluidId;
    use crate::items::families;

    fn ceramic_lava() -> ItemStack {
        ItemStack::new(BucketVariant::filled(&families::CERAMIC, FluidId::LAVA).expect("lava"))
    }

    #[test]
    fn test_hurt_accumulates_damage() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut stack = ceramic_lava();
        assert!(!stack.hurt_and_break(2, &mut rng));
        assert!(!stack.hurt_and_break(1, &mut rng));
        assert_eq!(stack.damage(), 3);
        assert_eq!(stack.count(), 1);
    }

    #[test]
    fn test_hurt_breaks_at_max_damage() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut stack = ceramic_lava();
        stack.set_damage(stack.max_damage() - 1);
        assert!(stack.hurt_and_break(2, &mut rng));
        assert!(stack.is_empty());
        assert_eq!(stack.damage(), 0);
    }

    #[test]
    fn test_unbreaking_never_adds_damage() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut stack = ceramic_lava();
        stack.enchantments_mut().set(enchantments::UNBREAKING, 3);
        for _ in 0..20 {
            stack.hurt_and_break(1, &mut rng);
        }
        assert!(stack.damage() <= 20);
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_split_keeps_damage_and_modifiers() {
        let mut stack = ItemStack::with_count(BucketVariant::empty(&families::CERAMIC), 3);
        stack.set_damage(5);
        stack.enchantments_mut().set(enchantments::UNBREAKING, 1);

        let one = stack.split(1);
        assert_eq!(one.count(), 1);
        assert_eq!(one.damage(), 5);
        assert_eq!(one.enchantments().level(&enchantments::UNBREAKING), 1);
        assert_eq!(stack.count(), 2);

        let rest = stack.split(10);
        assert_eq!(rest.count(), 2);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_copy_modifiers_replaces_existing() {
        let mut source = ceramic_lava();
        source.enchantments_mut().set(enchantments::MENDING, 1);
        source.set_repair_cost(3);

        let mut target = ItemStack::new(source.variant().empty_counterpart());
        target.enchantments_mut().set(enchantments::UNBREAKING, 2);
        target.copy_modifiers_from(&source);

        assert_eq!(target.enchantments(), source.enchantments());
        assert_eq!(target.enchantments().level(&enchantments::UNBREAKING), 0);
        assert_eq!(target.repair_cost(), 3);
    }
}
