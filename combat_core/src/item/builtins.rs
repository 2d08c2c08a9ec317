//! Weapon and armor curves with built-in affixes

use super::{ArtifactAttribute, ArtifactAttributeType, ItemRecord};

/// Growth of weapon damage per level
const WEAPON_LEVEL_GROWTH: f64 = 1.05;
const WEAPON_DAMAGE_PER_LEVEL: f64 = 8.0;

/// Percent affixes below 1 are "+X%", at or above 1 they are the multiplier
///
/// 0.2 → ×1.2, 1.2 → ×1.2, 0 → ×1
pub fn percent_multiplier(bonus: f64) -> f64 {
    if bonus == 0.0 || !bonus.is_finite() {
        1.0
    } else if bonus >= 1.0 {
        bonus
    } else {
        1.0 + bonus
    }
}

/// Flat and percent built-ins of one item for one concern
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BuiltInBonus {
    pub flat: f64,
    pub percent: f64,
}

impl BuiltInBonus {
    fn collect(built_ins: &[ArtifactAttribute], flat: ArtifactAttributeType, percent: ArtifactAttributeType) -> Self {
        let sum = |kind: ArtifactAttributeType| {
            built_ins
                .iter()
                .filter(|a| a.attribute_type == kind && a.magnitude.is_finite())
                .map(|a| a.magnitude)
                .sum::<f64>()
        };
        BuiltInBonus {
            flat: sum(flat),
            percent: sum(percent),
        }
    }

    pub fn damage(built_ins: &[ArtifactAttribute]) -> Self {
        Self::collect(built_ins, ArtifactAttributeType::ItemFlatDamage, ArtifactAttributeType::ItemBonusDamage)
    }

    pub fn armor(built_ins: &[ArtifactAttribute]) -> Self {
        Self::collect(built_ins, ArtifactAttributeType::ItemFlatArmor, ArtifactAttributeType::ItemBonusArmor)
    }

    pub fn apply(&self, value: f64) -> f64 {
        value * percent_multiplier(self.percent) + self.flat
    }
}

/// `round(max(1, 1.05^level × level × 8 + increased_base_damage))`
pub fn weapon_base_damage(level: f64, increased_base_damage: f64) -> f64 {
    (WEAPON_LEVEL_GROWTH.powf(level) * level * WEAPON_DAMAGE_PER_LEVEL + increased_base_damage)
        .max(1.0)
        .round()
}

/// Base damage of a weapon tier after its built-in affixes
pub fn weapon_damage_with_built_ins(
    tier: f64,
    increased_base_damage: f64,
    built_ins: &[ArtifactAttribute],
) -> f64 {
    let base = weapon_base_damage(tier, increased_base_damage);
    BuiltInBonus::damage(built_ins).apply(base).round()
}

/// Armor for a tier, scaled down by the slot penalty
pub fn armor_for_tier(tier: f64, slot_penalty: f64) -> f64 {
    if tier < 1.0 || slot_penalty <= 0.0 {
        return 0.0;
    }
    let armor = ((tier / 2.0 + tier.ln()) * tier.powf(1.3)).round();
    (armor + slot_penalty) / slot_penalty
}

/// Extra tiers granted to high level base items
pub fn passive_upgrade_tier(record: &ItemRecord) -> f64 {
    if record.base_item.is_empty() {
        return 0.0;
    }
    if record.level > 33 {
        2.0
    } else if record.level > 32 {
        1.0
    } else {
        0.0
    }
}
