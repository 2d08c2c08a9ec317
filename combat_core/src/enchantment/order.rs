//! Activation and counter-spell priority lists

use super::EnchantmentType;
use EnchantmentType::*;

/// Order victim-side effects are applied in
///
/// Stat buffs first, then tier and armor bonuses, then steals, heals and
/// damage, then the compound archetypes.
pub const ACTIVATION_ORDER: &[EnchantmentType] = &[
    BonusStrength,
    BonusDexterity,
    BonusConstitution,
    BonusIntelligence,
    BonusWisdom,
    BonusWillpower,
    BonusLuck,
    BonusPhysical,
    BonusMental,
    BonusAllStats,
    MinusEnemyArmor,
    BonusArmor,
    MinusEnemyStrength,
    MinusEnemyDexterity,
    MinusEnemyConstitution,
    MinusEnemyIntelligence,
    MinusEnemyWisdom,
    MinusEnemyWillpower,
    MinusEnemyPhysical,
    MinusEnemyMental,
    MinusEnemyAllStats,
    WisDexWill,
    BigMelee,
    BigCaster,
    FishermansStrength,
    FishermansDexterity,
    FishermansConstitution,
    FishermansIntelligence,
    FishermansWisdom,
    FishermansWillpower,
    FishermansLuck,
    SuperDexterityStats,
    SuperWillpowerStats,
    SuperWisdomStats,
    DoubleAllStats,
    BonusWeaponTier,
    BonusArmorTier,
    BonusMeleeWeaponTier,
    BonusCasterWeaponTier,
    BonusRangedWeaponTier,
    BonusSmiteWeaponTier,
    RangedArmorPiercing,
    MeleeArmorPiercing,
    CasterArmorPiercing,
    SmiteArmorPiercing,
    VampireArmorPiercing,
    // damaging / healing
    StrengthSteal,
    DexteritySteal,
    ConstitutionSteal,
    IntelligenceSteal,
    WisdomSteal,
    WillpowerSteal,
    LuckSteal,
    AllStatsSteal,
    LifeSteal,
    LifeHeal,
    LifeDamage,
    Vampirism,
    SuperVampStats,
    SuperMeleeStats,
    SuperCasterStats,
    SuperVampMeleeStats,
    SuperVampSorcStats,
    SuperMeleeVampStats,
    SuperBattleMageStats,
    SuperSorcVampStats,
];

/// Most desirable to cancel first
///
/// Counter-spells themselves are never listed; they cannot be countered.
/// Tier enchantments appear twice, only the first position counts.
pub const COUNTER_SPELL_ORDER: &[EnchantmentType] = &[
    // big heals
    SuperVampStats,
    SuperVampMeleeStats,
    SuperVampSorcStats,
    SuperMeleeVampStats,
    SuperSorcVampStats,
    Vampirism,
    LifeSteal,
    LifeHeal,
    AllStatsSteal,
    // stacked armor and tiers
    BonusArmor,
    BonusWeaponTier,
    BonusArmorTier,
    BonusMeleeWeaponTier,
    BonusCasterWeaponTier,
    BonusRangedWeaponTier,
    BonusSmiteWeaponTier,
    // remaining tier 4
    DoubleAllStats,
    SuperMeleeStats,
    SuperCasterStats,
    SuperDexterityStats,
    SuperWillpowerStats,
    SuperWisdomStats,
    SuperBattleMageStats,
    BonusWeaponTier,
    BonusArmorTier,
    BonusMeleeWeaponTier,
    BonusCasterWeaponTier,
    BonusRangedWeaponTier,
    BonusSmiteWeaponTier,
    RangedArmorPiercing,
    MeleeArmorPiercing,
    CasterArmorPiercing,
    SmiteArmorPiercing,
    VampireArmorPiercing,
    // tier 3
    BigMelee,
    BigCaster,
    LifeDamage,
    WisDexWill,
    DoubleAccuracy,
    DoubleDodge,
    // steals
    StrengthSteal,
    DexteritySteal,
    ConstitutionSteal,
    IntelligenceSteal,
    WisdomSteal,
    WillpowerSteal,
    LuckSteal,
    MinusEnemyArmor,
    // minus group stats
    MinusEnemyAllStats,
    MinusEnemyPhysical,
    MinusEnemyMental,
    // minus stats
    MinusEnemyStrength,
    MinusEnemyDexterity,
    MinusEnemyConstitution,
    MinusEnemyIntelligence,
    MinusEnemyWisdom,
    MinusEnemyWillpower,
    // group boosts
    BonusAllStats,
    BonusPhysical,
    BonusMental,
    // minor boosts
    BonusStrength,
    BonusDexterity,
    BonusConstitution,
    BonusIntelligence,
    BonusWisdom,
    BonusWillpower,
    BonusLuck,
];

fn rank(list: &[EnchantmentType], enchantment: EnchantmentType) -> usize {
    list.iter()
        .position(|&entry| entry == enchantment)
        .unwrap_or(list.len())
}

/// Position in the activation order; unlisted enchantments sort last
pub fn activation_rank(enchantment: EnchantmentType) -> usize {
    rank(ACTIVATION_ORDER, enchantment)
}

/// Position in the counter-spell priority; unlisted enchantments sort last
pub fn counter_spell_rank(enchantment: EnchantmentType) -> usize {
    rank(COUNTER_SPELL_ORDER, enchantment)
}
