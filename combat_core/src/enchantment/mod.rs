//! Enchantments - item effects resolved into ordered modifiers
//!
//! Attacker-side effects are registered when an item is equipped. Victim-side
//! effects, stat steals and counter-spells are applied by [`enter_combat`].

mod counter_spell;
mod effects;
mod engage;
mod order;

pub use counter_spell::{apply_counter_spells, counter_spell_candidates, EnchantmentInstance};
pub use effects::{modifiers_for_enchantment, EnchantmentEffects};
pub use engage::{apply_attack_modifiers, create_stat_steal_modifiers, enter_combat};
pub use order::{activation_rank, counter_spell_rank, ACTIVATION_ORDER, COUNTER_SPELL_ORDER};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnchantmentType {
    AllStatsSteal,
    BigCaster,
    BigMelee,
    BonusAllStats,
    BonusArmor,
    BonusArmorTier,
    BonusCasterWeaponTier,
    BonusConstitution,
    BonusDexterity,
    BonusIntelligence,
    BonusLuck,
    BonusMeleeWeaponTier,
    BonusMental,
    BonusPhysical,
    BonusRangedWeaponTier,
    BonusSmiteWeaponTier,
    BonusStrength,
    BonusWeaponTier,
    BonusWillpower,
    BonusWisdom,
    CasterArmorPiercing,
    ConstitutionSteal,
    CounterSpell,
    DexteritySteal,
    DoubleAccuracy,
    DoubleAllStats,
    DoubleDodge,
    FishermansConstitution,
    FishermansDexterity,
    FishermansIntelligence,
    FishermansLuck,
    FishermansStrength,
    FishermansWillpower,
    FishermansWisdom,
    ImprovedAutomation,
    IntelligenceSteal,
    LifeDamage,
    LifeHeal,
    LifeSteal,
    LuckSteal,
    MeleeArmorPiercing,
    MinusEnemyAllStats,
    MinusEnemyArmor,
    MinusEnemyConstitution,
    MinusEnemyDexterity,
    MinusEnemyIntelligence,
    MinusEnemyMental,
    MinusEnemyPhysical,
    MinusEnemyStrength,
    MinusEnemyWillpower,
    MinusEnemyWisdom,
    RangedArmorPiercing,
    SmiteArmorPiercing,
    StrengthSteal,
    SuperBattleMageStats,
    SuperCasterStats,
    SuperDexterityStats,
    SuperMeleeStats,
    SuperMeleeVampStats,
    SuperSorcVampStats,
    SuperVampMeleeStats,
    SuperVampSorcStats,
    SuperVampStats,
    SuperWillpowerStats,
    SuperWisdomStats,
    VampireArmorPiercing,
    Vampirism,
    WillpowerSteal,
    WisDexWill,
    WisdomSteal,
}
