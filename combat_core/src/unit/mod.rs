//! Unit - a combat participant and the modifiers registered on it
//!
//! A unit owns its stat table, its modifier list and its equipment. Every
//! effective stat read goes through a [`StatView`], so the same pipeline
//! serves isolated reads and reads made while facing an opponent.

mod hero;
mod monster;

pub use hero::{HeroBuffs, HeroCombat, HeroEquipment, HeroRecord, HeroStats};
pub use monster::MonsterRecord;

use crate::enchantment::EnchantmentType;
use crate::error::CombatError;
use crate::item::{
    default_catalog, is_weapon, weapon_counts_for_attack, ArtifactItem, ArtifactRecord,
    BaseItemCatalog, InventoryItem, ItemRecord, VictimModifier,
};
use crate::modifier::{
    default_registry, BasicUnitModifier, Modifier, ModifierDefinition, ModifierSource, StatModifier,
};
use crate::stat::{Stat, StatBreakdown, StatContext, StatTable, StatView};
use crate::types::{AttackType, HeroClass, HeroStance};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique unit identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(u64);

impl UnitId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        UnitId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A hero or monster with its stats, modifiers and equipment
#[derive(Debug)]
pub struct Unit {
    id: UnitId,
    pub name: String,
    pub class: HeroClass,
    pub attack_type: AttackType,
    pub stance: HeroStance,
    stats: StatTable,
    modifiers: Vec<Modifier>,
    equipment: Vec<InventoryItem>,
    victim_modifiers: Vec<VictimModifier>,
    pub(crate) engaged: bool,
    pub(crate) counter_spells_spent: usize,
}

impl Unit {
    /// A unit with default stats and the basic unit rules registered
    pub fn new(name: &str, class: HeroClass, attack_type: AttackType) -> Self {
        let mut unit = Unit {
            id: UnitId::next(),
            name: name.to_string(),
            class,
            attack_type,
            stance: HeroStance::default(),
            stats: StatTable::with_defaults(),
            modifiers: Vec::new(),
            equipment: Vec::new(),
            victim_modifiers: Vec::new(),
            engaged: false,
            counter_spells_spent: 0,
        };
        unit.apply_modifier(Box::new(BasicUnitModifier), ModifierSource::Intrinsic, None);
        unit
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut StatTable {
        &mut self.stats
    }

    pub fn set_base(&mut self, stat: Stat, value: f64) {
        self.stats.set_base(stat, value);
    }

    pub fn base_value(&self, stat: Stat) -> f64 {
        self.stats.base(stat)
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    pub(crate) fn modifiers_mut(&mut self) -> &mut [Modifier] {
        &mut self.modifiers
    }

    pub fn equipment(&self) -> &[InventoryItem] {
        &self.equipment
    }

    /// Enchantment effects this unit will place on its opponent
    pub fn victim_modifiers(&self) -> &[VictimModifier] {
        &self.victim_modifiers
    }

    /// Whether [`enter_combat`](crate::enchantment::enter_combat) already ran
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Register a modifier instance; returns its index
    pub fn apply_modifier(
        &mut self,
        kind: Box<dyn StatModifier>,
        source: ModifierSource,
        enchantment: Option<EnchantmentType>,
    ) -> usize {
        self.modifiers.push(Modifier::new(kind, source, enchantment));
        self.modifiers.len() - 1
    }

    /// Register a modifier from its data form
    ///
    /// Fails when the kind is not registered or the payload does not fit it.
    pub fn apply_definition(
        &mut self,
        definition: &ModifierDefinition,
        source: ModifierSource,
    ) -> Result<usize, CombatError> {
        let kind = default_registry().build(definition)?;
        Ok(self.apply_modifier(kind, source, definition.enchantment))
    }

    /// Definitions of every modifier that survives serialization
    pub fn persistent_modifiers(&self) -> Vec<ModifierDefinition> {
        self.modifiers
            .iter()
            .filter_map(|modifier| {
                modifier.kind().persist().map(|mut definition| {
                    definition.enchantment = modifier.enchantment;
                    definition
                })
            })
            .collect()
    }

    pub fn view<'a>(&'a self, opponent: Option<&'a Unit>) -> StatView<'a> {
        StatView::new(self, opponent)
    }

    /// Effective value with no opponent in view
    pub fn stat(&self, stat: Stat) -> f64 {
        self.view(None).resolve(&mut StatContext::new(), stat)
    }

    /// Effective value while facing `opponent`
    pub fn stat_against(&self, stat: Stat, opponent: &Unit) -> f64 {
        self.view(Some(opponent)).resolve(&mut StatContext::new(), stat)
    }

    pub fn breakdown(&self, stat: Stat) -> StatBreakdown {
        self.view(None).breakdown(&mut StatContext::new(), stat)
    }

    pub fn max_health(&self) -> f64 {
        self.stat(Stat::Health)
    }

    pub fn base_damage(&self, is_second: bool) -> f64 {
        self.view(None).base_damage(&mut StatContext::new(), is_second)
    }

    /// Equipped weapons that count for `attack_type`, highest level first
    pub fn weapons_for(&self, attack_type: AttackType) -> Vec<&InventoryItem> {
        let mut weapons: Vec<&InventoryItem> = self
            .equipment
            .iter()
            .filter(|item| {
                is_weapon(item.item_type(), self.class)
                    && weapon_counts_for_attack(item.item_type(), attack_type, self.class)
            })
            .collect();
        weapons.sort_by(|a, b| b.level().cmp(&a.level()));
        weapons
    }

    /// Equip an item using the bundled base item catalog
    pub fn equip_item(&mut self, record: ItemRecord) -> usize {
        self.equip_item_with(record, default_catalog())
    }

    pub fn equip_item_with(&mut self, record: ItemRecord, catalog: &BaseItemCatalog) -> usize {
        InventoryItem::new(record, catalog).equip(self)
    }

    pub fn equip_artifact(&mut self, record: &ArtifactRecord) {
        ArtifactItem::new(record).equip(self, ModifierSource::Artifact);
    }

    pub(crate) fn push_equipment(&mut self, item: InventoryItem) -> usize {
        self.equipment.push(item);
        self.equipment.len() - 1
    }

    pub(crate) fn push_victim_modifier(&mut self, modifier: VictimModifier) {
        self.victim_modifiers.push(modifier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::GenericStatsModifier;
    use crate::stat::{Getter, StatIncident};
    use crate::types::{Attribute, ItemType};

    /// Reads its own stat while computing it
    #[derive(Debug)]
    struct SelfReferential;

    impl StatModifier for SelfReferential {
        fn name(&self) -> &'static str {
            "self_referential"
        }

        fn bonus(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
            (stat == Stat::Armor).then(|| view.resolve(ctx, Stat::Armor) + 1.0)
        }

        fn multiplier(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
            None
        }

        fn extra_bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
            None
        }
    }

    #[derive(Debug)]
    struct Broken;

    impl StatModifier for Broken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
            None
        }

        fn multiplier(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
            (stat == Stat::Armor).then_some(f64::NAN)
        }

        fn extra_bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, _stat: Stat) -> Option<f64> {
            None
        }
    }

    fn fighter() -> Unit {
        Unit::new("fighter", HeroClass::Fighter, AttackType::Melee)
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(fighter().id(), fighter().id());
    }

    #[test]
    fn test_default_attribute_value() {
        let unit = fighter();
        assert!((unit.stat(Attribute::Strength.into()) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_pipeline_order() {
        let mut unit = fighter();
        unit.set_base(Stat::Armor, 10.0);
        unit.apply_modifier(
            Box::new(
                GenericStatsModifier::new()
                    .with_bonus(Stat::Armor, 5.0)
                    .with_multiplier(Stat::Armor, 2.0)
                    .with_extra_bonus(Stat::Armor, 3.0),
            ),
            ModifierSource::Injected,
            None,
        );
        let breakdown = unit.breakdown(Stat::Armor);
        assert!((breakdown.bonus - 15.0).abs() < f64::EPSILON);
        assert!((breakdown.value - 33.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_disabled_modifiers_are_skipped() {
        let mut unit = fighter();
        let index = unit.apply_modifier(
            Box::new(GenericStatsModifier::new().with_bonus(Stat::Armor, 5.0)),
            ModifierSource::Injected,
            None,
        );
        unit.modifiers_mut()[index].disabled = true;
        assert!(unit.stat(Stat::Armor).abs() < f64::EPSILON);
    }

    #[test]
    fn test_reentrant_modifier_is_skipped() {
        let mut unit = fighter();
        unit.apply_modifier(Box::new(SelfReferential), ModifierSource::Injected, None);
        unit.apply_modifier(
            Box::new(GenericStatsModifier::new().with_bonus(Stat::Armor, 4.0)),
            ModifierSource::Injected,
            None,
        );

        let mut ctx = StatContext::new();
        let value = unit.view(None).resolve(&mut ctx, Stat::Armor);
        // inner read skips itself and sees 4; outer adds 4 + 1 and the generic 4
        assert!((value - 9.0).abs() < f64::EPSILON);
        assert_eq!(ctx.incidents().len(), 1);
        assert!(matches!(
            ctx.incidents()[0],
            StatIncident::Reentrant {
                modifier: "self_referential",
                getter: Getter::Bonus,
                stat: Stat::Armor,
            }
        ));
    }

    #[test]
    fn test_non_finite_contribution_is_dropped() {
        let mut unit = fighter();
        unit.set_base(Stat::Armor, 12.0);
        unit.apply_modifier(Box::new(Broken), ModifierSource::Injected, None);

        let mut ctx = StatContext::new();
        let value = unit.view(None).resolve(&mut ctx, Stat::Armor);
        assert!((value - 12.0).abs() < f64::EPSILON);
        assert!(matches!(ctx.incidents()[0], StatIncident::NonFinite { modifier: "broken", .. }));
    }

    #[test]
    fn test_definition_round_trip() {
        let mut unit = fighter();
        unit.apply_modifier(
            Box::new(GenericStatsModifier::new().with_bonus(Stat::Armor, 7.0).persistent()),
            ModifierSource::Injected,
            Some(EnchantmentType::BonusArmor),
        );
        let definitions = unit.persistent_modifiers();
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions[0].enchantment, Some(EnchantmentType::BonusArmor));

        let mut restored = fighter();
        restored
            .apply_definition(&definitions[0], ModifierSource::Injected)
            .unwrap();
        assert!((restored.stat(Stat::Armor) - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_definition_is_an_error() {
        let mut unit = fighter();
        let definition = ModifierDefinition::new("no_such_kind", serde_json::json!({}));
        let result = unit.apply_definition(&definition, ModifierSource::Injected);
        assert!(matches!(result, Err(CombatError::UnknownModifier(_))));
    }

    #[test]
    fn test_base_damage_without_weapon() {
        let unit = fighter();
        // 1 + default increased base damage
        assert!((unit.base_damage(false) - 21.0).abs() < f64::EPSILON);
        assert!((unit.base_damage(true)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weapons_sorted_by_level() {
        let mut unit = fighter();
        unit.equip_item(ItemRecord::new("dagger", ItemType::MeleeWeapon, 3));
        unit.equip_item(ItemRecord::new("focus", ItemType::SpellFocus, 9));
        unit.equip_item(ItemRecord::new("sword", ItemType::MeleeWeapon, 7));
        let names: Vec<&str> = unit
            .weapons_for(AttackType::Melee)
            .iter()
            .map(|item| item.record().name.as_str())
            .collect();
        assert_eq!(names, vec!["sword", "dagger"]);
    }

    #[test]
    fn test_second_weapon_damage() {
        let mut unit = fighter();
        unit.equip_item(ItemRecord::new("sword", ItemType::MeleeWeapon, 10));
        unit.equip_item(ItemRecord::new("dagger", ItemType::MeleeWeapon, 1));
        // round(max(1, 1.05 * 1 * 8 + 20)) = 28
        assert!((unit.base_damage(true) - 28.0).abs() < f64::EPSILON);
        assert!(unit.base_damage(false) > unit.base_damage(true));
    }
}
