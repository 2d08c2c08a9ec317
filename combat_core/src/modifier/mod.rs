//! Modifiers - effects contributing bonuses, multipliers and extra bonuses
//!
//! Every modifier kind implements [`StatModifier`]. A unit owns its modifiers
//! as [`Modifier`] records that remember where the effect came from and
//! whether a counter-spell has disabled it.

mod artifact;
mod basic_hero;
mod basic_unit;
mod generic_armor;
mod generic_stats;
mod hero_class;
mod monster;
mod stance;
mod stat_steal;

pub use artifact::ArtifactModifier;
pub use basic_hero::{BasicHeroModifier, HeroSkills};
pub use basic_unit::BasicUnitModifier;
pub use generic_armor::GenericArmorModifier;
pub use generic_stats::GenericStatsModifier;
pub use hero_class::{class_traits, HeroClassModifier};
pub use monster::{monster_attribute_bonus, MonsterModifier};
pub use stance::HeroStanceModifier;
pub use stat_steal::{StatStealModifier, StealSide};

use crate::enchantment::EnchantmentType;
use crate::error::CombatError;
use crate::stat::{Stat, StatContext, StatView};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Capability shared by every modifier kind
///
/// Each hook returns `None` when the modifier has nothing to say about
/// `stat`. Hooks read other stats through `view` and must pass `ctx` along so
/// the cycle guard sees the whole evaluation.
pub trait StatModifier: fmt::Debug + Send + Sync {
    /// Kind name used in logs and persistence
    fn name(&self) -> &'static str;

    fn bonus(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64>;

    fn multiplier(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat)
        -> Option<f64>;

    fn extra_bonus(&self, view: &StatView<'_>, ctx: &mut StatContext<'_>, stat: Stat)
        -> Option<f64>;

    /// Payload for modifiers that survive serialization
    fn persist(&self) -> Option<ModifierDefinition> {
        None
    }
}

/// Where a modifier came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierSource {
    /// Class, stance and other built-in unit traits
    Intrinsic,
    /// An item in the unit's own equipment list
    Item(usize),
    /// The unit's equipped artifact
    Artifact,
    /// Placed by the opponent; `item` indexes the opponent's equipment
    Opponent { item: Option<usize> },
    /// Added by an encounter script
    Injected,
}

/// A modifier registered on a unit
#[derive(Debug)]
pub struct Modifier {
    kind: Box<dyn StatModifier>,
    pub source: ModifierSource,
    pub enchantment: Option<EnchantmentType>,
    pub disabled: bool,
}

impl Modifier {
    pub fn new(
        kind: Box<dyn StatModifier>,
        source: ModifierSource,
        enchantment: Option<EnchantmentType>,
    ) -> Self {
        Modifier {
            kind,
            source,
            enchantment,
            disabled: false,
        }
    }

    pub fn kind(&self) -> &dyn StatModifier {
        self.kind.as_ref()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// Data form of a modifier: a registered kind name plus its JSON payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierDefinition {
    pub kind: String,
    #[serde(default)]
    pub enchantment: Option<EnchantmentType>,
    pub payload: serde_json::Value,
}

impl ModifierDefinition {
    pub fn new(kind: &str, payload: serde_json::Value) -> Self {
        ModifierDefinition {
            kind: kind.to_string(),
            enchantment: None,
            payload,
        }
    }
}

type ModifierFactory = fn(&serde_json::Value) -> Result<Box<dyn StatModifier>, serde_json::Error>;

/// Registry of data-constructible modifier kinds
#[derive(Clone)]
pub struct ModifierRegistry {
    factories: HashMap<String, ModifierFactory>,
}

impl fmt::Debug for ModifierRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.factories.keys()).finish()
    }
}

impl Default for ModifierRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ModifierRegistry {
    pub fn new() -> Self {
        ModifierRegistry {
            factories: HashMap::new(),
        }
    }

    /// Registry with every built-in data-driven kind
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(GenericStatsModifier::KIND, |payload| {
            let modifier: GenericStatsModifier = serde_json::from_value(payload.clone())?;
            Ok(Box::new(modifier))
        });
        registry.register(GenericArmorModifier::KIND, |payload| {
            let modifier: GenericArmorModifier = serde_json::from_value(payload.clone())?;
            Ok(Box::new(modifier))
        });
        registry.register(ArtifactModifier::KIND, |payload| {
            let modifier: ArtifactModifier = serde_json::from_value(payload.clone())?;
            Ok(Box::new(modifier))
        });
        registry
    }

    pub fn register(&mut self, kind: &str, factory: ModifierFactory) {
        self.factories.insert(kind.to_string(), factory);
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Build a modifier from its definition
    pub fn build(
        &self,
        definition: &ModifierDefinition,
    ) -> Result<Box<dyn StatModifier>, CombatError> {
        let factory = self
            .factories
            .get(&definition.kind)
            .ok_or_else(|| CombatError::UnknownModifier(definition.kind.clone()))?;
        factory(&definition.payload).map_err(|source| CombatError::InvalidPayload {
            kind: definition.kind.clone(),
            source,
        })
    }
}

/// Process-wide registry of the built-in kinds
pub fn default_registry() -> &'static ModifierRegistry {
    static REGISTRY: OnceLock<ModifierRegistry> = OnceLock::new();
    REGISTRY.get_or_init(ModifierRegistry::with_defaults)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_is_an_error() {
        let definition = ModifierDefinition::new("totally_unknown", serde_json::json!({}));
        let result = default_registry().build(&definition);
        assert!(matches!(result, Err(CombatError::UnknownModifier(kind)) if kind == "totally_unknown"));
    }

    #[test]
    fn test_bad_payload_is_an_error() {
        let definition = ModifierDefinition::new(GenericStatsModifier::KIND, serde_json::json!(42));
        let result = default_registry().build(&definition);
        assert!(matches!(result, Err(CombatError::InvalidPayload { .. })));
    }

    #[test]
    fn test_builds_generic_stats() {
        let modifier = GenericStatsModifier::new().with_bonus(Stat::Armor, 5.0);
        let definition = ModifierDefinition::new(
            GenericStatsModifier::KIND,
            serde_json::to_value(&modifier).unwrap(),
        );
        let built = default_registry().build(&definition).unwrap();
        assert_eq!(built.name(), GenericStatsModifier::KIND);
    }
}
