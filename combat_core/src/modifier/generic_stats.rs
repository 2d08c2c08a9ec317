//! GenericStatsModifier - table-driven stat contributions

use super::{ModifierDefinition, StatModifier};
use crate::stat::{Stat, StatContext, StatView};
use serde::{Deserialize, Serialize};

/// Fixed bonus, multiplier and extra-bonus entries per stat
///
/// Repeated entries for the same stat stack: bonuses and extra bonuses add,
/// multipliers multiply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericStatsModifier {
    #[serde(default)]
    pub bonus: Vec<(Stat, f64)>,
    #[serde(default)]
    pub multiplier: Vec<(Stat, f64)>,
    #[serde(default)]
    pub extra_bonus: Vec<(Stat, f64)>,
    /// Whether the modifier survives serialization of its unit
    #[serde(default)]
    pub persistent: bool,
}

impl GenericStatsModifier {
    pub const KIND: &'static str = "generic_stats";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bonus(mut self, stat: Stat, value: f64) -> Self {
        self.bonus.push((stat, value));
        self
    }

    pub fn with_multiplier(mut self, stat: Stat, value: f64) -> Self {
        self.multiplier.push((stat, value));
        self
    }

    pub fn with_extra_bonus(mut self, stat: Stat, value: f64) -> Self {
        self.extra_bonus.push((stat, value));
        self
    }

    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bonus.is_empty() && self.multiplier.is_empty() && self.extra_bonus.is_empty()
    }

    fn sum(entries: &[(Stat, f64)], stat: Stat) -> Option<f64> {
        entries
            .iter()
            .filter(|(entry, _)| *entry == stat)
            .map(|(_, value)| *value)
            .reduce(|a, b| a + b)
    }
}

impl StatModifier for GenericStatsModifier {
    fn name(&self) -> &'static str {
        Self::KIND
    }

    fn bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        Self::sum(&self.bonus, stat)
    }

    fn multiplier(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        self.multiplier
            .iter()
            .filter(|(entry, _)| *entry == stat)
            .map(|(_, value)| *value)
            .reduce(|a, b| a * b)
    }

    fn extra_bonus(&self, _view: &StatView<'_>, _ctx: &mut StatContext<'_>, stat: Stat) -> Option<f64> {
        Self::sum(&self.extra_bonus, stat)
    }

    fn persist(&self) -> Option<ModifierDefinition> {
        if !self.persistent {
            return None;
        }
        let payload = serde_json::to_value(self).ok()?;
        Some(ModifierDefinition::new(Self::KIND, payload))
    }
}
