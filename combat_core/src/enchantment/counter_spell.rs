//! Counter-spells cancel the opponent's enchantments by priority

use super::{counter_spell_rank, EnchantmentType};
use crate::modifier::ModifierSource;
use crate::stat::Stat;
use crate::unit::Unit;
use tracing::debug;

/// One enchantment granted by one equipped item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnchantmentInstance {
    pub item: usize,
    pub enchantment: EnchantmentType,
}

impl EnchantmentInstance {
    fn is_owned_by(&self, source: ModifierSource, enchantment: Option<EnchantmentType>) -> bool {
        source == ModifierSource::Item(self.item) && enchantment == Some(self.enchantment)
    }

    fn is_placed_by(&self, source: ModifierSource, enchantment: Option<EnchantmentType>) -> bool {
        source == ModifierSource::Opponent { item: Some(self.item) } && enchantment == Some(self.enchantment)
    }
}

fn uncounterable(enchantment: EnchantmentType) -> bool {
    matches!(
        enchantment,
        EnchantmentType::CounterSpell | EnchantmentType::ImprovedAutomation
    )
}

/// `target`'s enchantment instances that still have an active effect,
/// highest cancel priority first
pub fn counter_spell_candidates(target: &Unit, caster: &Unit) -> Vec<EnchantmentInstance> {
    let mut candidates = Vec::new();

    for (item, equipped) in target.equipment().iter().enumerate() {
        for enchantment in equipped.enchantments() {
            let instance = EnchantmentInstance { item, enchantment };
            if uncounterable(enchantment) || candidates.contains(&instance) {
                continue;
            }
            let own = target
                .modifiers()
                .iter()
                .any(|m| !m.disabled && instance.is_owned_by(m.source, m.enchantment));
            let placed = caster
                .modifiers()
                .iter()
                .any(|m| !m.disabled && instance.is_placed_by(m.source, m.enchantment));
            if own || placed {
                candidates.push(instance);
            }
        }
    }

    candidates.sort_by_key(|instance| counter_spell_rank(instance.enchantment));
    candidates
}

/// Resolve counter-spells in both directions
///
/// Each side may cancel as many instances as its `CounterSpell` stat allows,
/// minus what it has already spent, so repeating the call changes nothing.
/// Returns the instances cancelled by `a` and by `b`.
pub fn apply_counter_spells(
    a: &mut Unit,
    b: &mut Unit,
) -> (Vec<EnchantmentInstance>, Vec<EnchantmentInstance>) {
    let by_a = cancel(a, b);
    let by_b = cancel(b, a);
    (by_a, by_b)
}

fn cancel(caster: &mut Unit, target: &mut Unit) -> Vec<EnchantmentInstance> {
    let available = caster.stat_against(Stat::CounterSpell, target).max(0.0).floor() as usize;
    let remaining = available.saturating_sub(caster.counter_spells_spent);
    if remaining == 0 {
        return Vec::new();
    }

    let cancelled: Vec<EnchantmentInstance> = counter_spell_candidates(target, caster)
        .into_iter()
        .take(remaining)
        .collect();

    for instance in &cancelled {
        debug!(
            caster = %caster.name,
            target = %target.name,
            enchantment = ?instance.enchantment,
            item = instance.item,
            "counter-spell cancels enchantment"
        );
        for modifier in target.modifiers_mut() {
            if instance.is_owned_by(modifier.source, modifier.enchantment) {
                modifier.disabled = true;
            }
        }
        for modifier in caster.modifiers_mut() {
            if instance.is_placed_by(modifier.source, modifier.enchantment) {
                modifier.disabled = true;
            }
        }
    }

    caster.counter_spells_spent += cancelled.len();
    cancelled
}
