//! FightResult - combat log and net health deltas of a duel

use crate::types::{AttackType, DamageType};
use serde::{Deserialize, Serialize};

/// One of the two duel participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Attacker,
    Victim,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Attacker => Side::Victim,
            Side::Victim => Side::Attacker,
        }
    }
}

/// What a log entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogEntryKind {
    Attack,
    Miss,
    Mesmerized,
    LifeSteal,
    EnchantmentDamage,
    EnchantmentHeal,
    VictoryHeal,
}

/// A single line of the combat log
///
/// `to` is the unit whose health changed. Heals are logged as negative
/// damage on the healed unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatLogEntry {
    pub from: String,
    pub to: String,
    pub attack_type: AttackType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_type: Option<DamageType>,
    pub damage: f64,
    pub success: bool,
    pub critical: bool,
    pub double_critical: bool,
    pub kind: LogEntryKind,
}

impl CombatLogEntry {
    /// An entry with no damage and no flags set
    pub fn new(kind: LogEntryKind, from: &str, to: &str, attack_type: AttackType) -> Self {
        CombatLogEntry {
            from: from.to_string(),
            to: to.to_string(),
            attack_type,
            damage_type: None,
            damage: 0.0,
            success: false,
            critical: false,
            double_critical: false,
            kind,
        }
    }

    pub fn with_damage(mut self, damage_type: Option<DamageType>, damage: f64) -> Self {
        self.damage_type = damage_type;
        self.damage = damage;
        self.success = true;
        self
    }

    /// A heal of `amount` on `target`
    pub fn heal(kind: LogEntryKind, from: &str, target: &str, attack_type: AttackType, amount: f64) -> Self {
        Self::new(kind, from, target, attack_type).with_damage(None, -amount)
    }

    pub fn is_heal(&self) -> bool {
        self.damage < 0.0
    }
}

/// Outcome of one call to [`execute_fight`](super::execute_fight)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightResult {
    pub log: Vec<CombatLogEntry>,

    // === Taken by the attacker ===
    pub attacker_damage: f64,
    pub attacker_enchantment_damage: f64,
    pub attacker_heal: f64,

    // === Taken by the victim ===
    pub victim_damage: f64,
    pub victim_enchantment_damage: f64,
    pub victim_heal: f64,

    pub attacker_died: bool,
    pub victim_died: bool,

    // === Scheduling state to resume the duel ===
    pub attacker_attack_speed_remainder: f64,
    pub victim_attack_speed_remainder: f64,
    pub duration_remaining: f64,
}

impl FightResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Damage plus enchantment damage minus heals taken by `side`
    pub fn net_damage(&self, side: Side) -> f64 {
        match side {
            Side::Attacker => self.attacker_damage + self.attacker_enchantment_damage - self.attacker_heal,
            Side::Victim => self.victim_damage + self.victim_enchantment_damage - self.victim_heal,
        }
    }

    /// Health of `side` after applying the fight's net delta to `current`
    pub fn settle_health(&self, side: Side, current: f64, max: f64) -> f64 {
        (current - self.net_damage(side)).clamp(0.0, max.max(0.0))
    }

    pub fn died(&self, side: Side) -> bool {
        match side {
            Side::Attacker => self.attacker_died,
            Side::Victim => self.victim_died,
        }
    }

    pub(crate) fn add_damage(&mut self, side: Side, damage: f64, enchantment_damage: f64) {
        match side {
            Side::Attacker => {
                self.attacker_damage += damage;
                self.attacker_enchantment_damage += enchantment_damage;
            }
            Side::Victim => {
                self.victim_damage += damage;
                self.victim_enchantment_damage += enchantment_damage;
            }
        }
    }

    pub(crate) fn add_heal(&mut self, side: Side, heal: f64) {
        match side {
            Side::Attacker => self.attacker_heal += heal,
            Side::Victim => self.victim_heal += heal,
        }
    }

    /// Sum of logged health changes on the unit named `name`
    pub fn logged_damage_to(&self, name: &str) -> f64 {
        self.log
            .iter()
            .filter(|entry| entry.to == name)
            .map(|entry| entry.damage)
            .sum()
    }

    pub fn summary(&self) -> String {
        let mut parts = vec![format!("{} log entries", self.log.len())];

        if self.victim_damage > 0.0 || self.victim_enchantment_damage > 0.0 {
            parts.push(format!(
                "victim took {:.0}",
                self.victim_damage + self.victim_enchantment_damage
            ));
        }
        if self.attacker_damage > 0.0 || self.attacker_enchantment_damage > 0.0 {
            parts.push(format!(
                "attacker took {:.0}",
                self.attacker_damage + self.attacker_enchantment_damage
            ));
        }
        if self.victim_died {
            parts.push("victim died".to_string());
        }
        if self.attacker_died {
            parts.push("attacker died".to_string());
        }
        if !self.victim_died && !self.attacker_died {
            parts.push(format!("{:.0} ms left", self.duration_remaining));
        }

        parts.join(", ")
    }
}
