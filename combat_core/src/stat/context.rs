//! Per-evaluation context: cycle guard, random source and incident log

use super::Stat;
use crate::unit::UnitId;
use rand::{Rng, RngCore};
use std::collections::HashSet;
use std::fmt;

/// The three modifier hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Getter {
    Bonus,
    Multiplier,
    ExtraBonus,
}

impl Getter {
    /// Starting value of the fold
    pub fn identity(self) -> f64 {
        match self {
            Getter::Multiplier => 1.0,
            Getter::Bonus | Getter::ExtraBonus => 0.0,
        }
    }

    pub fn combine(self, total: f64, value: f64) -> f64 {
        match self {
            Getter::Multiplier => total * value,
            Getter::Bonus | Getter::ExtraBonus => total + value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct GuardKey {
    pub unit: UnitId,
    pub modifier: usize,
    pub getter: Getter,
    pub stat: Stat,
}

/// A recovered modifier failure
#[derive(Debug, Clone, PartialEq)]
pub enum StatIncident {
    /// The same modifier hook was already evaluating this stat
    Reentrant {
        modifier: &'static str,
        getter: Getter,
        stat: Stat,
    },
    /// The hook produced NaN or an infinity
    NonFinite {
        modifier: &'static str,
        getter: Getter,
        stat: Stat,
        value: f64,
    },
}

/// State threaded through one stat evaluation
///
/// Two contexts never share guard state, so independent evaluations of the
/// same unit cannot interfere with each other.
pub struct StatContext<'r> {
    in_flight: HashSet<GuardKey>,
    rng: Option<&'r mut dyn RngCore>,
    incidents: Vec<StatIncident>,
}

impl fmt::Debug for StatContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatContext")
            .field("in_flight", &self.in_flight.len())
            .field("has_rng", &self.rng.is_some())
            .field("incidents", &self.incidents)
            .finish()
    }
}

impl Default for StatContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> StatContext<'r> {
    /// A context without randomness; luck jitter is skipped
    pub fn new() -> Self {
        StatContext {
            in_flight: HashSet::new(),
            rng: None,
            incidents: Vec::new(),
        }
    }

    pub fn with_rng(rng: &'r mut dyn RngCore) -> Self {
        StatContext {
            in_flight: HashSet::new(),
            rng: Some(rng),
            incidents: Vec::new(),
        }
    }

    /// Uniform roll in [0, 1) when a random source is present
    pub fn roll(&mut self) -> Option<f64> {
        self.rng.as_deref_mut().map(|rng| rng.gen::<f64>())
    }

    pub fn incidents(&self) -> &[StatIncident] {
        &self.incidents
    }

    pub(crate) fn record(&mut self, incident: StatIncident) {
        self.incidents.push(incident);
    }

    /// Mark a hook as in flight, false if it already was
    pub(crate) fn enter(&mut self, key: GuardKey) -> bool {
        self.in_flight.insert(key)
    }

    pub(crate) fn leave(&mut self, key: GuardKey) {
        self.in_flight.remove(&key);
    }
}
