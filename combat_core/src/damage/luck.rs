//! Luck-derived crit and variance thresholds

/// Three saturating curves over the luck attribute
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Luck {
    pub small: f64,
    pub large: f64,
    pub ultra: f64,
}

impl Luck {
    pub fn new(luck: f64) -> Self {
        let luck = luck.max(0.0);
        Luck {
            small: luck / (luck + 100.0),
            large: luck / (luck + 1000.0),
            ultra: luck / (luck + 10000.0),
        }
    }
}
