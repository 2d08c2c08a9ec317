//! Damage system - ratings, hit chance and per-swing damage resolution

mod calculation;
mod hit;
mod luck;
mod math;
mod mitigation;

pub use calculation::{
    calculate_damage, calculate_damage_values, damage_type_for, DamageInstance, DamageOutcome,
    DamageValues,
};
pub use hit::{calculate_hit, calculate_odds};
pub use luck::Luck;
pub use math::{calculate_hit_chance, calculate_rating, diminishing_return, opposed_sigmoid_odds};
pub use mitigation::{apply_armor, cap_instance, convert_damage, resistance_term};

/// Curve constants
pub mod constants {
    /// Rating curve scale
    pub const RATING_STRETCH: f64 = 8.0;

    /// Rating curve root (higher = flatter)
    pub const RATING_STEEPNESS: f64 = 1.8;

    pub const HIT_STEEPNESS: f64 = 2.0;

    /// Floor of any hit chance
    pub const MIN_HIT_CHANCE: f64 = 0.4;

    pub const MAX_HIT_CHANCE: f64 = 1.0;
}
