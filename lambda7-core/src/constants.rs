//! Numerical constants of the π-algebra

use std::sync::LazyLock;

pub const PI: f64 = std::f64::consts::PI;

/// Electron rest mass in MeV (CODATA 2018)
pub const M_E: f64 = 0.51099895;

/// Golden ratio φ = (1 + √5) / 2
pub const PHI: f64 = 1.618_033_988_749_895;

/// Lowest and highest powers of π carried by a polynomial
pub const MIN_POWER: i32 = -1;
pub const MAX_POWER: i32 = 7;

/// e^(−π) ≈ 0.04321
pub static E_NEG_PI: LazyLock<f64> = LazyLock::new(|| (-PI).exp());

/// q-integer [2]_π = π + 1
pub const Q2_PI: f64 = PI + 1.0;

static PI_POWERS: LazyLock<Vec<f64>> =
    LazyLock::new(|| (MIN_POWER..=MAX_POWER).map(|p| PI.powi(p)).collect());

/// π^power, precomputed for the polynomial range
pub fn pi_pow(power: i32) -> f64 {
    if (MIN_POWER..=MAX_POWER).contains(&power) {
        PI_POWERS[(power - MIN_POWER) as usize]
    } else {
        PI.powi(power)
    }
}

/// e^(−π)
pub fn e_neg_pi() -> f64 {
    *E_NEG_PI
}
