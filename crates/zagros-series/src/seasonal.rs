//! Within-year seasonal adjustments.
//!
//! Temperature uses a continuous single-cycle sinusoid; the other monthly
//! families use discrete season-bucket multipliers. The bucket values are
//! simplified categorical approximations, not physically derived.

use std::f64::consts::PI;

/// Single-cycle annual sinusoid: minimum at month 1 (January), maximum
/// mid-year. Amplitude is configured per city.
pub fn annual_cosine(month: u32, amplitude: f64) -> f64 {
    -amplitude * (2.0 * PI * f64::from(month - 1) / 12.0).cos()
}

/// Rainfall multiplier: wet winter and early spring, dry summer.
pub fn rainfall_factor(month: u32) -> f64 {
    match month {
        12 | 1 | 2 | 3 => 2.0,
        4 | 5 => 1.5,
        6 | 7 | 8 => 0.2,
        _ => 1.0,
    }
}

/// River-level multiplier: spring melt high, summer low. Groundwater takes
/// no seasonal factor.
pub fn river_factor(month: u32) -> f64 {
    match month {
        3 | 4 | 5 => 1.2,
        6 | 7 | 8 => 0.8,
        _ => 1.0,
    }
}

/// Heat-driven health multiplier: summer high, winter low.
pub fn health_factor(month: u32) -> f64 {
    match month {
        6 | 7 | 8 => 1.5,
        12 | 1 | 2 => 0.7,
        _ => 1.0,
    }
}
