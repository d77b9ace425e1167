//! Hydraulic load quantities shared by all revetment models.
//!
//! Deep-water wave steepness and the surf similarity (Iribarren) parameter:
//!   s0 = 2π Hm0 / (g Tm-1,0²)
//!   ξ  = tanα / √s0

use std::f64::consts::PI;

/// Gravitational acceleration (m/s²).
pub const GRAVITATIONAL_ACCELERATION: f64 = 9.81;

/// Wave steepness in deep water, s0 = 2π Hm0 / (g Tm-1,0²).
#[inline]
pub fn wave_steepness_deep_water(wave_height_hm0: f64, wave_period_tm10: f64, g: f64) -> f64 {
    2.0 * PI * wave_height_hm0 / (g * wave_period_tm10 * wave_period_tm10)
}

/// Surf similarity parameter ξ = tanα / √s0.
///
/// ξ separates plunging (small ξ) from surging (large ξ) breakers.
#[inline]
pub fn surf_similarity_parameter(
    outer_slope: f64,
    wave_height_hm0: f64,
    wave_period_tm10: f64,
    g: f64,
) -> f64 {
    outer_slope / wave_steepness_deep_water(wave_height_hm0, wave_period_tm10, g).sqrt()
}

/// Height of the location above the still water level.
#[inline]
pub fn vertical_distance_water_level_elevation(z: f64, water_level: f64) -> f64 {
    z - water_level
}

/// Number of waves arriving during `increment_time`.
///
/// N = Δt / (Ctm · Tm-1,0)
#[inline]
pub fn average_number_of_waves(increment_time: f64, wave_period_tm10: f64, ctm: f64) -> f64 {
    increment_time / (ctm * wave_period_tm10)
}

/// Slope angle (radians) from a gradient tanα.
#[inline]
pub fn slope_angle(outer_slope: f64) -> f64 {
    outer_slope.atan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wave_steepness() {
        // L0 = g T² / 2π ≈ 39.03 m for T = 5 s
        let s0 = wave_steepness_deep_water(1.0, 5.0, GRAVITATIONAL_ACCELERATION);
        assert_relative_eq!(s0, 1.0 / 39.0323, max_relative = 1e-4);
    }

    #[test]
    fn test_surf_similarity_parameter() {
        let xi = surf_similarity_parameter(0.25, 1.0, 5.0, GRAVITATIONAL_ACCELERATION);
        assert_relative_eq!(xi, 0.25 * 39.0323_f64.sqrt(), max_relative = 1e-4);
    }

    #[test]
    fn test_average_number_of_waves() {
        assert_relative_eq!(
            average_number_of_waves(3600.0, 4.0, 0.9),
            1000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_vertical_distance_sign() {
        assert!(vertical_distance_water_level_elevation(2.0, 1.0) > 0.0);
        assert!(vertical_distance_water_level_elevation(0.5, 1.0) < 0.0);
    }
}
