//! Grass cover erosion on the crest and inner slope by overtopping waves.
//!
//! A wave with run-up R overtops when it exceeds the freeboard
//! Rc = dike height − water level. Its front velocity on the crest or
//! inner slope is
//!
//!   u = Cwo · αA · √(g · max(0, R − Rc))
//!
//! where αA accounts for the acceleration of the flow down the inner slope.

/// Acceleration coefficients for the crest and the inner slope.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccelerationAlphaA {
    /// αA on the crest
    pub crest: f64,
    /// αA on the inner slope
    pub inner_slope: f64,
}

/// Freeboard Rc between the water level and the dike height.
#[inline]
pub fn freeboard(dike_height: f64, water_level: f64) -> f64 {
    dike_height - water_level
}

/// Front velocity of an overtopping wave with run-up `wave_runup`.
#[inline]
pub fn front_velocity(
    wave_runup: f64,
    freeboard: f64,
    acceleration_alpha_a: f64,
    front_velocity_cwo: f64,
    g: f64,
) -> f64 {
    front_velocity_cwo * acceleration_alpha_a * (g * (wave_runup - freeboard).max(0.0)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::GRAVITATIONAL_ACCELERATION;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_velocity_below_freeboard() {
        assert_eq!(front_velocity(1.0, 2.0, 1.0, 1.45, GRAVITATIONAL_ACCELERATION), 0.0);
    }

    #[test]
    fn test_velocity_above_freeboard() {
        let g = GRAVITATIONAL_ACCELERATION;
        let u = front_velocity(3.0, 2.0, 1.4, 1.45, g);
        assert_relative_eq!(u, 1.45 * 1.4 * g.sqrt());
    }

    #[test]
    fn test_freeboard_negative_when_water_above_crest() {
        assert!(freeboard(5.0, 5.5) < 0.0);
    }
}
