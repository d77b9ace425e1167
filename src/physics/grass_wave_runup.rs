//! Grass cover erosion by wave run-up.
//!
//! Representative 2% run-up:
//!   R2% = Hm0 · min(Aru γb γf γβ ξ, γf γβ (Bru − Cru / √ξ))
//!
//! Front velocity of a run-up tongue at height Δz above the still water level:
//!   u = Cu · √(g R) · max(0, (R − Δz) / R)

/// Representative 2% wave run-up sub-model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RepresentativeWaveRunup2P {
    /// Aru
    pub aru: f64,
    /// Bru
    pub bru: f64,
    /// Cru
    pub cru: f64,
    /// Influence factor for a berm γb
    pub gamma_b: f64,
    /// Influence factor for roughness γf
    pub gamma_f: f64,
}

impl RepresentativeWaveRunup2P {
    /// Run-up height exceeded by 2% of the waves (m), never negative.
    pub fn evaluate(
        &self,
        surf_similarity_parameter: f64,
        wave_height_hm0: f64,
        wave_angle_impact: f64,
    ) -> f64 {
        let xi = surf_similarity_parameter;
        let breaking = self.aru * self.gamma_b * self.gamma_f * wave_angle_impact * xi;
        let non_breaking = self.gamma_f * wave_angle_impact * (self.bru - self.cru / xi.sqrt());

        (wave_height_hm0 * breaking.min(non_breaking)).max(0.0)
    }
}

/// Reduction of the run-up for oblique waves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunupWaveAngleImpact {
    /// Aβ
    pub a_beta: f64,
    /// βmax (degrees)
    pub beta_max: f64,
}

impl RunupWaveAngleImpact {
    /// γβ = 1 − Aβ · min(|β|, βmax)
    #[inline]
    pub fn evaluate(&self, wave_angle: f64) -> f64 {
        1.0 - self.a_beta * wave_angle.abs().min(self.beta_max)
    }
}

/// Front velocity of a run-up tongue `wave_runup` at the location.
#[inline]
pub fn front_velocity(
    wave_runup: f64,
    vertical_distance_water_level_elevation: f64,
    front_velocity_cu: f64,
    g: f64,
) -> f64 {
    if wave_runup <= 0.0 {
        return 0.0;
    }

    let reach = ((wave_runup - vertical_distance_water_level_elevation) / wave_runup).max(0.0);
    front_velocity_cu * (g * wave_runup).sqrt() * reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::GRAVITATIONAL_ACCELERATION;
    use approx::assert_relative_eq;

    fn runup_model() -> RepresentativeWaveRunup2P {
        RepresentativeWaveRunup2P {
            aru: 1.65,
            bru: 4.0,
            cru: 1.5,
            gamma_b: 1.0,
            gamma_f: 1.0,
        }
    }

    #[test]
    fn test_breaking_branch_for_small_xi() {
        // ξ = 1: min(1.65, 4 - 1.5) = 1.65
        assert_relative_eq!(runup_model().evaluate(1.0, 2.0, 1.0), 3.3);
    }

    #[test]
    fn test_non_breaking_branch_for_large_xi() {
        // ξ = 4: min(6.6, 4 - 0.75) = 3.25
        assert_relative_eq!(runup_model().evaluate(4.0, 1.0, 1.0), 3.25);
    }

    #[test]
    fn test_runup_never_negative() {
        // Very small ξ makes the non-breaking term negative
        assert_eq!(runup_model().evaluate(0.05, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_wave_angle_impact_capped_at_beta_max() {
        let model = RunupWaveAngleImpact {
            a_beta: 0.0022,
            beta_max: 80.0,
        };
        assert_relative_eq!(model.evaluate(0.0), 1.0);
        assert_relative_eq!(model.evaluate(-45.0), 1.0 - 0.0022 * 45.0);
        assert_relative_eq!(model.evaluate(120.0), 1.0 - 0.0022 * 80.0);
    }

    #[test]
    fn test_front_velocity() {
        let g = GRAVITATIONAL_ACCELERATION;
        // At the still water level the full velocity applies
        assert_relative_eq!(front_velocity(2.0, 0.0, 1.1, g), 1.1 * (g * 2.0).sqrt());
        // Half way up the run-up tongue
        assert_relative_eq!(front_velocity(2.0, 1.0, 1.1, g), 0.5 * 1.1 * (g * 2.0).sqrt());
        // Above the run-up tongue
        assert_eq!(front_velocity(2.0, 3.0, 1.1, g), 0.0);
        assert_eq!(front_velocity(0.0, 0.0, 1.1, g), 0.0);
    }
}
