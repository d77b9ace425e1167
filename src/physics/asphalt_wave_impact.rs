//! Fatigue of an asphalt revetment under wave impacts.
//!
//! The asphalt layer is modelled as an infinite beam on an elastic
//! foundation. A wave impact is a uniform pressure q over a width w
//! centred at distance d (along the slope) from the location. With the
//! stiffness relation
//!
//!   β = (3 k (1 − ν²) / (E h³))^(1/4)
//!
//! the bending moment at the location is (Hetényi)
//!
//!   M = q / (4β²) · ψ(β, d, w)
//!   ψ = B(β(w/2 + d)) + B(β(w/2 − d))     inside the loaded width
//!   ψ = B(β(d + w/2)) − B(β(d − w/2))     outside the loaded width
//!   B(x) = e^(−x) sin x
//!
//! giving a bending stress σ = 6M / h². Each impact consumes a fraction
//!
//!   10^(−β_f · max(0, log σ_b − log σ)^α_f)
//!
//! of the fatigue life (Miner's rule).

/// Fatigue power-law coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fatigue {
    /// α
    pub alpha: f64,
    /// β
    pub beta: f64,
}

/// log10 of the failure tension (MPa).
#[inline]
pub fn log_failure_tension(failure_tension: f64) -> f64 {
    failure_tension.log10()
}

/// Thickness of the upper layer with the sub-layer converted to upper-layer stiffness.
///
/// h = h1 + h2 · (E2 / E1)^(1/3); pass `thickness_sub_layer = 0` without sub-layer.
#[inline]
pub fn computational_thickness(
    thickness_upper_layer: f64,
    elastic_modulus_upper_layer: f64,
    thickness_sub_layer: f64,
    elastic_modulus_sub_layer: f64,
) -> f64 {
    thickness_upper_layer
        + thickness_sub_layer * (elastic_modulus_sub_layer / elastic_modulus_upper_layer).cbrt()
}

/// Stiffness relation β (1/m) of the layer on its foundation.
#[inline]
pub fn stiffness_relation(
    computational_thickness: f64,
    equivalent_elastic_modulus: f64,
    soil_elasticity: f64,
    stiffness_relation_nu: f64,
) -> f64 {
    let numerator = 3.0 * soil_elasticity * (1.0 - stiffness_relation_nu * stiffness_relation_nu);
    let denominator = equivalent_elastic_modulus * computational_thickness.powi(3);
    (numerator / denominator).powf(0.25)
}

/// Impact pressure scale ρ g Hm0, in MPa.
#[inline]
pub fn maximum_peak_stress(wave_height_hm0: f64, g: f64, density_of_water: f64) -> f64 {
    density_of_water * g * wave_height_hm0 / 1.0e6
}

/// Distance along the slope between the location and the impact centre.
#[inline]
pub fn distance_along_slope(z: f64, z_impact: f64, outer_slope: f64) -> f64 {
    (z - z_impact).abs() / outer_slope.atan().sin()
}

#[inline]
fn decaying_sine(x: f64) -> f64 {
    (-x).exp() * x.sin()
}

/// Dimensionless bending moment distribution ψ.
pub fn spatial_distribution_bending_stress(
    stiffness_relation: f64,
    distance: f64,
    width: f64,
) -> f64 {
    let half_width = 0.5 * width;
    let distance = distance.abs();

    if distance <= half_width {
        decaying_sine(stiffness_relation * (half_width + distance))
            + decaying_sine(stiffness_relation * (half_width - distance))
    } else {
        decaying_sine(stiffness_relation * (distance + half_width))
            - decaying_sine(stiffness_relation * (distance - half_width))
    }
}

/// Bending stress magnitude (MPa) for an impact pressure `impact_pressure` (MPa).
#[inline]
pub fn bending_stress(
    impact_pressure: f64,
    stiffness_relation: f64,
    computational_thickness: f64,
    spatial_distribution: f64,
) -> f64 {
    let moment =
        impact_pressure * spatial_distribution / (4.0 * stiffness_relation * stiffness_relation);
    (6.0 * moment / (computational_thickness * computational_thickness)).abs()
}

impl Fatigue {
    /// Fraction of the fatigue life consumed by one load of `bending_stress`.
    pub fn consumption(&self, log_failure_tension: f64, bending_stress: f64) -> f64 {
        if bending_stress <= 0.0 {
            return 0.0;
        }
        let margin = (log_failure_tension - bending_stress.log10()).max(0.0);
        10.0_f64.powf(-self.beta * margin.powf(self.alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_computational_thickness_without_sub_layer() {
        assert_relative_eq!(computational_thickness(0.3, 18000.0, 0.0, 0.0), 0.3);
    }

    #[test]
    fn test_computational_thickness_with_sub_layer() {
        // E2 / E1 = 1/8 -> factor 0.5
        assert_relative_eq!(computational_thickness(0.3, 16000.0, 0.2, 2000.0), 0.4);
    }

    #[test]
    fn test_stiffness_relation_decreases_with_thickness() {
        let thin = stiffness_relation(0.2, 18000.0, 56.0, 0.35);
        let thick = stiffness_relation(0.4, 18000.0, 56.0, 0.35);
        assert!(thin > thick);
        assert_relative_eq!(thin / thick, 2.0_f64.powf(0.75), max_relative = 1e-12);
    }

    #[test]
    fn test_peak_stress_units() {
        // 1 m of sea water: about 10 kPa
        assert_relative_eq!(
            maximum_peak_stress(1.0, 9.81, 1025.0),
            0.01005525,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_distance_along_slope() {
        // 1:1 slope: along-slope distance is √2 times the height difference
        assert_relative_eq!(
            distance_along_slope(1.0, 0.0, 1.0),
            2.0_f64.sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_spatial_distribution_is_continuous_at_the_edge() {
        let beta = 0.7;
        let width = 1.0;
        let inside = spatial_distribution_bending_stress(beta, 0.5 - 1e-9, width);
        let outside = spatial_distribution_bending_stress(beta, 0.5 + 1e-9, width);
        assert_relative_eq!(inside, outside, epsilon = 1e-6);
    }

    #[test]
    fn test_spatial_distribution_decays_far_away() {
        let near = spatial_distribution_bending_stress(0.7, 0.0, 1.0).abs();
        let far = spatial_distribution_bending_stress(0.7, 20.0, 1.0).abs();
        assert!(far < 1e-3 * near);
    }

    #[test]
    fn test_fatigue_consumption() {
        let fatigue = Fatigue { alpha: 0.42, beta: 4.76 };
        let log_tension = log_failure_tension(1.6);

        // Stress at the failure tension: one load is enough
        assert_relative_eq!(fatigue.consumption(log_tension, 1.6), 1.0);
        // Lower stress consumes less
        let low = fatigue.consumption(log_tension, 0.2);
        assert!(low > 0.0 && low < 1e-2);
        assert_eq!(fatigue.consumption(log_tension, 0.0), 0.0);
    }
}
