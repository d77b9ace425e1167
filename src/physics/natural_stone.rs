//! Stability of a placed natural stone revetment.
//!
//! The hydraulic load on the top layer depends on the breaker type:
//!
//!   Hm0 / (A ξ^N + B ξ + C)
//!
//! with plunging coefficients (Ap, Bp, Cp, Np) for ξ < Xib and surging
//! coefficients (As, Bs, Cs, Ns) otherwise. The resistance is Δ·D.
//! Damage develops with a degradation curve in the number of waves:
//!
//!   damage(t) = F · γβ · (t / (1000 Tm))^0.1
//!
//! A step advances the curve from the reference time that reproduces the
//! damage already present.

/// Coefficients of the hydraulic load for one breaker type.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub n: f64,
}

impl LoadCoefficients {
    #[inline]
    fn denominator(&self, xi: f64) -> f64 {
        self.a * xi.powf(self.n) + self.b * xi + self.c
    }
}

/// Hydraulic load sub-model.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HydraulicLoad {
    pub plunging: LoadCoefficients,
    pub surging: LoadCoefficients,
    /// Xib, surf similarity parameter separating the two branches
    pub xib: f64,
}

impl HydraulicLoad {
    /// Hydraulic load (m) for surf similarity parameter `xi`.
    pub fn evaluate(&self, xi: f64, wave_height_hm0: f64) -> f64 {
        let coefficients = if xi < self.xib { &self.plunging } else { &self.surging };
        wave_height_hm0 / coefficients.denominator(xi)
    }
}

/// Levels bracketing the slope section that governs the local slope.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlopeLevels {
    /// Aus
    pub upper: f64,
    /// Als
    pub lower: f64,
}

impl SlopeLevels {
    #[inline]
    pub fn upper_level(&self, water_level: f64, wave_height_hm0: f64) -> f64 {
        water_level + self.upper * wave_height_hm0
    }

    #[inline]
    pub fn lower_level(&self, water_level: f64, wave_height_hm0: f64) -> f64 {
        water_level - self.lower * wave_height_hm0
    }
}

/// Coefficients of the loaded zone on the slope.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LimitLoading {
    pub aul: f64,
    pub bul: f64,
    pub cul: f64,
    pub all: f64,
    pub bll: f64,
    pub cll: f64,
}

impl LimitLoading {
    /// Upper limit of the loaded zone.
    pub fn upper(
        &self,
        water_level: f64,
        wave_height_hm0: f64,
        xi: f64,
        depth_maximum_wave_load: f64,
    ) -> f64 {
        let d = depth_maximum_wave_load;
        water_level - 2.0 * d
            + (d + self.aul * wave_height_hm0).max(self.bul * wave_height_hm0 * xi.min(self.cul))
    }

    /// Lower limit of the loaded zone.
    pub fn lower(
        &self,
        water_level: f64,
        wave_height_hm0: f64,
        xi: f64,
        depth_maximum_wave_load: f64,
    ) -> f64 {
        let d = depth_maximum_wave_load;
        water_level - 2.0 * d
            + (d - self.all * wave_height_hm0).min(self.bll * wave_height_hm0 * xi.min(self.cll))
    }
}

/// Horizontal distance of the maximum wave elevation, Asmax · Hm0 · s0^(−Bsmax/2).
#[inline]
pub fn distance_maximum_wave_elevation(
    wave_height_hm0: f64,
    wave_steepness_deep_water: f64,
    asmax: f64,
    bsmax: f64,
) -> f64 {
    asmax * wave_height_hm0 * wave_steepness_deep_water.powf(-0.5 * bsmax)
}

/// Normative width of the wave impact, (Awi − Bwi ξ) · Hm0.
#[inline]
pub fn normative_width_wave_impact(xi: f64, wave_height_hm0: f64, awi: f64, bwi: f64) -> f64 {
    (awi - bwi * xi) * wave_height_hm0
}

/// Depth of the maximum wave load below the water level.
#[inline]
pub fn depth_maximum_wave_load(
    distance_maximum_wave_elevation: f64,
    normative_width: f64,
    slope_angle: f64,
) -> f64 {
    (distance_maximum_wave_elevation - 0.5 * normative_width * slope_angle.cos())
        * slope_angle.tan()
}

/// γβ = cos(min(|β|, βmax))^(2/3)
#[inline]
pub fn wave_angle_impact(wave_angle: f64, beta_max: f64) -> f64 {
    wave_angle.abs().min(beta_max).to_radians().cos().powf(2.0 / 3.0)
}

/// Hydraulic load over resistance.
#[inline]
pub fn stability_factor(
    hydraulic_load: f64,
    relative_density: f64,
    thickness_top_layer: f64,
) -> f64 {
    hydraulic_load / (relative_density * thickness_top_layer)
}

/// Time (s) on the degradation curve at which `damage` is reached.
#[inline]
pub fn reference_time_degradation(
    damage: f64,
    stability_factor: f64,
    wave_angle_impact: f64,
    wave_period_tm10: f64,
) -> f64 {
    1000.0 * wave_period_tm10 * (damage / (stability_factor * wave_angle_impact)).powi(10)
}

/// Damage increment of advancing the degradation curve by `increment_time`.
pub fn increment_damage(
    reference_time: f64,
    increment_time: f64,
    stability_factor: f64,
    wave_angle_impact: f64,
    wave_period_tm10: f64,
) -> f64 {
    let scale = stability_factor * wave_angle_impact;
    if scale <= 0.0 {
        return 0.0;
    }

    let waves = 1000.0 * wave_period_tm10;
    let before = (reference_time / waves).powf(0.1);
    let after = ((reference_time + increment_time) / waves).powf(0.1);
    scale * (after - before)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn nordic_load() -> HydraulicLoad {
        HydraulicLoad {
            plunging: LoadCoefficients {
                a: 4.0,
                b: 0.0,
                c: 0.0,
                n: -0.9,
            },
            surging: LoadCoefficients {
                a: 0.8,
                b: 0.0,
                c: 0.0,
                n: 0.6,
            },
            xib: 2.9,
        }
    }

    #[test]
    fn test_hydraulic_load_branches() {
        let load = nordic_load();
        assert_relative_eq!(load.evaluate(1.0, 2.0), 0.5);
        assert_relative_eq!(
            load.evaluate(3.0, 1.0),
            1.0 / (0.8 * 3.0_f64.powf(0.6)),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_slope_levels() {
        let levels = SlopeLevels { upper: 0.05, lower: 1.5 };
        assert_relative_eq!(levels.upper_level(1.0, 2.0), 1.1);
        assert_relative_eq!(levels.lower_level(1.0, 2.0), -2.0);
    }

    #[test]
    fn test_limit_loading_brackets_the_water_level() {
        let limits = LimitLoading {
            aul: 0.1,
            bul: 0.6,
            cul: 4.0,
            all: 0.1,
            bll: 0.2,
            cll: 4.0,
        };
        let upper = limits.upper(0.0, 1.0, 2.0, 0.3);
        let lower = limits.lower(0.0, 1.0, 2.0, 0.3);
        assert!(lower < upper);
        // -0.6 + max(0.4, 1.2)
        assert_relative_eq!(upper, 0.6, max_relative = 1e-12);
        // -0.6 + min(0.2, 0.4)
        assert_relative_eq!(lower, -0.4, max_relative = 1e-12);
    }

    #[test]
    fn test_wave_angle_impact() {
        assert_relative_eq!(wave_angle_impact(0.0, 78.0), 1.0);
        assert_relative_eq!(
            wave_angle_impact(-60.0, 78.0),
            0.5_f64.powf(2.0 / 3.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(wave_angle_impact(90.0, 78.0), wave_angle_impact(78.0, 78.0));
    }

    #[test]
    fn test_degradation_continues_from_reference_time() {
        let (factor, gamma, tm10) = (0.8, 1.0, 5.0);

        // One step of 2Δt equals two steps of Δt
        let whole = increment_damage(0.0, 7200.0, factor, gamma, tm10);

        let first = increment_damage(0.0, 3600.0, factor, gamma, tm10);
        let reference = reference_time_degradation(first, factor, gamma, tm10);
        let second = increment_damage(reference, 3600.0, factor, gamma, tm10);

        assert_relative_eq!(first + second, whole, max_relative = 1e-9);
    }

    #[test]
    fn test_no_increment_without_load() {
        assert_eq!(increment_damage(0.0, 3600.0, 0.0, 1.0, 5.0), 0.0);
    }
}
