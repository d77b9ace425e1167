//! Grass cover erosion by direct wave impact.
//!
//! The grass cover is loaded while the location lies in a band just below
//! the still water level:
//!
//!   WL − All · Hm0 ≤ z ≤ WL − Aul · Hm0
//!
//! Time to failure follows an empirical time line between the wave height
//! and the duration a grass cover withstands it:
//!
//!   H(t) = Agwi · e^(Bgwi t) + Cgwi   ⇔   t = ln((H − Cgwi) / Agwi) / Bgwi
//!
//! The damage increment of a loaded step is Δt / t(H_impact).

/// Empirical time line of the grass cover strength.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeLine {
    /// Agwi (m)
    pub agwi: f64,
    /// Bgwi (1/s), negative
    pub bgwi: f64,
    /// Cgwi (m)
    pub cgwi: f64,
}

impl TimeLine {
    /// Wave height the cover withstands for `duration` seconds.
    #[inline]
    pub fn wave_height(&self, duration: f64) -> f64 {
        self.agwi * (self.bgwi * duration).exp() + self.cgwi
    }

    /// Duration the cover withstands waves of height `wave_height_impact`.
    #[inline]
    pub fn duration(&self, wave_height_impact: f64) -> f64 {
        ((wave_height_impact - self.cgwi) / self.agwi).ln() / self.bgwi
    }
}

/// Reduction of the impact for oblique waves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImpactWaveAngleImpact {
    /// Nwa
    pub nwa: f64,
    /// Qwa
    pub qwa: f64,
    /// Rwa (degrees)
    pub rwa: f64,
}

impl ImpactWaveAngleImpact {
    /// Impact factor for wave angle `wave_angle` (degrees).
    ///
    /// For |β| ≤ 90° this is max(Qwa, cos(β)^Nwa); beyond 90° it tapers
    /// linearly from Qwa to zero over Rwa degrees.
    pub fn evaluate(&self, wave_angle: f64) -> f64 {
        let beta = wave_angle.abs();
        if beta <= 90.0 {
            self.qwa.max(beta.to_radians().cos().powf(self.nwa))
        } else {
            self.qwa * ((90.0 + self.rwa - beta) / self.rwa).max(0.0)
        }
    }
}

/// Upper boundary of the loaded zone.
#[inline]
pub fn upper_limit_loading(
    water_level: f64,
    wave_height_hm0: f64,
    upper_limit_loading_aul: f64,
) -> f64 {
    water_level - upper_limit_loading_aul * wave_height_hm0
}

/// Lower boundary of the loaded zone.
#[inline]
pub fn lower_limit_loading(
    water_level: f64,
    wave_height_hm0: f64,
    lower_limit_loading_all: f64,
) -> f64 {
    water_level - lower_limit_loading_all * wave_height_hm0
}

/// Wave height used in the time line, clipped to the time line's validity range.
#[inline]
pub fn wave_height_impact(
    minimum_wave_height: f64,
    maximum_wave_height: f64,
    wave_angle_impact: f64,
    wave_height_hm0: f64,
) -> f64 {
    (wave_angle_impact * wave_height_hm0)
        .max(minimum_wave_height)
        .min(maximum_wave_height)
}

/// Damage increment of a loaded step. Zero when the time line gives no
/// positive duration.
#[inline]
pub fn increment_damage(increment_time: f64, time_line_duration: f64) -> f64 {
    if time_line_duration > 0.0 {
        increment_time / time_line_duration
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn closed_sod() -> TimeLine {
        TimeLine {
            agwi: 1.0,
            bgwi: -0.000009722,
            cgwi: 0.25,
        }
    }

    #[test]
    fn test_time_line_inverts() {
        let line = closed_sod();
        let h = line.wave_height(3600.0);
        assert_relative_eq!(line.duration(h), 3600.0, max_relative = 1e-9);
    }

    #[test]
    fn test_time_line_bounds_are_ordered() {
        let line = closed_sod();
        let minimum = line.wave_height(3_600_000.0);
        let maximum = line.wave_height(3.6);
        assert!(minimum < maximum);
        assert!(minimum > line.cgwi);
    }

    #[test]
    fn test_wave_height_impact_is_clipped() {
        assert_eq!(wave_height_impact(0.3, 1.2, 1.0, 0.1), 0.3);
        assert_eq!(wave_height_impact(0.3, 1.2, 1.0, 2.0), 1.2);
        assert_relative_eq!(wave_height_impact(0.3, 1.2, 0.5, 1.0), 0.5);
    }

    #[test]
    fn test_wave_angle_impact() {
        let model = ImpactWaveAngleImpact {
            nwa: 2.0 / 3.0,
            qwa: 0.35,
            rwa: 10.0,
        };
        assert_relative_eq!(model.evaluate(0.0), 1.0);
        assert_relative_eq!(model.evaluate(60.0), 0.5_f64.powf(2.0 / 3.0), max_relative = 1e-12);
        assert_relative_eq!(model.evaluate(89.0), 0.35);
        assert_relative_eq!(model.evaluate(95.0), 0.175);
        assert_eq!(model.evaluate(120.0), 0.0);
    }

    #[test]
    fn test_increment_damage_needs_positive_duration() {
        assert_relative_eq!(increment_damage(3600.0, 7200.0), 0.5);
        assert_eq!(increment_damage(3600.0, 0.0), 0.0);
        assert_eq!(increment_damage(3600.0, -0.0), 0.0);
        assert_eq!(increment_damage(3600.0, f64::NAN), 0.0);

        // Temin = 0 puts the clipped wave height on the time line's zero-duration end.
        let line = closed_sod();
        let maximum = line.wave_height(0.0);
        assert_eq!(increment_damage(3600.0, line.duration(maximum)), 0.0);
    }

    #[test]
    fn test_loading_band() {
        let upper = upper_limit_loading(2.0, 1.0, 0.0);
        let lower = lower_limit_loading(2.0, 1.0, 0.5);
        assert_relative_eq!(upper, 2.0);
        assert_relative_eq!(lower, 1.5);
    }
}
