//! Discrete Rayleigh wave run-up distribution and cumulative overload.
//!
//! The wave run-up heights of a storm are assumed Rayleigh distributed
//! around the representative 2% run-up R2%. With N equally probable waves,
//! wave k has run-up
//!
//!   R_k = R2% · √( ln(1 − k/(N+1)) / ln(0.02) )
//!
//! Each wave whose front velocity exceeds the critical velocity adds an
//! overload, and the storm damage is the cumulative overload relative to
//! the critical cumulative overload of the grass cover.

/// Load and strength transition coefficients.
///
/// αM increases the load and αS reduces the strength near transitions in
/// the revetment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionFactors {
    /// Increased load transition coefficient αM
    pub alpha_m: f64,
    /// Reduced strength transition coefficient αS
    pub alpha_s: f64,
}

impl TransitionFactors {
    /// No transition: αM = αS = 1.
    pub const NONE: Self = Self {
        alpha_m: 1.0,
        alpha_s: 1.0,
    };

    pub fn new(alpha_m: f64, alpha_s: f64) -> Self {
        Self { alpha_m, alpha_s }
    }
}

/// Run-up of wave `k` out of `n` under the Rayleigh assumption.
#[inline]
pub fn wave_runup(representative_wave_runup_2p: f64, n: f64, k: f64) -> f64 {
    representative_wave_runup_2p * ((1.0 - k / (n + 1.0)).ln() / 0.02_f64.ln()).sqrt()
}

/// Overload of a single wave, max(0, αM u² − αS uc²).
#[inline]
pub fn wave_overload(
    front_velocity: f64,
    critical_front_velocity: f64,
    factors: TransitionFactors,
) -> f64 {
    (factors.alpha_m * front_velocity * front_velocity
        - factors.alpha_s * critical_front_velocity * critical_front_velocity)
        .max(0.0)
}

/// Cumulative overload of a step.
///
/// The overload of the `fixed_number_of_waves` Rayleigh waves is summed and
/// scaled to the `average_number_of_waves` actually arriving during the
/// step. `front_velocity` maps a wave run-up to the front velocity at the
/// location.
pub fn cumulative_overload<F>(
    representative_wave_runup_2p: f64,
    fixed_number_of_waves: usize,
    average_number_of_waves: f64,
    critical_front_velocity: f64,
    factors: TransitionFactors,
    front_velocity: F,
) -> f64
where
    F: Fn(f64) -> f64,
{
    if fixed_number_of_waves == 0 || representative_wave_runup_2p <= 0.0 {
        return 0.0;
    }

    let n = fixed_number_of_waves as f64;
    let total: f64 = (1..=fixed_number_of_waves)
        .map(|k| {
            let runup = wave_runup(representative_wave_runup_2p, n, k as f64);
            wave_overload(front_velocity(runup), critical_front_velocity, factors)
        })
        .sum();

    average_number_of_waves / n * total
}

/// Damage increment from a cumulative overload.
#[inline]
pub fn increment_damage(cumulative_overload: f64, critical_cumulative_overload: f64) -> f64 {
    cumulative_overload / critical_cumulative_overload
}
