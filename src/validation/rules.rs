//! Per-quantity validation rules.
//!
//! Every rule is a pure function of the value (and, for relative rules, the
//! value it is compared against) returning `None` when the value is fine.
//! Rules never short-circuit each other; callers collect them into a
//! [`ValidationResult`](super::ValidationResult).

use super::interval::Interval;
use super::issue::ValidationIssue;

// =============================================================================
// Generic checks
// =============================================================================

/// Error if `value` lies outside `valid`.
pub fn check(name: &str, value: f64, valid: Interval) -> Option<ValidationIssue> {
    if valid.contains(value) {
        None
    } else {
        Some(ValidationIssue::error(format!(
            "{name} must be {valid}, got {value}."
        )))
    }
}

/// Error if `value` lies outside `valid`, warning if it lies outside `advised`.
pub fn check_with_warning(
    name: &str,
    value: f64,
    valid: Interval,
    advised: Interval,
) -> Option<ValidationIssue> {
    check(name, value, valid).or_else(|| {
        (!advised.contains(value)).then(|| {
            ValidationIssue::warning(format!("{name} should be {advised}, got {value}."))
        })
    })
}

// =============================================================================
// Common location rules
// =============================================================================

/// Initial damage must be non-negative.
pub fn initial_damage(value: f64) -> Option<ValidationIssue> {
    check("InitialDamage", value, Interval::at_least(0.0))
}

/// Failure number must not be smaller than the initial damage.
pub fn failure_number(value: f64, initial_damage: f64) -> Option<ValidationIssue> {
    check(
        "FailureNumber",
        value,
        Interval::at_least(initial_damage),
    )
}

/// Location strictly between the outer toe and the outer crest.
pub fn location_on_outer_slope(
    x: f64,
    outer_toe_x: f64,
    outer_crest_x: f64,
) -> Option<ValidationIssue> {
    check("X", x, Interval::open(outer_toe_x, outer_crest_x))
}

/// Location on the crest or the inner slope (outer crest up to and including the inner toe).
pub fn location_on_crest_or_inner_slope(
    x: f64,
    outer_crest_x: f64,
    inner_toe_x: f64,
) -> Option<ValidationIssue> {
    check("X", x, Interval::closed(outer_crest_x, inner_toe_x))
}

// =============================================================================
// Time-dependent input rules
// =============================================================================

/// Begin time must lie before end time.
pub fn time_step_order(begin_time: f64, end_time: f64) -> Option<ValidationIssue> {
    check("EndTime", end_time, Interval::greater_than(begin_time))
}

/// Water level must be a finite number.
pub fn water_level(value: f64) -> Option<ValidationIssue> {
    (!value.is_finite())
        .then(|| ValidationIssue::error(format!("WaterLevel must be finite, got {value}.")))
}

/// Wave height must be positive.
pub fn wave_height_hm0(value: f64) -> Option<ValidationIssue> {
    check("WaveHeightHm0", value, Interval::greater_than(0.0))
}

/// Wave period must be positive.
pub fn wave_period_tm10(value: f64) -> Option<ValidationIssue> {
    check("WavePeriodTm10", value, Interval::greater_than(0.0))
}

/// Wave angle in degrees, `(-180, 180]`.
pub fn wave_angle(value: f64) -> Option<ValidationIssue> {
    check("WaveAngle", value, Interval::open_closed(-180.0, 180.0))
}

// =============================================================================
// Grass rules (wave run-up, wave impact and wave overtopping)
// =============================================================================

pub fn outer_slope(value: f64) -> Option<ValidationIssue> {
    check("OuterSlope", value, Interval::open(0.0, 1.0))
}

pub fn critical_cumulative_overload(value: f64) -> Option<ValidationIssue> {
    check("CriticalCumulativeOverload", value, Interval::greater_than(0.0))
}

pub fn critical_front_velocity(value: f64) -> Option<ValidationIssue> {
    check("CriticalFrontVelocity", value, Interval::at_least(0.0))
}

pub fn increased_load_transition_alpha_m(value: f64) -> Option<ValidationIssue> {
    check("IncreasedLoadTransitionAlphaM", value, Interval::at_least(0.0))
}

pub fn reduced_strength_transition_alpha_s(value: f64) -> Option<ValidationIssue> {
    check("ReducedStrengthTransitionAlphaS", value, Interval::at_least(0.0))
}

pub fn average_number_of_waves_ctm(value: f64) -> Option<ValidationIssue> {
    check("AverageNumberOfWavesCtm", value, Interval::greater_than(0.0))
}

pub fn representative_wave_runup_2p_gamma_b(value: f64) -> Option<ValidationIssue> {
    check("RepresentativeWaveRunup2PGammab", value, Interval::closed(0.6, 1.0))
}

pub fn representative_wave_runup_2p_gamma_f(value: f64) -> Option<ValidationIssue> {
    check("RepresentativeWaveRunup2PGammaf", value, Interval::closed(0.5, 1.0))
}

pub fn wave_angle_impact_a_beta(value: f64) -> Option<ValidationIssue> {
    check("WaveAngleImpactAbeta", value, Interval::at_least(0.0))
}

pub fn wave_angle_impact_beta_max(value: f64) -> Option<ValidationIssue> {
    check("WaveAngleImpactBetamax", value, Interval::open_closed(0.0, 90.0))
}

pub fn fixed_number_of_waves(value: usize) -> Option<ValidationIssue> {
    // usize -> f64 is exact for every realistic wave count
    check("FixedNumberOfWaves", value as f64, Interval::greater_than(0.0))
}

pub fn front_velocity_cu(value: f64) -> Option<ValidationIssue> {
    check("FrontVelocityCu", value, Interval::greater_than(0.0))
}

pub fn transition_damage(value: f64) -> Option<ValidationIssue> {
    check("TransitionDamage", value, Interval::at_least(0.0))
}

pub fn wave_angle_impact_nwa(value: f64) -> Option<ValidationIssue> {
    check("WaveAngleImpactNwa", value, Interval::greater_than(0.0))
}

pub fn wave_angle_impact_qwa(value: f64) -> Option<ValidationIssue> {
    check("WaveAngleImpactQwa", value, Interval::closed(0.0, 1.0))
}

pub fn wave_angle_impact_rwa(value: f64) -> Option<ValidationIssue> {
    check("WaveAngleImpactRwa", value, Interval::greater_than(0.0))
}

pub fn min_wave_height_temin(value: f64) -> Option<ValidationIssue> {
    check("Temin", value, Interval::greater_than(0.0))
}

pub fn max_wave_height_temax(value: f64, temin: f64) -> Option<ValidationIssue> {
    check("Temax", value, Interval::greater_than(temin))
}

pub fn time_line_agwi(value: f64) -> Option<ValidationIssue> {
    check("TimeLineAgwi", value, Interval::greater_than(0.0))
}

pub fn time_line_bgwi(value: f64) -> Option<ValidationIssue> {
    check("TimeLineBgwi", value, Interval::less_than(0.0))
}

pub fn time_line_cgwi(value: f64) -> Option<ValidationIssue> {
    check("TimeLineCgwi", value, Interval::at_least(0.0))
}

pub fn upper_limit_loading_aul(value: f64) -> Option<ValidationIssue> {
    check("UpperLimitLoadingAul", value, Interval::at_least(0.0))
}

pub fn lower_limit_loading_all(
    value: f64,
    upper_limit_loading_aul: f64,
) -> Option<ValidationIssue> {
    check(
        "LowerLimitLoadingAll",
        value,
        Interval::greater_than(upper_limit_loading_aul),
    )
}

pub fn acceleration_alpha_a(name: &str, value: f64) -> Option<ValidationIssue> {
    check(name, value, Interval::at_least(0.0))
}

pub fn front_velocity_cwo(value: f64) -> Option<ValidationIssue> {
    check("FrontVelocityCwo", value, Interval::greater_than(0.0))
}

/// A dike height below the outer crest is allowed but suspicious.
pub fn dike_height(value: f64, outer_crest_z: f64) -> Option<ValidationIssue> {
    check_with_warning(
        "DikeHeight",
        value,
        Interval::greater_than(f64::NEG_INFINITY),
        Interval::at_least(outer_crest_z),
    )
}

// =============================================================================
// Asphalt rules
// =============================================================================

pub fn failure_tension(value: f64) -> Option<ValidationIssue> {
    check("FailureTension", value, Interval::greater_than(0.0))
}

pub fn soil_elasticity(value: f64) -> Option<ValidationIssue> {
    check("SoilElasticity", value, Interval::greater_than(0.0))
}

pub fn layer_thickness(name: &str, value: f64) -> Option<ValidationIssue> {
    check(name, value, Interval::greater_than(0.0))
}

pub fn elastic_modulus(name: &str, value: f64) -> Option<ValidationIssue> {
    check(name, value, Interval::greater_than(0.0))
}

pub fn density_of_water(value: f64) -> Option<ValidationIssue> {
    check("DensityOfWater", value, Interval::closed(950.0, 1050.0))
}

pub fn fatigue_alpha(value: f64) -> Option<ValidationIssue> {
    check("FatigueAlpha", value, Interval::greater_than(0.0))
}

pub fn fatigue_beta(value: f64) -> Option<ValidationIssue> {
    check("FatigueBeta", value, Interval::greater_than(0.0))
}

pub fn impact_number_c(value: f64) -> Option<ValidationIssue> {
    check("ImpactNumberC", value, Interval::greater_than(0.0))
}

pub fn stiffness_relation_nu(value: f64) -> Option<ValidationIssue> {
    check("StiffnessRelationNu", value, Interval::open(0.0, 0.5))
}

/// Checks a tabulated factor distribution given as `(value, probability)` pairs.
///
/// An empty table, a non strictly increasing value column or a negative
/// probability is an error; a probability sum away from one is a warning.
pub fn factor_table(name: &str, entries: &[(f64, f64)]) -> Vec<Option<ValidationIssue>> {
    if entries.is_empty() {
        return vec![Some(ValidationIssue::error(format!(
            "{name} must contain at least one entry."
        )))];
    }

    let increasing = entries.windows(2).all(|pair| pair[1].0 > pair[0].0);
    let non_negative = entries.iter().all(|&(_, probability)| probability >= 0.0);
    let sum: f64 = entries.iter().map(|&(_, probability)| probability).sum();

    vec![
        (!increasing).then(|| {
            ValidationIssue::error(format!("{name} values must be strictly increasing."))
        }),
        (!non_negative).then(|| {
            ValidationIssue::error(format!("{name} probabilities must be non-negative."))
        }),
        ((sum - 1.0).abs() > 1e-2).then(|| {
            ValidationIssue::warning(format!(
                "{name} probabilities should sum to 1, got {sum}."
            ))
        }),
    ]
}

// =============================================================================
// Natural stone rules
// =============================================================================

pub fn relative_density(value: f64) -> Option<ValidationIssue> {
    check_with_warning(
        "RelativeDensity",
        value,
        Interval::open(0.0, 10.0),
        Interval::closed(1.0, 5.0),
    )
}

pub fn thickness_top_layer(value: f64) -> Option<ValidationIssue> {
    check_with_warning(
        "ThicknessTopLayer",
        value,
        Interval::greater_than(0.0),
        Interval::closed(0.04, 1.0),
    )
}

/// Leading coefficient of a plunging or surging stability formula.
pub fn hydraulic_load_a(name: &str, value: f64) -> Option<ValidationIssue> {
    check(name, value, Interval::greater_than(0.0))
}

/// Secondary coefficient of a plunging or surging stability formula.
pub fn hydraulic_load_coefficient(name: &str, value: f64) -> Option<ValidationIssue> {
    check(name, value, Interval::at_least(0.0))
}

pub fn hydraulic_load_xib(value: f64) -> Option<ValidationIssue> {
    check("HydraulicLoadXib", value, Interval::greater_than(0.0))
}

pub fn slope_upper_level_aus(value: f64) -> Option<ValidationIssue> {
    check("SlopeUpperLevelAus", value, Interval::at_least(0.0))
}

pub fn slope_lower_level_als(value: f64) -> Option<ValidationIssue> {
    check("SlopeLowerLevelAls", value, Interval::greater_than(0.0))
}

pub fn positive_coefficient(name: &str, value: f64) -> Option<ValidationIssue> {
    check(name, value, Interval::greater_than(0.0))
}

pub fn non_negative_coefficient(name: &str, value: f64) -> Option<ValidationIssue> {
    check(name, value, Interval::at_least(0.0))
}

pub fn natural_stone_wave_angle_impact_beta_max(value: f64) -> Option<ValidationIssue> {
    check("WaveAngleImpactBetamax", value, Interval::open(0.0, 90.0))
}
