//! Grass wave run-up location, Rayleigh protocol.

use crate::output::{GrassWaveRunupDetails, OutputDetails};
use crate::physics::grass_wave_runup::{self, RepresentativeWaveRunup2P, RunupWaveAngleImpact};
use crate::physics::rayleigh::{self, TransitionFactors};
use crate::physics::{GRAVITATIONAL_ACCELERATION, hydraulic};
use crate::time::TimeStep;
use crate::validation::{ValidationResult, rules};

/// Coefficients of a grass wave run-up location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrassWaveRunupInput {
    /// tanα of the outer slope
    pub outer_slope: f64,
    pub critical_cumulative_overload: f64,
    pub critical_front_velocity: f64,
    /// Load and strength factors applied once the damage exceeds `transition_damage`
    pub transition: TransitionFactors,
    pub transition_damage: f64,
    pub average_number_of_waves_ctm: f64,
    pub representative_wave_runup_2p: RepresentativeWaveRunup2P,
    pub wave_angle_impact: RunupWaveAngleImpact,
    pub fixed_number_of_waves: usize,
    pub front_velocity_cu: f64,
}

impl GrassWaveRunupInput {
    pub fn validate(&self) -> ValidationResult {
        let runup = &self.representative_wave_runup_2p;

        ValidationResult::from_checks([
            rules::outer_slope(self.outer_slope),
            rules::critical_cumulative_overload(self.critical_cumulative_overload),
            rules::critical_front_velocity(self.critical_front_velocity),
            rules::increased_load_transition_alpha_m(self.transition.alpha_m),
            rules::reduced_strength_transition_alpha_s(self.transition.alpha_s),
            rules::transition_damage(self.transition_damage),
            rules::average_number_of_waves_ctm(self.average_number_of_waves_ctm),
            rules::representative_wave_runup_2p_gamma_b(runup.gamma_b),
            rules::representative_wave_runup_2p_gamma_f(runup.gamma_f),
            rules::wave_angle_impact_a_beta(self.wave_angle_impact.a_beta),
            rules::wave_angle_impact_beta_max(self.wave_angle_impact.beta_max),
            rules::fixed_number_of_waves(self.fixed_number_of_waves),
            rules::front_velocity_cu(self.front_velocity_cu),
        ])
    }

    /// Transition factors for a step starting at `previous_damage`.
    fn transition_factors(&self, previous_damage: f64) -> TransitionFactors {
        if previous_damage > self.transition_damage {
            self.transition
        } else {
            TransitionFactors::NONE
        }
    }

    pub(crate) fn calculate(
        &self,
        z: f64,
        previous_damage: f64,
        step: &TimeStep,
    ) -> (f64, OutputDetails) {
        let g = GRAVITATIONAL_ACCELERATION;
        let vertical_distance =
            hydraulic::vertical_distance_water_level_elevation(z, step.water_level);

        let mut details = GrassWaveRunupDetails {
            vertical_distance_water_level_elevation: vertical_distance,
            wave_angle_impact: None,
            representative_wave_runup_2p: None,
            cumulative_overload: None,
            average_number_of_waves: None,
        };

        // Below the water level the run-up tongue does not load the cover
        if vertical_distance < 0.0 {
            return (0.0, OutputDetails::GrassWaveRunup(details));
        }

        let wave_angle_impact = self.wave_angle_impact.evaluate(step.wave_angle);
        let xi = hydraulic::surf_similarity_parameter(
            self.outer_slope,
            step.wave_height_hm0,
            step.wave_period_tm10,
            g,
        );
        let runup_2p = self
            .representative_wave_runup_2p
            .evaluate(xi, step.wave_height_hm0, wave_angle_impact);
        let average_number_of_waves = hydraulic::average_number_of_waves(
            step.duration(),
            step.wave_period_tm10,
            self.average_number_of_waves_ctm,
        );

        let cumulative_overload = rayleigh::cumulative_overload(
            runup_2p,
            self.fixed_number_of_waves,
            average_number_of_waves,
            self.critical_front_velocity,
            self.transition_factors(previous_damage),
            |runup| {
                grass_wave_runup::front_velocity(
                    runup,
                    vertical_distance,
                    self.front_velocity_cu,
                    g,
                )
            },
        );
        let increment =
            rayleigh::increment_damage(cumulative_overload, self.critical_cumulative_overload);

        details.wave_angle_impact = Some(wave_angle_impact);
        details.representative_wave_runup_2p = Some(runup_2p);
        details.cumulative_overload = Some(cumulative_overload);
        details.average_number_of_waves = Some(average_number_of_waves);

        (increment, OutputDetails::GrassWaveRunup(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{GrassWaveRunupDefaults, TopLayerType};

    fn closed_sod(outer_slope: f64) -> GrassWaveRunupInput {
        let defaults = GrassWaveRunupDefaults::try_from(TopLayerType::GrassClosedSod).unwrap();
        GrassWaveRunupInput {
            outer_slope,
            critical_cumulative_overload: defaults.critical_cumulative_overload,
            critical_front_velocity: defaults.critical_front_velocity,
            transition: defaults.transition,
            transition_damage: defaults.transition_damage,
            average_number_of_waves_ctm: defaults.average_number_of_waves_ctm,
            representative_wave_runup_2p: defaults.representative_wave_runup_2p,
            wave_angle_impact: defaults.wave_angle_impact,
            fixed_number_of_waves: 1000,
            front_velocity_cu: defaults.front_velocity_cu,
        }
    }

    fn storm() -> TimeStep {
        TimeStep::new(0.0, 3600.0, 0.0, 2.0, 6.0, 0.0)
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(closed_sod(0.25).validate().successful());
    }

    #[test]
    fn test_gamma_b_out_of_range() {
        let mut input = closed_sod(0.25);
        input.representative_wave_runup_2p.gamma_b = 0.5;
        let result = input.validate();
        assert!(!result.successful());
        assert_eq!(result.errors().count(), 1);
    }

    #[test]
    fn test_no_load_below_water_level() {
        let (increment, details) = closed_sod(0.25).calculate(-0.5, 0.0, &storm());
        assert_eq!(increment, 0.0);
        let OutputDetails::GrassWaveRunup(details) = details else {
            panic!("wrong details variant");
        };
        assert!(details.representative_wave_runup_2p.is_none());
    }

    #[test]
    fn test_damage_decreases_higher_up_the_slope() {
        let input = closed_sod(0.25);
        let (low, _) = input.calculate(0.5, 0.0, &storm());
        let (high, _) = input.calculate(2.5, 0.0, &storm());
        assert!(low > 0.0);
        assert!(high < low);
        assert!(high >= 0.0);
    }

    #[test]
    fn test_transition_factors_switch_on_after_transition_damage() {
        let mut input = closed_sod(0.25);
        input.transition = TransitionFactors::new(1.5, 1.0);

        let (before, _) = input.calculate(0.5, 0.0, &storm());
        let (after, _) = input.calculate(0.5, 0.1, &storm());
        assert!(after > before);
    }
}
