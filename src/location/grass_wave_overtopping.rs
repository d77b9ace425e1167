//! Grass wave overtopping location on the crest or inner slope, Rayleigh protocol.

use super::DerivationError;
use crate::output::{GrassWaveOvertoppingDetails, OutputDetails};
use crate::physics::grass_wave_overtopping::{self, AccelerationAlphaA};
use crate::physics::grass_wave_runup::{RepresentativeWaveRunup2P, RunupWaveAngleImpact};
use crate::physics::rayleigh::{self, TransitionFactors};
use crate::physics::{GRAVITATIONAL_ACCELERATION, hydraulic};
use crate::profile::{CharacteristicPointType, ProfileData};
use crate::time::TimeStep;
use crate::validation::{ValidationIssue, ValidationResult, rules};

/// Coefficients of a grass wave overtopping location.
///
/// The run-up of the overtopping waves is computed on the outer slope of
/// the profile: its average gradient replaces an outer slope input and its
/// average roughness replaces γf of `representative_wave_runup_2p`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrassWaveOvertoppingInput {
    pub critical_cumulative_overload: f64,
    pub critical_front_velocity: f64,
    pub transition: TransitionFactors,
    pub acceleration_alpha_a: AccelerationAlphaA,
    pub fixed_number_of_waves: usize,
    pub front_velocity_cwo: f64,
    pub average_number_of_waves_ctm: f64,
    pub representative_wave_runup_2p: RepresentativeWaveRunup2P,
    pub wave_angle_impact: RunupWaveAngleImpact,
    /// Crest level used for the freeboard; the outer crest when absent
    pub dike_height: Option<f64>,
}

impl GrassWaveOvertoppingInput {
    pub fn validate(&self, profile: &ProfileData) -> ValidationResult {
        let mut result = ValidationResult::from_checks([
            rules::critical_cumulative_overload(self.critical_cumulative_overload),
            rules::critical_front_velocity(self.critical_front_velocity),
            rules::increased_load_transition_alpha_m(self.transition.alpha_m),
            rules::reduced_strength_transition_alpha_s(self.transition.alpha_s),
            rules::acceleration_alpha_a("AccelerationAlphaACrest", self.acceleration_alpha_a.crest),
            rules::acceleration_alpha_a(
                "AccelerationAlphaAInnerSlope",
                self.acceleration_alpha_a.inner_slope,
            ),
            rules::fixed_number_of_waves(self.fixed_number_of_waves),
            rules::front_velocity_cwo(self.front_velocity_cwo),
            rules::average_number_of_waves_ctm(self.average_number_of_waves_ctm),
            rules::representative_wave_runup_2p_gamma_b(self.representative_wave_runup_2p.gamma_b),
            rules::wave_angle_impact_a_beta(self.wave_angle_impact.a_beta),
            rules::wave_angle_impact_beta_max(self.wave_angle_impact.beta_max),
        ]);

        match profile.average_outer_roughness() {
            Some(roughness) => result.extend([rules::representative_wave_runup_2p_gamma_f(roughness)
                .map(|issue| issue.with_context("Average outer roughness"))]),
            None => result.push(ValidationIssue::error(
                "The profile has no outer slope between the outer toe and the outer crest.",
            )),
        }

        if let (Some(dike_height), Some(crest)) = (self.dike_height, profile.outer_crest()) {
            result.extend([rules::dike_height(dike_height, crest.z)]);
        }

        result
    }

    pub(crate) fn derive(
        &self,
        x: f64,
        profile: &ProfileData,
    ) -> Result<DerivedGrassWaveOvertopping, DerivationError> {
        let outer_crest = profile.outer_crest().ok_or(
            DerivationError::MissingCharacteristicPoint(CharacteristicPointType::OuterCrest),
        )?;
        let inner_crest = profile
            .characteristic_point(CharacteristicPointType::InnerCrest)
            .ok_or(DerivationError::MissingCharacteristicPoint(
                CharacteristicPointType::InnerCrest,
            ))?;
        let outer_slope = profile.average_outer_slope().ok_or(DerivationError::NoOuterSlope)?;
        let roughness = profile.average_outer_roughness().ok_or(DerivationError::NoOuterSlope)?;

        let acceleration_alpha_a = if x <= inner_crest.x {
            self.acceleration_alpha_a.crest
        } else {
            self.acceleration_alpha_a.inner_slope
        };

        Ok(DerivedGrassWaveOvertopping {
            outer_slope,
            dike_height: self.dike_height.unwrap_or(outer_crest.z),
            acceleration_alpha_a,
            representative_wave_runup_2p: RepresentativeWaveRunup2P {
                gamma_f: roughness,
                ..self.representative_wave_runup_2p
            },
            input: self.clone(),
        })
    }
}

/// Grass wave overtopping input resolved against the profile.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedGrassWaveOvertopping {
    pub input: GrassWaveOvertoppingInput,
    /// Average gradient of the outer slope
    pub outer_slope: f64,
    pub dike_height: f64,
    /// αA at the location
    pub acceleration_alpha_a: f64,
    /// Run-up model with γf from the profile roughness
    pub representative_wave_runup_2p: RepresentativeWaveRunup2P,
}

impl DerivedGrassWaveOvertopping {
    pub(crate) fn calculate(&self, step: &TimeStep) -> (f64, OutputDetails) {
        let g = GRAVITATIONAL_ACCELERATION;
        let input = &self.input;
        let freeboard = grass_wave_overtopping::freeboard(self.dike_height, step.water_level);

        let mut details = GrassWaveOvertoppingDetails {
            freeboard,
            wave_angle_impact: None,
            representative_wave_runup_2p: None,
            cumulative_overload: None,
            average_number_of_waves: None,
        };

        // Overflow is not modelled
        if freeboard < 0.0 {
            return (0.0, OutputDetails::GrassWaveOvertopping(details));
        }

        let wave_angle_impact = input.wave_angle_impact.evaluate(step.wave_angle);
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
            input.average_number_of_waves_ctm,
        );

        let cumulative_overload = rayleigh::cumulative_overload(
            runup_2p,
            input.fixed_number_of_waves,
            average_number_of_waves,
            input.critical_front_velocity,
            input.transition,
            |runup| {
                grass_wave_overtopping::front_velocity(
                    runup,
                    freeboard,
                    self.acceleration_alpha_a,
                    input.front_velocity_cwo,
                    g,
                )
            },
        );
        let increment =
            rayleigh::increment_damage(cumulative_overload, input.critical_cumulative_overload);

        details.wave_angle_impact = Some(wave_angle_impact);
        details.representative_wave_runup_2p = Some(runup_2p);
        details.cumulative_overload = Some(cumulative_overload);
        details.average_number_of_waves = Some(average_number_of_waves);

        (increment, OutputDetails::GrassWaveOvertopping(details))
    }
}
