//! Grass wave impact location.

use crate::output::{GrassWaveImpactDetails, OutputDetails};
use crate::physics::grass_wave_impact::{self, ImpactWaveAngleImpact, TimeLine};
use crate::time::TimeStep;
use crate::validation::{ValidationResult, rules};

/// Coefficients of a grass wave impact location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrassWaveImpactInput {
    pub wave_angle_impact: ImpactWaveAngleImpact,
    /// Duration (s) on the time line that gives the minimum wave height
    pub min_wave_height_temax: f64,
    /// Duration (s) on the time line that gives the maximum wave height
    pub max_wave_height_temin: f64,
    pub time_line: TimeLine,
    pub upper_limit_loading_aul: f64,
    pub lower_limit_loading_all: f64,
}

impl GrassWaveImpactInput {
    pub fn validate(&self) -> ValidationResult {
        ValidationResult::from_checks([
            rules::wave_angle_impact_nwa(self.wave_angle_impact.nwa),
            rules::wave_angle_impact_qwa(self.wave_angle_impact.qwa),
            rules::wave_angle_impact_rwa(self.wave_angle_impact.rwa),
            rules::min_wave_height_temin(self.max_wave_height_temin),
            rules::max_wave_height_temax(self.min_wave_height_temax, self.max_wave_height_temin),
            rules::time_line_agwi(self.time_line.agwi),
            rules::time_line_bgwi(self.time_line.bgwi),
            rules::time_line_cgwi(self.time_line.cgwi),
            rules::upper_limit_loading_aul(self.upper_limit_loading_aul),
            rules::lower_limit_loading_all(
                self.lower_limit_loading_all,
                self.upper_limit_loading_aul,
            ),
        ])
    }

    pub(crate) fn derive(&self) -> DerivedGrassWaveImpact {
        DerivedGrassWaveImpact {
            minimum_wave_height: self.time_line.wave_height(self.min_wave_height_temax),
            maximum_wave_height: self.time_line.wave_height(self.max_wave_height_temin),
            input: self.clone(),
        }
    }
}

/// Grass wave impact input with the wave height bounds of its time line.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedGrassWaveImpact {
    pub input: GrassWaveImpactInput,
    pub minimum_wave_height: f64,
    pub maximum_wave_height: f64,
}

impl DerivedGrassWaveImpact {
    pub(crate) fn calculate(&self, z: f64, step: &TimeStep) -> (f64, OutputDetails) {
        let input = &self.input;
        let upper = grass_wave_impact::upper_limit_loading(
            step.water_level,
            step.wave_height_hm0,
            input.upper_limit_loading_aul,
        );
        let lower = grass_wave_impact::lower_limit_loading(
            step.water_level,
            step.wave_height_hm0,
            input.lower_limit_loading_all,
        );
        let loading = lower <= z && z <= upper;

        let mut details = GrassWaveImpactDetails {
            loading_revetment: loading,
            upper_limit_loading: upper,
            lower_limit_loading: lower,
            minimum_wave_height: None,
            maximum_wave_height: None,
            wave_angle_impact: None,
            wave_height_impact: None,
        };

        if !loading {
            return (0.0, OutputDetails::GrassWaveImpact(details));
        }

        let wave_angle_impact = input.wave_angle_impact.evaluate(step.wave_angle);
        let wave_height_impact = grass_wave_impact::wave_height_impact(
            self.minimum_wave_height,
            self.maximum_wave_height,
            wave_angle_impact,
            step.wave_height_hm0,
        );
        let duration = input.time_line.duration(wave_height_impact);
        let increment = grass_wave_impact::increment_damage(step.duration(), duration);

        details.minimum_wave_height = Some(self.minimum_wave_height);
        details.maximum_wave_height = Some(self.maximum_wave_height);
        details.wave_angle_impact = Some(wave_angle_impact);
        details.wave_height_impact = Some(wave_height_impact);

        (increment, OutputDetails::GrassWaveImpact(details))
    }
}
