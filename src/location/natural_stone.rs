//! Natural stone location.

use super::DerivationError;
use crate::output::{NaturalStoneDetails, OutputDetails};
use crate::physics::natural_stone::{self, HydraulicLoad, LimitLoading, SlopeLevels};
use crate::physics::{GRAVITATIONAL_ACCELERATION, hydraulic};
use crate::profile::{CharacteristicPointType, ProfileData, ProfilePoint};
use crate::time::TimeStep;
use crate::validation::{ValidationResult, rules};

/// Coefficients of a natural stone location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaturalStoneInput {
    /// Relative density Δ of the stone
    pub relative_density: f64,
    /// Thickness D of the top layer (m)
    pub thickness_top_layer: f64,
    pub hydraulic_load: HydraulicLoad,
    pub slope: SlopeLevels,
    pub limit_loading: LimitLoading,
    pub distance_maximum_wave_elevation_asmax: f64,
    pub distance_maximum_wave_elevation_bsmax: f64,
    pub normative_width_of_wave_impact_awi: f64,
    pub normative_width_of_wave_impact_bwi: f64,
    pub wave_angle_impact_beta_max: f64,
}

impl NaturalStoneInput {
    pub fn validate(&self) -> ValidationResult {
        let load = &self.hydraulic_load;

        ValidationResult::from_checks([
            rules::relative_density(self.relative_density),
            rules::thickness_top_layer(self.thickness_top_layer),
            rules::hydraulic_load_a("HydraulicLoadAp", load.plunging.a),
            rules::hydraulic_load_coefficient("HydraulicLoadBp", load.plunging.b),
            rules::hydraulic_load_coefficient("HydraulicLoadCp", load.plunging.c),
            rules::hydraulic_load_a("HydraulicLoadAs", load.surging.a),
            rules::hydraulic_load_coefficient("HydraulicLoadBs", load.surging.b),
            rules::hydraulic_load_coefficient("HydraulicLoadCs", load.surging.c),
            rules::hydraulic_load_xib(load.xib),
            rules::slope_upper_level_aus(self.slope.upper),
            rules::slope_lower_level_als(self.slope.lower),
            rules::positive_coefficient(
                "DistanceMaximumWaveElevationAsmax",
                self.distance_maximum_wave_elevation_asmax,
            ),
            rules::positive_coefficient(
                "DistanceMaximumWaveElevationBsmax",
                self.distance_maximum_wave_elevation_bsmax,
            ),
            rules::positive_coefficient(
                "NormativeWidthOfWaveImpactAwi",
                self.normative_width_of_wave_impact_awi,
            ),
            rules::non_negative_coefficient(
                "NormativeWidthOfWaveImpactBwi",
                self.normative_width_of_wave_impact_bwi,
            ),
            rules::natural_stone_wave_angle_impact_beta_max(self.wave_angle_impact_beta_max),
        ])
    }

    pub(crate) fn derive(
        &self,
        profile: &ProfileData,
    ) -> Result<DerivedNaturalStone, DerivationError> {
        let outer_toe = profile.outer_toe().ok_or(DerivationError::MissingCharacteristicPoint(
            CharacteristicPointType::OuterToe,
        ))?;
        let outer_crest = profile.outer_crest().ok_or(
            DerivationError::MissingCharacteristicPoint(CharacteristicPointType::OuterCrest),
        )?;
        let average_outer_slope = profile
            .average_outer_slope()
            .filter(|slope| *slope > 0.0)
            .ok_or(DerivationError::NoOuterSlope)?;

        Ok(DerivedNaturalStone {
            input: self.clone(),
            outer_toe,
            outer_crest,
            average_outer_slope,
        })
    }
}

/// Natural stone input with the outer slope bounds of the profile.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedNaturalStone {
    pub input: NaturalStoneInput,
    pub outer_toe: ProfilePoint,
    pub outer_crest: ProfilePoint,
    /// Fallback when the slope levels do not span a section of the profile
    pub average_outer_slope: f64,
}

impl DerivedNaturalStone {
    /// Gradient of the profile between the slope levels of this step.
    fn outer_slope(&self, step: &TimeStep, profile: &ProfileData) -> f64 {
        let levels = &self.input.slope;
        let clamp = |z: f64| z.max(self.outer_toe.z).min(self.outer_crest.z);

        let upper_z = clamp(levels.upper_level(step.water_level, step.wave_height_hm0));
        let lower_z = clamp(levels.lower_level(step.water_level, step.wave_height_hm0));

        match (
            profile.interpolate_horizontal_position(upper_z),
            profile.interpolate_horizontal_position(lower_z),
        ) {
            (Some(upper_x), Some(lower_x)) if upper_x > lower_x && upper_z > lower_z => {
                (upper_z - lower_z) / (upper_x - lower_x)
            }
            _ => self.average_outer_slope,
        }
    }

    pub(crate) fn calculate(
        &self,
        z: f64,
        previous_damage: f64,
        step: &TimeStep,
        profile: &ProfileData,
    ) -> (f64, OutputDetails) {
        let input = &self.input;
        let g = GRAVITATIONAL_ACCELERATION;
        let hm0 = step.wave_height_hm0;

        let outer_slope = self.outer_slope(step, profile);
        let steepness = hydraulic::wave_steepness_deep_water(hm0, step.wave_period_tm10, g);
        let xi = hydraulic::surf_similarity_parameter(outer_slope, hm0, step.wave_period_tm10, g);

        let distance_maximum_wave_elevation = natural_stone::distance_maximum_wave_elevation(
            hm0,
            steepness,
            input.distance_maximum_wave_elevation_asmax,
            input.distance_maximum_wave_elevation_bsmax,
        );
        let normative_width = natural_stone::normative_width_wave_impact(
            xi,
            hm0,
            input.normative_width_of_wave_impact_awi,
            input.normative_width_of_wave_impact_bwi,
        );
        let depth = natural_stone::depth_maximum_wave_load(
            distance_maximum_wave_elevation,
            normative_width,
            hydraulic::slope_angle(outer_slope),
        );
        let upper = input.limit_loading.upper(step.water_level, hm0, xi, depth);
        let lower = input.limit_loading.lower(step.water_level, hm0, xi, depth);
        let loading = lower <= z && z <= upper;

        let mut details = NaturalStoneDetails {
            loading_revetment: loading,
            outer_slope,
            wave_steepness_deep_water: steepness,
            surf_similarity_parameter: xi,
            distance_maximum_wave_elevation,
            normative_width_of_wave_impact: normative_width,
            depth_maximum_wave_load: depth,
            upper_limit_loading: upper,
            lower_limit_loading: lower,
            hydraulic_load: None,
            resistance: None,
            wave_angle_impact: None,
            reference_time_degradation: None,
        };

        if !loading {
            return (0.0, OutputDetails::NaturalStone(details));
        }

        let hydraulic_load = input.hydraulic_load.evaluate(xi, hm0);
        let resistance = input.relative_density * input.thickness_top_layer;
        let stability_factor = natural_stone::stability_factor(
            hydraulic_load,
            input.relative_density,
            input.thickness_top_layer,
        );
        let wave_angle_impact =
            natural_stone::wave_angle_impact(step.wave_angle, input.wave_angle_impact_beta_max);
        let reference_time = natural_stone::reference_time_degradation(
            previous_damage,
            stability_factor,
            wave_angle_impact,
            step.wave_period_tm10,
        );
        let increment = natural_stone::increment_damage(
            reference_time,
            step.duration(),
            stability_factor,
            wave_angle_impact,
            step.wave_period_tm10,
        );

        details.hydraulic_load = Some(hydraulic_load);
        details.resistance = Some(resistance);
        details.wave_angle_impact = Some(wave_angle_impact);
        details.reference_time_degradation = Some(reference_time);

        (increment, OutputDetails::NaturalStone(details))
    }
}
