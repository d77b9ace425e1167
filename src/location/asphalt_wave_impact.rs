//! Asphalt wave impact location.

use super::FactorTable;
use crate::output::{AsphaltWaveImpactDetails, OutputDetails};
use crate::physics::asphalt_wave_impact::{self, Fatigue};
use crate::physics::{GRAVITATIONAL_ACCELERATION, hydraulic};
use crate::time::TimeStep;
use crate::validation::{ValidationResult, rules};

/// Thickness and stiffness of an asphalt layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsphaltLayer {
    /// Thickness (m)
    pub thickness: f64,
    /// Elastic modulus (MPa)
    pub elastic_modulus: f64,
}

impl AsphaltLayer {
    pub fn new(thickness: f64, elastic_modulus: f64) -> Self {
        Self {
            thickness,
            elastic_modulus,
        }
    }
}

/// Coefficients of an asphalt wave impact location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsphaltWaveImpactInput {
    /// tanα of the outer slope
    pub outer_slope: f64,
    /// Failure tension (MPa)
    pub failure_tension: f64,
    /// Density of water (kg/m³)
    pub density_of_water: f64,
    /// Soil elasticity (MPa/m)
    pub soil_elasticity: f64,
    pub upper_layer: AsphaltLayer,
    pub sub_layer: Option<AsphaltLayer>,
    pub average_number_of_waves_ctm: f64,
    pub fatigue: Fatigue,
    pub impact_number_c: f64,
    pub stiffness_relation_nu: f64,
    pub width_factors: FactorTable,
    pub depth_factors: FactorTable,
    pub impact_factors: FactorTable,
}

impl AsphaltWaveImpactInput {
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::from_checks([
            rules::outer_slope(self.outer_slope),
            rules::failure_tension(self.failure_tension),
            rules::density_of_water(self.density_of_water),
            rules::soil_elasticity(self.soil_elasticity),
            rules::layer_thickness("ThicknessUpperLayer", self.upper_layer.thickness),
            rules::elastic_modulus("ElasticModulusUpperLayer", self.upper_layer.elastic_modulus),
            rules::average_number_of_waves_ctm(self.average_number_of_waves_ctm),
            rules::fatigue_alpha(self.fatigue.alpha),
            rules::fatigue_beta(self.fatigue.beta),
            rules::impact_number_c(self.impact_number_c),
            rules::stiffness_relation_nu(self.stiffness_relation_nu),
        ]);

        if let Some(sub_layer) = self.sub_layer {
            result.extend([
                rules::layer_thickness("ThicknessSubLayer", sub_layer.thickness),
                rules::elastic_modulus("ElasticModulusSubLayer", sub_layer.elastic_modulus),
            ]);
        }

        result.extend(self.width_factors.validate("WidthFactors"));
        result.extend(self.depth_factors.validate("DepthFactors"));
        result.extend(self.impact_factors.validate("ImpactFactors"));
        result
    }

    pub(crate) fn derive(&self) -> DerivedAsphaltWaveImpact {
        let upper = self.upper_layer;
        let (computational_thickness, equivalent_elastic_modulus) = match self.sub_layer {
            Some(sub) => (
                asphalt_wave_impact::computational_thickness(
                    upper.thickness,
                    upper.elastic_modulus,
                    sub.thickness,
                    sub.elastic_modulus,
                ),
                sub.elastic_modulus,
            ),
            None => (upper.thickness, upper.elastic_modulus),
        };

        DerivedAsphaltWaveImpact {
            log_failure_tension: asphalt_wave_impact::log_failure_tension(self.failure_tension),
            computational_thickness,
            equivalent_elastic_modulus,
            stiffness_relation: asphalt_wave_impact::stiffness_relation(
                computational_thickness,
                equivalent_elastic_modulus,
                self.soil_elasticity,
                self.stiffness_relation_nu,
            ),
            input: self.clone(),
        }
    }
}

/// Asphalt input with its layer properties worked out.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedAsphaltWaveImpact {
    pub input: AsphaltWaveImpactInput,
    pub log_failure_tension: f64,
    pub computational_thickness: f64,
    pub equivalent_elastic_modulus: f64,
    pub stiffness_relation: f64,
}

impl DerivedAsphaltWaveImpact {
    /// Fatigue consumed by one average wave at elevation `z`.
    fn fatigue_per_wave(&self, z: f64, step: &TimeStep, maximum_peak_stress: f64) -> f64 {
        let input = &self.input;
        let hm0 = step.wave_height_hm0;
        let mut total = 0.0;

        for (width_factor, width_probability) in input.width_factors.iter() {
            let width = width_factor * hm0;

            for (depth_factor, depth_probability) in input.depth_factors.iter() {
                let z_impact = step.water_level + depth_factor * hm0;
                let distance =
                    asphalt_wave_impact::distance_along_slope(z, z_impact, input.outer_slope);
                let spatial = asphalt_wave_impact::spatial_distribution_bending_stress(
                    self.stiffness_relation,
                    distance,
                    width,
                );

                for (impact_factor, impact_probability) in input.impact_factors.iter() {
                    let pressure = input.impact_number_c * impact_factor * maximum_peak_stress;
                    let stress = asphalt_wave_impact::bending_stress(
                        pressure,
                        self.stiffness_relation,
                        self.computational_thickness,
                        spatial,
                    );
                    total += width_probability
                        * depth_probability
                        * impact_probability
                        * input.fatigue.consumption(self.log_failure_tension, stress);
                }
            }
        }

        total
    }

    pub(crate) fn calculate(&self, z: f64, step: &TimeStep) -> (f64, OutputDetails) {
        let input = &self.input;
        let maximum_peak_stress = asphalt_wave_impact::maximum_peak_stress(
            step.wave_height_hm0,
            GRAVITATIONAL_ACCELERATION,
            input.density_of_water,
        );
        let average_number_of_waves = hydraulic::average_number_of_waves(
            step.duration(),
            step.wave_period_tm10,
            input.average_number_of_waves_ctm,
        );

        let increment =
            average_number_of_waves * self.fatigue_per_wave(z, step, maximum_peak_stress);
        let relative_depth = (z - step.water_level) / step.wave_height_hm0;

        let details = AsphaltWaveImpactDetails {
            log_failure_tension: self.log_failure_tension,
            computational_thickness: self.computational_thickness,
            equivalent_elastic_modulus: self.equivalent_elastic_modulus,
            stiffness_relation: self.stiffness_relation,
            maximum_peak_stress,
            average_number_of_waves,
            depth_factor_probability: input.depth_factors.interpolate(relative_depth),
        };

        (increment, OutputDetails::AsphaltWaveImpact(details))
    }
}
