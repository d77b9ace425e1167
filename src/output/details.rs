//! Intermediate values per revetment model.
//!
//! Values that only exist while the revetment is loaded are `None` for
//! steps without loading.

/// Revetment specific part of a [`TimeDependentOutput`](super::TimeDependentOutput).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OutputDetails {
    GrassWaveRunup(GrassWaveRunupDetails),
    GrassWaveImpact(GrassWaveImpactDetails),
    GrassWaveOvertopping(GrassWaveOvertoppingDetails),
    AsphaltWaveImpact(AsphaltWaveImpactDetails),
    NaturalStone(NaturalStoneDetails),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrassWaveRunupDetails {
    /// z − water level
    pub vertical_distance_water_level_elevation: f64,
    pub wave_angle_impact: Option<f64>,
    pub representative_wave_runup_2p: Option<f64>,
    pub cumulative_overload: Option<f64>,
    pub average_number_of_waves: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrassWaveImpactDetails {
    pub loading_revetment: bool,
    pub upper_limit_loading: f64,
    pub lower_limit_loading: f64,
    pub minimum_wave_height: Option<f64>,
    pub maximum_wave_height: Option<f64>,
    pub wave_angle_impact: Option<f64>,
    pub wave_height_impact: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrassWaveOvertoppingDetails {
    /// Dike height − water level
    pub freeboard: f64,
    pub wave_angle_impact: Option<f64>,
    pub representative_wave_runup_2p: Option<f64>,
    pub cumulative_overload: Option<f64>,
    pub average_number_of_waves: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsphaltWaveImpactDetails {
    pub log_failure_tension: f64,
    pub computational_thickness: f64,
    pub equivalent_elastic_modulus: f64,
    pub stiffness_relation: f64,
    /// ρ g Hm0 (MPa)
    pub maximum_peak_stress: f64,
    pub average_number_of_waves: f64,
    /// Depth factor probability at the relative depth of the location.
    pub depth_factor_probability: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NaturalStoneDetails {
    pub loading_revetment: bool,
    pub outer_slope: f64,
    pub wave_steepness_deep_water: f64,
    pub surf_similarity_parameter: f64,
    pub distance_maximum_wave_elevation: f64,
    pub normative_width_of_wave_impact: f64,
    pub depth_maximum_wave_load: f64,
    pub upper_limit_loading: f64,
    pub lower_limit_loading: f64,
    pub hydraulic_load: Option<f64>,
    pub resistance: Option<f64>,
    pub wave_angle_impact: Option<f64>,
    pub reference_time_degradation: Option<f64>,
}
