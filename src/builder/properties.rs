//! Construction properties per revetment kind.
//!
//! Required values are constructor arguments; everything else is optional
//! and falls back to the defaults of the top layer type when the location
//! is resolved.

use crate::defaults::{
    AsphaltWaveImpactDefaults, DefaultsError, GrassWaveImpactDefaults, GrassWaveOvertoppingDefaults,
    GrassWaveRunupDefaults, NaturalStoneDefaults, TopLayerType,
};
use crate::location::{
    AsphaltLayer, AsphaltWaveImpactInput, FactorTable, GrassWaveImpactInput,
    GrassWaveOvertoppingInput, GrassWaveRunupInput, LocationInput, NaturalStoneInput,
    RevetmentInput,
};
use crate::physics::asphalt_wave_impact::Fatigue;
use crate::physics::grass_wave_impact::{ImpactWaveAngleImpact, TimeLine};
use crate::physics::grass_wave_overtopping::AccelerationAlphaA;
use crate::physics::grass_wave_runup::{RepresentativeWaveRunup2P, RunupWaveAngleImpact};
use crate::physics::natural_stone::{HydraulicLoad, LimitLoading, LoadCoefficients, SlopeLevels};
use crate::physics::rayleigh::TransitionFactors;

/// Generates `with_*` setters for optional construction values.
macro_rules! optional_setters {
    ($($setter:ident => $field:ident: $ty:ty),* $(,)?) => {
        $(
            pub fn $setter(mut self, value: $ty) -> Self {
                self.$field = Some(value);
                self
            }
        )*
    };
}

/// Values shared by all construction properties.
#[derive(Clone, Debug, PartialEq)]
struct Common {
    x: f64,
    top_layer_type: TopLayerType,
    initial_damage: Option<f64>,
    failure_number: Option<f64>,
}

impl Common {
    fn new(x: f64, top_layer_type: TopLayerType) -> Self {
        Self {
            x,
            top_layer_type,
            initial_damage: None,
            failure_number: None,
        }
    }

    fn into_location(self, revetment: RevetmentInput) -> LocationInput {
        let mut location = LocationInput::new(self.x, revetment);
        if let Some(initial_damage) = self.initial_damage {
            location = location.with_initial_damage(initial_damage);
        }
        if let Some(failure_number) = self.failure_number {
            location = location.with_failure_number(failure_number);
        }
        location
    }
}

/// Setters for the common optional values.
macro_rules! common_setters {
    () => {
        pub fn with_initial_damage(mut self, value: f64) -> Self {
            self.common.initial_damage = Some(value);
            self
        }

        pub fn with_failure_number(mut self, value: f64) -> Self {
            self.common.failure_number = Some(value);
            self
        }

        /// Horizontal position of the location.
        pub fn x(&self) -> f64 {
            self.common.x
        }

        pub fn top_layer_type(&self) -> TopLayerType {
            self.common.top_layer_type
        }
    };
}

// =============================================================================
// Grass wave run-up
// =============================================================================

/// Construction properties of a grass wave run-up location (Rayleigh protocol).
#[derive(Clone, Debug, PartialEq)]
pub struct GrassWaveRunupProperties {
    common: Common,
    outer_slope: f64,
    critical_cumulative_overload: Option<f64>,
    critical_front_velocity: Option<f64>,
    increased_load_transition_alpha_m: Option<f64>,
    reduced_strength_transition_alpha_s: Option<f64>,
    transition_damage: Option<f64>,
    average_number_of_waves_ctm: Option<f64>,
    representative_wave_runup_2p_aru: Option<f64>,
    representative_wave_runup_2p_bru: Option<f64>,
    representative_wave_runup_2p_cru: Option<f64>,
    representative_wave_runup_2p_gamma_b: Option<f64>,
    representative_wave_runup_2p_gamma_f: Option<f64>,
    wave_angle_impact_a_beta: Option<f64>,
    wave_angle_impact_beta_max: Option<f64>,
    fixed_number_of_waves: Option<usize>,
    front_velocity_cu: Option<f64>,
}

impl GrassWaveRunupProperties {
    pub fn new(x: f64, top_layer_type: TopLayerType, outer_slope: f64) -> Self {
        Self {
            common: Common::new(x, top_layer_type),
            outer_slope,
            critical_cumulative_overload: None,
            critical_front_velocity: None,
            increased_load_transition_alpha_m: None,
            reduced_strength_transition_alpha_s: None,
            transition_damage: None,
            average_number_of_waves_ctm: None,
            representative_wave_runup_2p_aru: None,
            representative_wave_runup_2p_bru: None,
            representative_wave_runup_2p_cru: None,
            representative_wave_runup_2p_gamma_b: None,
            representative_wave_runup_2p_gamma_f: None,
            wave_angle_impact_a_beta: None,
            wave_angle_impact_beta_max: None,
            fixed_number_of_waves: None,
            front_velocity_cu: None,
        }
    }

    common_setters!();

    optional_setters! {
        with_critical_cumulative_overload => critical_cumulative_overload: f64,
        with_critical_front_velocity => critical_front_velocity: f64,
        with_increased_load_transition_alpha_m => increased_load_transition_alpha_m: f64,
        with_reduced_strength_transition_alpha_s => reduced_strength_transition_alpha_s: f64,
        with_transition_damage => transition_damage: f64,
        with_average_number_of_waves_ctm => average_number_of_waves_ctm: f64,
        with_representative_wave_runup_2p_aru => representative_wave_runup_2p_aru: f64,
        with_representative_wave_runup_2p_bru => representative_wave_runup_2p_bru: f64,
        with_representative_wave_runup_2p_cru => representative_wave_runup_2p_cru: f64,
        with_representative_wave_runup_2p_gamma_b => representative_wave_runup_2p_gamma_b: f64,
        with_representative_wave_runup_2p_gamma_f => representative_wave_runup_2p_gamma_f: f64,
        with_wave_angle_impact_a_beta => wave_angle_impact_a_beta: f64,
        with_wave_angle_impact_beta_max => wave_angle_impact_beta_max: f64,
        with_fixed_number_of_waves => fixed_number_of_waves: usize,
        with_front_velocity_cu => front_velocity_cu: f64,
    }

    pub fn resolve(self) -> Result<LocationInput, DefaultsError> {
        let defaults = GrassWaveRunupDefaults::try_from(self.common.top_layer_type)?;
        let runup = defaults.representative_wave_runup_2p;
        let angle = defaults.wave_angle_impact;

        let input = GrassWaveRunupInput {
            outer_slope: self.outer_slope,
            critical_cumulative_overload: self
                .critical_cumulative_overload
                .unwrap_or(defaults.critical_cumulative_overload),
            critical_front_velocity: self
                .critical_front_velocity
                .unwrap_or(defaults.critical_front_velocity),
            transition: TransitionFactors::new(
                self.increased_load_transition_alpha_m
                    .unwrap_or(defaults.transition.alpha_m),
                self.reduced_strength_transition_alpha_s
                    .unwrap_or(defaults.transition.alpha_s),
            ),
            transition_damage: self.transition_damage.unwrap_or(defaults.transition_damage),
            average_number_of_waves_ctm: self
                .average_number_of_waves_ctm
                .unwrap_or(defaults.average_number_of_waves_ctm),
            representative_wave_runup_2p: RepresentativeWaveRunup2P {
                aru: self.representative_wave_runup_2p_aru.unwrap_or(runup.aru),
                bru: self.representative_wave_runup_2p_bru.unwrap_or(runup.bru),
                cru: self.representative_wave_runup_2p_cru.unwrap_or(runup.cru),
                gamma_b: self.representative_wave_runup_2p_gamma_b.unwrap_or(runup.gamma_b),
                gamma_f: self.representative_wave_runup_2p_gamma_f.unwrap_or(runup.gamma_f),
            },
            wave_angle_impact: RunupWaveAngleImpact {
                a_beta: self.wave_angle_impact_a_beta.unwrap_or(angle.a_beta),
                beta_max: self.wave_angle_impact_beta_max.unwrap_or(angle.beta_max),
            },
            fixed_number_of_waves: self
                .fixed_number_of_waves
                .unwrap_or(defaults.fixed_number_of_waves),
            front_velocity_cu: self.front_velocity_cu.unwrap_or(defaults.front_velocity_cu),
        };

        Ok(self.common.into_location(RevetmentInput::GrassWaveRunup(input)))
    }
}

// =============================================================================
// Grass wave impact
// =============================================================================

/// Construction properties of a grass wave impact location.
#[derive(Clone, Debug, PartialEq)]
pub struct GrassWaveImpactProperties {
    common: Common,
    wave_angle_impact_nwa: Option<f64>,
    wave_angle_impact_qwa: Option<f64>,
    wave_angle_impact_rwa: Option<f64>,
    min_wave_height_temax: Option<f64>,
    max_wave_height_temin: Option<f64>,
    time_line_agwi: Option<f64>,
    time_line_bgwi: Option<f64>,
    time_line_cgwi: Option<f64>,
    upper_limit_loading_aul: Option<f64>,
    lower_limit_loading_all: Option<f64>,
}

impl GrassWaveImpactProperties {
    pub fn new(x: f64, top_layer_type: TopLayerType) -> Self {
        Self {
            common: Common::new(x, top_layer_type),
            wave_angle_impact_nwa: None,
            wave_angle_impact_qwa: None,
            wave_angle_impact_rwa: None,
            min_wave_height_temax: None,
            max_wave_height_temin: None,
            time_line_agwi: None,
            time_line_bgwi: None,
            time_line_cgwi: None,
            upper_limit_loading_aul: None,
            lower_limit_loading_all: None,
        }
    }

    common_setters!();

    optional_setters! {
        with_wave_angle_impact_nwa => wave_angle_impact_nwa: f64,
        with_wave_angle_impact_qwa => wave_angle_impact_qwa: f64,
        with_wave_angle_impact_rwa => wave_angle_impact_rwa: f64,
        with_min_wave_height_temax => min_wave_height_temax: f64,
        with_max_wave_height_temin => max_wave_height_temin: f64,
        with_time_line_agwi => time_line_agwi: f64,
        with_time_line_bgwi => time_line_bgwi: f64,
        with_time_line_cgwi => time_line_cgwi: f64,
        with_upper_limit_loading_aul => upper_limit_loading_aul: f64,
        with_lower_limit_loading_all => lower_limit_loading_all: f64,
    }

    pub fn resolve(self) -> Result<LocationInput, DefaultsError> {
        let defaults = GrassWaveImpactDefaults::try_from(self.common.top_layer_type)?;
        let angle = defaults.wave_angle_impact;
        let time_line = defaults.time_line;

        let input = GrassWaveImpactInput {
            wave_angle_impact: ImpactWaveAngleImpact {
                nwa: self.wave_angle_impact_nwa.unwrap_or(angle.nwa),
                qwa: self.wave_angle_impact_qwa.unwrap_or(angle.qwa),
                rwa: self.wave_angle_impact_rwa.unwrap_or(angle.rwa),
            },
            min_wave_height_temax: self
                .min_wave_height_temax
                .unwrap_or(defaults.min_wave_height_temax),
            max_wave_height_temin: self
                .max_wave_height_temin
                .unwrap_or(defaults.max_wave_height_temin),
            time_line: TimeLine {
                agwi: self.time_line_agwi.unwrap_or(time_line.agwi),
                bgwi: self.time_line_bgwi.unwrap_or(time_line.bgwi),
                cgwi: self.time_line_cgwi.unwrap_or(time_line.cgwi),
            },
            upper_limit_loading_aul: self
                .upper_limit_loading_aul
                .unwrap_or(defaults.upper_limit_loading_aul),
            lower_limit_loading_all: self
                .lower_limit_loading_all
                .unwrap_or(defaults.lower_limit_loading_all),
        };

        Ok(self.common.into_location(RevetmentInput::GrassWaveImpact(input)))
    }
}

// =============================================================================
// Grass wave overtopping
// =============================================================================

/// Construction properties of a grass wave overtopping location (Rayleigh protocol).
#[derive(Clone, Debug, PartialEq)]
pub struct GrassWaveOvertoppingProperties {
    common: Common,
    critical_cumulative_overload: Option<f64>,
    critical_front_velocity: Option<f64>,
    increased_load_transition_alpha_m: Option<f64>,
    reduced_strength_transition_alpha_s: Option<f64>,
    acceleration_alpha_a_for_crest: Option<f64>,
    acceleration_alpha_a_for_inner_slope: Option<f64>,
    fixed_number_of_waves: Option<usize>,
    front_velocity_cwo: Option<f64>,
    average_number_of_waves_ctm: Option<f64>,
    representative_wave_runup_2p_aru: Option<f64>,
    representative_wave_runup_2p_bru: Option<f64>,
    representative_wave_runup_2p_cru: Option<f64>,
    representative_wave_runup_2p_gamma_b: Option<f64>,
    wave_angle_impact_a_beta: Option<f64>,
    wave_angle_impact_beta_max: Option<f64>,
    dike_height: Option<f64>,
}

impl GrassWaveOvertoppingProperties {
    pub fn new(x: f64, top_layer_type: TopLayerType) -> Self {
        Self {
            common: Common::new(x, top_layer_type),
            critical_cumulative_overload: None,
            critical_front_velocity: None,
            increased_load_transition_alpha_m: None,
            reduced_strength_transition_alpha_s: None,
            acceleration_alpha_a_for_crest: None,
            acceleration_alpha_a_for_inner_slope: None,
            fixed_number_of_waves: None,
            front_velocity_cwo: None,
            average_number_of_waves_ctm: None,
            representative_wave_runup_2p_aru: None,
            representative_wave_runup_2p_bru: None,
            representative_wave_runup_2p_cru: None,
            representative_wave_runup_2p_gamma_b: None,
            wave_angle_impact_a_beta: None,
            wave_angle_impact_beta_max: None,
            dike_height: None,
        }
    }

    common_setters!();

    optional_setters! {
        with_critical_cumulative_overload => critical_cumulative_overload: f64,
        with_critical_front_velocity => critical_front_velocity: f64,
        with_increased_load_transition_alpha_m => increased_load_transition_alpha_m: f64,
        with_reduced_strength_transition_alpha_s => reduced_strength_transition_alpha_s: f64,
        with_acceleration_alpha_a_for_crest => acceleration_alpha_a_for_crest: f64,
        with_acceleration_alpha_a_for_inner_slope => acceleration_alpha_a_for_inner_slope: f64,
        with_fixed_number_of_waves => fixed_number_of_waves: usize,
        with_front_velocity_cwo => front_velocity_cwo: f64,
        with_average_number_of_waves_ctm => average_number_of_waves_ctm: f64,
        with_representative_wave_runup_2p_aru => representative_wave_runup_2p_aru: f64,
        with_representative_wave_runup_2p_bru => representative_wave_runup_2p_bru: f64,
        with_representative_wave_runup_2p_cru => representative_wave_runup_2p_cru: f64,
        with_representative_wave_runup_2p_gamma_b => representative_wave_runup_2p_gamma_b: f64,
        with_wave_angle_impact_a_beta => wave_angle_impact_a_beta: f64,
        with_wave_angle_impact_beta_max => wave_angle_impact_beta_max: f64,
        with_dike_height => dike_height: f64,
    }

    pub fn resolve(self) -> Result<LocationInput, DefaultsError> {
        let defaults = GrassWaveOvertoppingDefaults::try_from(self.common.top_layer_type)?;
        let runup = defaults.representative_wave_runup_2p;
        let angle = defaults.wave_angle_impact;

        let input = GrassWaveOvertoppingInput {
            critical_cumulative_overload: self
                .critical_cumulative_overload
                .unwrap_or(defaults.critical_cumulative_overload),
            critical_front_velocity: self
                .critical_front_velocity
                .unwrap_or(defaults.critical_front_velocity),
            transition: TransitionFactors::new(
                self.increased_load_transition_alpha_m
                    .unwrap_or(defaults.transition.alpha_m),
                self.reduced_strength_transition_alpha_s
                    .unwrap_or(defaults.transition.alpha_s),
            ),
            acceleration_alpha_a: AccelerationAlphaA {
                crest: self
                    .acceleration_alpha_a_for_crest
                    .unwrap_or(defaults.acceleration_alpha_a.crest),
                inner_slope: self
                    .acceleration_alpha_a_for_inner_slope
                    .unwrap_or(defaults.acceleration_alpha_a.inner_slope),
            },
            fixed_number_of_waves: self
                .fixed_number_of_waves
                .unwrap_or(defaults.fixed_number_of_waves),
            front_velocity_cwo: self.front_velocity_cwo.unwrap_or(defaults.front_velocity_cwo),
            average_number_of_waves_ctm: self
                .average_number_of_waves_ctm
                .unwrap_or(defaults.average_number_of_waves_ctm),
            representative_wave_runup_2p: RepresentativeWaveRunup2P {
                aru: self.representative_wave_runup_2p_aru.unwrap_or(runup.aru),
                bru: self.representative_wave_runup_2p_bru.unwrap_or(runup.bru),
                cru: self.representative_wave_runup_2p_cru.unwrap_or(runup.cru),
                gamma_b: self.representative_wave_runup_2p_gamma_b.unwrap_or(runup.gamma_b),
                gamma_f: runup.gamma_f,
            },
            wave_angle_impact: RunupWaveAngleImpact {
                a_beta: self.wave_angle_impact_a_beta.unwrap_or(angle.a_beta),
                beta_max: self.wave_angle_impact_beta_max.unwrap_or(angle.beta_max),
            },
            dike_height: self.dike_height,
        };

        Ok(self.common.into_location(RevetmentInput::GrassWaveOvertopping(input)))
    }
}

// =============================================================================
// Asphalt wave impact
// =============================================================================

/// Construction properties of an asphalt wave impact location.
#[derive(Clone, Debug, PartialEq)]
pub struct AsphaltWaveImpactProperties {
    common: Common,
    failure_tension: f64,
    soil_elasticity: f64,
    upper_layer: AsphaltLayer,
    outer_slope: f64,
    sub_layer: Option<AsphaltLayer>,
    density_of_water: Option<f64>,
    average_number_of_waves_ctm: Option<f64>,
    fatigue_alpha: Option<f64>,
    fatigue_beta: Option<f64>,
    impact_number_c: Option<f64>,
    stiffness_relation_nu: Option<f64>,
    width_factors: Option<Vec<(f64, f64)>>,
    depth_factors: Option<Vec<(f64, f64)>>,
    impact_factors: Option<Vec<(f64, f64)>>,
}

impl AsphaltWaveImpactProperties {
    pub fn new(
        x: f64,
        top_layer_type: TopLayerType,
        failure_tension: f64,
        soil_elasticity: f64,
        upper_layer: AsphaltLayer,
        outer_slope: f64,
    ) -> Self {
        Self {
            common: Common::new(x, top_layer_type),
            failure_tension,
            soil_elasticity,
            upper_layer,
            outer_slope,
            sub_layer: None,
            density_of_water: None,
            average_number_of_waves_ctm: None,
            fatigue_alpha: None,
            fatigue_beta: None,
            impact_number_c: None,
            stiffness_relation_nu: None,
            width_factors: None,
            depth_factors: None,
            impact_factors: None,
        }
    }

    common_setters!();

    optional_setters! {
        with_sub_layer => sub_layer: AsphaltLayer,
        with_density_of_water => density_of_water: f64,
        with_average_number_of_waves_ctm => average_number_of_waves_ctm: f64,
        with_fatigue_alpha => fatigue_alpha: f64,
        with_fatigue_beta => fatigue_beta: f64,
        with_impact_number_c => impact_number_c: f64,
        with_stiffness_relation_nu => stiffness_relation_nu: f64,
        with_width_factors => width_factors: Vec<(f64, f64)>,
        with_depth_factors => depth_factors: Vec<(f64, f64)>,
        with_impact_factors => impact_factors: Vec<(f64, f64)>,
    }

    pub fn resolve(self) -> Result<LocationInput, DefaultsError> {
        let defaults = AsphaltWaveImpactDefaults::try_from(self.common.top_layer_type)?;
        let table = |custom: Option<Vec<(f64, f64)>>, default: &[(f64, f64)]| {
            custom.map_or_else(|| FactorTable::from(default), FactorTable::new)
        };

        let input = AsphaltWaveImpactInput {
            outer_slope: self.outer_slope,
            failure_tension: self.failure_tension,
            density_of_water: self.density_of_water.unwrap_or(defaults.density_of_water),
            soil_elasticity: self.soil_elasticity,
            upper_layer: self.upper_layer,
            sub_layer: self.sub_layer,
            average_number_of_waves_ctm: self
                .average_number_of_waves_ctm
                .unwrap_or(defaults.average_number_of_waves_ctm),
            fatigue: Fatigue {
                alpha: self.fatigue_alpha.unwrap_or(defaults.fatigue.alpha),
                beta: self.fatigue_beta.unwrap_or(defaults.fatigue.beta),
            },
            impact_number_c: self.impact_number_c.unwrap_or(defaults.impact_number_c),
            stiffness_relation_nu: self
                .stiffness_relation_nu
                .unwrap_or(defaults.stiffness_relation_nu),
            width_factors: table(self.width_factors, defaults.width_factors),
            depth_factors: table(self.depth_factors, defaults.depth_factors),
            impact_factors: table(self.impact_factors, defaults.impact_factors),
        };

        Ok(self.common.into_location(RevetmentInput::AsphaltWaveImpact(input)))
    }
}

// =============================================================================
// Natural stone
// =============================================================================

/// Construction properties of a natural stone location.
#[derive(Clone, Debug, PartialEq)]
pub struct NaturalStoneProperties {
    common: Common,
    relative_density: f64,
    thickness_top_layer: f64,
    hydraulic_load_ap: Option<f64>,
    hydraulic_load_bp: Option<f64>,
    hydraulic_load_cp: Option<f64>,
    hydraulic_load_np: Option<f64>,
    hydraulic_load_as: Option<f64>,
    hydraulic_load_bs: Option<f64>,
    hydraulic_load_cs: Option<f64>,
    hydraulic_load_ns: Option<f64>,
    hydraulic_load_xib: Option<f64>,
    slope_upper_level_aus: Option<f64>,
    slope_lower_level_als: Option<f64>,
    upper_limit_loading_aul: Option<f64>,
    upper_limit_loading_bul: Option<f64>,
    upper_limit_loading_cul: Option<f64>,
    lower_limit_loading_all: Option<f64>,
    lower_limit_loading_bll: Option<f64>,
    lower_limit_loading_cll: Option<f64>,
    distance_maximum_wave_elevation_asmax: Option<f64>,
    distance_maximum_wave_elevation_bsmax: Option<f64>,
    normative_width_of_wave_impact_awi: Option<f64>,
    normative_width_of_wave_impact_bwi: Option<f64>,
    wave_angle_impact_beta_max: Option<f64>,
}

impl NaturalStoneProperties {
    pub fn new(
        x: f64,
        top_layer_type: TopLayerType,
        relative_density: f64,
        thickness_top_layer: f64,
    ) -> Self {
        Self {
            common: Common::new(x, top_layer_type),
            relative_density,
            thickness_top_layer,
            hydraulic_load_ap: None,
            hydraulic_load_bp: None,
            hydraulic_load_cp: None,
            hydraulic_load_np: None,
            hydraulic_load_as: None,
            hydraulic_load_bs: None,
            hydraulic_load_cs: None,
            hydraulic_load_ns: None,
            hydraulic_load_xib: None,
            slope_upper_level_aus: None,
            slope_lower_level_als: None,
            upper_limit_loading_aul: None,
            upper_limit_loading_bul: None,
            upper_limit_loading_cul: None,
            lower_limit_loading_all: None,
            lower_limit_loading_bll: None,
            lower_limit_loading_cll: None,
            distance_maximum_wave_elevation_asmax: None,
            distance_maximum_wave_elevation_bsmax: None,
            normative_width_of_wave_impact_awi: None,
            normative_width_of_wave_impact_bwi: None,
            wave_angle_impact_beta_max: None,
        }
    }

    common_setters!();

    optional_setters! {
        with_hydraulic_load_ap => hydraulic_load_ap: f64,
        with_hydraulic_load_bp => hydraulic_load_bp: f64,
        with_hydraulic_load_cp => hydraulic_load_cp: f64,
        with_hydraulic_load_np => hydraulic_load_np: f64,
        with_hydraulic_load_as => hydraulic_load_as: f64,
        with_hydraulic_load_bs => hydraulic_load_bs: f64,
        with_hydraulic_load_cs => hydraulic_load_cs: f64,
        with_hydraulic_load_ns => hydraulic_load_ns: f64,
        with_hydraulic_load_xib => hydraulic_load_xib: f64,
        with_slope_upper_level_aus => slope_upper_level_aus: f64,
        with_slope_lower_level_als => slope_lower_level_als: f64,
        with_upper_limit_loading_aul => upper_limit_loading_aul: f64,
        with_upper_limit_loading_bul => upper_limit_loading_bul: f64,
        with_upper_limit_loading_cul => upper_limit_loading_cul: f64,
        with_lower_limit_loading_all => lower_limit_loading_all: f64,
        with_lower_limit_loading_bll => lower_limit_loading_bll: f64,
        with_lower_limit_loading_cll => lower_limit_loading_cll: f64,
        with_distance_maximum_wave_elevation_asmax => distance_maximum_wave_elevation_asmax: f64,
        with_distance_maximum_wave_elevation_bsmax => distance_maximum_wave_elevation_bsmax: f64,
        with_normative_width_of_wave_impact_awi => normative_width_of_wave_impact_awi: f64,
        with_normative_width_of_wave_impact_bwi => normative_width_of_wave_impact_bwi: f64,
        with_wave_angle_impact_beta_max => wave_angle_impact_beta_max: f64,
    }

    pub fn resolve(self) -> Result<LocationInput, DefaultsError> {
        let defaults = NaturalStoneDefaults::try_from(self.common.top_layer_type)?;
        let plunging = defaults.hydraulic_load.plunging;
        let surging = defaults.hydraulic_load.surging;
        let limits = defaults.limit_loading;

        let input = NaturalStoneInput {
            relative_density: self.relative_density,
            thickness_top_layer: self.thickness_top_layer,
            hydraulic_load: HydraulicLoad {
                plunging: LoadCoefficients {
                    a: self.hydraulic_load_ap.unwrap_or(plunging.a),
                    b: self.hydraulic_load_bp.unwrap_or(plunging.b),
                    c: self.hydraulic_load_cp.unwrap_or(plunging.c),
                    n: self.hydraulic_load_np.unwrap_or(plunging.n),
                },
                surging: LoadCoefficients {
                    a: self.hydraulic_load_as.unwrap_or(surging.a),
                    b: self.hydraulic_load_bs.unwrap_or(surging.b),
                    c: self.hydraulic_load_cs.unwrap_or(surging.c),
                    n: self.hydraulic_load_ns.unwrap_or(surging.n),
                },
                xib: self.hydraulic_load_xib.unwrap_or(defaults.hydraulic_load.xib),
            },
            slope: SlopeLevels {
                upper: self.slope_upper_level_aus.unwrap_or(defaults.slope.upper),
                lower: self.slope_lower_level_als.unwrap_or(defaults.slope.lower),
            },
            limit_loading: LimitLoading {
                aul: self.upper_limit_loading_aul.unwrap_or(limits.aul),
                bul: self.upper_limit_loading_bul.unwrap_or(limits.bul),
                cul: self.upper_limit_loading_cul.unwrap_or(limits.cul),
                all: self.lower_limit_loading_all.unwrap_or(limits.all),
                bll: self.lower_limit_loading_bll.unwrap_or(limits.bll),
                cll: self.lower_limit_loading_cll.unwrap_or(limits.cll),
            },
            distance_maximum_wave_elevation_asmax: self
                .distance_maximum_wave_elevation_asmax
                .unwrap_or(defaults.distance_maximum_wave_elevation_asmax),
            distance_maximum_wave_elevation_bsmax: self
                .distance_maximum_wave_elevation_bsmax
                .unwrap_or(defaults.distance_maximum_wave_elevation_bsmax),
            normative_width_of_wave_impact_awi: self
                .normative_width_of_wave_impact_awi
                .unwrap_or(defaults.normative_width_of_wave_impact_awi),
            normative_width_of_wave_impact_bwi: self
                .normative_width_of_wave_impact_bwi
                .unwrap_or(defaults.normative_width_of_wave_impact_bwi),
            wave_angle_impact_beta_max: self
                .wave_angle_impact_beta_max
                .unwrap_or(defaults.wave_angle_impact_beta_max),
        };

        Ok(self.common.into_location(RevetmentInput::NaturalStone(input)))
    }
}

// =============================================================================
// Any location
// =============================================================================

/// Construction properties of any revetment kind.
#[derive(Clone, Debug, PartialEq)]
pub enum LocationConstructionProperties {
    GrassWaveRunup(GrassWaveRunupProperties),
    GrassWaveImpact(GrassWaveImpactProperties),
    GrassWaveOvertopping(GrassWaveOvertoppingProperties),
    AsphaltWaveImpact(AsphaltWaveImpactProperties),
    NaturalStone(NaturalStoneProperties),
}

impl LocationConstructionProperties {
    pub fn x(&self) -> f64 {
        match self {
            Self::GrassWaveRunup(properties) => properties.x(),
            Self::GrassWaveImpact(properties) => properties.x(),
            Self::GrassWaveOvertopping(properties) => properties.x(),
            Self::AsphaltWaveImpact(properties) => properties.x(),
            Self::NaturalStone(properties) => properties.x(),
        }
    }

    /// Whether the location needs the inner crest and inner toe of the profile.
    pub fn requires_inner_profile(&self) -> bool {
        matches!(self, Self::GrassWaveOvertopping(_))
    }

    /// Fill in the defaults of the top layer type.
    pub fn resolve(self) -> Result<LocationInput, DefaultsError> {
        match self {
            Self::GrassWaveRunup(properties) => properties.resolve(),
            Self::GrassWaveImpact(properties) => properties.resolve(),
            Self::GrassWaveOvertopping(properties) => properties.resolve(),
            Self::AsphaltWaveImpact(properties) => properties.resolve(),
            Self::NaturalStone(properties) => properties.resolve(),
        }
    }
}

impl From<GrassWaveRunupProperties> for LocationConstructionProperties {
    fn from(properties: GrassWaveRunupProperties) -> Self {
        Self::GrassWaveRunup(properties)
    }
}

impl From<GrassWaveImpactProperties> for LocationConstructionProperties {
    fn from(properties: GrassWaveImpactProperties) -> Self {
        Self::GrassWaveImpact(properties)
    }
}

impl From<GrassWaveOvertoppingProperties> for LocationConstructionProperties {
    fn from(properties: GrassWaveOvertoppingProperties) -> Self {
        Self::GrassWaveOvertopping(properties)
    }
}

impl From<AsphaltWaveImpactProperties> for LocationConstructionProperties {
    fn from(properties: AsphaltWaveImpactProperties) -> Self {
        Self::AsphaltWaveImpact(properties)
    }
}

impl From<NaturalStoneProperties> for LocationConstructionProperties {
    fn from(properties: NaturalStoneProperties) -> Self {
        Self::NaturalStone(properties)
    }
}
