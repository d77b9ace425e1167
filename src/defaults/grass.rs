//! Grass cover defaults for closed and open sod.

use super::{DefaultsError, TopLayerType};
use crate::physics::grass_wave_impact::{ImpactWaveAngleImpact, TimeLine};
use crate::physics::grass_wave_overtopping::AccelerationAlphaA;
use crate::physics::grass_wave_runup::{RepresentativeWaveRunup2P, RunupWaveAngleImpact};
use crate::physics::rayleigh::TransitionFactors;

const REPRESENTATIVE_WAVE_RUNUP_2P: RepresentativeWaveRunup2P = RepresentativeWaveRunup2P {
    aru: 1.65,
    bru: 4.0,
    cru: 1.5,
    gamma_b: 1.0,
    gamma_f: 1.0,
};

const RUNUP_WAVE_ANGLE_IMPACT: RunupWaveAngleImpact = RunupWaveAngleImpact {
    a_beta: 0.0022,
    beta_max: 80.0,
};

const FIXED_NUMBER_OF_WAVES: usize = 10_000;
const AVERAGE_NUMBER_OF_WAVES_CTM: f64 = 0.92;

/// Defaults of a grass wave run-up location (Rayleigh protocol).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassWaveRunupDefaults {
    pub critical_cumulative_overload: f64,
    pub critical_front_velocity: f64,
    pub transition: TransitionFactors,
    pub average_number_of_waves_ctm: f64,
    pub representative_wave_runup_2p: RepresentativeWaveRunup2P,
    pub wave_angle_impact: RunupWaveAngleImpact,
    pub fixed_number_of_waves: usize,
    pub front_velocity_cu: f64,
    pub transition_damage: f64,
}

impl TryFrom<TopLayerType> for GrassWaveRunupDefaults {
    type Error = DefaultsError;

    fn try_from(top_layer: TopLayerType) -> Result<Self, Self::Error> {
        let critical_front_velocity = match top_layer {
            TopLayerType::GrassClosedSod => 6.6,
            TopLayerType::GrassOpenSod => 3.5,
            other => return Err(DefaultsError::unsupported("grass wave run-up", other)),
        };

        Ok(Self {
            critical_cumulative_overload: 7000.0,
            critical_front_velocity,
            transition: TransitionFactors::NONE,
            average_number_of_waves_ctm: AVERAGE_NUMBER_OF_WAVES_CTM,
            representative_wave_runup_2p: REPRESENTATIVE_WAVE_RUNUP_2P,
            wave_angle_impact: RUNUP_WAVE_ANGLE_IMPACT,
            fixed_number_of_waves: FIXED_NUMBER_OF_WAVES,
            front_velocity_cu: 1.1,
            transition_damage: 0.0,
        })
    }
}

/// Defaults of a grass wave impact location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassWaveImpactDefaults {
    pub wave_angle_impact: ImpactWaveAngleImpact,
    pub min_wave_height_temax: f64,
    pub max_wave_height_temin: f64,
    pub time_line: TimeLine,
    pub upper_limit_loading_aul: f64,
    pub lower_limit_loading_all: f64,
}

impl TryFrom<TopLayerType> for GrassWaveImpactDefaults {
    type Error = DefaultsError;

    fn try_from(top_layer: TopLayerType) -> Result<Self, Self::Error> {
        let time_line = match top_layer {
            TopLayerType::GrassClosedSod => TimeLine {
                agwi: 1.0,
                bgwi: -0.000009722,
                cgwi: 0.25,
            },
            TopLayerType::GrassOpenSod => TimeLine {
                agwi: 0.8,
                bgwi: -0.00001944,
                cgwi: 0.25,
            },
            other => return Err(DefaultsError::unsupported("grass wave impact", other)),
        };

        Ok(Self {
            wave_angle_impact: ImpactWaveAngleImpact {
                nwa: 2.0 / 3.0,
                qwa: 0.35,
                rwa: 10.0,
            },
            min_wave_height_temax: 3_600_000.0,
            max_wave_height_temin: 3.6,
            time_line,
            upper_limit_loading_aul: 0.0,
            lower_limit_loading_all: 0.5,
        })
    }
}

/// Defaults of a grass wave overtopping location (Rayleigh protocol).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrassWaveOvertoppingDefaults {
    pub critical_cumulative_overload: f64,
    pub critical_front_velocity: f64,
    pub transition: TransitionFactors,
    pub acceleration_alpha_a: AccelerationAlphaA,
    pub fixed_number_of_waves: usize,
    pub front_velocity_cwo: f64,
    pub average_number_of_waves_ctm: f64,
    pub representative_wave_runup_2p: RepresentativeWaveRunup2P,
    pub wave_angle_impact: RunupWaveAngleImpact,
}

impl TryFrom<TopLayerType> for GrassWaveOvertoppingDefaults {
    type Error = DefaultsError;

    fn try_from(top_layer: TopLayerType) -> Result<Self, Self::Error> {
        let critical_front_velocity = match top_layer {
            TopLayerType::GrassClosedSod => 6.6,
            TopLayerType::GrassOpenSod => 4.3,
            other => return Err(DefaultsError::unsupported("grass wave overtopping", other)),
        };

        Ok(Self {
            critical_cumulative_overload: 7000.0,
            critical_front_velocity,
            transition: TransitionFactors::NONE,
            acceleration_alpha_a: AccelerationAlphaA {
                crest: 1.0,
                inner_slope: 1.4,
            },
            fixed_number_of_waves: FIXED_NUMBER_OF_WAVES,
            front_velocity_cwo: 1.45,
            average_number_of_waves_ctm: AVERAGE_NUMBER_OF_WAVES_CTM,
            representative_wave_runup_2p: REPRESENTATIVE_WAVE_RUNUP_2P,
            wave_angle_impact: RUNUP_WAVE_ANGLE_IMPACT,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runup_closed_sod() {
        let defaults = GrassWaveRunupDefaults::try_from(TopLayerType::GrassClosedSod).unwrap();
        assert_eq!(defaults.critical_cumulative_overload, 7000.0);
        assert_eq!(defaults.critical_front_velocity, 6.6);
        assert_eq!(defaults.fixed_number_of_waves, 10_000);
        assert_eq!(defaults.front_velocity_cu, 1.1);
    }

    #[test]
    fn test_runup_open_sod() {
        let defaults = GrassWaveRunupDefaults::try_from(TopLayerType::GrassOpenSod).unwrap();
        assert_eq!(defaults.critical_front_velocity, 3.5);
    }

    #[test]
    fn test_impact_time_lines_differ_per_sod() {
        let closed = GrassWaveImpactDefaults::try_from(TopLayerType::GrassClosedSod).unwrap();
        let open = GrassWaveImpactDefaults::try_from(TopLayerType::GrassOpenSod).unwrap();
        assert_eq!(closed.time_line.agwi, 1.0);
        assert_eq!(open.time_line.agwi, 0.8);
        assert_eq!(closed.wave_angle_impact, open.wave_angle_impact);
    }

    #[test]
    fn test_overtopping_open_sod() {
        let defaults = GrassWaveOvertoppingDefaults::try_from(TopLayerType::GrassOpenSod).unwrap();
        assert_eq!(defaults.critical_front_velocity, 4.3);
        assert_eq!(defaults.acceleration_alpha_a.inner_slope, 1.4);
    }

    #[test]
    fn test_grass_rejects_other_top_layers() {
        for top_layer in [TopLayerType::HydraulicAsphaltConcrete, TopLayerType::NordicStone] {
            assert!(GrassWaveRunupDefaults::try_from(top_layer).is_err());
            assert!(GrassWaveImpactDefaults::try_from(top_layer).is_err());
            assert!(GrassWaveOvertoppingDefaults::try_from(top_layer).is_err());
        }
    }
}
