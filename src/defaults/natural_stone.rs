//! Natural stone defaults for Nordic stone.

use super::{DefaultsError, TopLayerType};
use crate::physics::natural_stone::{HydraulicLoad, LimitLoading, LoadCoefficients, SlopeLevels};

/// Defaults of a natural stone location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NaturalStoneDefaults {
    pub hydraulic_load: HydraulicLoad,
    pub slope: SlopeLevels,
    pub limit_loading: LimitLoading,
    /// Asmax
    pub distance_maximum_wave_elevation_asmax: f64,
    /// Bsmax
    pub distance_maximum_wave_elevation_bsmax: f64,
    /// Awi
    pub normative_width_of_wave_impact_awi: f64,
    /// Bwi
    pub normative_width_of_wave_impact_bwi: f64,
    /// βmax (degrees)
    pub wave_angle_impact_beta_max: f64,
}

impl TryFrom<TopLayerType> for NaturalStoneDefaults {
    type Error = DefaultsError;

    fn try_from(top_layer: TopLayerType) -> Result<Self, Self::Error> {
        if top_layer != TopLayerType::NordicStone {
            return Err(DefaultsError::unsupported("natural stone", top_layer));
        }

        Ok(Self {
            hydraulic_load: HydraulicLoad {
                plunging: LoadCoefficients {
                    a: 4.0,
                    b: 0.0,
                    c: 0.0,
                    n: -0.9,
                },
                surging: LoadCoefficients {
                    a: 0.8,
                    b: 0.0,
                    c: 0.0,
                    n: 0.6,
                },
                xib: 2.9,
            },
            slope: SlopeLevels {
                upper: 0.05,
                lower: 1.5,
            },
            limit_loading: LimitLoading {
                aul: 0.1,
                bul: 0.6,
                cul: 4.0,
                all: 0.1,
                bll: 0.2,
                cll: 4.0,
            },
            distance_maximum_wave_elevation_asmax: 0.42,
            distance_maximum_wave_elevation_bsmax: 0.9,
            normative_width_of_wave_impact_awi: 0.96,
            normative_width_of_wave_impact_bwi: 0.11,
            wave_angle_impact_beta_max: 78.0,
        })
    }
}
