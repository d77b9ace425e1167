//! Asphalt defaults for hydraulic asphalt concrete.

use super::{DefaultsError, TopLayerType};
use crate::physics::asphalt_wave_impact::Fatigue;

/// Distribution of the impact width relative to Hm0.
pub const WIDTH_FACTORS: &[(f64, f64)] = &[
    (0.1, 0.0392),
    (0.2, 0.0738),
    (0.3, 0.1002),
    (0.4, 0.1162),
    (0.5, 0.1213),
    (0.6, 0.1168),
    (0.7, 0.1051),
    (0.8, 0.0890),
    (0.9, 0.0712),
    (1.0, 0.0541),
    (1.1, 0.0391),
    (1.2, 0.0269),
    (1.3, 0.0216),
    (1.4, 0.0150),
    (1.5, 0.0105),
];

/// Distribution of the impact depth relative to the water level, in units of Hm0.
pub const DEPTH_FACTORS: &[(f64, f64)] = &[
    (-1.0, 0.005),
    (-0.9, 0.01),
    (-0.8, 0.02),
    (-0.7, 0.04),
    (-0.6, 0.07),
    (-0.5, 0.10),
    (-0.4, 0.14),
    (-0.3, 0.16),
    (-0.2, 0.15),
    (-0.1, 0.12),
    (0.0, 0.09),
    (0.1, 0.06),
    (0.2, 0.035),
];

/// Distribution of the impact pressure in units of ρ g Hm0.
pub const IMPACT_FACTORS: &[(f64, f64)] = &[
    (2.0, 0.039),
    (2.4, 0.107),
    (2.8, 0.227),
    (3.2, 0.26),
    (3.6, 0.202),
    (4.0, 0.111),
    (4.4, 0.043),
    (4.8, 0.0091),
    (5.2, 0.0018),
    (5.6, 0.0001),
    (6.0, 0.0),
];

/// Defaults of an asphalt wave impact location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsphaltWaveImpactDefaults {
    pub density_of_water: f64,
    pub average_number_of_waves_ctm: f64,
    pub fatigue: Fatigue,
    pub impact_number_c: f64,
    pub stiffness_relation_nu: f64,
    pub width_factors: &'static [(f64, f64)],
    pub depth_factors: &'static [(f64, f64)],
    pub impact_factors: &'static [(f64, f64)],
}

impl TryFrom<TopLayerType> for AsphaltWaveImpactDefaults {
    type Error = DefaultsError;

    fn try_from(top_layer: TopLayerType) -> Result<Self, Self::Error> {
        match top_layer {
            TopLayerType::HydraulicAsphaltConcrete => Ok(Self {
                density_of_water: 1025.0,
                average_number_of_waves_ctm: 1.0,
                fatigue: Fatigue {
                    alpha: 0.42,
                    beta: 4.76,
                },
                impact_number_c: 1.0,
                stiffness_relation_nu: 0.35,
                width_factors: WIDTH_FACTORS,
                depth_factors: DEPTH_FACTORS,
                impact_factors: IMPACT_FACTORS,
            }),
            other => Err(DefaultsError::unsupported("asphalt wave impact", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn probability_sum(table: &[(f64, f64)]) -> f64 {
        table.iter().map(|&(_, p)| p).sum()
    }

    #[test]
    fn test_factor_tables_are_distributions() {
        assert_relative_eq!(probability_sum(WIDTH_FACTORS), 1.0, epsilon = 1e-9);
        assert_relative_eq!(probability_sum(DEPTH_FACTORS), 1.0, epsilon = 1e-9);
        assert_relative_eq!(probability_sum(IMPACT_FACTORS), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_hydraulic_asphalt_concrete() {
        let defaults =
            AsphaltWaveImpactDefaults::try_from(TopLayerType::HydraulicAsphaltConcrete).unwrap();
        assert_eq!(defaults.density_of_water, 1025.0);
        assert_eq!(defaults.fatigue.alpha, 0.42);
        assert_eq!(defaults.width_factors.len(), 15);
    }

    #[test]
    fn test_grass_is_not_asphalt() {
        assert!(AsphaltWaveImpactDefaults::try_from(TopLayerType::GrassClosedSod).is_err());
    }
}
