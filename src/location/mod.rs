//! Location inputs: one evaluation point on the profile with its revetment.
//!
//! A [`LocationInput`] holds the fields every location has (position,
//! initial damage, failure number) plus a [`RevetmentInput`] with the
//! coefficients of one revetment kind. Calculation is two-phase:
//!
//! 1. [`LocationInput::validate`] checks the input against the profile and
//!    reports every issue found.
//! 2. [`LocationInput::derive`] resolves the values that depend on the
//!    profile (elevation, layer properties, slope averages) once, giving a
//!    [`DerivedLocationInput`] whose [`calculate`](DerivedLocationInput::calculate)
//!    advances the damage over one time step.
//!
//! Derived inputs are immutable, so locations can be calculated in parallel.

mod asphalt_wave_impact;
mod factor_table;
mod grass_wave_impact;
mod grass_wave_overtopping;
mod grass_wave_runup;
mod natural_stone;

pub use asphalt_wave_impact::{AsphaltLayer, AsphaltWaveImpactInput, DerivedAsphaltWaveImpact};
pub use factor_table::FactorTable;
pub use grass_wave_impact::{DerivedGrassWaveImpact, GrassWaveImpactInput};
pub use grass_wave_overtopping::{DerivedGrassWaveOvertopping, GrassWaveOvertoppingInput};
pub use grass_wave_runup::GrassWaveRunupInput;
pub use natural_stone::{DerivedNaturalStone, NaturalStoneInput};

use crate::defaults;
use crate::output::TimeDependentOutput;
use crate::physics::damage;
use crate::profile::{CharacteristicPointType, ProfileData};
use crate::time::TimeStep;
use crate::validation::{ValidationIssue, ValidationResult, rules};
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// A location that cannot be resolved against the profile.
///
/// The builder validates locations before deriving them, so these only
/// occur when a location is derived against a profile it was not checked
/// against.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DerivationError {
    #[error("Location at x = {x} lies outside the profile")]
    OutsideProfile { x: f64 },

    #[error("The profile has no {0} characteristic point")]
    MissingCharacteristicPoint(CharacteristicPointType),

    #[error("The profile has no rising outer slope between the outer toe and the outer crest")]
    NoOuterSlope,
}

// =============================================================================
// Location input
// =============================================================================

/// Revetment specific coefficients of a location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RevetmentInput {
    GrassWaveRunup(GrassWaveRunupInput),
    GrassWaveImpact(GrassWaveImpactInput),
    GrassWaveOvertopping(GrassWaveOvertoppingInput),
    AsphaltWaveImpact(AsphaltWaveImpactInput),
    NaturalStone(NaturalStoneInput),
}

impl RevetmentInput {
    /// Human readable name of the revetment kind.
    pub fn name(&self) -> &'static str {
        match self {
            RevetmentInput::GrassWaveRunup(_) => "grass wave run-up",
            RevetmentInput::GrassWaveImpact(_) => "grass wave impact",
            RevetmentInput::GrassWaveOvertopping(_) => "grass wave overtopping",
            RevetmentInput::AsphaltWaveImpact(_) => "asphalt wave impact",
            RevetmentInput::NaturalStone(_) => "natural stone",
        }
    }

    /// Whether the location lies on the crest or inner slope instead of the outer slope.
    pub fn is_landward(&self) -> bool {
        matches!(self, RevetmentInput::GrassWaveOvertopping(_))
    }
}

/// One evaluation point on the profile.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationInput {
    /// Horizontal position on the profile
    pub x: f64,
    pub initial_damage: f64,
    /// Damage at which the revetment fails
    pub failure_number: f64,
    pub revetment: RevetmentInput,
}

impl LocationInput {
    /// Location without initial damage and failure number 1.
    pub fn new(x: f64, revetment: RevetmentInput) -> Self {
        Self {
            x,
            initial_damage: defaults::INITIAL_DAMAGE,
            failure_number: defaults::FAILURE_NUMBER,
            revetment,
        }
    }

    pub fn with_initial_damage(mut self, initial_damage: f64) -> Self {
        self.initial_damage = initial_damage;
        self
    }

    pub fn with_failure_number(mut self, failure_number: f64) -> Self {
        self.failure_number = failure_number;
        self
    }

    /// Check the location against the profile.
    ///
    /// Every check runs; the result holds all issues found.
    pub fn validate(&self, profile: &ProfileData) -> ValidationResult {
        let mut result = ValidationResult::from_checks([
            rules::initial_damage(self.initial_damage),
            rules::failure_number(self.failure_number, self.initial_damage),
        ]);
        result.extend(self.validate_position(profile));

        result.merge(match &self.revetment {
            RevetmentInput::GrassWaveRunup(input) => input.validate(),
            RevetmentInput::GrassWaveImpact(input) => input.validate(),
            RevetmentInput::GrassWaveOvertopping(input) => input.validate(profile),
            RevetmentInput::AsphaltWaveImpact(input) => input.validate(),
            RevetmentInput::NaturalStone(input) => input.validate(),
        });

        result
    }

    fn validate_position(&self, profile: &ProfileData) -> Vec<Option<ValidationIssue>> {
        let point_x = |point_type| profile.characteristic_point(point_type).map(|point| point.x);
        let missing = |point_type: CharacteristicPointType| {
            Some(ValidationIssue::error(format!(
                "The profile has no {point_type} characteristic point."
            )))
        };

        if self.revetment.is_landward() {
            match (
                point_x(CharacteristicPointType::OuterCrest),
                point_x(CharacteristicPointType::InnerToe),
            ) {
                (Some(crest_x), Some(inner_toe_x)) => {
                    vec![rules::location_on_crest_or_inner_slope(self.x, crest_x, inner_toe_x)]
                }
                (None, _) => vec![missing(CharacteristicPointType::OuterCrest)],
                (_, None) => vec![missing(CharacteristicPointType::InnerToe)],
            }
        } else {
            match (
                point_x(CharacteristicPointType::OuterToe),
                point_x(CharacteristicPointType::OuterCrest),
            ) {
                (Some(toe_x), Some(crest_x)) => {
                    vec![rules::location_on_outer_slope(self.x, toe_x, crest_x)]
                }
                (None, _) => vec![missing(CharacteristicPointType::OuterToe)],
                (_, None) => vec![missing(CharacteristicPointType::OuterCrest)],
            }
        }
    }

    /// Resolve the profile dependent values of this location.
    ///
    /// Pure: deriving twice against the same profile gives equal results.
    pub fn derive(&self, profile: &ProfileData) -> Result<DerivedLocationInput, DerivationError> {
        let z = profile
            .interpolate_vertical_position(self.x)
            .ok_or(DerivationError::OutsideProfile { x: self.x })?;

        let revetment = match &self.revetment {
            RevetmentInput::GrassWaveRunup(input) => {
                DerivedRevetment::GrassWaveRunup(input.clone())
            }
            RevetmentInput::GrassWaveImpact(input) => {
                DerivedRevetment::GrassWaveImpact(input.derive())
            }
            RevetmentInput::GrassWaveOvertopping(input) => {
                DerivedRevetment::GrassWaveOvertopping(input.derive(self.x, profile)?)
            }
            RevetmentInput::AsphaltWaveImpact(input) => {
                DerivedRevetment::AsphaltWaveImpact(input.derive())
            }
            RevetmentInput::NaturalStone(input) => {
                DerivedRevetment::NaturalStone(input.derive(profile)?)
            }
        };

        Ok(DerivedLocationInput {
            x: self.x,
            z,
            initial_damage: self.initial_damage,
            failure_number: self.failure_number,
            revetment,
        })
    }
}

// =============================================================================
// Derived location input
// =============================================================================

/// Revetment coefficients together with their profile dependent values.
#[derive(Clone, Debug, PartialEq)]
pub enum DerivedRevetment {
    GrassWaveRunup(GrassWaveRunupInput),
    GrassWaveImpact(DerivedGrassWaveImpact),
    GrassWaveOvertopping(DerivedGrassWaveOvertopping),
    AsphaltWaveImpact(DerivedAsphaltWaveImpact),
    NaturalStone(DerivedNaturalStone),
}

/// A location resolved against the profile, ready for calculation.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedLocationInput {
    pub x: f64,
    /// Elevation of the location on the profile
    pub z: f64,
    pub initial_damage: f64,
    pub failure_number: f64,
    pub revetment: DerivedRevetment,
}

impl DerivedLocationInput {
    /// Advance the damage over one time step.
    ///
    /// The time of failure is set only if this step takes the damage from
    /// below the failure number to at least the failure number.
    pub fn calculate(
        &self,
        previous_damage: f64,
        step: &TimeStep,
        profile: &ProfileData,
    ) -> TimeDependentOutput {
        let (increment_damage, details) = match &self.revetment {
            DerivedRevetment::GrassWaveRunup(input) => {
                input.calculate(self.z, previous_damage, step)
            }
            DerivedRevetment::GrassWaveImpact(input) => input.calculate(self.z, step),
            DerivedRevetment::GrassWaveOvertopping(input) => input.calculate(step),
            DerivedRevetment::AsphaltWaveImpact(input) => input.calculate(self.z, step),
            DerivedRevetment::NaturalStone(input) => {
                input.calculate(self.z, previous_damage, step, profile)
            }
        };

        TimeDependentOutput {
            increment_damage,
            damage: damage::damage(previous_damage, increment_damage),
            time_of_failure: damage::time_of_failure(
                previous_damage,
                increment_damage,
                self.failure_number,
                step.begin_time,
                step.end_time,
            ),
            details,
        }
    }

    /// Whether the initial damage already reached the failure number.
    pub fn failed_initially(&self) -> bool {
        self.initial_damage >= self.failure_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::{GrassWaveImpactDefaults, TopLayerType};
    use crate::profile::{CharacteristicPoint, ProfilePoint, ProfileSegment};

    fn profile() -> ProfileData {
        let segments = vec![ProfileSegment::new(
            ProfilePoint::new(0.0, 0.0),
            ProfilePoint::new(20.0, 5.0),
        )];
        let characteristic_points = vec![
            CharacteristicPoint::new(0, CharacteristicPointType::OuterToe),
            CharacteristicPoint::new(1, CharacteristicPointType::OuterCrest),
        ];
        ProfileData::new(segments, characteristic_points)
    }

    fn grass_impact(x: f64) -> LocationInput {
        let defaults = GrassWaveImpactDefaults::try_from(TopLayerType::GrassOpenSod).unwrap();
        LocationInput::new(
            x,
            RevetmentInput::GrassWaveImpact(GrassWaveImpactInput {
                wave_angle_impact: defaults.wave_angle_impact,
                min_wave_height_temax: defaults.min_wave_height_temax,
                max_wave_height_temin: defaults.max_wave_height_temin,
                time_line: defaults.time_line,
                upper_limit_loading_aul: defaults.upper_limit_loading_aul,
                lower_limit_loading_all: defaults.lower_limit_loading_all,
            }),
        )
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let profile = profile();
        let location = grass_impact(8.0);
        let first = location.derive(&profile).unwrap();
        let second = location.derive(&profile).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.z, 2.0);
    }

    #[test]
    fn test_location_on_the_toe_is_invalid() {
        let result = grass_impact(0.0).validate(&profile());
        assert!(!result.successful());
        assert_eq!(result.errors().count(), 1);
    }

    #[test]
    fn test_failure_number_below_initial_damage() {
        let location = grass_impact(8.0).with_initial_damage(0.5).with_failure_number(0.4);
        assert!(!location.validate(&profile()).successful());
    }

    #[test]
    fn test_outside_profile_cannot_be_derived() {
        let error = grass_impact(30.0).derive(&profile()).unwrap_err();
        assert_eq!(error, DerivationError::OutsideProfile { x: 30.0 });
    }

    #[test]
    fn test_calculate_records_failure_once() {
        let profile = profile();
        let derived = grass_impact(8.0).derive(&profile).unwrap();
        // Water level 2.2 with Hm0 1 loads z = 2
        let step = TimeStep::new(0.0, 7200.0, 2.2, 1.0, 5.0, 0.0);

        let first = derived.calculate(0.0, &step, &profile);
        assert!(first.increment_damage > 0.0);
        assert!(first.damage >= 1.0);
        let time_of_failure = first.time_of_failure.unwrap();
        assert!((0.0..=7200.0).contains(&time_of_failure));

        let second = derived.calculate(first.damage, &step, &profile);
        assert!(second.time_of_failure.is_none());
    }
}
