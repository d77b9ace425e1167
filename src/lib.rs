//! # revetment-rs
//!
//! Damage calculation for dike revetments under storm loading.
//!
//! This crate provides:
//! - Dike profile geometry with characteristic points
//! - Time-dependent hydraulic loads (water level, wave height, period, angle)
//! - Validation of all input as data (errors and warnings)
//! - Default coefficients per revetment kind and top layer type
//! - Five revetment models: grass wave run-up, grass wave impact, grass wave
//!   overtopping, asphalt wave impact and natural stone
//! - A builder that assembles and checks a calculation input
//! - A calculator that carries the damage of every location through the storm
//!
//! # Example
//!
//! ```
//! use revetment_rs::{CalculationInputBuilder, Calculator, CharacteristicPointType, TopLayerType};
//! use revetment_rs::builder::GrassWaveImpactProperties;
//!
//! let result = CalculationInputBuilder::new()
//!     .add_dike_profile_segment(0.0, 0.0, 30.0, 7.5)
//!     .add_dike_profile_point(0.0, CharacteristicPointType::OuterToe)
//!     .add_dike_profile_point(30.0, CharacteristicPointType::OuterCrest)
//!     .add_time_step(0.0, 3600.0, 2.2, 1.0, 5.0, 0.0)
//!     .add_time_step(3600.0, 7200.0, 2.2, 1.0, 5.0, 0.0)
//!     .add_location(GrassWaveImpactProperties::new(8.0, TopLayerType::GrassOpenSod))
//!     .build();
//!
//! for issue in result.issues() {
//!     println!("{issue}");
//! }
//!
//! let input = result.into_result().unwrap();
//! let output = Calculator::new(input).run().unwrap();
//! let location = &output.location_dependent_outputs[0];
//! assert!(location.failed());
//! ```

pub mod builder;
pub mod calculator;
pub mod defaults;
pub mod location;
pub mod output;
pub mod physics;
pub mod profile;
pub mod time;
pub mod validation;

// Re-export main types for convenience
pub use builder::{BuildResult, BuilderConfig, CalculationInput, CalculationInputBuilder};
pub use calculator::{
    CalculationError, CalculationState, Calculator, CalculatorConfig, CancellationToken,
};
pub use defaults::{DefaultsError, TopLayerType};
pub use location::{DerivationError, DerivedLocationInput, LocationInput, RevetmentInput};
pub use output::{CalculationOutput, LocationDependentOutput, OutputDetails, TimeDependentOutput};
pub use profile::{
    CharacteristicPoint, CharacteristicPointType, ProfileData, ProfilePoint, ProfileSegment,
};
pub use time::TimeStep;
pub use validation::{Severity, ValidationIssue, ValidationResult};
