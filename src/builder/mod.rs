//! Assembly and validation of a calculation input.
//!
//! [`CalculationInputBuilder`] accumulates the dike profile, the time steps
//! and one set of construction properties per location. Unset optional
//! properties are filled in from the defaults of the location's top layer
//! type. [`build`](CalculationInputBuilder::build) checks everything and
//! returns a [`BuildResult`] holding either a [`CalculationInput`] or the
//! full list of issues.

mod calculation_input;
mod calculation_input_builder;
mod properties;

pub use calculation_input::{BuildResult, CalculationInput};
pub use calculation_input_builder::{BuilderConfig, CalculationInputBuilder};
pub use properties::{
    AsphaltWaveImpactProperties, GrassWaveImpactProperties, GrassWaveOvertoppingProperties,
    GrassWaveRunupProperties, LocationConstructionProperties, NaturalStoneProperties,
};
