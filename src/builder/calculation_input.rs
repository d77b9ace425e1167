//! The assembled calculation input and the outcome of a build.

use crate::location::{DerivedLocationInput, LocationInput};
use crate::profile::ProfileData;
use crate::time::TimeStep;
use crate::validation::ValidationIssue;

/// Validated input of a calculation.
///
/// Only the builder creates it, and only when no Error was found. All
/// locations are derived against the profile at build time; the input is
/// read-only afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationInput {
    profile_data: ProfileData,
    time_steps: Vec<TimeStep>,
    location_inputs: Vec<LocationInput>,
    derived_locations: Vec<DerivedLocationInput>,
}

impl CalculationInput {
    pub(crate) fn new(
        profile_data: ProfileData,
        time_steps: Vec<TimeStep>,
        location_inputs: Vec<LocationInput>,
        derived_locations: Vec<DerivedLocationInput>,
    ) -> Self {
        Self {
            profile_data,
            time_steps,
            location_inputs,
            derived_locations,
        }
    }

    pub fn profile_data(&self) -> &ProfileData {
        &self.profile_data
    }

    /// Time steps in chronological order.
    pub fn time_steps(&self) -> &[TimeStep] {
        &self.time_steps
    }

    /// Locations in insertion order, with defaults resolved.
    pub fn location_inputs(&self) -> &[LocationInput] {
        &self.location_inputs
    }

    /// Locations resolved against the profile, in the order of
    /// [`location_inputs`](Self::location_inputs).
    pub fn derived_locations(&self) -> &[DerivedLocationInput] {
        &self.derived_locations
    }
}

/// Outcome of [`CalculationInputBuilder::build`](super::CalculationInputBuilder::build).
///
/// Holds every issue found, in the order found. A failed build never
/// carries a partial input.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildResult {
    issues: Vec<ValidationIssue>,
    input: Option<CalculationInput>,
}

impl BuildResult {
    pub(crate) fn succeeded(issues: Vec<ValidationIssue>, input: CalculationInput) -> Self {
        Self {
            issues,
            input: Some(input),
        }
    }

    pub(crate) fn failed(issues: Vec<ValidationIssue>) -> Self {
        Self { issues, input: None }
    }

    /// True if the input was built.
    pub fn successful(&self) -> bool {
        self.input.is_some()
    }

    /// All errors and warnings.
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| issue.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|issue| !issue.is_error())
    }

    pub fn input(&self) -> Option<&CalculationInput> {
        self.input.as_ref()
    }

    /// Split into the built input or the issues explaining why there is none.
    pub fn into_result(self) -> Result<CalculationInput, Vec<ValidationIssue>> {
        match self.input {
            Some(input) => Ok(input),
            None => Err(self.issues),
        }
    }
}
