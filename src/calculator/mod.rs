//! Damage time stepping over all locations.
//!
//! The [`Calculator`] runs once over a validated [`CalculationInput`]: for
//! every location it carries the damage through the time steps in order,
//! feeding each step the damage of the previous one. Locations are
//! independent, so with the `parallel` feature they can be calculated on
//! the rayon thread pool; the steps of one location always run in order.
//!
//! # Example
//!
//! ```
//! use revetment_rs::builder::{CalculationInputBuilder, GrassWaveImpactProperties};
//! use revetment_rs::calculator::Calculator;
//! use revetment_rs::defaults::TopLayerType;
//! use revetment_rs::profile::CharacteristicPointType;
//!
//! let input = CalculationInputBuilder::new()
//!     .add_dike_profile_segment(0.0, 0.0, 30.0, 7.5)
//!     .add_dike_profile_point(0.0, CharacteristicPointType::OuterToe)
//!     .add_dike_profile_point(30.0, CharacteristicPointType::OuterCrest)
//!     .add_time_step(0.0, 3600.0, 2.2, 1.0, 5.0, 0.0)
//!     .add_location(GrassWaveImpactProperties::new(8.0, TopLayerType::GrassOpenSod))
//!     .build()
//!     .into_result()
//!     .unwrap();
//!
//! let mut calculator = Calculator::new(input);
//! let output = calculator.run().unwrap();
//! assert_eq!(output.location_dependent_outputs.len(), 1);
//! ```

mod cancellation;

pub use cancellation::CancellationToken;

use crate::builder::CalculationInput;
use crate::location::DerivedLocationInput;
use crate::output::{CalculationOutput, LocationDependentOutput};
use crate::profile::ProfileData;
use crate::time::TimeStep;
use std::fmt;
use thiserror::Error;

// =============================================================================
// Configuration
// =============================================================================

/// Settings of a calculation run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalculatorConfig {
    /// Calculate locations in parallel (only with the `parallel` feature)
    pub parallel: bool,
    /// Log every finished location at debug level
    pub log_progress: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
            log_progress: false,
        }
    }
}

impl CalculatorConfig {
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_log_progress(mut self, log_progress: bool) -> Self {
        self.log_progress = log_progress;
        self
    }
}

// =============================================================================
// State and errors
// =============================================================================

/// Lifecycle of a [`Calculator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculationState {
    NotStarted,
    Running,
    Completed,
    Cancelled,
}

impl fmt::Display for CalculationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "not started"),
            Self::Running => write!(f, "running"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationError {
    #[error("The calculation has already been run (state: {0})")]
    AlreadyRun(CalculationState),

    #[error("The calculation was cancelled")]
    Cancelled,
}

// =============================================================================
// Calculator
// =============================================================================

/// Runs the damage calculation of a [`CalculationInput`].
#[derive(Debug)]
pub struct Calculator {
    input: CalculationInput,
    config: CalculatorConfig,
    state: CalculationState,
    cancellation: CancellationToken,
}

impl Calculator {
    pub fn new(input: CalculationInput) -> Self {
        Self {
            input,
            config: CalculatorConfig::default(),
            state: CalculationState::NotStarted,
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Token that cancels this calculator's run from another thread.
    ///
    /// Cancellation is checked between locations.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    pub fn state(&self) -> CalculationState {
        self.state
    }

    pub fn input(&self) -> &CalculationInput {
        &self.input
    }

    /// Calculate all locations over all time steps.
    ///
    /// A calculator runs once; a second call returns
    /// [`CalculationError::AlreadyRun`].
    pub fn run(&mut self) -> Result<CalculationOutput, CalculationError> {
        if self.state != CalculationState::NotStarted {
            return Err(CalculationError::AlreadyRun(self.state));
        }

        self.state = CalculationState::Running;
        log::info!(
            "Starting calculation: {} locations, {} time steps",
            self.input.derived_locations().len(),
            self.input.time_steps().len()
        );

        match self.calculate_locations() {
            Some(outputs) => {
                let output = CalculationOutput::new(outputs);
                self.state = CalculationState::Completed;
                log::info!(
                    "Calculation completed: {} of {} locations failed",
                    output.n_failed(),
                    output.location_dependent_outputs.len()
                );
                Ok(output)
            }
            None => {
                self.state = CalculationState::Cancelled;
                log::info!("Calculation cancelled");
                Err(CalculationError::Cancelled)
            }
        }
    }

    /// Outputs in location order, or `None` when cancelled.
    fn calculate_locations(&self) -> Option<Vec<LocationDependentOutput>> {
        let locations = self.input.derived_locations();
        let time_steps = self.input.time_steps();
        let profile = self.input.profile_data();

        let log_progress = self.config.log_progress;

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            use rayon::prelude::*;

            return locations
                .par_iter()
                .map(|location| {
                    (!self.cancellation.is_cancelled())
                        .then(|| calculate_location(location, time_steps, profile, log_progress))
                })
                .collect();
        }

        let mut outputs = Vec::with_capacity(locations.len());
        for location in locations {
            if self.cancellation.is_cancelled() {
                return None;
            }
            outputs.push(calculate_location(location, time_steps, profile, log_progress));
        }
        Some(outputs)
    }
}

/// Carry the damage of one location through all time steps.
pub fn calculate_location(
    location: &DerivedLocationInput,
    time_steps: &[TimeStep],
    profile: &ProfileData,
    log_progress: bool,
) -> LocationDependentOutput {
    let failed_from_start = if location.failed_initially() {
        time_steps.first().map(|step| step.begin_time)
    } else {
        None
    };

    let mut damage = location.initial_damage;
    let mut outputs = Vec::with_capacity(time_steps.len());
    for step in time_steps {
        let output = location.calculate(damage, step, profile);
        damage = output.damage;
        outputs.push(output);
    }

    let output = LocationDependentOutput::new(
        location.x,
        location.z,
        location.initial_damage,
        location.failure_number,
        outputs,
        failed_from_start,
    );

    if let Some(time_of_failure) = output.time_of_failure {
        log::info!("Location at x = {} failed at t = {time_of_failure} s", location.x);
    }
    if log_progress {
        log::debug!(
            "Location at x = {} calculated: final damage {}",
            location.x,
            output.final_damage
        );
    }

    output
}
