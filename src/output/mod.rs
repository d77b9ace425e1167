//! Calculation output.
//!
//! The calculator produces one [`TimeDependentOutput`] per location per time
//! step, grouped into a [`LocationDependentOutput`] per location and a
//! [`CalculationOutput`] for the whole run. All output is immutable once
//! produced.

mod details;

pub use details::{
    AsphaltWaveImpactDetails, GrassWaveImpactDetails, GrassWaveOvertoppingDetails,
    GrassWaveRunupDetails, NaturalStoneDetails, OutputDetails,
};

// =============================================================================
// Time dependent output
// =============================================================================

/// Result of one location for one time step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeDependentOutput {
    /// Damage added during the step.
    pub increment_damage: f64,
    /// Cumulative damage at the end of the step.
    pub damage: f64,
    /// Moment the failure number was reached, if during this step.
    pub time_of_failure: Option<f64>,
    /// Intermediate values of the revetment model.
    pub details: OutputDetails,
}

// =============================================================================
// Location dependent output
// =============================================================================

/// Time series of one location plus summary values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationDependentOutput {
    /// Horizontal position of the location.
    pub x: f64,
    /// Elevation of the location on the profile.
    pub z: f64,
    pub initial_damage: f64,
    pub failure_number: f64,
    /// One entry per time step, in chronological order.
    pub time_dependent_outputs: Vec<TimeDependentOutput>,
    /// Damage after the last time step.
    pub final_damage: f64,
    /// First moment the failure number was reached.
    pub time_of_failure: Option<f64>,
}

impl LocationDependentOutput {
    /// Assemble the output of a location, deriving the summary values.
    ///
    /// `failed_from_start` marks a location whose initial damage already
    /// reached the failure number; its time of failure is the begin time
    /// passed in.
    pub fn new(
        x: f64,
        z: f64,
        initial_damage: f64,
        failure_number: f64,
        time_dependent_outputs: Vec<TimeDependentOutput>,
        failed_from_start: Option<f64>,
    ) -> Self {
        let final_damage = time_dependent_outputs
            .last()
            .map_or(initial_damage, |output| output.damage);
        let time_of_failure = failed_from_start.or_else(|| {
            time_dependent_outputs
                .iter()
                .find_map(|output| output.time_of_failure)
        });

        Self {
            x,
            z,
            initial_damage,
            failure_number,
            time_dependent_outputs,
            final_damage,
            time_of_failure,
        }
    }

    /// Whether the revetment failed at this location.
    pub fn failed(&self) -> bool {
        self.time_of_failure.is_some()
    }

    /// Cumulative damage per time step.
    pub fn damages(&self) -> Vec<f64> {
        self.time_dependent_outputs.iter().map(|output| output.damage).collect()
    }

    /// Damage increment per time step.
    pub fn increment_damages(&self) -> Vec<f64> {
        self.time_dependent_outputs
            .iter()
            .map(|output| output.increment_damage)
            .collect()
    }
}

// =============================================================================
// Calculation output
// =============================================================================

/// Output of a complete calculation.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationOutput {
    /// One entry per location, in input order.
    pub location_dependent_outputs: Vec<LocationDependentOutput>,
}

impl CalculationOutput {
    pub fn new(location_dependent_outputs: Vec<LocationDependentOutput>) -> Self {
        Self {
            location_dependent_outputs,
        }
    }

    /// Number of locations whose revetment failed.
    pub fn n_failed(&self) -> usize {
        self.location_dependent_outputs
            .iter()
            .filter(|output| output.failed())
            .count()
    }

    /// Earliest time of failure over all locations.
    pub fn first_failure(&self) -> Option<f64> {
        self.location_dependent_outputs
            .iter()
            .filter_map(|output| output.time_of_failure)
            .reduce(f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(
        increment_damage: f64,
        damage: f64,
        time_of_failure: Option<f64>,
    ) -> TimeDependentOutput {
        TimeDependentOutput {
            increment_damage,
            damage,
            time_of_failure,
            details: OutputDetails::GrassWaveImpact(GrassWaveImpactDetails {
                loading_revetment: false,
                upper_limit_loading: 0.0,
                lower_limit_loading: 0.0,
                minimum_wave_height: None,
                maximum_wave_height: None,
                wave_angle_impact: None,
                wave_height_impact: None,
            }),
        }
    }

    #[test]
    fn test_summary_values() {
        let output = LocationDependentOutput::new(
            1.0,
            2.0,
            0.1,
            1.0,
            vec![step(0.5, 0.6, None), step(0.6, 1.2, Some(15.0)), step(0.1, 1.3, None)],
            None,
        );
        assert_eq!(output.final_damage, 1.3);
        assert_eq!(output.time_of_failure, Some(15.0));
        assert!(output.failed());
        assert_eq!(output.damages(), vec![0.6, 1.2, 1.3]);
    }

    #[test]
    fn test_failed_from_start_wins() {
        let steps = vec![step(0.0, 1.0, None)];
        let output = LocationDependentOutput::new(1.0, 2.0, 1.0, 1.0, steps, Some(0.0));
        assert_eq!(output.time_of_failure, Some(0.0));
    }

    #[test]
    fn test_without_steps_final_damage_is_initial() {
        let output = LocationDependentOutput::new(1.0, 2.0, 0.3, 1.0, Vec::new(), None);
        assert_eq!(output.final_damage, 0.3);
        assert!(!output.failed());
    }

    #[test]
    fn test_first_failure() {
        let a_steps = vec![step(1.0, 1.0, Some(20.0))];
        let b_steps = vec![step(1.0, 1.0, Some(10.0))];
        let a = LocationDependentOutput::new(1.0, 2.0, 0.0, 1.0, a_steps, None);
        let b = LocationDependentOutput::new(2.0, 3.0, 0.0, 1.0, b_steps, None);
        let c = LocationDependentOutput::new(3.0, 4.0, 0.0, 1.0, vec![step(0.1, 0.1, None)], None);
        let output = CalculationOutput::new(vec![a, b, c]);
        assert_eq!(output.n_failed(), 2);
        assert_eq!(output.first_failure(), Some(10.0));
    }
}
