//! Hydraulic loads per time step.

use crate::validation::{ValidationIssue, ValidationResult, rules};

/// Hydraulic loads acting during one time interval.
///
/// A storm is described by a sequence of contiguous time steps:
/// `steps[i].end_time == steps[i + 1].begin_time`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeStep {
    /// Start of the interval (s)
    pub begin_time: f64,
    /// End of the interval (s)
    pub end_time: f64,
    /// Still water level (m)
    pub water_level: f64,
    /// Spectral significant wave height Hm0 (m)
    pub wave_height_hm0: f64,
    /// Spectral wave period Tm-1,0 (s)
    pub wave_period_tm10: f64,
    /// Angle of wave incidence relative to the dike normal (degrees)
    pub wave_angle: f64,
}

impl TimeStep {
    /// Create a new time step.
    pub fn new(
        begin_time: f64,
        end_time: f64,
        water_level: f64,
        wave_height_hm0: f64,
        wave_period_tm10: f64,
        wave_angle: f64,
    ) -> Self {
        Self {
            begin_time,
            end_time,
            water_level,
            wave_height_hm0,
            wave_period_tm10,
            wave_angle,
        }
    }

    /// Duration of the step (s).
    pub fn duration(&self) -> f64 {
        self.end_time - self.begin_time
    }

    /// Check the loads of this step on their own.
    pub fn validate(&self) -> ValidationResult {
        ValidationResult::from_checks([
            rules::time_step_order(self.begin_time, self.end_time),
            rules::water_level(self.water_level),
            rules::wave_height_hm0(self.wave_height_hm0),
            rules::wave_period_tm10(self.wave_period_tm10),
            rules::wave_angle(self.wave_angle),
        ])
    }
}

/// Check that every step starts where the previous one ended.
///
/// Returns one error per gap or overlap.
pub fn check_contiguity(steps: &[TimeStep], tolerance: f64) -> Vec<ValidationIssue> {
    steps
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| (pair[1].begin_time - pair[0].end_time).abs() > tolerance)
        .map(|(i, pair)| {
            ValidationIssue::error(format!(
                "The begin time of time step {} ({}) must equal the end time of time step {} ({}).",
                i + 1,
                pair[1].begin_time,
                i,
                pair[0].end_time
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let step = TimeStep::new(1.0, 2.5, 0.3, 0.4, 0.5, 0.6);
        assert_eq!(step.duration(), 1.5);
    }

    #[test]
    fn test_valid_step_has_no_issues() {
        let step = TimeStep::new(1.0, 2.0, 0.3, 0.4, 0.5, 0.6);
        let result = step.validate();
        assert!(result.successful());
        assert!(result.issues().is_empty());
    }

    #[test]
    fn test_invalid_step_reports_every_problem() {
        let step = TimeStep::new(2.0, 1.0, 0.3, 0.0, -1.0, 200.0);
        let result = step.validate();
        assert!(!result.successful());
        assert_eq!(result.errors().count(), 4);
    }

    #[test]
    fn test_water_level_must_be_finite() {
        for water_level in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let step = TimeStep::new(0.0, 3600.0, water_level, 1.0, 4.0, 0.0);
            let result = step.validate();
            assert_eq!(result.errors().count(), 1);
            assert!(result.issues()[0].message.starts_with("WaterLevel"));
        }

        let below_datum = TimeStep::new(0.0, 3600.0, -2.5, 1.0, 4.0, 0.0);
        assert!(below_datum.validate().successful());
    }

    #[test]
    fn test_contiguity() {
        let steps = [
            TimeStep::new(0.0, 10.0, 0.0, 1.0, 4.0, 0.0),
            TimeStep::new(10.0, 20.0, 0.0, 1.0, 4.0, 0.0),
            TimeStep::new(21.0, 30.0, 0.0, 1.0, 4.0, 0.0),
        ];

        let issues = check_contiguity(&steps, 1e-6);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("time step 2"));
        assert!(check_contiguity(&steps[..2], 1e-6).is_empty());
    }
}
