//! Fluent assembly of a calculation input.
//!
//! # Example
//!
//! ```
//! use revetment_rs::builder::{CalculationInputBuilder, GrassWaveImpactProperties};
//! use revetment_rs::defaults::TopLayerType;
//! use revetment_rs::profile::CharacteristicPointType;
//!
//! let result = CalculationInputBuilder::new()
//!     .add_dike_profile_segment(0.0, 0.0, 30.0, 7.5)
//!     .add_dike_profile_point(0.0, CharacteristicPointType::OuterToe)
//!     .add_dike_profile_point(30.0, CharacteristicPointType::OuterCrest)
//!     .add_time_step(0.0, 3600.0, 2.0, 1.0, 5.0, 0.0)
//!     .add_location(GrassWaveImpactProperties::new(8.0, TopLayerType::GrassClosedSod))
//!     .build();
//!
//! assert!(result.successful());
//! ```

use super::calculation_input::{BuildResult, CalculationInput};
use super::properties::LocationConstructionProperties;
use crate::location::LocationInput;
use crate::profile::{
    CharacteristicPoint, CharacteristicPointType, ProfileData, ProfilePoint, ProfileSegment,
};
use crate::time::{self, TimeStep};
use crate::validation::{ValidationIssue, ValidationResult};

/// Settings of the builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BuilderConfig {
    /// Absolute tolerance for matching coordinates and times
    pub tolerance: f64,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            tolerance: crate::profile::COORDINATE_TOLERANCE,
        }
    }
}

impl BuilderConfig {
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

/// Builder for a [`CalculationInput`].
///
/// Collects profile segments, characteristic points, time steps and
/// locations. Nothing is checked until [`build`](Self::build), which
/// reports every problem at once.
#[derive(Clone, Debug, Default)]
pub struct CalculationInputBuilder {
    config: BuilderConfig,
    segments: Vec<ProfileSegment>,
    /// Characteristic points by horizontal position
    characteristic_points: Vec<(f64, CharacteristicPointType)>,
    /// End of the last added segment or point
    last_point: Option<ProfilePoint>,
    time_steps: Vec<TimeStep>,
    locations: Vec<LocationConstructionProperties>,
}

impl CalculationInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Add a smooth segment from `(start_x, start_z)` to `(end_x, end_z)`.
    pub fn add_dike_profile_segment(
        self,
        start_x: f64,
        start_z: f64,
        end_x: f64,
        end_z: f64,
    ) -> Self {
        self.add_dike_profile_segment_with_roughness(
            start_x,
            start_z,
            end_x,
            end_z,
            ProfileSegment::SMOOTH,
        )
    }

    pub fn add_dike_profile_segment_with_roughness(
        mut self,
        start_x: f64,
        start_z: f64,
        end_x: f64,
        end_z: f64,
        roughness_coefficient: f64,
    ) -> Self {
        let start = ProfilePoint::new(start_x, start_z);
        let end = ProfilePoint::new(end_x, end_z);
        self.segments
            .push(ProfileSegment::new(start, end).with_roughness(roughness_coefficient));
        self.last_point = Some(end);
        self
    }

    /// Mark the profile point at `x` as a characteristic point.
    pub fn add_dike_profile_point(mut self, x: f64, point_type: CharacteristicPointType) -> Self {
        self.characteristic_points.push((x, point_type));
        self
    }

    /// Extend the profile with a point, optionally marking it.
    ///
    /// Every point after the first adds a smooth segment from the previous one.
    pub fn add_profile_point(
        mut self,
        x: f64,
        z: f64,
        point_type: Option<CharacteristicPointType>,
    ) -> Self {
        let point = ProfilePoint::new(x, z);
        if let Some(previous) = self.last_point {
            self.segments.push(ProfileSegment::new(previous, point));
        }
        self.last_point = Some(point);
        if let Some(point_type) = point_type {
            self.characteristic_points.push((x, point_type));
        }
        self
    }

    // =========================================================================
    // Time steps and locations
    // =========================================================================

    pub fn add_time_step(
        mut self,
        begin_time: f64,
        end_time: f64,
        water_level: f64,
        wave_height_hm0: f64,
        wave_period_tm10: f64,
        wave_angle: f64,
    ) -> Self {
        self.time_steps.push(TimeStep::new(
            begin_time,
            end_time,
            water_level,
            wave_height_hm0,
            wave_period_tm10,
            wave_angle,
        ));
        self
    }

    pub fn add_location(mut self, properties: impl Into<LocationConstructionProperties>) -> Self {
        self.locations.push(properties.into());
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Check everything and assemble the input.
    ///
    /// Structural problems (profile, time steps, unresolvable locations)
    /// are reported first. Every resolved location is then validated as
    /// long as the profile itself is sound, whatever else went wrong.
    pub fn build(self) -> BuildResult {
        log::debug!(
            "Building calculation input: {} segments, {} characteristic points, {} time steps, \
             {} locations",
            self.segments.len(),
            self.characteristic_points.len(),
            self.time_steps.len(),
            self.locations.len()
        );

        let mut result = ValidationResult::new();

        result.extend(self.check_segments());
        let characteristic_points = self.resolve_characteristic_points(&mut result);
        let profile_is_sound = result.successful();
        result.extend(self.check_time_steps());
        let resolved_locations = self.resolve_locations(&mut result);

        if !profile_is_sound {
            return Self::fail(result);
        }

        let profile_data = ProfileData::new(self.segments, characteristic_points);

        for (index, location) in &resolved_locations {
            let context = location_context(*index, location.x);
            for issue in location.validate(&profile_data).into_issues() {
                result.push(issue.with_context(&context));
            }
        }

        if !result.successful() {
            return Self::fail(result);
        }

        let location_inputs: Vec<LocationInput> = resolved_locations
            .into_iter()
            .map(|(_, location)| location)
            .collect();

        let mut derived_locations = Vec::with_capacity(location_inputs.len());
        for (index, location) in location_inputs.iter().enumerate() {
            match location.derive(&profile_data) {
                Ok(derived) => derived_locations.push(derived),
                Err(error) => result.push(
                    ValidationIssue::error(error.to_string())
                        .with_context(&location_context(index, location.x)),
                ),
            }
        }

        if !result.successful() {
            return Self::fail(result);
        }

        let issues = result.into_issues();
        log_issues(&issues);

        let input = CalculationInput::new(
            profile_data,
            self.time_steps,
            location_inputs,
            derived_locations,
        );
        BuildResult::succeeded(issues, input)
    }

    fn fail(result: ValidationResult) -> BuildResult {
        let issues = result.into_issues();
        log_issues(&issues);
        log::info!(
            "Could not build calculation input: {} errors",
            issues.iter().filter(|issue| issue.is_error()).count()
        );
        BuildResult::failed(issues)
    }

    fn check_segments(&self) -> Vec<Option<ValidationIssue>> {
        let tolerance = self.config.tolerance;

        if self.segments.is_empty() {
            return vec![Some(ValidationIssue::error("At least one profile segment is required."))];
        }

        let increasing = self.segments.iter().enumerate().map(|(i, segment)| {
            (segment.end.x - segment.start.x <= tolerance).then(|| {
                ValidationIssue::error(format!(
                    "The end x ({}) of segment {i} must be larger than its start x ({}).",
                    segment.end.x, segment.start.x
                ))
            })
        });

        let chained = self.segments.windows(2).enumerate().map(|(i, pair)| {
            (!pair[1].start.coincides_with(&pair[0].end, tolerance)).then(|| {
                ValidationIssue::error(format!(
                    "The start point {} of segment {} must equal the end point {} of segment {i}.",
                    pair[1].start,
                    i + 1,
                    pair[0].end
                ))
            })
        });

        increasing.chain(chained).collect()
    }

    /// Map characteristic points onto profile point indices.
    fn resolve_characteristic_points(
        &self,
        result: &mut ValidationResult,
    ) -> Vec<CharacteristicPoint> {
        let tolerance = self.config.tolerance;
        let mut points: Vec<ProfilePoint> =
            self.segments.iter().map(|segment| segment.start).collect();
        if let Some(last) = self.segments.last() {
            points.push(last.end);
        }

        let mut resolved: Vec<CharacteristicPoint> =
            Vec::with_capacity(self.characteristic_points.len());
        for &(x, point_type) in &self.characteristic_points {
            if resolved.iter().any(|cp| cp.point_type == point_type) {
                result.push(ValidationIssue::error(format!(
                    "Characteristic point {point_type} is defined more than once."
                )));
                continue;
            }

            match points.iter().position(|point| (point.x - x).abs() <= tolerance) {
                Some(index) => resolved.push(CharacteristicPoint::new(index, point_type)),
                None => result.push(ValidationIssue::error(format!(
                    "Characteristic point {point_type} at x = {x} does not coincide with a \
                     profile point."
                ))),
            }
        }

        let defined = |point_type: CharacteristicPointType| {
            self.characteristic_points
                .iter()
                .any(|&(_, defined_type)| defined_type == point_type)
        };
        let mut required = vec![
            CharacteristicPointType::OuterToe,
            CharacteristicPointType::OuterCrest,
        ];
        if self.locations.iter().any(LocationConstructionProperties::requires_inner_profile) {
            required.extend([
                CharacteristicPointType::InnerCrest,
                CharacteristicPointType::InnerToe,
            ]);
        }
        for point_type in required {
            if !defined(point_type) {
                result.push(ValidationIssue::error(format!(
                    "Characteristic point {point_type} is required."
                )));
            }
        }

        resolved
    }

    fn check_time_steps(&self) -> Vec<Option<ValidationIssue>> {
        if self.time_steps.is_empty() {
            return vec![Some(ValidationIssue::error("At least one time step is required."))];
        }

        let mut issues: Vec<Option<ValidationIssue>> = Vec::new();
        for (index, step) in self.time_steps.iter().enumerate() {
            let context = format!("Time step {index}");
            issues.extend(
                step.validate()
                    .into_issues()
                    .into_iter()
                    .map(|issue| Some(issue.with_context(&context))),
            );
        }
        issues.extend(
            time::check_contiguity(&self.time_steps, self.config.tolerance)
                .into_iter()
                .map(Some),
        );
        issues
    }

    /// Fill in the defaults of every location; unresolvable ones become Errors.
    ///
    /// Resolved locations keep their index in the builder.
    fn resolve_locations(&self, result: &mut ValidationResult) -> Vec<(usize, LocationInput)> {
        if self.locations.is_empty() {
            result.push(ValidationIssue::error("At least one location is required."));
            return Vec::new();
        }

        let mut inputs = Vec::with_capacity(self.locations.len());
        for (index, properties) in self.locations.iter().enumerate() {
            match properties.clone().resolve() {
                Ok(input) => inputs.push((index, input)),
                Err(error) => result.push(
                    ValidationIssue::error(error.to_string())
                        .with_context(&location_context(index, properties.x())),
                ),
            }
        }
        inputs
    }
}

fn location_context(index: usize, x: f64) -> String {
    format!("Location {index} (x = {x})")
}

fn log_issues(issues: &[ValidationIssue]) {
    for issue in issues {
        if issue.is_error() {
            log::debug!("{issue}");
        } else {
            log::warn!("{issue}");
        }
    }
}
