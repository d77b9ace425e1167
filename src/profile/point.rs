//! Profile points, segments and characteristic points.

use std::fmt;

/// A point of the dike cross-section.
///
/// `x` is the horizontal position (increasing landward), `z` the elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfilePoint {
    /// Horizontal position (m)
    pub x: f64,
    /// Elevation (m)
    pub z: f64,
}

impl ProfilePoint {
    /// Create a new profile point.
    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Check whether both coordinates match within `tolerance`.
    pub fn coincides_with(&self, other: &ProfilePoint, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.z - other.z).abs() <= tolerance
    }
}

impl fmt::Display for ProfilePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// A straight part of the profile between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileSegment {
    /// Seaward end
    pub start: ProfilePoint,
    /// Landward end
    pub end: ProfilePoint,
    /// Roughness coefficient of the segment surface (1.0 is smooth)
    pub roughness_coefficient: f64,
}

impl ProfileSegment {
    /// Default roughness coefficient for a smooth surface.
    pub const SMOOTH: f64 = 1.0;

    /// Create a smooth segment.
    pub fn new(start: ProfilePoint, end: ProfilePoint) -> Self {
        Self {
            start,
            end,
            roughness_coefficient: Self::SMOOTH,
        }
    }

    /// Set the roughness coefficient.
    pub fn with_roughness(mut self, roughness_coefficient: f64) -> Self {
        self.roughness_coefficient = roughness_coefficient;
        self
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    /// Length along the surface.
    pub fn length(&self) -> f64 {
        (self.end.x - self.start.x).hypot(self.end.z - self.start.z)
    }

    /// Gradient dz/dx.
    pub fn slope(&self) -> f64 {
        (self.end.z - self.start.z) / self.width()
    }

    /// Whether `x` lies on this segment (ends included).
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.start.x && x <= self.end.x
    }

    /// Elevation at `x`, linearly interpolated between the ends.
    pub fn interpolate_z(&self, x: f64) -> f64 {
        let width = self.width();
        if width <= 0.0 {
            return self.start.z;
        }
        self.start.z + (x - self.start.x) / width * (self.end.z - self.start.z)
    }
}

/// Named geometrically significant points of a dike profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacteristicPointType {
    OuterToe,
    CrestOuterBerm,
    NotchOuterBerm,
    OuterCrest,
    InnerCrest,
    InnerToe,
}

impl CharacteristicPointType {
    /// All types, ordered from sea to land.
    pub const ALL: [CharacteristicPointType; 6] = [
        Self::OuterToe,
        Self::CrestOuterBerm,
        Self::NotchOuterBerm,
        Self::OuterCrest,
        Self::InnerCrest,
        Self::InnerToe,
    ];
}

impl fmt::Display for CharacteristicPointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OuterToe => "OuterToe",
            Self::CrestOuterBerm => "CrestOuterBerm",
            Self::NotchOuterBerm => "NotchOuterBerm",
            Self::OuterCrest => "OuterCrest",
            Self::InnerCrest => "InnerCrest",
            Self::InnerToe => "InnerToe",
        };
        write!(f, "{name}")
    }
}

/// A characteristic point referring to a point of the profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacteristicPoint {
    /// Index into [`ProfileData::points`](super::ProfileData::points)
    pub point_index: usize,
    /// Which characteristic point this is
    pub point_type: CharacteristicPointType,
}

impl CharacteristicPoint {
    pub const fn new(point_index: usize, point_type: CharacteristicPointType) -> Self {
        Self { point_index, point_type }
    }
}
