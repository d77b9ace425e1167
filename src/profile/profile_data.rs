//! The assembled dike profile.

use super::point::{CharacteristicPoint, CharacteristicPointType, ProfilePoint, ProfileSegment};

/// Dike cross-section: a chain of segments plus its characteristic points.
///
/// The profile is assembled and checked by the calculation input builder;
/// once built it is read-only and shared by all locations. Points are
/// ordered by strictly increasing `x`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileData {
    /// Profile points: the start of every segment plus the end of the last one
    points: Vec<ProfilePoint>,
    /// Segments, segments[i] runs from points[i] to points[i + 1]
    segments: Vec<ProfileSegment>,
    /// Characteristic points referring into `points`
    characteristic_points: Vec<CharacteristicPoint>,
}

impl ProfileData {
    /// Create profile data from chained segments.
    ///
    /// The segments are expected to chain (end of one is the start of the
    /// next); the builder checks this before calling.
    pub fn new(
        segments: Vec<ProfileSegment>,
        characteristic_points: Vec<CharacteristicPoint>,
    ) -> Self {
        let mut points: Vec<ProfilePoint> = segments.iter().map(|segment| segment.start).collect();
        if let Some(last) = segments.last() {
            points.push(last.end);
        }

        Self {
            points,
            segments,
            characteristic_points,
        }
    }

    /// All profile points from sea to land.
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    /// All segments from sea to land.
    pub fn segments(&self) -> &[ProfileSegment] {
        &self.segments
    }

    /// All characteristic points.
    pub fn characteristic_points(&self) -> &[CharacteristicPoint] {
        &self.characteristic_points
    }

    /// Look up a characteristic point by type.
    pub fn characteristic_point(
        &self,
        point_type: CharacteristicPointType,
    ) -> Option<ProfilePoint> {
        self.characteristic_points
            .iter()
            .find(|cp| cp.point_type == point_type)
            .and_then(|cp| self.points.get(cp.point_index).copied())
    }

    /// The outer toe.
    pub fn outer_toe(&self) -> Option<ProfilePoint> {
        self.characteristic_point(CharacteristicPointType::OuterToe)
    }

    /// The outer crest.
    pub fn outer_crest(&self) -> Option<ProfilePoint> {
        self.characteristic_point(CharacteristicPointType::OuterCrest)
    }

    /// First segment on which `x` lies.
    pub fn segment_containing(&self, x: f64) -> Option<&ProfileSegment> {
        self.segments.iter().find(|segment| segment.contains_x(x))
    }

    /// Elevation at `x`, or `None` outside the profile.
    pub fn interpolate_vertical_position(&self, x: f64) -> Option<f64> {
        self.segment_containing(x).map(|segment| segment.interpolate_z(x))
    }

    /// Roughness coefficient of the segment at `x`.
    pub fn roughness_at(&self, x: f64) -> Option<f64> {
        self.segment_containing(x).map(|segment| segment.roughness_coefficient)
    }

    /// Horizontal position where the outer slope first reaches elevation `z`.
    ///
    /// Only the part between the outer toe and the outer crest is searched.
    pub fn interpolate_horizontal_position(&self, z: f64) -> Option<f64> {
        let toe = self.outer_toe()?;
        let crest = self.outer_crest()?;

        self.outer_segments(toe.x, crest.x).find_map(|segment| {
            let (low, high) = if segment.start.z <= segment.end.z {
                (segment.start.z, segment.end.z)
            } else {
                (segment.end.z, segment.start.z)
            };
            if z < low || z > high {
                return None;
            }

            let dz = segment.end.z - segment.start.z;
            if dz == 0.0 {
                Some(segment.start.x)
            } else {
                Some(segment.start.x + (z - segment.start.z) / dz * segment.width())
            }
        })
    }

    /// Average gradient between the outer toe and the outer crest.
    pub fn average_outer_slope(&self) -> Option<f64> {
        let toe = self.outer_toe()?;
        let crest = self.outer_crest()?;
        let width = crest.x - toe.x;
        (width > 0.0).then(|| (crest.z - toe.z) / width)
    }

    /// Length-weighted roughness coefficient of the outer slope.
    pub fn average_outer_roughness(&self) -> Option<f64> {
        let toe = self.outer_toe()?;
        let crest = self.outer_crest()?;

        let (weighted, length) = self
            .outer_segments(toe.x, crest.x)
            .fold((0.0, 0.0), |(weighted, length), segment| {
                let l = segment.length();
                (weighted + segment.roughness_coefficient * l, length + l)
            });

        (length > 0.0).then(|| weighted / length)
    }

    fn outer_segments(&self, toe_x: f64, crest_x: f64) -> impl Iterator<Item = &ProfileSegment> {
        self.segments
            .iter()
            .filter(move |segment| segment.start.x >= toe_x && segment.end.x <= crest_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Toe at x = 0, berm between x = 10 and 15, crest at x = 25.
    fn bermed_profile() -> ProfileData {
        let points = [
            ProfilePoint::new(0.0, 0.0),
            ProfilePoint::new(10.0, 2.5),
            ProfilePoint::new(15.0, 2.5),
            ProfilePoint::new(25.0, 5.0),
            ProfilePoint::new(30.0, 5.0),
            ProfilePoint::new(40.0, 0.0),
        ];
        let segments = points
            .windows(2)
            .enumerate()
            .map(|(i, pair)| {
                let segment = ProfileSegment::new(pair[0], pair[1]);
                if i == 1 {
                    segment.with_roughness(0.5)
                } else {
                    segment
                }
            })
            .collect();

        let characteristic_points = vec![
            CharacteristicPoint::new(0, CharacteristicPointType::OuterToe),
            CharacteristicPoint::new(1, CharacteristicPointType::CrestOuterBerm),
            CharacteristicPoint::new(2, CharacteristicPointType::NotchOuterBerm),
            CharacteristicPoint::new(3, CharacteristicPointType::OuterCrest),
            CharacteristicPoint::new(4, CharacteristicPointType::InnerCrest),
            CharacteristicPoint::new(5, CharacteristicPointType::InnerToe),
        ];

        ProfileData::new(segments, characteristic_points)
    }

    #[test]
    fn test_points_follow_segments() {
        let profile = bermed_profile();
        assert_eq!(profile.points().len(), 6);
        assert_eq!(profile.segments().len(), 5);
        assert_eq!(profile.outer_toe(), Some(ProfilePoint::new(0.0, 0.0)));
        assert_eq!(profile.outer_crest(), Some(ProfilePoint::new(25.0, 5.0)));
    }

    #[test]
    fn test_vertical_interpolation() {
        let profile = bermed_profile();
        assert_relative_eq!(profile.interpolate_vertical_position(5.0).unwrap(), 1.25);
        assert_relative_eq!(profile.interpolate_vertical_position(12.0).unwrap(), 2.5);
        assert_relative_eq!(profile.interpolate_vertical_position(35.0).unwrap(), 2.5);
        assert!(profile.interpolate_vertical_position(-1.0).is_none());
        assert!(profile.interpolate_vertical_position(40.1).is_none());
    }

    #[test]
    fn test_interpolation_is_repeatable() {
        let profile = bermed_profile();
        let first = profile.interpolate_vertical_position(7.3);
        let second = profile.interpolate_vertical_position(7.3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_horizontal_interpolation_on_outer_slope() {
        let profile = bermed_profile();
        assert_relative_eq!(profile.interpolate_horizontal_position(1.25).unwrap(), 5.0);
        // The berm level maps to the first point reaching it
        assert_relative_eq!(profile.interpolate_horizontal_position(2.5).unwrap(), 10.0);
        assert_relative_eq!(profile.interpolate_horizontal_position(3.75).unwrap(), 20.0);
        // Inner slope is not searched
        assert!(profile.interpolate_horizontal_position(6.0).is_none());
    }

    #[test]
    fn test_roughness_and_averages() {
        let profile = bermed_profile();
        assert_eq!(profile.roughness_at(12.0), Some(0.5));
        assert_eq!(profile.roughness_at(5.0), Some(1.0));
        assert_relative_eq!(profile.average_outer_slope().unwrap(), 0.2);

        let l1 = 10.0_f64.hypot(2.5);
        let l2 = 5.0;
        let l3 = 10.0_f64.hypot(2.5);
        let expected = (l1 + 0.5 * l2 + l3) / (l1 + l2 + l3);
        assert_relative_eq!(profile.average_outer_roughness().unwrap(), expected);
    }

    #[test]
    fn test_segment_containing_prefers_first_match() {
        let profile = bermed_profile();
        let segment = profile.segment_containing(10.0).unwrap();
        assert_eq!(segment.end, ProfilePoint::new(10.0, 2.5));
    }
}
