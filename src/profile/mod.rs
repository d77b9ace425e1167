//! Dike profile representation.
//!
//! A profile is the dike cross-section as a chain of straight segments
//! running from sea to land, with named characteristic points (toe, crest,
//! berm). `x` is the horizontal coordinate used by all calculations.
//!
//! ```text
//!                              OuterCrest ____ InnerCrest
//!                                       /      \
//!                                      /        \
//!           CrestOuterBerm ___________/          \
//!                        /  NotchOuterBerm        \
//!                       /                          \
//!   OuterToe __________/                            \_______ InnerToe
//! ```

mod point;
mod profile_data;

pub use point::{CharacteristicPoint, CharacteristicPointType, ProfilePoint, ProfileSegment};
pub use profile_data::ProfileData;

/// Default absolute tolerance for coordinate comparisons (m).
pub const COORDINATE_TOLERANCE: f64 = 1e-6;
