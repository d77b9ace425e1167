//! Input validation.
//!
//! Validation problems are data, not errors: every check yields an optional
//! [`ValidationIssue`] with a [`Severity`], and a [`ValidationResult`]
//! collects them. Only [`Severity::Error`] blocks a calculation.
//!
//! # Example
//!
//! ```
//! use revetment_rs::validation::{ValidationResult, rules};
//!
//! let result = ValidationResult::from_checks([
//!     rules::outer_slope(0.25),
//!     rules::representative_wave_runup_2p_gamma_b(0.55),
//!     rules::relative_density(7.0),
//! ]);
//!
//! assert!(!result.successful());
//! assert_eq!(result.errors().count(), 1);
//! assert_eq!(result.warnings().count(), 1);
//! ```

mod interval;
mod issue;
pub mod rules;

pub use interval::{Bound, Interval};
pub use issue::{Severity, ValidationIssue, ValidationResult};
