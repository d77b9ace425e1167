//! Default coefficients per revetment kind and top layer type.
//!
//! Every revetment kind has a defaults struct implementing
//! `TryFrom<TopLayerType, Error = DefaultsError>`. A top layer that does not
//! belong to the revetment kind (for example asphalt under a grass run-up
//! location) is a [`DefaultsError`].
//!
//! ```
//! use revetment_rs::defaults::{GrassWaveRunupDefaults, TopLayerType};
//!
//! let defaults = GrassWaveRunupDefaults::try_from(TopLayerType::GrassClosedSod).unwrap();
//! assert_eq!(defaults.critical_cumulative_overload, 7000.0);
//! assert!(GrassWaveRunupDefaults::try_from(TopLayerType::NordicStone).is_err());
//! ```

mod asphalt;
mod grass;
mod natural_stone;

pub use asphalt::{AsphaltWaveImpactDefaults, DEPTH_FACTORS, IMPACT_FACTORS, WIDTH_FACTORS};
pub use grass::{GrassWaveImpactDefaults, GrassWaveOvertoppingDefaults, GrassWaveRunupDefaults};
pub use natural_stone::NaturalStoneDefaults;

use std::fmt;
use thiserror::Error;

/// Damage at the start of the calculation.
pub const INITIAL_DAMAGE: f64 = 0.0;

/// Damage at which a revetment is considered failed.
pub const FAILURE_NUMBER: f64 = 1.0;

/// Type of the top layer of a revetment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TopLayerType {
    GrassClosedSod,
    GrassOpenSod,
    HydraulicAsphaltConcrete,
    NordicStone,
}

impl fmt::Display for TopLayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TopLayerType::GrassClosedSod => "grass closed sod",
            TopLayerType::GrassOpenSod => "grass open sod",
            TopLayerType::HydraulicAsphaltConcrete => "hydraulic asphalt concrete",
            TopLayerType::NordicStone => "Nordic stone",
        };
        f.write_str(name)
    }
}

/// Errors of the defaults lookup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DefaultsError {
    /// The top layer type has no defaults for this revetment kind.
    #[error(
        "Could not create defaults: top layer type {top_layer} is not supported for {revetment}"
    )]
    UnsupportedTopLayer {
        revetment: &'static str,
        top_layer: TopLayerType,
    },
}

impl DefaultsError {
    pub(crate) fn unsupported(revetment: &'static str, top_layer: TopLayerType) -> Self {
        Self::UnsupportedTopLayer { revetment, top_layer }
    }
}
