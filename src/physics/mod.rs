//! Formula modules for the revetment damage models.
//!
//! Each module is a set of free functions and small coefficient structs
//! evaluated per time step. Nothing here knows about locations, profiles
//! or validation; callers pass plain numbers.
//!
//! | Module | Failure mechanism |
//! |--------|-------------------|
//! | [`grass_wave_runup`] | Grass erosion by run-up tongues on the outer slope |
//! | [`grass_wave_impact`] | Grass erosion by breaking waves around the water line |
//! | [`grass_wave_overtopping`] | Grass erosion on the crest and inner slope |
//! | [`asphalt_wave_impact`] | Fatigue of an asphalt layer |
//! | [`natural_stone`] | Instability of placed stone |
//!
//! [`rayleigh`] and [`damage`] are shared by several of them.

pub mod asphalt_wave_impact;
pub mod damage;
pub mod grass_wave_impact;
pub mod grass_wave_overtopping;
pub mod grass_wave_runup;
pub mod hydraulic;
pub mod natural_stone;
pub mod rayleigh;

pub use hydraulic::GRAVITATIONAL_ACCELERATION;
