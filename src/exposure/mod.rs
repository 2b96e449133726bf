//! The exposure engine: capture settings and their photometric derivations.
//!
//! This module provides two layers:
//!
//! - [`ExposureModel`] — the stateful engine: owns an [`ExposureSettings`]
//!   record, validates every mutation at the boundary, and derives the
//!   exposure value, meter reading, brightness, and zoom on each read.
//! - The free functions [`exposure_value`], [`meter_reading`], [`brightness`],
//!   and [`zoom`] — the pure photometric formulas, usable without a model for
//!   one-off calculations.
//!
//! The meter reads against a fixed [`TARGET_EV`] and snaps to thirds of a
//! stop, the way a physical click-stop dial does. Brightness and zoom are
//! multipliers against the fixed baseline settings (ISO [`BASE_ISO`],
//! f/[`BASE_APERTURE`], 1/[`BASE_SHUTTER`] s, [`BASE_FOCAL_LENGTH`] mm).

mod derive;
mod model;

pub use derive::{
    brightness, exposure_value, meter_reading, zoom, BASE_APERTURE, BASE_FOCAL_LENGTH, BASE_ISO,
    BASE_SHUTTER, TARGET_EV,
};
pub use model::{ColorFilter, ExposureModel, ExposureReadout, ExposureSettings, SettingError};
