//! # shutter-sim
//!
//! Camera exposure simulator core — derive the photometric exposure value,
//! a light-meter reading, a rendering brightness multiplier, and an optical
//! zoom factor from user-adjustable capture parameters (ISO, aperture,
//! shutter speed, focal length, and a cosmetic color filter).
//!
//! ## Quick Start
//!
//! The [`ExposureModel`] owns the capture settings and keeps the four derived
//! values consistent with them on every read:
//!
//! ```rust
//! use shutter_sim::ExposureModel;
//!
//! let mut camera = ExposureModel::new(); // ISO 400, f/2.8, 1/125s, 24mm
//!
//! camera.set_iso(800.0)?;
//! camera.set_focal_length(48.0)?;
//!
//! assert_eq!(camera.brightness(), 2.0); // one stop brighter than baseline
//! assert_eq!(camera.zoom(), 2.0);       // 48mm on a 24mm wide end
//!
//! let readout = camera.readout();
//! println!(
//!     "EV {} | meter {:+} stops | brightness ×{:.2}",
//!     readout.exposure_value, readout.meter_reading, readout.brightness,
//! );
//! # Ok::<(), shutter_sim::SettingError>(())
//! ```
//!
//! Zero, negative, and non-finite inputs are rejected at the setter boundary
//! before they can poison a derived value:
//!
//! ```rust
//! use shutter_sim::ExposureModel;
//!
//! let mut camera = ExposureModel::new();
//! assert!(camera.set_shutter_speed(0.0).is_err());
//! assert_eq!(camera.shutter_speed(), 125.0); // state untouched
//! ```
//!
//! ## Lower-Level Usage
//!
//! The photometric formulas are also available as pure functions for one-off
//! calculations without a model:
//!
//! ```rust
//! use shutter_sim::exposure::{exposure_value, meter_reading};
//!
//! // Sunny f/5.6 at 1/250s, ISO 100
//! assert_eq!(exposure_value(100.0, 5.6, 250.0), 12.94);
//! assert_eq!(meter_reading(100.0, 5.6, 250.0), -3.0); // three stops over target
//! ```
//!
//! ## Captured photos
//!
//! The [`Gallery`] collects captured shots, each with a frozen
//! [`CaptureSettings`] snapshot, and tracks which one is open for detail
//! viewing:
//!
//! ```rust
//! use shutter_sim::{CaptureSettings, ExposureModel, Gallery, Photo};
//!
//! let camera = ExposureModel::new();
//! let mut gallery = Gallery::new();
//!
//! gallery.add_photo(Photo {
//!     id: "shot-1".into(),
//!     url: "file:///captures/shot-1.png".into(),
//!     timestamp: 1_700_000_000_000,
//!     settings: CaptureSettings::from(camera.settings()),
//! });
//!
//! gallery.set_active(Some("shot-1"));
//! assert_eq!(gallery.active_photo().unwrap().settings.iso, 400.0);
//! ```
//!
//! ## Modules
//!
//! - [`exposure`] — the exposure engine and the pure photometric formulas
//! - [`gallery`] — captured-photo collection and active selection
//! - [`config`] — simulator configuration (startup settings, output behavior)

pub mod config;
pub mod exposure;
pub mod gallery;

pub use exposure::{ColorFilter, ExposureModel, ExposureReadout, ExposureSettings, SettingError};
pub use gallery::{CaptureSettings, Gallery, Photo};
