use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::derive;
use super::derive::{BASE_APERTURE, BASE_FOCAL_LENGTH, BASE_ISO, BASE_SHUTTER};

/// A capture setting was rejected at the mutator boundary.
///
/// Every numeric setting must be a finite number greater than zero — the
/// derivations divide by ISO, aperture, and shutter speed, and take a
/// logarithm of their product, so zero, negative, and non-finite values would
/// silently poison every derived read with NaN.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SettingError {
    #[error("ISO must be a finite number greater than zero (got {0})")]
    InvalidIso(f64),
    #[error("aperture (f-number) must be a finite number greater than zero (got {0})")]
    InvalidAperture(f64),
    #[error("shutter speed must be a finite number greater than zero (got {0})")]
    InvalidShutterSpeed(f64),
    #[error("focal length must be a finite number greater than zero (got {0})")]
    InvalidFocalLength(f64),
}

/// Cosmetic color filter applied by the rendering layer.
///
/// Carried as state only; it never feeds the photometric derivations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorFilter {
    #[default]
    Standard,
    Sepia,
    Monochrome,
    Warm,
    Cool,
}

impl ColorFilter {
    /// Parse a filter from a user-supplied name, case-insensitively.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shutter_sim::ColorFilter;
    ///
    /// assert_eq!(ColorFilter::from_name("sepia"), Some(ColorFilter::Sepia));
    /// assert_eq!(ColorFilter::from_name("MONO"), Some(ColorFilter::Monochrome));
    /// assert_eq!(ColorFilter::from_name("infrared"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "standard" | "none" => Some(Self::Standard),
            "sepia" => Some(Self::Sepia),
            "monochrome" | "mono" | "bw" => Some(Self::Monochrome),
            "warm" => Some(Self::Warm),
            "cool" => Some(Self::Cool),
            _ => None,
        }
    }

    /// Canonical display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Sepia => "Sepia",
            Self::Monochrome => "Monochrome",
            Self::Warm => "Warm",
            Self::Cool => "Cool",
        }
    }
}

/// The four independent capture parameters plus the cosmetic filter.
///
/// The numeric fields are public for construction and inspection; mutate a
/// live model through [`ExposureModel`]'s setters, which enforce the
/// strictly-positive contract before any derived value can see the change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureSettings {
    /// ISO sensitivity.
    pub iso: f64,
    /// f-number (relative aperture).
    pub aperture: f64,
    /// Denominator of the exposure time in seconds: 125 means 1/125 s,
    /// and a 2-second exposure is stored as 0.5.
    pub shutter_speed: f64,
    /// Focal length in millimeters.
    pub focal_length: f64,
    /// Cosmetic color filter for the rendering layer.
    pub filter: ColorFilter,
}

impl Default for ExposureSettings {
    fn default() -> Self {
        Self {
            iso: BASE_ISO,
            aperture: BASE_APERTURE,
            shutter_speed: BASE_SHUTTER,
            focal_length: BASE_FOCAL_LENGTH,
            filter: ColorFilter::Standard,
        }
    }
}

impl ExposureSettings {
    /// Check the strictly-positive contract on all four numeric fields.
    pub fn validate(&self) -> Result<(), SettingError> {
        check_positive(self.iso, SettingError::InvalidIso)?;
        check_positive(self.aperture, SettingError::InvalidAperture)?;
        check_positive(self.shutter_speed, SettingError::InvalidShutterSpeed)?;
        check_positive(self.focal_length, SettingError::InvalidFocalLength)?;
        Ok(())
    }

    /// Shutter speed as a conventional label: `1/125s`, or `2s` for
    /// exposures of a second or longer (stored as reciprocals below 1).
    pub fn shutter_label(&self) -> String {
        if self.shutter_speed >= 1.0 {
            format!("1/{}s", trim_decimal(self.shutter_speed))
        } else {
            format!("{}s", trim_decimal(1.0 / self.shutter_speed))
        }
    }

    /// Aperture as a conventional label: `f/2.8`.
    pub fn aperture_label(&self) -> String {
        format!("f/{}", trim_decimal(self.aperture))
    }
}

/// Drop a trailing `.0` from whole-number readings so labels match how
/// they are engraved on a lens barrel (`f/4`, not `f/4.0`).
fn trim_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn check_positive(value: f64, reject: fn(f64) -> SettingError) -> Result<(), SettingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(reject(value))
    }
}

/// Snapshot of the four derived outputs for a display layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExposureReadout {
    /// Photometric EV, rounded to 2 decimals.
    pub exposure_value: f64,
    /// Stops away from the target exposure, in thirds of a stop.
    pub meter_reading: f64,
    /// Relative scene brightness multiplier, unrounded.
    pub brightness: f64,
    /// Optical magnification multiplier, unrounded.
    pub zoom: f64,
}

/// The exposure engine: owns the capture settings and derives the exposure
/// value, meter reading, brightness, and zoom from them on every read.
///
/// Derived values are plain functions of the settings at the moment of read.
/// There is no cache to invalidate and no subscription machinery, so a
/// mutation is visible to all subsequent reads and a read can never observe a
/// torn state. Construct instances explicitly and pass them where needed;
/// there is no shared global instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureModel {
    settings: ExposureSettings,
}

impl Default for ExposureModel {
    fn default() -> Self {
        Self::new()
    }
}

impl ExposureModel {
    /// A model at the documented defaults: ISO 400, f/2.8, 1/125 s, 24 mm,
    /// Standard filter.
    pub fn new() -> Self {
        Self {
            settings: ExposureSettings::default(),
        }
    }

    /// A model starting from custom settings, validated on entry.
    pub fn with_settings(settings: ExposureSettings) -> Result<Self, SettingError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    // ── mutators ─────────────────────────────────────────────────────

    /// Set the ISO sensitivity. Rejects non-finite, zero, and negative values.
    pub fn set_iso(&mut self, iso: f64) -> Result<(), SettingError> {
        check_positive(iso, SettingError::InvalidIso)?;
        self.settings.iso = iso;
        Ok(())
    }

    /// Set the f-number. Rejects non-finite, zero, and negative values.
    pub fn set_aperture(&mut self, aperture: f64) -> Result<(), SettingError> {
        check_positive(aperture, SettingError::InvalidAperture)?;
        self.settings.aperture = aperture;
        Ok(())
    }

    /// Set the shutter speed denominator (125 for 1/125 s, 0.5 for 2 s).
    /// Rejects non-finite, zero, and negative values.
    pub fn set_shutter_speed(&mut self, shutter_speed: f64) -> Result<(), SettingError> {
        check_positive(shutter_speed, SettingError::InvalidShutterSpeed)?;
        self.settings.shutter_speed = shutter_speed;
        Ok(())
    }

    /// Set the focal length in millimeters. Rejects non-finite, zero, and
    /// negative values.
    pub fn set_focal_length(&mut self, focal_length: f64) -> Result<(), SettingError> {
        check_positive(focal_length, SettingError::InvalidFocalLength)?;
        self.settings.focal_length = focal_length;
        Ok(())
    }

    /// Set the cosmetic color filter.
    pub fn set_filter(&mut self, filter: ColorFilter) {
        self.settings.filter = filter;
    }

    /// Restore every setting to the documented defaults. Idempotent.
    pub fn reset(&mut self) {
        log::debug!("exposure model reset to defaults");
        self.settings = ExposureSettings::default();
    }

    // ── raw accessors ────────────────────────────────────────────────

    pub fn iso(&self) -> f64 {
        self.settings.iso
    }

    pub fn aperture(&self) -> f64 {
        self.settings.aperture
    }

    pub fn shutter_speed(&self) -> f64 {
        self.settings.shutter_speed
    }

    pub fn focal_length(&self) -> f64 {
        self.settings.focal_length
    }

    pub fn filter(&self) -> ColorFilter {
        self.settings.filter
    }

    /// The full settings record.
    pub fn settings(&self) -> &ExposureSettings {
        &self.settings
    }

    // ── derived accessors ────────────────────────────────────────────

    /// Photometric exposure value, rounded to 2 decimals for display.
    pub fn exposure_value(&self) -> f64 {
        derive::exposure_value(
            self.settings.iso,
            self.settings.aperture,
            self.settings.shutter_speed,
        )
    }

    /// Signed meter reading in stops versus the target exposure, snapped to
    /// thirds of a stop. Positive = underexposed, negative = overexposed.
    pub fn meter_reading(&self) -> f64 {
        derive::meter_reading(
            self.settings.iso,
            self.settings.aperture,
            self.settings.shutter_speed,
        )
    }

    /// Relative scene brightness multiplier versus the baseline settings.
    pub fn brightness(&self) -> f64 {
        derive::brightness(
            self.settings.iso,
            self.settings.aperture,
            self.settings.shutter_speed,
        )
    }

    /// Optical magnification versus the baseline focal length.
    pub fn zoom(&self) -> f64 {
        derive::zoom(self.settings.focal_length)
    }

    /// All four derived values as one snapshot.
    pub fn readout(&self) -> ExposureReadout {
        ExposureReadout {
            exposure_value: self.exposure_value(),
            meter_reading: self.meter_reading(),
            brightness: self.brightness(),
            zoom: self.zoom(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    // ── defaults and reset ───────────────────────────────────────────

    #[test]
    fn new_model_has_documented_defaults() {
        let model = ExposureModel::new();
        assert_eq!(model.iso(), 400.0);
        assert_eq!(model.aperture(), 2.8);
        assert_eq!(model.shutter_speed(), 125.0);
        assert_eq!(model.focal_length(), 24.0);
        assert_eq!(model.filter(), ColorFilter::Standard);
    }

    #[test]
    fn defaults_sit_at_unity_brightness_and_zoom() {
        let model = ExposureModel::new();
        assert_eq!(model.brightness(), 1.0);
        assert_eq!(model.zoom(), 1.0);
    }

    #[test]
    fn reset_restores_defaults_after_mutations() {
        let mut model = ExposureModel::new();
        model.set_iso(3200.0).unwrap();
        model.set_aperture(11.0).unwrap();
        model.set_shutter_speed(1000.0).unwrap();
        model.set_focal_length(85.0).unwrap();
        model.set_filter(ColorFilter::Sepia);

        model.reset();
        assert_eq!(model, ExposureModel::new());
        assert_eq!(model.brightness(), 1.0);
        assert_eq!(model.zoom(), 1.0);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut model = ExposureModel::new();
        model.set_iso(800.0).unwrap();
        model.reset();
        let once = model.clone();
        model.reset();
        assert_eq!(model, once);
    }

    // ── mutation visibility ──────────────────────────────────────────

    #[test]
    fn mutation_is_immediately_visible_in_derived_reads() {
        let mut model = ExposureModel::new();
        assert_eq!(model.brightness(), 1.0);

        model.set_iso(800.0).unwrap();
        assert_eq!(model.brightness(), 2.0);

        model.set_focal_length(48.0).unwrap();
        assert_eq!(model.zoom(), 2.0);
    }

    #[test]
    fn stopping_down_dims_brightness() {
        let mut model = ExposureModel::new();
        model.set_aperture(4.0).unwrap();
        assert!((model.brightness() - 0.49).abs() < EPS);
    }

    #[test]
    fn known_exposure_value() {
        let mut model = ExposureModel::new();
        model.set_iso(100.0).unwrap();
        model.set_aperture(5.6).unwrap();
        model.set_shutter_speed(250.0).unwrap();
        assert!((model.exposure_value() - 12.94).abs() < EPS);
    }

    #[test]
    fn filter_does_not_affect_derivations() {
        let mut model = ExposureModel::new();
        let before = model.readout();
        model.set_filter(ColorFilter::Cool);
        assert_eq!(model.readout(), before);
    }

    #[test]
    fn readout_matches_individual_accessors() {
        let mut model = ExposureModel::new();
        model.set_iso(1600.0).unwrap();
        model.set_shutter_speed(60.0).unwrap();

        let readout = model.readout();
        assert_eq!(readout.exposure_value, model.exposure_value());
        assert_eq!(readout.meter_reading, model.meter_reading());
        assert_eq!(readout.brightness, model.brightness());
        assert_eq!(readout.zoom, model.zoom());
    }

    // ── boundary validation ──────────────────────────────────────────

    #[test]
    fn rejects_zero_and_negative_numeric_settings() {
        let mut model = ExposureModel::new();
        assert_eq!(model.set_iso(0.0), Err(SettingError::InvalidIso(0.0)));
        assert_eq!(
            model.set_aperture(-2.8),
            Err(SettingError::InvalidAperture(-2.8))
        );
        assert_eq!(
            model.set_shutter_speed(0.0),
            Err(SettingError::InvalidShutterSpeed(0.0))
        );
        assert_eq!(
            model.set_focal_length(-24.0),
            Err(SettingError::InvalidFocalLength(-24.0))
        );
    }

    #[test]
    fn rejects_non_finite_settings() {
        let mut model = ExposureModel::new();
        assert!(model.set_iso(f64::NAN).is_err());
        assert!(model.set_aperture(f64::INFINITY).is_err());
        assert!(model.set_shutter_speed(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn rejected_mutation_leaves_state_untouched() {
        let mut model = ExposureModel::new();
        model.set_iso(f64::NAN).unwrap_err();
        assert_eq!(model.iso(), 400.0);
        assert_eq!(model.brightness(), 1.0);
    }

    #[test]
    fn error_message_names_the_field() {
        let err = ExposureModel::new().set_iso(-1.0).unwrap_err();
        assert!(err.to_string().contains("ISO"));
        let err = ExposureModel::new().set_shutter_speed(0.0).unwrap_err();
        assert!(err.to_string().contains("shutter speed"));
    }

    #[test]
    fn with_settings_validates_on_entry() {
        let bad = ExposureSettings {
            aperture: 0.0,
            ..ExposureSettings::default()
        };
        assert_eq!(
            ExposureModel::with_settings(bad),
            Err(SettingError::InvalidAperture(0.0))
        );

        let good = ExposureSettings {
            iso: 100.0,
            ..ExposureSettings::default()
        };
        assert_eq!(ExposureModel::with_settings(good).unwrap().iso(), 100.0);
    }

    // ── filters and labels ───────────────────────────────────────────

    #[test]
    fn filter_round_trips_through_names() {
        for filter in [
            ColorFilter::Standard,
            ColorFilter::Sepia,
            ColorFilter::Monochrome,
            ColorFilter::Warm,
            ColorFilter::Cool,
        ] {
            assert_eq!(ColorFilter::from_name(filter.name()), Some(filter));
        }
    }

    #[test]
    fn filter_aliases() {
        assert_eq!(ColorFilter::from_name("bw"), Some(ColorFilter::Monochrome));
        assert_eq!(ColorFilter::from_name("NONE"), Some(ColorFilter::Standard));
        assert_eq!(ColorFilter::from_name("x-ray"), None);
    }

    #[test]
    fn shutter_label_uses_reciprocal_convention() {
        let mut settings = ExposureSettings::default();
        assert_eq!(settings.shutter_label(), "1/125s");

        settings.shutter_speed = 0.5; // 2-second exposure
        assert_eq!(settings.shutter_label(), "2s");

        settings.shutter_speed = 1.0;
        assert_eq!(settings.shutter_label(), "1/1s");
    }

    #[test]
    fn aperture_label_drops_trailing_zero() {
        let mut settings = ExposureSettings::default();
        assert_eq!(settings.aperture_label(), "f/2.8");
        settings.aperture = 4.0;
        assert_eq!(settings.aperture_label(), "f/4");
    }
}
