//! Photometric derivations: exposure value, meter reading, brightness, and zoom.
//!
//! Every function here is a pure function of the capture settings passed in.
//! There is no cached state, so a read can never observe a stale or
//! half-updated combination of inputs and outputs.

// ISO at which the EV formula is referenced (plain EV100 arithmetic).
const ISO_REFERENCE: f64 = 100.0;

/// EV of a "correctly exposed" reference scene. The meter reads against this.
pub const TARGET_EV: f64 = 10.0;

/// Baseline ISO sensitivity (brightness factor 1.0).
pub const BASE_ISO: f64 = 400.0;

/// Baseline f-number (brightness factor 1.0).
pub const BASE_APERTURE: f64 = 2.8;

/// Baseline shutter speed denominator, i.e. 1/125 s (brightness factor 1.0).
pub const BASE_SHUTTER: f64 = 125.0;

/// Baseline focal length in millimeters (zoom factor 1.0).
pub const BASE_FOCAL_LENGTH: f64 = 24.0;

/// Unrounded photometric exposure value of the given settings:
/// `log2(aperture² × shutter_speed × 100 / iso)`.
///
/// `shutter_speed` is the denominator of the exposure time (125 means 1/125 s),
/// so multiplying by it divides by the exposure time.
fn raw_exposure_value(iso: f64, aperture: f64, shutter_speed: f64) -> f64 {
    (aperture * aperture * shutter_speed * ISO_REFERENCE / iso).log2()
}

/// Exposure value rounded to 2 decimals for display.
///
/// Downstream derivations ([`meter_reading`]) use the unrounded EV internally,
/// so the display rounding never compounds.
pub fn exposure_value(iso: f64, aperture: f64, shutter_speed: f64) -> f64 {
    round2(raw_exposure_value(iso, aperture, shutter_speed))
}

/// Signed light-meter reading in stops, quantized to the nearest third of a
/// stop and rounded to 2 decimals.
///
/// Positive means the settings expose less light than the [`TARGET_EV`]
/// reference (underexposed); negative means more light (overexposed).
///
/// # Example
///
/// ```rust
/// use shutter_sim::exposure::meter_reading;
///
/// // The defaults sit two stops under the reference scene.
/// assert_eq!(meter_reading(400.0, 2.8, 125.0), 2.0);
/// ```
pub fn meter_reading(iso: f64, aperture: f64, shutter_speed: f64) -> f64 {
    let raw = TARGET_EV - raw_exposure_value(iso, aperture, shutter_speed);
    round2(quantize_thirds(raw))
}

/// Relative scene brightness implied by the settings versus the fixed baseline
/// (ISO 400, f/2.8, 1/125 s), as an unrounded positive multiplier.
///
/// Computed directly from the three inputs rather than from the EV so display
/// rounding never feeds back into the rendered brightness. Higher ISO, wider
/// apertures (smaller f-numbers), and slower shutters all brighten the scene.
pub fn brightness(iso: f64, aperture: f64, shutter_speed: f64) -> f64 {
    let iso_factor = iso / BASE_ISO;
    let aperture_factor = (BASE_APERTURE * BASE_APERTURE) / (aperture * aperture);
    let shutter_factor = BASE_SHUTTER / shutter_speed;
    iso_factor * aperture_factor * shutter_factor
}

/// Optical magnification relative to the [`BASE_FOCAL_LENGTH`] wide end,
/// as an unrounded positive multiplier.
pub fn zoom(focal_length: f64) -> f64 {
    focal_length / BASE_FOCAL_LENGTH
}

/// Snap a stop offset to the nearest third of a stop (half rounds away from
/// zero, matching physical click-stop dials).
fn quantize_thirds(stops: f64) -> f64 {
    (stops * 3.0).round() / 3.0
}

/// Round to 2 decimal digits, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
