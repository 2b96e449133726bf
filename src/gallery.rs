//! Captured-photo collection and active-selection tracking.
//!
//! A [`Gallery`] is a plain ordered container, most-recent-first. Each
//! [`Photo`] carries a [`CaptureSettings`] snapshot of the exposure inputs at
//! the moment of capture, so a detail view can show how a shot was taken long
//! after the live settings have moved on.

use serde::{Deserialize, Serialize};

use crate::exposure::ExposureSettings;

/// The exposure inputs frozen at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaptureSettings {
    pub iso: f64,
    pub aperture: f64,
    pub shutter_speed: f64,
}

impl From<&ExposureSettings> for CaptureSettings {
    fn from(settings: &ExposureSettings) -> Self {
        Self {
            iso: settings.iso,
            aperture: settings.aperture,
            shutter_speed: settings.shutter_speed,
        }
    }
}

/// One captured photo record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Caller-assigned identifier, unique within the gallery.
    pub id: String,
    /// Reference to the image data (URL or path); the gallery never reads it.
    pub url: String,
    /// Capture time as milliseconds since the Unix epoch.
    pub timestamp: u64,
    /// Snapshot of the exposure settings at capture time.
    pub settings: CaptureSettings,
}

/// Ordered collection of captured photos plus the active selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    photos: Vec<Photo>,
    active: Option<String>,
}

impl Gallery {
    /// An empty gallery with no active photo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a photo, so the collection stays most-recent-first.
    pub fn add_photo(&mut self, photo: Photo) {
        log::debug!("gallery: added photo {}", photo.id);
        self.photos.insert(0, photo);
    }

    /// Remove the first photo with a matching id. Removing an id that is not
    /// present is a no-op; the return value says whether anything was removed.
    /// Removing the active photo clears the selection.
    pub fn remove_photo(&mut self, id: &str) -> bool {
        let Some(index) = self.photos.iter().position(|p| p.id == id) else {
            log::debug!("gallery: remove ignored, no photo {id}");
            return false;
        };
        self.photos.remove(index);
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        true
    }

    /// Empty the collection and clear the active selection.
    pub fn clear(&mut self) {
        self.photos.clear();
        self.active = None;
    }

    /// Select a photo for detail viewing, or `None` to deselect. Selecting an
    /// id that is not in the collection clears the selection.
    pub fn set_active(&mut self, id: Option<&str>) {
        self.active = id
            .filter(|id| self.photos.iter().any(|p| p.id == *id))
            .map(str::to_owned);
    }

    /// The currently selected photo, if any.
    pub fn active_photo(&self) -> Option<&Photo> {
        let id = self.active.as_deref()?;
        self.photos.iter().find(|p| p.id == id)
    }

    /// All photos, most recent first.
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            url: format!("file:///captures/{id}.png"),
            timestamp: 1_700_000_000_000,
            settings: CaptureSettings {
                iso: 400.0,
                aperture: 2.8,
                shutter_speed: 125.0,
            },
        }
    }

    // ── insertion order ──────────────────────────────────────────────

    #[test]
    fn add_photo_prepends() {
        let mut gallery = Gallery::new();
        gallery.add_photo(photo("first"));
        gallery.add_photo(photo("second"));

        let ids: Vec<&str> = gallery.photos().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["second", "first"]);
    }

    #[test]
    fn snapshot_comes_from_exposure_settings() {
        let settings = ExposureSettings {
            iso: 800.0,
            ..ExposureSettings::default()
        };
        let snapshot = CaptureSettings::from(&settings);
        assert_eq!(snapshot.iso, 800.0);
        assert_eq!(snapshot.aperture, 2.8);
        assert_eq!(snapshot.shutter_speed, 125.0);
    }

    // ── removal ──────────────────────────────────────────────────────

    #[test]
    fn remove_photo_by_id() {
        let mut gallery = Gallery::new();
        gallery.add_photo(photo("a"));
        gallery.add_photo(photo("b"));

        assert!(gallery.remove_photo("a"));
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.photos()[0].id, "b");
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut gallery = Gallery::new();
        gallery.add_photo(photo("a"));

        assert!(!gallery.remove_photo("ghost"));
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn remove_only_touches_first_match() {
        let mut gallery = Gallery::new();
        gallery.add_photo(photo("dup"));
        gallery.add_photo(photo("dup"));

        gallery.remove_photo("dup");
        assert_eq!(gallery.len(), 1);
    }

    // ── active selection ─────────────────────────────────────────────

    #[test]
    fn set_active_selects_a_present_photo() {
        let mut gallery = Gallery::new();
        gallery.add_photo(photo("a"));
        gallery.add_photo(photo("b"));

        gallery.set_active(Some("a"));
        assert_eq!(gallery.active_photo().map(|p| p.id.as_str()), Some("a"));

        gallery.set_active(None);
        assert!(gallery.active_photo().is_none());
    }

    #[test]
    fn set_active_with_unknown_id_clears_selection() {
        let mut gallery = Gallery::new();
        gallery.add_photo(photo("a"));
        gallery.set_active(Some("a"));

        gallery.set_active(Some("ghost"));
        assert!(gallery.active_photo().is_none());
    }

    #[test]
    fn removing_active_photo_clears_selection() {
        let mut gallery = Gallery::new();
        gallery.add_photo(photo("a"));
        gallery.add_photo(photo("b"));
        gallery.set_active(Some("a"));

        gallery.remove_photo("a");
        assert!(gallery.active_photo().is_none());
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn removing_other_photo_keeps_selection() {
        let mut gallery = Gallery::new();
        gallery.add_photo(photo("a"));
        gallery.add_photo(photo("b"));
        gallery.set_active(Some("a"));

        gallery.remove_photo("b");
        assert_eq!(gallery.active_photo().map(|p| p.id.as_str()), Some("a"));
    }

    // ── clear ────────────────────────────────────────────────────────

    #[test]
    fn clear_empties_collection_and_selection() {
        let mut gallery = Gallery::new();
        gallery.add_photo(photo("a"));
        gallery.set_active(Some("a"));

        gallery.clear();
        assert!(gallery.is_empty());
        assert!(gallery.active_photo().is_none());
    }

    #[test]
    fn photo_serializes_with_settings_snapshot() {
        let json = serde_json::to_value(photo("shot-1")).unwrap();
        assert_eq!(json["id"], "shot-1");
        assert_eq!(json["settings"]["iso"], 400.0);
    }
}
