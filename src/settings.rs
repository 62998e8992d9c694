//! Animation settings
//!
//! One structure covers every variant of the finger: with or without the
//! nail, with or without wall reflection. Overrides are read as JSON from
//! LocalStorage.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::FingerError;
use crate::consts::*;

/// Named variants of the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Variant {
    /// Disc only, drifts off the surface
    Plain,
    /// Disc bouncing off the walls
    Bouncing,
    /// Bouncing disc with the heading nail
    #[default]
    Nailed,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Plain => "Plain",
            Variant::Bouncing => "Bouncing",
            Variant::Nailed => "Nailed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "plain" => Some(Variant::Plain),
            "bouncing" | "bounce" => Some(Variant::Bouncing),
            "nailed" | "nail" => Some(Variant::Nailed),
            _ => None,
        }
    }

    pub fn has_orientation_indicator(&self) -> bool {
        matches!(self, Variant::Nailed)
    }

    pub fn reflect_off_walls(&self) -> bool {
        match self {
            Variant::Plain => false,
            Variant::Bouncing => true,
            Variant::Nailed => true,
        }
    }
}

/// Initial velocity in px/s, as the original constructor takes it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialVelocity {
    pub vertical: f64,
    pub horizontal: f64,
}

/// Animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw the heading nail on top of the disc
    pub has_orientation_indicator: bool,
    /// Bounce off the surface edges
    pub reflect_off_walls: bool,

    // === Look ===
    pub fill_color: String,
    pub nail_color: String,

    // === Disc ===
    pub initial_velocity: InitialVelocity,
    pub initial_position: DVec2,
    pub radius: f64,

    // === Frame pacing ===
    /// Frames arriving later than this (ms) are treated as stale and do not
    /// advance the disc. `None` disables the guard.
    pub stale_frame_threshold_ms: Option<f64>,

    /// `log` level name used when initialising the logger
    pub log_level: String,

    /// Variant name (`plain`, `bouncing`, `nailed`); when set, its toggles
    /// override the two feature flags above
    pub variant: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            has_orientation_indicator: true,
            reflect_off_walls: true,

            fill_color: FINGER_COLOR.to_string(),
            nail_color: NAIL_COLOR.to_string(),

            initial_velocity: InitialVelocity {
                vertical: DEFAULT_VERTICAL_SPEED,
                horizontal: DEFAULT_HORIZONTAL_SPEED,
            },
            initial_position: DVec2::new(DEFAULT_CENTER_X, DEFAULT_CENTER_Y),
            radius: DEFAULT_RADIUS,

            stale_frame_threshold_ms: None,

            log_level: "info".to_string(),

            variant: None,
        }
    }
}

impl Settings {
    /// Create settings from a variant (applies variant defaults)
    pub fn from_variant(variant: Variant) -> Self {
        let mut settings = Self::default();
        settings.apply_variant(variant);
        settings
    }

    /// Apply a variant's feature toggles, leaving the rest untouched
    pub fn apply_variant(&mut self, variant: Variant) {
        self.has_orientation_indicator = variant.has_orientation_indicator();
        self.reflect_off_walls = variant.reflect_off_walls();
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, FingerError> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.apply_named_variant();
        Ok(settings)
    }

    /// Apply the `variant` key, if it names a known variant
    fn apply_named_variant(&mut self) {
        let Some(name) = self.variant.as_deref() else {
            return;
        };
        match Variant::from_str(name) {
            Some(variant) => {
                log::info!("Using {} variant", variant.as_str());
                self.apply_variant(variant);
            }
            None => log::warn!("Unknown variant `{}`, keeping feature flags", name),
        }
    }

    pub fn to_json(&self) -> Result<String, FingerError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Logger level, `Info` when the name is not recognised
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "finger_ball_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::debug!("No {} storage on native, using defaults", Self::STORAGE_KEY);
        Self::default()
    }
}
