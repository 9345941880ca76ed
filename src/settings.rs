//! Simulation tunables and preferences
//!
//! Persisted in LocalStorage on the web; read from a JSON file named by
//! `SPEEDO_SETTINGS` on native. Out-of-range tunables are replaced by their
//! defaults on load.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// What braking does once speed drops below one frame's brake power
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BrakePolicy {
    /// Speed bottoms out at 0
    #[default]
    FloorAtZero,
    /// Speed may go negative, flipping the direction of travel
    AllowReversal,
}

impl BrakePolicy {
    /// The other policy
    pub fn toggled(&self) -> Self {
        match self {
            BrakePolicy::FloorAtZero => BrakePolicy::AllowReversal,
            BrakePolicy::AllowReversal => BrakePolicy::FloorAtZero,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrakePolicy::FloorAtZero => "floor",
            BrakePolicy::AllowReversal => "reverse",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "floor" | "floor_at_zero" => Some(BrakePolicy::FloorAtZero),
            "reverse" | "allow_reversal" => Some(BrakePolicy::AllowReversal),
            _ => None,
        }
    }

    /// Speed after braking `speed` by `power` for one frame
    pub fn apply(&self, speed: f32, power: f32) -> f32 {
        match self {
            BrakePolicy::FloorAtZero => (speed - power).max(0.0),
            BrakePolicy::AllowReversal => speed - power,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Ship handling ===
    /// Heading change per frame while turning (radians)
    pub turn_speed: f32,
    /// Thrust impulse per frame
    pub acceleration_speed: f32,
    /// Hard speed cap
    pub speed_limit: f32,
    /// Speed removed per braking frame
    pub brake_power: f32,
    pub brake_policy: BrakePolicy,
    /// Downward pull on the ship per frame
    pub gravity: f32,

    // === Gauge ===
    /// Needle arm length (pixels)
    pub needle_length: f32,

    // === HUD ===
    /// Draw a numeric speed readout next to the gauge
    pub show_speed: bool,

    // === Demo ===
    /// Seed for the autopilot's input script
    pub autopilot_seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            turn_speed: TURN_SPEED,
            acceleration_speed: ACCELERATION_SPEED,
            speed_limit: SPEED_LIMIT,
            brake_power: BRAKE_POWER,
            brake_policy: BrakePolicy::default(),
            gravity: 0.0,

            needle_length: NEEDLE_LENGTH,

            show_speed: false,

            autopilot_seed: 0x5eed,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "speedo_settings";

    /// Environment variable naming a settings file
    #[cfg(not(target_arch = "wasm32"))]
    const ENV_PATH: &'static str = "SPEEDO_SETTINGS";

    /// Parse settings JSON. Missing fields take their defaults, and so do
    /// tunables that are non-finite or out of range.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Replace unusable tunables with their defaults
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let non_negative = |v: f32| v.is_finite() && v >= 0.0;

        sanitize_field("turn_speed", &mut self.turn_speed, defaults.turn_speed, non_negative);
        sanitize_field(
            "acceleration_speed",
            &mut self.acceleration_speed,
            defaults.acceleration_speed,
            non_negative,
        );
        sanitize_field("speed_limit", &mut self.speed_limit, defaults.speed_limit, non_negative);
        sanitize_field("brake_power", &mut self.brake_power, defaults.brake_power, non_negative);
        sanitize_field("gravity", &mut self.gravity, defaults.gravity, f32::is_finite);
        sanitize_field(
            "needle_length",
            &mut self.needle_length,
            defaults.needle_length,
            |v| v.is_finite() && v > 0.0,
        );
        self
    }

    /// Parse, falling back to defaults on malformed input
    fn parse_or_default(json: &str, source: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", source);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings from {}: {}", source, e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                return Self::parse_or_default(&json, "LocalStorage");
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };

        match self.to_json() {
            Ok(json) => match storage.set_item(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Failed to store settings: {:?}", e),
            },
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }

    /// Load settings from the file named by `SPEEDO_SETTINGS` (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_PATH) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => Self::parse_or_default(&json, &path),
            Err(e) => {
                log::warn!("Cannot read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }
}

/// Reset `value` to `default` unless `valid` accepts it
fn sanitize_field(name: &str, value: &mut f32, default: f32, valid: impl Fn(f32) -> bool) {
    if !valid(*value) {
        log::warn!("Settings: {} = {} is out of range, using {}", name, value, default);
        *value = default;
    }
}
