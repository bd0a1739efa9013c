//! Player preferences
//!
//! Cosmetic only: read once when a match starts, never consulted by the
//! simulation. Each value is stored as JSON under its own key.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// RGB color, 0-255 per channel
pub type Rgb = [u8; 3];

pub const DEFAULT_BALL_COLOR: Rgb = [255, 255, 255];
pub const DEFAULT_LEFT_PADDLE_COLOR: Rgb = [100, 200, 255];
pub const DEFAULT_RIGHT_PADDLE_COLOR: Rgb = [255, 100, 100];

pub const DEFAULT_LEFT_NAME: &str = "Left Player";
pub const DEFAULT_RIGHT_NAME: &str = "Right Player";
pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 8;

/// Key/value storage for preferences (LocalStorage in the browser)
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for native runs and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Cosmetic preferences
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub ball_color: Rgb,
    pub left_paddle_color: Rgb,
    pub right_paddle_color: Rgb,
    pub left_name: String,
    pub right_name: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            ball_color: DEFAULT_BALL_COLOR,
            left_paddle_color: DEFAULT_LEFT_PADDLE_COLOR,
            right_paddle_color: DEFAULT_RIGHT_PADDLE_COLOR,
            left_name: DEFAULT_LEFT_NAME.to_string(),
            right_name: DEFAULT_RIGHT_NAME.to_string(),
        }
    }
}

impl Preferences {
    const BALL_COLOR_KEY: &'static str = "ballColor";
    const LEFT_PADDLE_COLOR_KEY: &'static str = "leftPaddleColor";
    const RIGHT_PADDLE_COLOR_KEY: &'static str = "rightPaddleColor";
    const LEFT_NAME_KEY: &'static str = "leftPlayerName";
    const RIGHT_NAME_KEY: &'static str = "rightPlayerName";

    /// Read every preference, falling back to defaults per key
    pub fn load(store: &impl PreferenceStore) -> Self {
        // Stored names are sanitized, the defaults are used as-is
        let name = |key: &str, fallback: &str| {
            let stored: Option<String> = load_value(store, key, None);
            stored.map_or_else(|| fallback.to_string(), |raw| sanitize_name(&raw, fallback))
        };

        Self {
            ball_color: load_value(store, Self::BALL_COLOR_KEY, DEFAULT_BALL_COLOR),
            left_paddle_color: load_value(
                store,
                Self::LEFT_PADDLE_COLOR_KEY,
                DEFAULT_LEFT_PADDLE_COLOR,
            ),
            right_paddle_color: load_value(
                store,
                Self::RIGHT_PADDLE_COLOR_KEY,
                DEFAULT_RIGHT_PADDLE_COLOR,
            ),
            left_name: name(Self::LEFT_NAME_KEY, DEFAULT_LEFT_NAME),
            right_name: name(Self::RIGHT_NAME_KEY, DEFAULT_RIGHT_NAME),
        }
    }

    pub fn save(&self, store: &mut impl PreferenceStore) {
        save_value(store, Self::BALL_COLOR_KEY, &self.ball_color);
        save_value(store, Self::LEFT_PADDLE_COLOR_KEY, &self.left_paddle_color);
        save_value(store, Self::RIGHT_PADDLE_COLOR_KEY, &self.right_paddle_color);
        save_value(store, Self::LEFT_NAME_KEY, &self.left_name);
        save_value(store, Self::RIGHT_NAME_KEY, &self.right_name);
        log::info!("Preferences saved");
    }
}

/// JSON value stored under `key`, or `default` when missing or malformed
pub fn load_value<T: DeserializeOwned>(store: &impl PreferenceStore, key: &str, default: T) -> T {
    let Some(raw) = store.get(key).filter(|raw| !raw.is_empty()) else {
        return default;
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Error loading {} from preferences: {}", key, e);
            default
        }
    }
}

fn save_value<T: Serialize + ?Sized>(store: &mut impl PreferenceStore, key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        store.set(key, &json);
    }
}

/// Trimmed name cut to `MAX_NAME_LENGTH` characters; `fallback` when too short
pub fn sanitize_name(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_NAME_LENGTH {
        return fallback.to_string();
    }
    trimmed.chars().take(MAX_NAME_LENGTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_gives_defaults() {
        let prefs = Preferences::load(&MemoryStore::new());
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.ball_color, [255, 255, 255]);
        assert_eq!(prefs.left_paddle_color, [100, 200, 255]);
        assert_eq!(prefs.right_paddle_color, [255, 100, 100]);
    }

    #[test]
    fn test_stored_colors_load() {
        let mut store = MemoryStore::new();
        store.set("ballColor", "[255,100,100]");
        store.set("leftPaddleColor", "[1,2,3]");
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.ball_color, [255, 100, 100]);
        assert_eq!(prefs.left_paddle_color, [1, 2, 3]);
        assert_eq!(prefs.right_paddle_color, DEFAULT_RIGHT_PADDLE_COLOR);
    }

    #[test]
    fn test_malformed_value_falls_back() {
        let mut store = MemoryStore::new();
        store.set("ballColor", "{not json");
        store.set("rightPaddleColor", "[999, 0, 0]");
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.ball_color, DEFAULT_BALL_COLOR);
        assert_eq!(prefs.right_paddle_color, DEFAULT_RIGHT_PADDLE_COLOR);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let prefs = Preferences {
            ball_color: [10, 20, 30],
            left_name: "Ana".to_string(),
            right_name: "Cy".to_string(),
            ..Preferences::default()
        };
        prefs.save(&mut store);
        assert_eq!(store.get("ballColor").as_deref(), Some("[10,20,30]"));
        assert_eq!(Preferences::load(&store), prefs);
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("  Bob ", "X"), "Bob");
        assert_eq!(sanitize_name("   ", "Left Player"), "Left Player");
        assert_eq!(sanitize_name("Maximilian", "X"), "Maximili");
        assert_eq!(sanitize_name("Zoë", "X"), "Zoë");
    }

    #[test]
    fn test_stored_names_are_sanitized() {
        let mut store = MemoryStore::new();
        store.set("leftPlayerName", "\"Bartholomew\"");
        store.set("rightPlayerName", "\"\"");
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.left_name, "Bartholo");
        assert_eq!(prefs.right_name, DEFAULT_RIGHT_NAME);
    }
}
