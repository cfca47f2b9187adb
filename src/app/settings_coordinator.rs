//! Generic settings persistence coordination.
//!
//! Provides a reusable API for persisting application settings to storage.
//! Settings are stored as JSON strings in eframe's key/value storage, next to
//! the theme preference handled by `ThemeCoordinator`.

use crate::state::Preferences;
use serde::{Deserialize, Serialize};

const PREFERENCES_KEY: &str = "preferences";

/// Coordinates generic settings persistence.
///
/// This coordinator provides type-safe loading and saving of any serializable
/// settings to eframe's persistent storage.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads the viewer preferences, falling back to defaults.
    pub fn load_preferences(storage: Option<&dyn eframe::Storage>) -> Preferences {
        Self::load_setting_or(storage, PREFERENCES_KEY, Preferences::default())
    }

    /// Saves the viewer preferences.
    pub fn save_preferences(storage: &mut dyn eframe::Storage, preferences: &Preferences) {
        Self::save_setting(storage, PREFERENCES_KEY, preferences);
    }

    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(e) => log::warn!("could not serialize setting '{}': {}", key, e),
        }
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the provided default
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring stored setting '{}': {}", key, e);
                None
            }
        }
    }
}
