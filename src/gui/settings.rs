use serde::{
    Deserialize,
    Serialize,
};

/// Ambient UI preferences, persisted as `settings.json` in the app data
/// directory. Missing or extra fields fall back to defaults so older files
/// keep loading.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub dark_mode: bool,
    pub sound_enabled: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { dark_mode: true, sound_enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip() {
        let settings = SettingsData { dark_mode: false, sound_enabled: false };
        let json = serde_json::to_string(&settings).unwrap();
        let back: SettingsData = serde_json::from_str(&json).unwrap();

        assert!(!back.dark_mode);
        assert!(!back.sound_enabled);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: SettingsData = serde_json::from_str(r#"{ "dark_mode": false }"#).unwrap();

        assert!(!back.dark_mode);
        assert!(back.sound_enabled);
    }
}
