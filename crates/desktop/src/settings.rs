use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use vidscribe_core::shared::whisper_model::WhisperModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    System,
    Dark,
    Light,
}

impl Appearance {
    pub const ALL: &[Appearance] = &[Appearance::System, Appearance::Dark, Appearance::Light];
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Appearance::System => write!(f, "System"),
            Appearance::Dark => write!(f, "Dark"),
            Appearance::Light => write!(f, "Light"),
        }
    }
}

/// UI-facing whisper tier; maps onto the core model catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Tiny,
    #[default]
    Base,
    Small,
}

impl ModelTier {
    pub const ALL: &[ModelTier] = &[ModelTier::Tiny, ModelTier::Base, ModelTier::Small];

    pub fn to_model(self) -> WhisperModel {
        match self {
            ModelTier::Tiny => WhisperModel::Tiny,
            ModelTier::Base => WhisperModel::Base,
            ModelTier::Small => WhisperModel::Small,
        }
    }
}

impl std::fmt::Display for ModelTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_model())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub appearance: Appearance,
    pub font_scale: f32,
    #[serde(default)]
    pub model: ModelTier,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            appearance: Appearance::System,
            font_scale: 1.0,
            model: ModelTier::default(),
        }
    }
}

impl Settings {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("VidScribe").join("settings.json"))
    }

    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(json) = serde_json::to_string_pretty(self) {
                let _ = fs::write(path, json);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip_through_json() {
        let settings = Settings {
            appearance: Appearance::Dark,
            font_scale: 1.25,
            model: ModelTier::Small,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.appearance, Appearance::Dark);
        assert_eq!(restored.font_scale, 1.25);
        assert_eq!(restored.model, ModelTier::Small);
    }

    #[test]
    fn test_model_field_defaults_when_absent() {
        // Settings written before the model tier existed still parse
        let restored: Settings =
            serde_json::from_str(r#"{"appearance":"light","font_scale":1.0}"#).unwrap();
        assert_eq!(restored.model, ModelTier::Base);
    }

    #[test]
    fn test_tier_maps_to_core_model() {
        assert_eq!(ModelTier::Tiny.to_model(), WhisperModel::Tiny);
        assert_eq!(ModelTier::Base.to_model(), WhisperModel::Base);
        assert_eq!(ModelTier::Small.to_model(), WhisperModel::Small);
    }
}
