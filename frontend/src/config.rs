use serde::{Deserialize, Serialize};
use shared::reward_wheel::SessionConfig;
use web_sys::window;

const FEEDBACK_SETTINGS_KEY: &str = "reward_wheel_feedback";

/// Player preferences for the wheel's side effects.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct FeedbackSettings {
    pub sound: bool,
    pub haptics: bool,
    pub confetti: bool,
}

impl Default for FeedbackSettings {
    fn default() -> Self {
        Self {
            sound: true,
            haptics: true,
            confetti: true,
        }
    }
}

pub fn parse_feedback_settings(raw: &str) -> FeedbackSettings {
    match serde_json::from_str(raw) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Ignoring malformed feedback settings: {}", e);
            FeedbackSettings::default()
        }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_feedback_settings() -> FeedbackSettings {
    local_storage()
        .and_then(|s| s.get_item(FEEDBACK_SETTINGS_KEY).ok().flatten())
        .map(|raw| parse_feedback_settings(&raw))
        .unwrap_or_default()
}

pub fn save_feedback_settings(settings: &FeedbackSettings) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(settings) {
        Ok(raw) => {
            if storage.set_item(FEEDBACK_SETTINGS_KEY, &raw).is_err() {
                log::warn!("Could not persist feedback settings");
            }
        }
        Err(e) => log::warn!("Could not serialize feedback settings: {}", e),
    }
}

/// Starting state for a freshly opened wheel. The daily login grants one spin.
pub fn get_session_config() -> SessionConfig {
    SessionConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_settings() {
        let settings = parse_feedback_settings(r#"{"sound":false,"haptics":true,"confetti":false}"#);
        assert_eq!(settings, FeedbackSettings { sound: false, haptics: true, confetti: false });
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings = parse_feedback_settings(r#"{"sound":false}"#);
        assert!(!settings.sound);
        assert!(settings.haptics);
        assert!(settings.confetti);
    }

    #[test]
    fn test_malformed_settings_fall_back() {
        assert_eq!(parse_feedback_settings("not json"), FeedbackSettings::default());
    }
}
