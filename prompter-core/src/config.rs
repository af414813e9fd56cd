use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub script_path: String, // base directory holding <scene>.txt files
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogueConfig {
    pub fade_duration: f32, // seconds for a full panel fade
    pub reveal_delay: f32,  // seconds between revealed characters
    pub clear_after_scene: bool,
    pub default_portrait: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub needed_tag: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            script_path: "assets/dialogue/".into(),
            log_level: "info".into(),
        }
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            fade_duration: 0.4,
            reveal_delay: 0.05,
            clear_after_scene: false,
            default_portrait: "portraits/default.png".into(),
        }
    }
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            needed_tag: "Player".into(),
        }
    }
}
