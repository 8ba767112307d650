use serde::{Deserialize, Serialize};

use super::ConfigError;

fn default_separator() -> String {
    "\n\n".to_string()
}

/// Rendering preferences for calculator replies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Prefix each reply block with its severity label.
    #[serde(default)]
    pub show_severity_labels: bool,
    /// Separator between scenario blocks in one reply.
    #[serde(default = "default_separator")]
    pub block_separator: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            show_severity_labels: false,
            block_separator: default_separator(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        confy::load("finisher", None).unwrap_or_default()
    }

    pub fn save(self) -> Result<(), ConfigError> {
        confy::store("finisher", None, self).map_err(ConfigError::Save)
    }
}
