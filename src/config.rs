use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub root_name: String,
    pub separator: String,
    pub log_level: String,
    pub output: OutputFormat,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            root_name: "catalog".to_string(),
            separator: "/".to_string(),
            log_level: "info".to_string(),
            output: OutputFormat::Text,
        }
    }
}

impl PickerConfig {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.separator.is_empty() {
            anyhow::bail!("separator must not be empty");
        }
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            anyhow::bail!("unknown log level '{}'", self.log_level);
        }
        Ok(())
    }
}
