use crate::error::{JobFilterError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 默认条件模板（交互模式与未指定 -c 时的预填内容）
pub const DEFAULT_CONDITIONS: &str = "1. 电气工程 2. 江苏省 3. 工程师";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 默认筛选条件模板
    pub default_conditions: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_conditions: DEFAULT_CONDITIONS.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| JobFilterError::Config("找不到用户主目录".into()))?;
        Ok(home.join(".config").join("job-filter").join("config.json"))
    }

    pub fn set_default_conditions(&mut self, template: String) -> Result<()> {
        self.default_conditions = template;
        self.save()
    }
}
