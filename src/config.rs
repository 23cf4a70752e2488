use crate::error::{GazetteMatchError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 照合エンドポイントのデフォルトURL
const DEFAULT_ENDPOINT: &str = "https://scannerb.onrender.com/match";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
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
            .ok_or_else(|| GazetteMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("gazette-match").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout_seconds: 120,
        }
    }

    /// 照合エンドポイントURL（環境変数を優先）
    pub fn endpoint(&self) -> String {
        if let Ok(url) = std::env::var("GAZETTE_MATCH_ENDPOINT") {
            if !url.trim().is_empty() {
                return url;
            }
        }
        self.endpoint.clone()
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        self.endpoint = url;
        self.save()
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        self.timeout_seconds = seconds;
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, 120);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config {
            endpoint: "http://localhost:8080/match".into(),
            timeout_seconds: 30,
        };

        let json = serde_json::to_string(&config).expect("シリアライズ失敗");
        let restored: Config = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(restored.endpoint, "http://localhost:8080/match");
        assert_eq!(restored.timeout_seconds, 30);
    }
}
