use serde::{Deserialize, Serialize};
use std::path::Path;
use std::fs;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub server_url: Option<String>,
    /// Player picked in the last claim, offered again as the default.
    pub player_id: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_url: Some("http://127.0.0.1:5000".to_string()),
            player_id: None,
        }
    }
}

impl Config {
    pub fn load_from(config_path: &str) -> std::result::Result<Config, Box<dyn std::error::Error>> {
        if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save_to(&self, config_path: &str) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from("definitely-not-here.json").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("claimboard-client-{}.json", std::process::id()));
        let path = path.to_str().unwrap();

        let config = Config {
            server_url: Some("http://example.test:9000".to_string()),
            player_id: Some("abc".to_string()),
        };
        config.save_to(path).unwrap();

        assert_eq!(Config::load_from(path).unwrap(), config);
        fs::remove_file(path).ok();
    }
}
