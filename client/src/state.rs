use crate::config::*;

#[derive(Clone)]
pub struct SessionState {
    pub config: Config,
    pub config_path: String,
}

impl SessionState {
    pub fn new_with_config(config_path: &str) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let mut config = Config::load_from(config_path)?;

        if let Ok(url) = std::env::var("SERVER_URL") {
            config.server_url = Some(url);
        }

        Ok(SessionState {
            config,
            config_path: config_path.to_string(),
        })
    }

    pub fn server_url(&self) -> std::result::Result<&str, Box<dyn std::error::Error>> {
        self.config
            .server_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .ok_or_else(|| "No server URL configured".into())
    }

    pub fn remember_player(&mut self, player_id: &str) -> std::result::Result<(), Box<dyn std::error::Error>> {
        self.config.player_id = Some(player_id.to_string());
        self.config.save_to(&self.config_path)
    }
}
