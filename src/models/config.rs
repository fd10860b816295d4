use anyhow::Error;
use figment::providers::{Env, Format, Json};
use figment::Figment;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_environment")]
    pub environment: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_file_path")]
    pub log_file_path: String,
}

impl Config {
    /// Optional config.json overlaid with LANGDETECT_-prefixed env vars.
    /// Every field has a default, so the service runs with no config at all.
    pub fn load() -> Result<Config, Error> {
        let config = Figment::new()
            .merge(Json::file("config.json"))
            .merge(Env::prefixed("LANGDETECT_"))
            .extract()?;

        Ok(config)
    }
}

fn default_port() -> u16 {
    3000
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file_path() -> String {
    "logs/app.log".to_string()
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_apply_without_config_file() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.environment, "development");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file_path, "logs/app.log");
    }
}
