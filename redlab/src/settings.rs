use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_server_url")]
    pub server_url: String,
}

fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("REDLAB_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let settings = Config::builder()
            .add_source(File::with_name(&config_path).required(false))
            .add_source(config::Environment::with_prefix("REDLAB").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server_url.is_empty() {
            return Err("server_url is required".to_string());
        }
        if !self.server_url.starts_with("http") {
            return Err("server_url must start with http:// or https://".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_local_lab_server() {
        assert_eq!(default_server_url(), "http://127.0.0.1:5000");
    }

    #[test]
    fn validate_rejects_non_http_urls() {
        let settings = Settings {
            server_url: "ftp://example.com".to_string(),
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            server_url: String::new(),
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            server_url: "http://127.0.0.1:5000".to_string(),
        };
        assert!(settings.validate().is_ok());
    }
}
