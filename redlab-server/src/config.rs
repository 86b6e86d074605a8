use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Configuration {
    #[serde(default)]
    pub server: ServerConfiguration,

    #[serde(default)]
    pub rate_limit: RateLimitConfiguration,

    #[serde(default)]
    pub auth: AuthConfiguration,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfiguration {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitConfiguration {
    /// Requests allowed per client within one window.
    #[serde(default = "default_limit")]
    pub limit: u32,

    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfiguration {
    /// Shared secret mixed into issued tokens. A lab default, not a real
    /// credential.
    #[serde(default = "default_secret")]
    pub secret: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_limit() -> u32 {
    5
}

fn default_window_seconds() -> u64 {
    10
}

fn default_secret() -> String {
    "lab-secret-key".to_string()
}

impl Default for ServerConfiguration {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for RateLimitConfiguration {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            window_seconds: default_window_seconds(),
        }
    }
}

impl Default for AuthConfiguration {
    fn default() -> Self {
        Self {
            secret: default_secret(),
        }
    }
}

impl Configuration {
    pub fn new() -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(config::File::with_name("config"));
        }

        builder =
            builder.add_source(config::Environment::with_prefix("REDLAB_SERVER").separator("__"));

        builder.build()?.try_deserialize()
    }
}
