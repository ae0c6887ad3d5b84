//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    #[default]
    Development,
    Staging,
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Model training configuration
    #[serde(default)]
    pub model: ModelConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP server host
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Enable CORS origin checks (disabled means permissive, dev only)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// CORS allowed origins
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_enabled: default_true(),
            cors_origins: Vec::new(),
        }
    }
}

/// Training hyperparameters for the advice model.
///
/// The model is retrained in memory from the embedded corpus on every
/// process start; nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Vocabulary cap for the tf-idf vectorizer
    #[serde(default = "default_max_features")]
    pub max_features: usize,

    /// Gradient descent iteration cap
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Gradient descent learning rate
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    /// Loss-delta threshold that stops training early
    #[serde(default = "default_convergence_tolerance")]
    pub convergence_tolerance: f64,
}

fn default_max_features() -> usize {
    100
}

fn default_max_iterations() -> usize {
    1000
}

fn default_learning_rate() -> f64 {
    0.5
}

fn default_convergence_tolerance() -> f64 {
    1e-6
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_features: default_max_features(),
            max_iterations: default_max_iterations(),
            learning_rate: default_learning_rate(),
            convergence_tolerance: default_convergence_tolerance(),
        }
    }
}

impl Settings {
    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.max_features == 0 {
            return Err(ConfigError::InvalidValue {
                field: "model.max_features".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.model.max_iterations == 0 {
            return Err(ConfigError::InvalidValue {
                field: "model.max_iterations".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.model.learning_rate <= 0.0 || !self.model.learning_rate.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "model.learning_rate".to_string(),
                message: "must be a positive finite number".to_string(),
            });
        }
        if self.model.convergence_tolerance < 0.0 || !self.model.convergence_tolerance.is_finite()
        {
            return Err(ConfigError::InvalidValue {
                field: "model.convergence_tolerance".to_string(),
                message: "must be a non-negative finite number".to_string(),
            });
        }
        if self.environment.is_production() && !self.server.cors_enabled {
            return Err(ConfigError::InvalidValue {
                field: "server.cors_enabled".to_string(),
                message: "permissive CORS is not allowed in production".to_string(),
            });
        }
        Ok(())
    }
}

/// Load settings with the priority:
/// env vars > config/{env} file > config/default file > built-in defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("FINQUEST")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
