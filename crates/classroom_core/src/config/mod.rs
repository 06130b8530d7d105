//! Configuration system

use serde::{Deserialize, Serialize};

use crate::material::ModelDefaults;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when the file cannot be read or parsed.
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        // Format dispatch happens before any IO so an unsupported extension
        // is reported as such even when the file does not exist.
        if !path.ends_with(".toml") && !path.ends_with(".ron") {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        }

        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// [`ConfigError`] when serialization or the write fails.
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Backend API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend API, including the `/api/` prefix
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api/".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Object-storage upload settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Base URL uploads are PUT to; the resulting object URL is the join of
    /// this endpoint and the object name
    pub endpoint: String,
    /// Maximum upload size in megabytes
    pub max_size_mb: u64,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:9000/uploads/".to_string(),
            max_size_mb: 50,
        }
    }
}

/// 3D viewer fallbacks used when a MODEL3D record omits scale or AR
/// availability; threaded into classification through
/// [`crate::api::Client`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Default uniform model scale
    pub default_scale: f32,
    /// Whether AR is offered by default
    pub ar_enabled: bool,
}

impl ViewerConfig {
    /// The classification fallbacks this section carries
    #[must_use]
    pub const fn model_defaults(&self) -> ModelDefaults {
        ModelDefaults {
            scale: self.default_scale,
            ar_enabled: self.ar_enabled,
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            default_scale: 1.0,
            ar_enabled: true,
        }
    }
}

/// Top-level client configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend API settings
    pub api: ApiConfig,
    /// Object-storage upload settings
    pub upload: UploadConfig,
    /// 3D viewer defaults
    pub viewer: ViewerConfig,
}

impl Config for ClientConfig {}
