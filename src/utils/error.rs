use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Environment directory not found: {}", path.display())]
    EnvironmentNotFound { path: PathBuf },

    #[error("Failed to start {tool}: {source}")]
    CommandSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{tool} output` failed: {stderr}")]
    CommandFailed {
        tool: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("Invalid JSON from `{tool} output`: {source}")]
    OutputParse {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl InventoryError {
    /// Single line written to stderr before the process exits.
    pub fn user_friendly_message(&self) -> String {
        format!("Error: {}", self)
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            InventoryError::EnvironmentNotFound { .. } => {
                "Check the ENV variable and that the environment directory exists under the inventory root"
            }
            InventoryError::CommandSpawn { .. } => {
                "Make sure the provisioning tool is installed and on PATH, or set TOFU_BIN"
            }
            InventoryError::CommandFailed { .. } => {
                "Run `tofu init` in the environment directory and verify the state is reachable"
            }
            InventoryError::OutputParse { .. } => {
                "The provisioning tool must print a JSON object of outputs; try running it by hand"
            }
            InventoryError::TomlError(_)
            | InventoryError::ConfigError { .. }
            | InventoryError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the overriding command-line options"
            }
            InventoryError::IoError(_) | InventoryError::SerializationError(_) => {
                "Retry the command; if it keeps failing, run with --verbose"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
