use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "tf-inventory.toml";

/// Optional `tf-inventory.toml`. Every key may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub root: Option<String>,
    pub environments_dir: Option<String>,
    pub default_environment: Option<String>,
    pub tool: Option<String>,
    pub connection: Option<String>,
    #[serde(default)]
    pub remotes: BTreeMap<String, String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| InventoryError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: FileConfig = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the value of the environment variable; unknown
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InventoryError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(root) = &self.root {
            validation::validate_path("root", root)?;
        }
        if let Some(dir) = &self.environments_dir {
            validation::validate_path("environments_dir", dir)?;
        }
        if let Some(env) = &self.default_environment {
            validation::validate_environment_name("default_environment", env)?;
        }
        if let Some(tool) = &self.tool {
            validation::validate_non_empty_string("tool", tool)?;
        }
        if let Some(connection) = &self.connection {
            validation::validate_non_empty_string("connection", connection)?;
        }
        for name in self.remotes.keys() {
            validation::validate_environment_name("remotes", name)?;
        }
        Ok(())
    }
}
