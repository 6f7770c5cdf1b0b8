pub mod environment;
pub mod toml_config;

use crate::config::toml_config::{FileConfig, DEFAULT_CONFIG_FILE};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{ArgGroup, Parser};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const DEFAULT_ENVIRONMENT: &str = "cluster01";
pub const DEFAULT_ENVIRONMENTS_DIR: &str = "environments";
pub const DEFAULT_TOOL: &str = "tofu";
pub const DEFAULT_CONNECTION: &str = "community.general.incus";

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tf-inventory", version)]
#[command(about = "Ansible dynamic inventory from OpenTofu/Terraform outputs")]
#[command(group(ArgGroup::new("mode").required(true).args(["list", "host"])))]
pub struct CliConfig {
    /// Print the whole inventory
    #[arg(long)]
    pub list: bool,

    /// Print variables for one host (always empty, see `_meta`)
    #[arg(long, value_name = "HOSTNAME")]
    pub host: Option<String>,

    /// Deployment environment to read outputs from
    #[arg(short, long, env = "ENV")]
    pub environment: Option<String>,

    /// Directory containing the environments directory
    #[arg(long, env = "INVENTORY_ROOT")]
    pub root: Option<PathBuf>,

    /// Provisioning tool binary
    #[arg(long, env = "TOFU_BIN")]
    pub tool: Option<String>,

    /// Path to a tf-inventory.toml
    #[arg(short, long, env = "INVENTORY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file named on the command line, or the default file
    /// in the root when one exists.
    pub fn load_file_config(&self) -> Result<Option<FileConfig>> {
        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from {}", path.display());
            return FileConfig::from_file(path).map(Some);
        }

        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };
        let candidate = root.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!("Loading configuration from {}", candidate.display());
            return FileConfig::from_file(&candidate).map(Some);
        }

        Ok(None)
    }
}

/// Effective settings: command line and environment over file over defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct InventorySettings {
    pub environment: String,
    pub root: PathBuf,
    pub environments_dir: PathBuf,
    pub tool: String,
    pub connection: String,
    pub remotes: BTreeMap<String, String>,
}

impl InventorySettings {
    pub fn from_sources(cli: &CliConfig, file: Option<FileConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();
        file.validate()?;

        let root = match (&cli.root, &file.root) {
            (Some(root), _) => root.clone(),
            (None, Some(root)) => PathBuf::from(root),
            (None, None) => std::env::current_dir()?,
        };

        let mut remotes = default_remotes();
        remotes.extend(file.remotes);

        let settings = Self {
            environment: cli
                .environment
                .clone()
                .filter(|name| !name.is_empty())
                .or(file.default_environment)
                .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            root,
            environments_dir: PathBuf::from(
                file.environments_dir
                    .unwrap_or_else(|| DEFAULT_ENVIRONMENTS_DIR.to_string()),
            ),
            tool: cli
                .tool
                .clone()
                .or(file.tool)
                .unwrap_or_else(|| DEFAULT_TOOL.to_string()),
            connection: file
                .connection
                .unwrap_or_else(|| DEFAULT_CONNECTION.to_string()),
            remotes,
        };
        settings.validate()?;
        Ok(settings)
    }
}

impl Validate for InventorySettings {
    fn validate(&self) -> Result<()> {
        validation::validate_environment_name("environment", &self.environment)?;
        validation::validate_non_empty_string("tool", &self.tool)?;
        validation::validate_non_empty_string("connection", &self.connection)?;
        Ok(())
    }
}

/// Only the shared cluster is reached through a named remote; the local
/// environment talks to the default Incus socket.
fn default_remotes() -> BTreeMap<String, String> {
    BTreeMap::from([(DEFAULT_ENVIRONMENT.to_string(), DEFAULT_ENVIRONMENT.to_string())])
}
