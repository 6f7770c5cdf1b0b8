use crate::config::InventorySettings;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{InventoryError, Result};
use std::path::{Path, PathBuf};

/// A deployment environment whose directory is known to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEnvironment {
    pub name: String,
    pub directory: PathBuf,
    pub remote: String,
    pub connection: String,
}

impl ResolvedEnvironment {
    pub fn resolve(settings: &InventorySettings) -> Result<Self> {
        let directory = settings
            .root
            .join(&settings.environments_dir)
            .join(&settings.environment);

        if !directory.is_dir() {
            return Err(InventoryError::EnvironmentNotFound { path: directory });
        }

        let remote = settings
            .remotes
            .get(&settings.environment)
            .cloned()
            .unwrap_or_default();

        tracing::debug!(
            "Resolved environment '{}' to {} (remote: {:?})",
            settings.environment,
            directory.display(),
            remote
        );

        Ok(Self {
            name: settings.environment.clone(),
            directory,
            remote,
            connection: settings.connection.clone(),
        })
    }
}

impl ConfigProvider for ResolvedEnvironment {
    fn environment_name(&self) -> &str {
        &self.name
    }

    fn environment_dir(&self) -> &Path {
        &self.directory
    }

    fn incus_remote(&self) -> &str {
        &self.remote
    }

    fn connection_plugin(&self) -> &str {
        &self.connection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CONNECTION, DEFAULT_ENVIRONMENTS_DIR, DEFAULT_TOOL};
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn settings(root: &Path, environment: &str) -> InventorySettings {
        InventorySettings {
            environment: environment.to_string(),
            root: root.to_path_buf(),
            environments_dir: PathBuf::from(DEFAULT_ENVIRONMENTS_DIR),
            tool: DEFAULT_TOOL.to_string(),
            connection: DEFAULT_CONNECTION.to_string(),
            remotes: BTreeMap::from([("cluster01".to_string(), "cluster01".to_string())]),
        }
    }

    #[test]
    fn test_cluster_environment_uses_named_remote() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("environments/cluster01")).unwrap();

        let env = ResolvedEnvironment::resolve(&settings(root.path(), "cluster01")).unwrap();
        assert_eq!(env.directory, root.path().join("environments").join("cluster01"));
        assert_eq!(env.incus_remote(), "cluster01");
        assert_eq!(env.connection_plugin(), DEFAULT_CONNECTION);
    }

    #[test]
    fn test_local_environment_has_empty_remote() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("environments/iapetus")).unwrap();

        let env = ResolvedEnvironment::resolve(&settings(root.path(), "iapetus")).unwrap();
        assert_eq!(env.environment_name(), "iapetus");
        assert_eq!(env.incus_remote(), "");
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let root = TempDir::new().unwrap();

        let err = ResolvedEnvironment::resolve(&settings(root.path(), "cluster01")).unwrap_err();
        match err {
            InventoryError::EnvironmentNotFound { path } => {
                assert_eq!(path, root.path().join("environments").join("cluster01"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_plain_file_is_not_an_environment() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("environments")).unwrap();
        std::fs::write(root.path().join("environments/cluster01"), "not a dir").unwrap();

        assert!(ResolvedEnvironment::resolve(&settings(root.path(), "cluster01")).is_err());
    }
}
