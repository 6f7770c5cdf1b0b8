use crate::domain::model::{Inventory, ProvisioningOutput};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Somewhere provisioning outputs can be read from for an environment directory.
pub trait OutputSource: Send + Sync {
    fn fetch(
        &self,
        env_dir: &Path,
    ) -> impl std::future::Future<Output = Result<ProvisioningOutput>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn environment_name(&self) -> &str;
    fn environment_dir(&self) -> &Path;
    /// Incus remote for the connection plugin; empty for the local environment.
    fn incus_remote(&self) -> &str;
    fn connection_plugin(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ProvisioningOutput>;
    async fn transform(&self, output: ProvisioningOutput) -> Result<Inventory>;
    async fn load(&self, inventory: Inventory) -> Result<String>;
}
