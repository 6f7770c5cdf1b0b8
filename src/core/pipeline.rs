use crate::core::builder::build_inventory;
use crate::core::{ConfigProvider, Inventory, OutputSource, Pipeline, ProvisioningOutput};
use crate::domain::model::SERVICE_GROUPS;
use crate::utils::error::Result;

/// Fetch outputs for one environment, build the inventory, render it as JSON.
pub struct InventoryPipeline<S: OutputSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: OutputSource, C: ConfigProvider> InventoryPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

#[async_trait::async_trait]
impl<S: OutputSource, C: ConfigProvider> Pipeline for InventoryPipeline<S, C> {
    async fn extract(&self) -> Result<ProvisioningOutput> {
        tracing::debug!(
            "Fetching outputs for environment '{}'",
            self.config.environment_name()
        );
        self.source.fetch(self.config.environment_dir()).await
    }

    async fn transform(&self, output: ProvisioningOutput) -> Result<Inventory> {
        Ok(build_inventory(
            &output,
            &SERVICE_GROUPS,
            self.config.connection_plugin(),
            self.config.incus_remote(),
        ))
    }

    async fn load(&self, inventory: Inventory) -> Result<String> {
        Ok(serde_json::to_string_pretty(&inventory)?)
    }
}
