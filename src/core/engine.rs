use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct InventoryEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> InventoryEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs the pipeline and returns the rendered inventory.
    pub async fn run(&self) -> Result<String> {
        let output = self.pipeline.extract().await?;
        tracing::info!("Fetched {} provisioning outputs", output.len());

        let inventory = self.pipeline.transform(output).await?;
        tracing::info!(
            "Built inventory with {} groups and {} hosts",
            inventory.groups.len(),
            inventory.host_count()
        );

        self.pipeline.load(inventory).await
    }
}
