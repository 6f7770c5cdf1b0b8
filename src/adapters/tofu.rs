use crate::domain::model::ProvisioningOutput;
use crate::domain::ports::OutputSource;
use crate::utils::error::{InventoryError, Result};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Runs `<tool> output -json` in an environment directory.
#[derive(Debug, Clone)]
pub struct TofuCommand {
    tool: String,
}

impl TofuCommand {
    pub fn new(tool: impl Into<String>) -> Self {
        Self { tool: tool.into() }
    }

    pub fn parse_output(&self, stdout: &[u8]) -> Result<ProvisioningOutput> {
        serde_json::from_slice(stdout).map_err(|source| InventoryError::OutputParse {
            tool: self.tool.clone(),
            source,
        })
    }
}

impl OutputSource for TofuCommand {
    async fn fetch(&self, env_dir: &Path) -> Result<ProvisioningOutput> {
        tracing::debug!("Running `{} output -json` in {}", self.tool, env_dir.display());

        let output = Command::new(&self.tool)
            .args(["output", "-json"])
            .current_dir(env_dir)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| InventoryError::CommandSpawn {
                tool: self.tool.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();
            tracing::debug!("{} exited with {}", self.tool, output.status);
            return Err(InventoryError::CommandFailed {
                tool: self.tool.clone(),
                status: output.status.code(),
                stderr,
            });
        }

        let parsed = self.parse_output(&output.stdout)?;
        tracing::debug!("{} returned {} outputs", self.tool, parsed.len());
        Ok(parsed)
    }
}
