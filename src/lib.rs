pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::TofuCommand;
pub use config::{environment::ResolvedEnvironment, CliConfig, InventorySettings};
pub use core::{builder::build_inventory, engine::InventoryEngine, pipeline::InventoryPipeline};
pub use domain::model::{Inventory, ProvisioningOutput, ServiceGroup, SERVICE_GROUPS};
pub use utils::error::{InventoryError, Result};
