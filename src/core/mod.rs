pub mod builder;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Inventory, ProvisioningOutput};
pub use crate::domain::ports::{ConfigProvider, OutputSource, Pipeline};
pub use crate::utils::error::Result;
