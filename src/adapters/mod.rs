// Adapters layer: concrete implementations of the domain ports for external systems.

pub mod tofu;

pub use tofu::TofuCommand;
