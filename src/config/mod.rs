//! Startup configuration read from TOML. Nothing is ever written back.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, UiConfig};
