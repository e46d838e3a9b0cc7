//! Utils - Configuration Persistence

pub mod config_store;

pub use config_store::{load_config, load_default_config, save_config};
