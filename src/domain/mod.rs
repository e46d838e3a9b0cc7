//! Domain - Pure Data Structures
//!
//! Configuration types with no dependency on the component model.

pub mod config;

pub use config::{AppConfig, AuthConfig, LogConfig, TabItem, TabsConfig};
