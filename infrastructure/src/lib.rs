//! Infrastructure layer for consilium
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig, FileSpecialistConfig};
pub use http::{
    gateway::HttpSpecialistGateway,
    health::{HealthState, SpecialistHealth},
};
pub use logging::JsonlConsultationLogger;
