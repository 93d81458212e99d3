//! Core Module - Componenti infrastrutturali
//!
//! Questo modulo contiene i componenti "core" del crate:
//! - Configurazione
//! - Gestione errori
//! - Logging
//! - Stato condiviso

pub mod config;
pub mod error;
pub mod logging;
pub mod state;

// Re-exports per facilitare l'import
pub use config::Config;
pub use error::{ConfigError, RepositoryError};
pub use logging::init_tracing;
pub use state::AppState;
