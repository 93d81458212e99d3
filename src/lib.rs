//! Ticket service library - accesso ai dati della tabella `ticket`
//!
//! Espone il repository dei ticket, le entità, i DTO e l'infrastruttura
//! (configurazione, errori, logging) usata dal servizio chiamante.

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppState, Config, ConfigError, RepositoryError};
pub use entities::{EventWithTickets, Ticket};
pub use repositories::TicketRepository;
