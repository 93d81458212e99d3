//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene le entità che rappresentano i dati letti dal database.
//! `Ticket` corrisponde alla tabella `ticket`, `EventWithTickets` è una proiezione calcolata.

pub mod event_with_tickets;
pub mod ticket;

// Re-exports per facilitare l'import
pub use event_with_tickets::EventWithTickets;
pub use ticket::{Ticket, status};
