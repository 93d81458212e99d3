//! DTOs module - Data Transfer Objects
//!
//! DTOs accepted by the repositories. They separate what a caller supplies
//! (no generated fields) from the entities read back from the database.

pub mod ticket;

pub use ticket::{CreateTicketDTO, UpdateTicketStatusDTO};
