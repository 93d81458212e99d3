//! EventWithTickets - Proiezione in sola lettura: eventi con almeno un ticket

use serde::{Deserialize, Serialize};

/// Event identifier together with the number of tickets issued for it.
/// Computed per query, never persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct EventWithTickets {
    pub event_id: i32,
    pub ticket_count: i64, // COUNT(*) in postgres è BIGINT
}
