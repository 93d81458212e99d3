//! Application State - Stato condiviso
//!
//! Contiene i repository costruiti sul pool di connessioni fornito dal chiamante.

use crate::repositories::TicketRepository;
use sqlx::PgPool;

/// Repository holder shared (behind an `Arc`) by whatever service layer
/// sits on top of this crate
pub struct AppState {
    /// Repository per la gestione dei ticket
    pub ticket: TicketRepository,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito.
    ///
    /// # Arguments
    /// * `pool` - Pool di connessioni Postgres condiviso
    pub fn new(pool: PgPool) -> Self {
        Self {
            ticket: TicketRepository::new(pool),
        }
    }
}
