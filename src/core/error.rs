//! Error types - Errori restituiti dai repository e dalla configurazione

use thiserror::Error;

/// Errors surfaced by the repositories.
///
/// Anything the database reports that has no domain meaning is passed
/// through unchanged as [`RepositoryError::Database`].
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Insert rejected by the unique index on `ticket.ticket_code`
    #[error("ticket_code already exists")]
    TicketCodeAlreadyExists,

    /// Lookup by code matched no row
    #[error("ticket not found")]
    TicketNotFound,

    #[error("failed to get events with tickets: {0}")]
    EventsWithTickets(#[source] sqlx::Error),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl RepositoryError {
    /// Maps an insert failure, turning unique violations into the domain error
    pub fn from_insert(err: sqlx::Error) -> Self {
        if is_unique_violation(&err) {
            Self::TicketCodeAlreadyExists
        } else {
            Self::Database(err)
        }
    }
}

/// True when the database rejected a statement because of a unique constraint.
///
/// Postgres reports SQLSTATE 23505; the message check covers drivers that
/// don't map the code to an error kind.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.is_unique_violation() || db_err.message().contains("unique constraint")
        }
        _ => false,
    }
}

/// Errori di caricamento della configurazione
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set in .env file")]
    Missing(&'static str),

    #[error("Invalid {name}: {reason}")]
    Invalid {
        name: &'static str,
        reason: &'static str,
    },
}
