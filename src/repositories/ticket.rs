//! TicketRepository - Repository per la gestione dei ticket

use super::{Create, Read, Update};
use crate::core::RepositoryError;
use crate::dtos::{CreateTicketDTO, UpdateTicketStatusDTO};
use crate::entities::{EventWithTickets, Ticket};
use sqlx::PgPool;
use tracing::{debug, error, info, instrument, warn};

// TICKET REPOSITORY
#[derive(Clone)]
pub struct TicketRepository {
    connection_pool: PgPool,
}

impl TicketRepository {
    pub fn new(connection_pool: PgPool) -> Self {
        Self { connection_pool }
    }

    /// Get a ticket by its ID, `None` if it does not exist
    pub async fn get_ticket_by_id(&self, ticket_id: i32) -> Result<Option<Ticket>, RepositoryError> {
        self.read(&ticket_id).await
    }

    /// Get all tickets issued for an event (possibly none)
    #[instrument(skip(self), fields(event_id = %event_id))]
    pub async fn get_tickets_by_event_id(&self, event_id: i32) -> Result<Vec<Ticket>, RepositoryError> {
        debug!("Listing tickets for event");
        let tickets = sqlx::query_as::<_, Ticket>("SELECT * FROM ticket WHERE event_id=$1")
            .bind(event_id)
            .fetch_all(&self.connection_pool)
            .await?;

        debug!("Found {} tickets", tickets.len());
        Ok(tickets)
    }

    /// Insert a ticket and return the stored row.
    /// A duplicate `ticket_code` yields [`RepositoryError::TicketCodeAlreadyExists`].
    pub async fn create_ticket(&self, ticket: &CreateTicketDTO) -> Result<Ticket, RepositoryError> {
        self.create(ticket).await
    }

    /// Set the status of a ticket, `None` if no ticket has that ID
    pub async fn update_ticket_status(
        &self,
        ticket_id: i32,
        status: &str,
    ) -> Result<Option<Ticket>, RepositoryError> {
        self.update(
            &ticket_id,
            &UpdateTicketStatusDTO {
                status: status.to_string(),
            },
        )
        .await
    }

    /// Get a ticket by its code.
    ///
    /// Unlike the ID lookup, a missing ticket is an error here
    /// ([`RepositoryError::TicketNotFound`]). The code is cast to UUID by the
    /// database, so a malformed code comes back as a database error.
    #[instrument(skip(self), fields(ticket_code = %ticket_code))]
    pub async fn get_ticket_by_code(&self, ticket_code: &str) -> Result<Ticket, RepositoryError> {
        debug!("Looking up ticket by code");
        let result = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT ticket_id, event_id, user_id, ticket_code, status
            FROM ticket
            WHERE ticket_code = CAST($1 AS UUID)
            "#,
        )
        .bind(ticket_code)
        .fetch_optional(&self.connection_pool)
        .await;

        match result {
            Ok(Some(ticket)) => Ok(ticket),
            Ok(None) => {
                warn!("No ticket found for ticket_code: {}", ticket_code);
                Err(RepositoryError::TicketNotFound)
            }
            Err(e) => {
                error!("Database error for ticket_code {}: {}", ticket_code, e);
                Err(e.into())
            }
        }
    }

    /// Get every event that has at least one ticket, with its ticket count,
    /// ordered by event ID
    #[instrument(skip(self))]
    pub async fn get_events_with_tickets(&self) -> Result<Vec<EventWithTickets>, RepositoryError> {
        debug!("Counting tickets per event");
        let events = sqlx::query_as::<_, EventWithTickets>(
            r#"
            SELECT event_id, COUNT(*) AS ticket_count
            FROM ticket
            GROUP BY event_id
            HAVING COUNT(*) > 0
            ORDER BY event_id
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await
        .map_err(RepositoryError::EventsWithTickets)?;

        debug!("Found {} events with tickets", events.len());
        Ok(events)
    }
}

impl Create<Ticket, CreateTicketDTO> for TicketRepository {
    #[instrument(skip(self, data), fields(event_id = %data.event_id, user_id = %data.user_id))]
    async fn create(&self, data: &CreateTicketDTO) -> Result<Ticket, RepositoryError> {
        debug!("Creating new ticket");
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO ticket (event_id, user_id, ticket_code, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(data.event_id)
        .bind(data.user_id)
        .bind(data.ticket_code)
        .bind(&data.status)
        .fetch_one(&self.connection_pool)
        .await
        .map_err(RepositoryError::from_insert)?;

        info!("Ticket created with id {}", ticket.ticket_id);
        Ok(ticket)
    }
}

impl Read<Ticket, i32> for TicketRepository {
    #[instrument(skip(self), fields(ticket_id = %id))]
    async fn read(&self, id: &i32) -> Result<Option<Ticket>, RepositoryError> {
        debug!("Reading ticket by id");
        let ticket = sqlx::query_as::<_, Ticket>("SELECT * FROM ticket WHERE ticket_id=$1")
            .bind(*id)
            .fetch_optional(&self.connection_pool)
            .await?;

        if ticket.is_some() {
            debug!("Ticket found");
        } else {
            debug!("Ticket not found");
        }

        Ok(ticket)
    }
}

impl Update<Ticket, UpdateTicketStatusDTO, i32> for TicketRepository {
    #[instrument(skip(self, data), fields(ticket_id = %id, status = %data.status))]
    async fn update(
        &self,
        id: &i32,
        data: &UpdateTicketStatusDTO,
    ) -> Result<Option<Ticket>, RepositoryError> {
        debug!("Updating ticket status");
        let ticket = sqlx::query_as::<_, Ticket>(
            "UPDATE ticket SET status=$1 WHERE ticket_id=$2 RETURNING *",
        )
        .bind(&data.status)
        .bind(*id)
        .fetch_optional(&self.connection_pool)
        .await?;

        match &ticket {
            Some(_) => info!("Ticket status updated"),
            None => debug!("No ticket to update"),
        }

        Ok(ticket)
    }
}
