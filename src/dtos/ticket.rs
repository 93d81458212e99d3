//! Ticket DTOs - Data Transfer Objects per i ticket

use crate::entities::Ticket;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// DTO per creare un nuovo ticket (senza ticket_id, generato dal database)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateTicketDTO {
    pub event_id: i32,
    pub user_id: i32,
    pub ticket_code: Uuid,
    pub status: String,
}

impl From<&Ticket> for CreateTicketDTO {
    fn from(value: &Ticket) -> Self {
        Self {
            event_id: value.event_id,
            user_id: value.user_id,
            ticket_code: value.ticket_code,
            status: value.status.clone(),
        }
    }
}

/// DTO per aggiornare lo stato di un ticket (l'unico campo modificabile)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UpdateTicketStatusDTO {
    pub status: String,
}
