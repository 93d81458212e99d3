//! Ticket entity - Entità ticket

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known ticket status values.
///
/// The column is a plain string: the set of allowed values belongs to the
/// services that issue and scan tickets, not to this crate.
pub mod status {
    pub const VALID: &str = "valid";
    pub const USED: &str = "used";
    pub const CANCELLED: &str = "cancelled";
}

/// One admission unit for an event, as stored in the `ticket` table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Ticket {
    pub ticket_id: i32,
    pub event_id: i32,
    pub user_id: i32,
    pub ticket_code: Uuid, // univoco, generato da chi emette il ticket
    pub status: String,
}

impl Ticket {
    pub fn is_valid(&self) -> bool {
        self.status == status::VALID
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Ticket {
        Ticket {
            ticket_id: 7,
            event_id: 3,
            user_id: 42,
            ticket_code: Uuid::parse_str("6f1c2a4e-8d2b-4f5e-9a3c-1b2d3e4f5a6b").unwrap(),
            status: status::VALID.to_string(),
        }
    }

    #[test]
    fn test_ticket_serializes_with_column_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "ticket_id": 7,
                "event_id": 3,
                "user_id": 42,
                "ticket_code": "6f1c2a4e-8d2b-4f5e-9a3c-1b2d3e4f5a6b",
                "status": "valid"
            })
        );
    }

    #[test]
    fn test_is_valid_follows_status() {
        let mut ticket = sample();
        assert!(ticket.is_valid());
        ticket.status = status::USED.to_string();
        assert!(!ticket.is_valid());
    }
}
