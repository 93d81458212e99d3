use sqlx::PgPool;
use ticket_service::dtos::CreateTicketDTO;
use ticket_service::entities::status;
use ticket_service::repositories::TicketRepository;
use uuid::Uuid;

/// Codici dei ticket caricati da `fixtures/tickets.sql`
pub const EVENT_1_VALID_CODE: &str = "11111111-1111-4111-8111-111111111111";
pub const EVENT_1_USED_CODE: &str = "22222222-2222-4222-8222-222222222222";
pub const EVENT_3_CODE: &str = "33333333-3333-4333-8333-333333333333";

/// Crea un TicketRepository per i test
pub fn create_test_repository(pool: &PgPool) -> TicketRepository {
    TicketRepository::new(pool.clone())
}

/// DTO per un ticket "valid" con un codice mai usato
pub fn new_ticket(event_id: i32, user_id: i32) -> CreateTicketDTO {
    CreateTicketDTO {
        event_id,
        user_id,
        ticket_code: Uuid::new_v4(),
        status: status::VALID.to_string(),
    }
}

/// Numero di righe presenti nella tabella ticket
pub async fn count_tickets(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ticket")
        .fetch_one(pool)
        .await
        .expect("Failed to count tickets")
}
