//! ticket-report - stampa il numero di ticket emessi per ogni evento

use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use ticket_service::core::{Config, init_tracing};
use ticket_service::repositories::TicketRepository;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Inizializza la configurazione
    let config = Config::from_env()?;
    init_tracing(&config.log_level);
    config.log_info();

    // Crea il pool di connessioni
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;

    let repository = TicketRepository::new(pool.clone());

    let events = repository.get_events_with_tickets().await?;

    for event in &events {
        info!(event_id = event.event_id, tickets = event.ticket_count, "Event");
    }
    let total: i64 = events.iter().map(|e| e.ticket_count).sum();
    info!("{} events with tickets, {} tickets in total", events.len(), total);

    pool.close().await;
    Ok(())
}
