//! Repositories module - Coordinatore per i repository del crate
//!
//! Ogni repository gestisce le operazioni di database per una specifica entità.

// ************************* NOTA SU SQLX ************************* //

/*
   Le query usano sqlx::query_as::<_, T>(...) con T: FromRow, verificate a runtime
   e non a compile time: il crate deve compilare anche senza un database raggiungibile.
   Il numero di righe attese decide il metodo:
   .fetch_optional -> Option<T>  (lookup per chiave, UPDATE ... RETURNING)
   .fetch_one      -> T          (INSERT ... RETURNING)
   .fetch_all      -> Vec<T>     (liste e aggregati)
   I parametri si passano con .bind(...) nell'ordine dei placeholder $1, $2, ...
*/

pub mod ticket;
pub mod traits;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Read, Update};

pub use ticket::TicketRepository;
