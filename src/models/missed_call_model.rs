use chrono::{DateTime, Utc};
use serde::Serialize;

/// Una llamada que no llegó a ningún agente.
#[derive(Debug, Clone, Serialize)]
pub struct MissedCallRecord {
    pub id: i64,
    pub phone_number: String,
    pub selected_product: String,
    pub created_at: DateTime<Utc>,
}

/// Datos para insertar un MissedCall nuevo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMissedCall {
    pub phone_number: String,
    pub selected_product: String,
}
