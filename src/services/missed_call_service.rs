use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::models::missed_call_model::{MissedCallRecord, NewMissedCall};

#[derive(Clone, Debug)]
pub struct MissedCallService {
    db_pool: Pool<Sqlite>,
}

impl MissedCallService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        MissedCallService { db_pool }
    }

    /// Corre migraciones con sqlx
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db_pool)
            .await
            .context("Fallo en migraciones de 'missed_calls'")?;
        Ok(())
    }

    /// Inserta una llamada perdida. No hay deduplicación: cada evento es una fila.
    pub async fn create_missed_call(&self, call: &NewMissedCall) -> Result<i64> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r#"
            INSERT INTO missed_calls (phone_number, selected_product, created_at)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&call.phone_number)
        .bind(&call.selected_product)
        .bind(now)
        .execute(&self.db_pool)
        .await
        .context("Fallo al insertar missed_call")?;

        Ok(result.last_insert_rowid())
    }

    /// Todas las llamadas perdidas, las más recientes primero.
    pub async fn list_missed_calls(&self) -> Result<Vec<MissedCallRecord>> {
        let rows: Vec<(i64, String, String, String)> = sqlx::query_as(
            r#"
            SELECT id, phone_number, selected_product, created_at
            FROM missed_calls
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al listar missed_calls")?;

        rows.into_iter().map(Self::to_record).collect()
    }

    #[cfg(test)]
    pub async fn find_by_phone_number(&self, phone_number: &str) -> Result<Vec<MissedCallRecord>> {
        let rows: Vec<(i64, String, String, String)> = sqlx::query_as(
            r#"
            SELECT id, phone_number, selected_product, created_at
            FROM missed_calls
            WHERE phone_number = ?1
            ORDER BY id ASC
            "#,
        )
        .bind(phone_number)
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al buscar missed_calls por teléfono")?;

        rows.into_iter().map(Self::to_record).collect()
    }

    // parsea el timestamp guardado como RFC3339
    fn to_record(
        (id, phone_number, selected_product, created_at): (i64, String, String, String),
    ) -> Result<MissedCallRecord> {
        Ok(MissedCallRecord {
            id,
            phone_number,
            selected_product,
            created_at: created_at
                .parse()
                .with_context(|| format!("created_at inválido en missed_call {}", id))?,
        })
    }
}
