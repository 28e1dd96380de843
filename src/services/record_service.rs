//! services/record_service.rs
//! Log de entregas en SQLite: append-only, una fila por intento.

use anyhow::{Context, Result};
use sqlx::{Pool, QueryBuilder, Sqlite};

use crate::models::record_model::{EmailRecord, NewEmailRecord, RecordQuery};

#[derive(Debug, Clone)]
pub struct RecordService {
    db_pool: Pool<Sqlite>,
}

impl RecordService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        RecordService { db_pool }
    }

    /// Corre migraciones con sqlx
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db_pool)
            .await
            .context("Fallo al migrar email_records")?;
        Ok(())
    }

    /// Inserta un registro nuevo. Los registros jamás se actualizan ni
    /// borran desde este servicio.
    pub async fn insert(&self, rec: &NewEmailRecord) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO email_records (
                recipient_email, recipient_name, recipient_company,
                template_name, template_id, subject,
                sent_at, status, error_message, campaign_name
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&rec.recipient_email)
        .bind(&rec.recipient_name)
        .bind(&rec.recipient_company)
        .bind(&rec.template_name)
        .bind(&rec.template_id)
        .bind(&rec.subject)
        .bind(&rec.sent_at)
        .bind(&rec.status)
        .bind(&rec.error_message)
        .bind(&rec.campaign_name)
        .execute(&self.db_pool)
        .await
        .context("Fallo al insertar email_record")?;

        Ok(())
    }

    /// Lista registros del más nuevo al más viejo, con filtros opcionales de
    /// igualdad (AND) y paginación limit/offset. Devuelve además el total
    /// que matchea los filtros.
    pub async fn list(&self, query: &RecordQuery) -> Result<(Vec<EmailRecord>, i64)> {
        let mut count_qb: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(*) FROM email_records");
        push_filters(&mut count_qb, query);

        let count: i64 = count_qb
            .build_query_scalar()
            .fetch_one(&self.db_pool)
            .await
            .context("Fallo al contar email_records")?;

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"
            SELECT
                id, recipient_email, recipient_name, recipient_company,
                template_name, template_id, subject,
                sent_at, status, error_message, campaign_name, created_at
            FROM email_records
            "#,
        );
        push_filters(&mut qb, query);
        qb.push(" ORDER BY sent_at DESC, id DESC LIMIT ")
            .push_bind(query.limit)
            .push(" OFFSET ")
            .push_bind(query.offset);

        let records = qb
            .build_query_as::<EmailRecord>()
            .fetch_all(&self.db_pool)
            .await
            .context("Fallo al listar email_records")?;

        Ok((records, count))
    }
}

fn push_filters(qb: &mut QueryBuilder<Sqlite>, query: &RecordQuery) {
    let mut separator = " WHERE ";

    if let Some(status) = &query.status {
        qb.push(separator).push("status = ").push_bind(status.clone());
        separator = " AND ";
    }
    if let Some(template_id) = &query.template_id {
        qb.push(separator)
            .push("template_id = ")
            .push_bind(template_id.clone());
    }
}
