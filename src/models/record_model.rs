//! models/record_model.rs
//! Registro de auditoría: una fila por intento de envío. Snapshot
//! desnormalizado del contacto al momento del envío, nunca se muta ni borra.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmailRecord {
    pub id: i64,
    pub recipient_email: String,
    pub recipient_name: Option<String>,
    pub recipient_company: Option<String>,
    pub template_name: String,
    pub template_id: String,
    pub subject: String,
    pub sent_at: String, // RFC 3339
    pub status: String,  // "sent" | "failed"
    pub error_message: Option<String>,
    pub campaign_name: Option<String>,
    pub created_at: String,
}

/// Datos para insertar un registro nuevo (el id lo asigna la base).
#[derive(Debug, Clone)]
pub struct NewEmailRecord {
    pub recipient_email: String,
    pub recipient_name: Option<String>,
    pub recipient_company: Option<String>,
    pub template_name: String,
    pub template_id: String,
    pub subject: String,
    pub sent_at: String,
    pub status: String,
    pub error_message: Option<String>,
    pub campaign_name: Option<String>,
}

/// Filtros y paginación para el listado (semántica AND entre filtros).
#[derive(Debug, Clone)]
pub struct RecordQuery {
    pub limit: i64,
    pub offset: i64,
    pub status: Option<String>,
    pub template_id: Option<String>,
}

impl Default for RecordQuery {
    fn default() -> Self {
        RecordQuery {
            limit: 50,
            offset: 0,
            status: None,
            template_id: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

/// Respuesta de GET /api/email-records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRecordsResponse {
    pub data: Vec<EmailRecord>,
    pub count: i64,
    pub pagination: Pagination,
}
