//! handlers/record_handler.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::models::record_model::{ListRecordsResponse, Pagination, RecordQuery};
use crate::services::record_service::RecordService;

#[derive(Debug, Deserialize)]
pub struct RecordListQuery {
    limit: Option<i64>,
    offset: Option<i64>,
    status: Option<String>,
    template_id: Option<String>,
}

/// GET /api/email-records?limit=&offset=&status=&template_id=
pub async fn list_records_endpoint(
    record_service: web::Data<RecordService>,
    query: web::Query<RecordListQuery>,
) -> HttpResponse {
    let q = query.into_inner();
    let record_query = RecordQuery {
        limit: q.limit.unwrap_or(50),
        offset: q.offset.unwrap_or(0),
        status: q.status,
        template_id: q.template_id,
    };

    match record_service.list(&record_query).await {
        Ok((data, count)) => HttpResponse::Ok().json(ListRecordsResponse {
            data,
            count,
            pagination: Pagination {
                limit: record_query.limit,
                offset: record_query.offset,
            },
        }),
        Err(e) => {
            log::error!("Database error: {e:?}");
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to fetch email records"
            }))
        }
    }
}
