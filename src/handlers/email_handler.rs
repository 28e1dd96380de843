//! handlers/email_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::models::email_model::SendEmailRequest;
use crate::services::email_service::EmailService;

/// POST /api/send-email
pub async fn send_email_endpoint(
    email_service: web::Data<EmailService>,
    body: web::Json<SendEmailRequest>,
) -> HttpResponse {
    let req = body.into_inner();

    if !req.has_required_fields() {
        return HttpResponse::BadRequest().json(json!({
            "error": "Missing required fields: to, subject, and html/text"
        }));
    }

    match email_service.send_email(req).await {
        Ok(data) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": data
        })),
        Err(e) => {
            log::error!("Error sending email: {e:?}");
            HttpResponse::InternalServerError().json(json!({
                "error": "Failed to send email"
            }))
        }
    }
}
