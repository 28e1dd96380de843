//! app.rs
use actix_web::web;

use crate::handlers::{email_handler, record_handler};

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route(
                "/send-email",
                web::post().to(email_handler::send_email_endpoint),
            )
            .route(
                "/email-records",
                web::get().to(record_handler::list_records_endpoint),
            ),
    );
}
