//! tests/api_test.rs
//! Pruebas de los dos endpoints con un proveedor stub y SQLite en memoria.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::{test, web, App};
use anyhow::{bail, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;

use nurture_hub::app;
use nurture_hub::models::email_model::EmailPayload;
use nurture_hub::models::record_model::{NewEmailRecord, RecordQuery};
use nurture_hub::services::delivery_service::DeliveryProvider;
use nurture_hub::services::email_service::EmailService;
use nurture_hub::services::record_service::RecordService;

/// Proveedor de mentira: cuenta llamadas y falla a demanda.
struct StubProvider {
    fail: bool,
    calls: AtomicUsize,
}

impl StubProvider {
    fn new(fail: bool) -> Arc<Self> {
        Arc::new(StubProvider {
            fail,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeliveryProvider for StubProvider {
    async fn deliver(&self, _payload: &EmailPayload) -> Result<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            bail!("el proveedor explotó");
        }
        Ok(json!({ "id": "email_123" }))
    }
}

async fn test_services(fail: bool) -> (EmailService, RecordService, Arc<StubProvider>) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("No se pudo abrir SQLite en memoria");

    let record_service = RecordService::new(pool);
    record_service
        .run_migrations()
        .await
        .expect("Fallo la migración");

    let provider = StubProvider::new(fail);
    let email_service = EmailService::new(
        provider.clone(),
        record_service.clone(),
        "Nurture Hub <noreply@example.com>".to_string(),
    );

    (email_service, record_service, provider)
}

fn send_body() -> Value {
    json!({
        "to": "ann@example.com",
        "subject": "Hola Ann",
        "html": "<p>Hola Ann de Acme</p>",
        "text": "Hola Ann de Acme",
        "templateName": "Welcome & Introduction",
        "templateId": "welcome",
        "recipientName": "Ann",
        "recipientCompany": "Acme",
        "campaignName": "Q1"
    })
}

macro_rules! init_app {
    ($email:expr, $records:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($email))
                .app_data(web::Data::new($records))
                .configure(app::init_app),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_missing_fields_is_400_without_provider_call() {
    let (email_service, record_service, provider) = test_services(false).await;
    let app = init_app!(email_service, record_service.clone());

    for body in [
        // strings vacíos
        json!({ "to": "", "subject": "s", "html": "x" }),
        json!({ "to": "a@x.com", "subject": "", "html": "x" }),
        json!({ "to": "a@x.com", "subject": "s" }),
        // claves directamente omitidas: misma respuesta, no un error
        // del extractor de JSON
        json!({ "subject": "s", "html": "x" }),
        json!({ "to": "a@x.com", "html": "x" }),
        json!({}),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/send-email")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["error"],
            "Missing required fields: to, subject, and html/text"
        );
    }

    assert_eq!(provider.calls(), 0);
    let (_, count) = record_service.list(&RecordQuery::default()).await.unwrap();
    assert_eq!(count, 0);
}

#[actix_rt::test]
async fn test_successful_send_returns_provider_data_and_logs_one_record() {
    let (email_service, record_service, provider) = test_services(false).await;
    let app = init_app!(email_service, record_service.clone());

    let req = test::TestRequest::post()
        .uri("/api/send-email")
        .set_json(send_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "email_123");
    assert_eq!(provider.calls(), 1);

    let (records, count) = record_service.list(&RecordQuery::default()).await.unwrap();
    assert_eq!(count, 1);
    let rec = &records[0];
    assert_eq!(rec.recipient_email, "ann@example.com");
    assert_eq!(rec.status, "sent");
    assert_eq!(rec.template_id, "welcome");
    assert_eq!(rec.campaign_name.as_deref(), Some("Q1"));
    assert!(rec.error_message.is_none());
}

#[actix_rt::test]
async fn test_failed_send_is_500_and_still_logs_a_failed_record() {
    let (email_service, record_service, provider) = test_services(true).await;
    let app = init_app!(email_service, record_service.clone());

    let req = test::TestRequest::post()
        .uri("/api/send-email")
        .set_json(send_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Failed to send email");
    assert_eq!(provider.calls(), 1);

    // Invariante: también el fallo deja exactamente un registro.
    let (records, count) = record_service.list(&RecordQuery::default()).await.unwrap();
    assert_eq!(count, 1);
    assert_eq!(records[0].status, "failed");
    assert!(records[0]
        .error_message
        .as_deref()
        .unwrap_or("")
        .contains("explotó"));
}

#[actix_rt::test]
async fn test_every_attempt_appends_exactly_one_record() {
    let (email_service, record_service, _provider) = test_services(false).await;
    let app = init_app!(email_service, record_service.clone());

    for _ in 0..3 {
        let req = test::TestRequest::post()
            .uri("/api/send-email")
            .set_json(send_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    // Reintentos del cliente duplican registros a propósito: no hay dedupe.
    let (_, count) = record_service.list(&RecordQuery::default()).await.unwrap();
    assert_eq!(count, 3);
}

#[actix_rt::test]
async fn test_list_endpoint_defaults_filters_and_pagination() {
    let (email_service, record_service, _provider) = test_services(false).await;

    for (i, (status, template)) in [
        ("sent", "welcome"),
        ("failed", "welcome"),
        ("sent", "follow-up"),
        ("failed", "follow-up"),
    ]
    .iter()
    .enumerate()
    {
        record_service
            .insert(&NewEmailRecord {
                recipient_email: format!("u{i}@x.com"),
                recipient_name: None,
                recipient_company: None,
                template_name: "T".to_string(),
                template_id: template.to_string(),
                subject: "s".to_string(),
                sent_at: format!("2026-08-01T1{i}:00:00Z"),
                status: status.to_string(),
                error_message: None,
                campaign_name: None,
            })
            .await
            .unwrap();
    }

    let app = init_app!(email_service, record_service.clone());

    // Sin filtros: defaults limit=50 offset=0, más nuevo primero
    let req = test::TestRequest::get()
        .uri("/api/email-records")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["count"], 4);
    assert_eq!(body["pagination"]["limit"], 50);
    assert_eq!(body["pagination"]["offset"], 0);
    assert_eq!(body["data"][0]["recipient_email"], "u3@x.com");

    // status + template_id combinados con semántica AND
    let req = test::TestRequest::get()
        .uri("/api/email-records?status=failed&template_id=follow-up")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["data"][0]["recipient_email"], "u3@x.com");
    assert_eq!(body["data"][0]["status"], "failed");

    // paginación
    let req = test::TestRequest::get()
        .uri("/api/email-records?limit=2&offset=2")
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["count"], 4);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["recipient_email"], "u1@x.com");
}
