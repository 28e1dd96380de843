//! services/email_service.rs
//! Lado servidor del envío: llama al proveedor y deja exactamente un
//! registro de auditoría por intento, salga bien o mal.

use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use serde_json::Value;

use crate::models::email_model::{EmailPayload, SendEmailRequest};
use crate::models::record_model::NewEmailRecord;
use crate::services::delivery_service::DeliveryProvider;
use crate::services::record_service::RecordService;

#[derive(Clone)]
pub struct EmailService {
    provider: Arc<dyn DeliveryProvider>,
    record_service: RecordService,
    from_address: String,
}

impl EmailService {
    pub fn new(
        provider: Arc<dyn DeliveryProvider>,
        record_service: RecordService,
        from_address: String,
    ) -> Self {
        EmailService {
            provider,
            record_service,
            from_address,
        }
    }

    /// Un intento de entrega, sin retry. Devuelve la respuesta del proveedor
    /// en éxito; en fallo devuelve el error ya registrado como "failed".
    pub async fn send_email(&self, req: SendEmailRequest) -> Result<Value> {
        let payload = EmailPayload {
            from: self.from_address.clone(),
            to: vec![req.to().to_string()],
            subject: req.subject().to_string(),
            html: req.html.clone(),
            text: req.text.clone(),
        };

        let sent_at = Utc::now().to_rfc3339();

        match self.provider.deliver(&payload).await {
            Ok(data) => {
                self.append_record(&req, &sent_at, "sent", None).await;
                Ok(data)
            }
            Err(e) => {
                // El fallo igual se registra; luego se propaga al handler.
                let message = format!("{e:#}");
                self.append_record(&req, &sent_at, "failed", Some(message))
                    .await;
                Err(e)
            }
        }
    }

    // Best-effort: si el insert falla solo queda en el log de diagnóstico,
    // nunca se le muestra al operador ni revierte el envío ya hecho.
    async fn append_record(
        &self,
        req: &SendEmailRequest,
        sent_at: &str,
        status: &str,
        error_message: Option<String>,
    ) {
        let rec = NewEmailRecord {
            recipient_email: req.to().to_string(),
            recipient_name: req.recipient_name.clone(),
            recipient_company: req.recipient_company.clone(),
            template_name: req
                .template_name
                .clone()
                .unwrap_or_else(|| "custom".to_string()),
            template_id: req
                .template_id
                .clone()
                .unwrap_or_else(|| "custom".to_string()),
            subject: req.subject().to_string(),
            sent_at: sent_at.to_string(),
            status: status.to_string(),
            error_message,
            campaign_name: req.campaign_name.clone(),
        };

        if let Err(e) = self.record_service.insert(&rec).await {
            log::error!(
                "No se pudo registrar el intento ({status}) para {}: {e:?}",
                rec.recipient_email
            );
        }
    }
}
