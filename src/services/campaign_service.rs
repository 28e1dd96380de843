//! services/campaign_service.rs
//! Orquestador del lado operador: valida, personaliza y manda cada contacto
//! contra el endpoint de envío, secuencialmente y con pausa fija entre
//! envíos. Sin paralelismo, sin retry, sin cancelación a mitad de corrida.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::config::app_config::CampaignConfig;
use crate::models::contact_model::{is_valid_email, Contact, ContactList};
use crate::models::email_model::SendEmailRequest;
use crate::models::template_model::EmailTemplate;
use crate::services::personalization_service;

/// Transporte hacia POST /api/send-email (el registro de auditoría queda
/// del lado del servidor).
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, req: &SendEmailRequest) -> Result<Value>;
}

/// Implementación real: cliente HTTP contra el servidor de la app.
#[derive(Debug, Clone)]
pub struct ApiSender {
    http: reqwest::Client,
    base_url: String,
}

impl ApiSender {
    pub fn new(base_url: String) -> Self {
        ApiSender {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl EmailSender for ApiSender {
    async fn send(&self, req: &SendEmailRequest) -> Result<Value> {
        let url = format!("{}/api/send-email", self.base_url);

        let resp = self
            .http
            .post(&url)
            .json(req)
            .send()
            .await
            .context("No se pudo contactar al servidor")?;

        let status = resp.status();
        let body: Value = resp
            .json()
            .await
            .context("Respuesta inválida del servidor")?;

        if !status.is_success() {
            let detail = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            bail!("Envío rechazado ({status}): {detail}");
        }

        Ok(body)
    }
}

/// Resultado del envío masivo. Sin atomicidad: un corte parcial deja
/// enviados y no-enviados mezclados y el operador resuelve mirando el log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    pub sent: u64,
    pub failed: u64,
    pub cancelled: bool,
}

pub struct CampaignService<S: EmailSender> {
    sender: S,
    config: CampaignConfig,
}

impl<S: EmailSender> CampaignService<S> {
    pub fn new(sender: S, config: CampaignConfig) -> Self {
        CampaignService { sender, config }
    }

    /// Envío individual: valida la forma del email (sin llamada de red si
    /// falla), personaliza y hace un único intento contra el endpoint.
    pub async fn send_one(
        &self,
        contact: &Contact,
        template: &EmailTemplate,
        campaign_name: Option<&str>,
    ) -> Result<Value> {
        let email = match contact.email() {
            Some(e) if is_valid_email(e) => e.to_string(),
            other => bail!("Dirección de email inválida: {:?}", other.unwrap_or("")),
        };

        let rendered = personalization_service::render(template, contact);

        let campaign = campaign_name
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(&self.config.default_campaign_name)
            .to_string();

        let req = SendEmailRequest {
            to: Some(email),
            subject: Some(rendered.subject),
            html: Some(rendered.html),
            text: Some(rendered.text),
            template_name: Some(template.name.clone()),
            template_id: Some(template.id.clone()),
            recipient_name: contact.get("name").map(str::to_string),
            recipient_company: contact.get("company").map(str::to_string),
            campaign_name: Some(campaign),
        };

        self.sender.send(&req).await
    }

    /// Envío masivo secuencial sobre los contactos válidos, en orden de
    /// lista. `confirm` recibe la cantidad y debe aprobar antes del primer
    /// envío. Un fallo individual nunca corta el batch.
    pub async fn send_bulk<F>(
        &self,
        list: &ContactList,
        template: &EmailTemplate,
        campaign_name: Option<&str>,
        mut confirm: F,
    ) -> Result<BulkReport>
    where
        F: FnMut(usize) -> bool,
    {
        let valid = list.valid_contacts();

        if valid.is_empty() {
            bail!("No valid email addresses found");
        }

        if !confirm(valid.len()) {
            return Ok(BulkReport {
                cancelled: true,
                ..BulkReport::default()
            });
        }

        let mut report = BulkReport::default();
        for contact in valid {
            let email = contact.email().unwrap_or("");
            match self.send_one(contact, template, campaign_name).await {
                Ok(_) => {
                    report.sent += 1;
                    log::info!("Enviado a {email}");
                }
                Err(e) => {
                    report.failed += 1;
                    log::error!("Fallo el envío a {email}: {e:#}");
                }
            }

            // Pausa fija anti rate-limit, se cumpla o no el envío anterior.
            tokio::time::sleep(Duration::from_millis(self.config.send_delay_ms)).await;
        }

        Ok(report)
    }
}
