//! services/delivery_service.rs
//! Cliente del proveedor de entrega. Un solo intento por email, sin retry;
//! el timeout es el default del cliente HTTP.

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::config::app_config::DeliveryConfig;
use crate::models::email_model::EmailPayload;

/// Seam de transporte hacia el proveedor externo. En producción es la API
/// de Resend; en tests, un stub que registra o falla a demanda.
#[async_trait]
pub trait DeliveryProvider: Send + Sync {
    async fn deliver(&self, payload: &EmailPayload) -> Result<Value>;
}

/// POST https://api.resend.com/emails con bearer auth.
#[derive(Debug, Clone)]
pub struct ResendProvider {
    http: reqwest::Client,
    config: DeliveryConfig,
}

impl ResendProvider {
    pub fn new(config: DeliveryConfig) -> Self {
        ResendProvider {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl DeliveryProvider for ResendProvider {
    async fn deliver(&self, payload: &EmailPayload) -> Result<Value> {
        let url = format!("{}/emails", self.config.api_base_url);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(payload)
            .send()
            .await
            .context("No se pudo contactar al proveedor de entrega")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("El proveedor respondió {status}: {body}");
        }

        resp.json::<Value>()
            .await
            .context("Respuesta inválida del proveedor de entrega")
    }
}
