//! config/app_config.rs
//! Configuración del servicio leída de variables de entorno (.env vía dotenv).

use anyhow::{Context, Result};

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Dirección y puerto del servidor HTTP.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = env_or("HOST", "0.0.0.0");
        let port = env_or("PORT", "5030")
            .parse::<u16>()
            .context("PORT inválido")?;
        Ok(ServerConfig { host, port })
    }
}

/// Credenciales y remitente para el proveedor de entrega (API tipo Resend).
#[derive(Debug, Clone)]
pub struct DeliveryConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub from_address: String,
}

impl DeliveryConfig {
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("RESEND_API_KEY").context("Falta RESEND_API_KEY en el entorno")?;

        Ok(DeliveryConfig {
            api_base_url: env_or("RESEND_API_BASE", "https://api.resend.com"),
            api_key,
            from_address: env_or("EMAIL_FROM", "Nurture Hub <noreply@example.com>"),
        })
    }
}

/// Parámetros del envío masivo del lado operador.
#[derive(Debug, Clone)]
pub struct CampaignConfig {
    /// Pausa fija entre envíos consecutivos (anti rate-limit del proveedor).
    pub send_delay_ms: u64,
    pub default_campaign_name: String,
}

impl CampaignConfig {
    pub fn from_env() -> Result<Self> {
        let send_delay_ms = env_or("SEND_DELAY_MS", "1000")
            .parse::<u64>()
            .context("SEND_DELAY_MS inválido")?;

        Ok(CampaignConfig {
            send_delay_ms,
            default_campaign_name: env_or("DEFAULT_CAMPAIGN_NAME", "Default Campaign"),
        })
    }
}

impl Default for CampaignConfig {
    fn default() -> Self {
        CampaignConfig {
            send_delay_ms: 1000,
            default_campaign_name: "Default Campaign".to_string(),
        }
    }
}
