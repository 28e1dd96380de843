//! models/email_model.rs

use serde::{Deserialize, Serialize};

/// Body de POST /api/send-email. El cliente manda el contenido ya
/// personalizado; el resto son metadatos para el registro de auditoría.
/// Todos los campos son opcionales a nivel deserialización: una clave
/// ausente debe caer en el 400 de campos faltantes, no en un error del
/// extractor de JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,
}

impl SendEmailRequest {
    /// Requeridos: to, subject y al menos uno de html/text. Clave ausente
    /// y string vacío cuentan igual como faltante.
    pub fn has_required_fields(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().map_or(false, |s| !s.trim().is_empty());

        present(&self.to) && present(&self.subject) && (present(&self.html) || present(&self.text))
    }

    pub fn to(&self) -> &str {
        self.to.as_deref().unwrap_or_default()
    }

    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or_default()
    }
}

/// Payload hacia el proveedor de entrega (API tipo Resend).
#[derive(Debug, Clone, Serialize)]
pub struct EmailPayload {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}
