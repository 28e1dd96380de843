//! models/template_model.rs

use serde::{Deserialize, Serialize};

/// Plantilla de email: asunto + cuerpo HTML + cuerpo de texto plano,
/// con tokens `{{name}}`, `{{company}}` y `{{email}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailTemplate {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub html: String,
    pub text: String,
    pub description: String,
    pub category: String,
}

/// Resultado de personalizar una plantilla para un contacto concreto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
    pub text: String,
}
