//! services/personalization_service.rs
//! Sustitución de tokens `{{name}}`, `{{company}}`, `{{email}}` en las tres
//! partes de la plantilla. Los valores se insertan tal cual, sin escape de
//! HTML (riesgo aceptado de esta herramienta interna).

use crate::models::contact_model::Contact;
use crate::models::template_model::{EmailTemplate, RenderedEmail};

/// Personaliza subject, html y text para un contacto. Fallbacks cuando el
/// campo falta o está vacío: name -> "there", company -> "your company".
/// `email` no tiene fallback: el envío se rechaza antes si falta.
pub fn render(template: &EmailTemplate, contact: &Contact) -> RenderedEmail {
    let name = contact
        .get("name")
        .filter(|v| !v.is_empty())
        .unwrap_or("there");
    let company = contact
        .get("company")
        .filter(|v| !v.is_empty())
        .unwrap_or("your company");
    let email = contact.email().unwrap_or_default();

    RenderedEmail {
        subject: substitute(&template.subject, name, company, email),
        html: substitute(&template.html, name, company, email),
        text: substitute(&template.text, name, company, email),
    }
}

// Reemplazo global de los tres tokens exactos.
fn substitute(input: &str, name: &str, company: &str, email: &str) -> String {
    input
        .replace("{{name}}", name)
        .replace("{{company}}", company)
        .replace("{{email}}", email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(subject: &str, html: &str, text: &str) -> EmailTemplate {
        EmailTemplate {
            id: "t".into(),
            name: "T".into(),
            subject: subject.into(),
            html: html.into(),
            text: text.into(),
            description: String::new(),
            category: String::new(),
        }
    }

    fn contact(fields: &[(&str, &str)]) -> Contact {
        Contact::new(
            fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_replaces_every_occurrence_in_all_parts() {
        let t = template(
            "Hola {{name}}",
            "<p>{{name}} de {{company}}</p><p>{{name}}</p>",
            "{{email}} / {{email}}",
        );
        let c = contact(&[("email", "a@x.com"), ("name", "Ann"), ("company", "Acme")]);

        let r = render(&t, &c);
        assert_eq!(r.subject, "Hola Ann");
        assert_eq!(r.html, "<p>Ann de Acme</p><p>Ann</p>");
        assert_eq!(r.text, "a@x.com / a@x.com");
    }

    #[test]
    fn test_fallbacks_for_missing_fields() {
        let t = template("{{name}}", "{{company}}", "{{name}} - {{company}}");
        let c = contact(&[("email", "a@x.com")]);

        let r = render(&t, &c);
        assert_eq!(r.subject, "there");
        assert_eq!(r.html, "your company");
        assert_eq!(r.text, "there - your company");
    }

    #[test]
    fn test_empty_string_fields_also_fall_back() {
        let t = template("{{name}}", "{{company}}", "x");
        let c = contact(&[("email", "a@x.com"), ("name", ""), ("company", "")]);

        let r = render(&t, &c);
        assert_eq!(r.subject, "there");
        assert_eq!(r.html, "your company");
    }

    #[test]
    fn test_identity_on_token_free_template() {
        let t = template("Sin tokens", "<p>nada que ver</p>", "plano");
        let c = contact(&[("email", "a@x.com"), ("name", "Ann")]);

        let r = render(&t, &c);
        assert_eq!(r.subject, t.subject);
        assert_eq!(r.html, t.html);
        assert_eq!(r.text, t.text);
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let t = template("s", "<p>{{name}}</p>", "t");
        let c = contact(&[("email", "a@x.com"), ("name", "<b>Ann</b>")]);

        assert_eq!(render(&t, &c).html, "<p><b>Ann</b></p>");
    }
}
