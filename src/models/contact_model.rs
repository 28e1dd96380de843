//! models/contact_model.rs
//! Contactos importados de CSV: un mapa ordenado columna -> valor por fila.

use std::sync::OnceLock;

use anyhow::{bail, Result};
use regex::Regex;

/// Forma básica de email: parte-local + '@' + dominio + '.' + TLD.
/// La misma regex se usa al importar, al enviar individual y al filtrar el
/// envío masivo; editar una celda NO revalida (se rechaza recién al enviar).
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("regex de email inválida"));
    re.is_match(value)
}

/// Una fila de contacto. Claves únicas, orden de inserción preservado
/// (el orden de columnas del CSV original).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    fields: Vec<(String, String)>,
}

impl Contact {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Contact { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Reemplaza el valor de una clave existente. Devuelve false si no existe.
    pub fn set(&mut self, key: &str, value: String) -> bool {
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    pub fn email(&self) -> Option<&str> {
        self.get("email").filter(|v| !v.is_empty())
    }

    pub fn has_valid_email(&self) -> bool {
        self.email().map_or(false, is_valid_email)
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }
}

/// Lista en memoria de contactos; se reconstruye desde cero en cada upload
/// y nunca se persiste (el export CSV explícito es la única salida).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactList {
    headers: Vec<String>,
    contacts: Vec<Contact>,
}

impl ContactList {
    pub fn new(headers: Vec<String>, contacts: Vec<Contact>) -> Self {
        ContactList { headers, contacts }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Edita exactamente una celda. No valida el valor nuevo: un email roto
    /// queda en la lista y solo se rechaza al momento del envío.
    pub fn edit_cell(&mut self, row_index: usize, column_key: &str, new_value: String) -> Result<()> {
        if !self.headers.iter().any(|h| h == column_key) {
            bail!("Columna desconocida: {column_key}");
        }
        let Some(contact) = self.contacts.get_mut(row_index) else {
            bail!("Fila fuera de rango: {row_index}");
        };
        contact.set(column_key, new_value);
        Ok(())
    }

    /// Contactos con email sintácticamente válido, en orden original.
    pub fn valid_contacts(&self) -> Vec<&Contact> {
        self.contacts.iter().filter(|c| c.has_valid_email()).collect()
    }
}
