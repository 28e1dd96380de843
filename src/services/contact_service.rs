//! services/contact_service.rs
//! Import/export CSV de la lista de contactos.

use std::io::{Read, Write};

use anyhow::{Context, Result};

use crate::models::contact_model::{Contact, ContactList};

/// Parsea un CSV (primera fila = headers). Filas sin campos o sin valor de
/// `email` se descartan en silencio; un CSV mal formado aborta el import
/// completo sin dejar contactos parciales.
pub fn import_csv<R: Read>(reader: R) -> Result<ContactList> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("Error al leer los headers del CSV")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut contacts = Vec::new();
    for row in rdr.records() {
        let row = row.context("Error al parsear el CSV")?;

        if row.iter().all(str::is_empty) {
            continue;
        }

        let fields: Vec<(String, String)> = headers
            .iter()
            .cloned()
            .zip(row.iter().map(str::to_string))
            .collect();

        let contact = Contact::new(fields);
        // Sin email no entra a la lista (presencia, no forma).
        if contact.email().is_none() {
            continue;
        }
        contacts.push(contact);
    }

    Ok(ContactList::new(headers, contacts))
}

/// Exporta la lista actual (con ediciones incluidas) en el orden de
/// columnas original.
pub fn export_csv<W: Write>(list: &ContactList, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(list.headers())
        .context("Error al escribir headers del CSV")?;

    for contact in list.contacts() {
        let row: Vec<&str> = list
            .headers()
            .iter()
            .map(|h| contact.get(h).unwrap_or(""))
            .collect();
        wtr.write_record(&row).context("Error al escribir fila del CSV")?;
    }

    wtr.flush().context("Error al volcar el CSV")?;
    Ok(())
}

/// Tres contactos de ejemplo para el CSV de muestra descargable.
pub fn sample_contacts() -> ContactList {
    let headers = vec![
        "email".to_string(),
        "name".to_string(),
        "company".to_string(),
        "status".to_string(),
    ];

    let rows = [
        ["john.doe@example.com", "John Doe", "Tech Corp", "Active"],
        ["jane.smith@example.com", "Jane Smith", "Design Studio", "Active"],
        ["mike.johnson@example.com", "Mike Johnson", "Marketing Inc", "Inactive"],
    ];

    let contacts = rows
        .iter()
        .map(|row| {
            Contact::new(
                headers
                    .iter()
                    .cloned()
                    .zip(row.iter().map(|v| v.to_string()))
                    .collect(),
            )
        })
        .collect();

    ContactList::new(headers, contacts)
}
