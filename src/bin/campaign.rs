//! bin/campaign.rs
//! CLI del operador: importa el CSV, elige plantilla, pide confirmación y
//! dispara el envío masivo contra el servidor. También baja el CSV de
//! muestra y consulta el historial de envíos.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use serde_json::Value;

use nurture_hub::config::app_config::CampaignConfig;
use nurture_hub::logger::init_logger;
use nurture_hub::models::record_model::ListRecordsResponse;
use nurture_hub::services::campaign_service::{ApiSender, CampaignService};
use nurture_hub::services::{contact_service, template_service};

const DEFAULT_SERVER: &str = "http://127.0.0.1:5030";

#[derive(Parser)]
#[command(name = "campaign", version, about = "Herramienta de campañas de Nurture Hub")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Envío masivo a todos los emails válidos del CSV
    Send {
        /// CSV de contactos (primera fila = headers, requiere columna email)
        #[arg(long)]
        csv: PathBuf,
        /// Id de plantilla: welcome, value-proposition o follow-up
        #[arg(long)]
        template: String,
        /// Nombre de campaña para agrupar en el historial
        #[arg(long)]
        campaign: Option<String>,
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
        /// Pausa entre envíos en ms (default: SEND_DELAY_MS o 1000)
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Saltea la confirmación interactiva
        #[arg(long)]
        yes: bool,
    },
    /// Escribe el CSV de muestra con tres contactos de ejemplo
    Sample {
        #[arg(long, default_value = "sample_contacts.csv")]
        out: PathBuf,
    },
    /// Reexporta un CSV de contactos aplicando ediciones de celda
    Export {
        /// CSV de contactos de entrada
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value = "updated_contacts.csv")]
        out: PathBuf,
        /// Edición de celda FILA:COLUMNA=VALOR (repetible, fila desde 0)
        #[arg(long = "edit")]
        edits: Vec<String>,
    },
    /// Lista las plantillas disponibles
    Templates,
    /// Consulta el historial de envíos del servidor
    Records {
        #[arg(long, default_value_t = 50)]
        limit: i64,
        #[arg(long, default_value_t = 0)]
        offset: i64,
        /// Filtro por estado: sent | failed
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        template_id: Option<String>,
        #[arg(long, default_value = DEFAULT_SERVER)]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_logger();

    let cli = Cli::parse();
    match cli.command {
        Command::Send {
            csv,
            template,
            campaign,
            server,
            delay_ms,
            yes,
        } => send_bulk(csv, &template, campaign.as_deref(), &server, delay_ms, yes).await,
        Command::Sample { out } => write_sample(&out),
        Command::Export { csv, out, edits } => export_updated(&csv, &out, &edits),
        Command::Templates => {
            list_templates();
            Ok(())
        }
        Command::Records {
            limit,
            offset,
            status,
            template_id,
            server,
        } => list_records(&server, limit, offset, status, template_id).await,
    }
}

async fn send_bulk(
    csv: PathBuf,
    template_id: &str,
    campaign: Option<&str>,
    server: &str,
    delay_ms: Option<u64>,
    yes: bool,
) -> Result<()> {
    let Some(template) = template_service::find(template_id) else {
        bail!(
            "Plantilla desconocida: {template_id} (disponibles: {})",
            template_service::catalog()
                .iter()
                .map(|t| t.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    };

    let file = File::open(&csv).with_context(|| format!("No se pudo abrir {}", csv.display()))?;
    let list = contact_service::import_csv(file)?;
    println!("{} contactos cargados de {}", list.len(), csv.display());

    let mut config = CampaignConfig::from_env()?;
    if let Some(delay) = delay_ms {
        config.send_delay_ms = delay;
    }

    let service = CampaignService::new(ApiSender::new(server.to_string()), config);

    let confirm = |count: usize| {
        if yes {
            println!("Enviando a {count} contactos...");
            return true;
        }
        print!("Send emails to {count} contacts? [y/N]: ");
        io::stdout().flush().ok();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes")
    };

    let report = service
        .send_bulk(&list, template, campaign, confirm)
        .await?;

    if report.cancelled {
        println!("Envío cancelado.");
    } else {
        println!(
            "Listo: {} enviados, {} fallidos. Revisá el historial para reenviar fallidos.",
            report.sent, report.failed
        );
    }
    Ok(())
}

fn write_sample(out: &PathBuf) -> Result<()> {
    let file = File::create(out).with_context(|| format!("No se pudo crear {}", out.display()))?;
    contact_service::export_csv(&contact_service::sample_contacts(), file)?;
    println!("CSV de muestra escrito en {}", out.display());
    Ok(())
}

/// Variante "updated" del export: la lista actual con ediciones incluidas,
/// en el mismo orden de columnas del archivo de entrada.
fn export_updated(csv: &PathBuf, out: &PathBuf, edits: &[String]) -> Result<()> {
    let file = File::open(csv).with_context(|| format!("No se pudo abrir {}", csv.display()))?;
    let mut list = contact_service::import_csv(file)?;

    for raw in edits {
        let (row, column, value) = parse_edit(raw)?;
        list.edit_cell(row, column, value.to_string())?;
    }

    let out_file =
        File::create(out).with_context(|| format!("No se pudo crear {}", out.display()))?;
    contact_service::export_csv(&list, out_file)?;
    println!(
        "{} contactos escritos en {} ({} ediciones)",
        list.len(),
        out.display(),
        edits.len()
    );
    Ok(())
}

// FILA:COLUMNA=VALOR, p.ej. 0:email=nuevo@x.com
fn parse_edit(input: &str) -> Result<(usize, &str, &str)> {
    let (row, rest) = input
        .split_once(':')
        .with_context(|| format!("Edición inválida (falta ':'): {input}"))?;
    let (column, value) = rest
        .split_once('=')
        .with_context(|| format!("Edición inválida (falta '='): {input}"))?;
    let row = row
        .parse::<usize>()
        .with_context(|| format!("Fila inválida en edición: {input}"))?;
    Ok((row, column, value))
}

fn list_templates() {
    for t in template_service::catalog() {
        println!("{:<18} [{}] {} - {}", t.id, t.category, t.name, t.description);
    }
}

async fn list_records(
    server: &str,
    limit: i64,
    offset: i64,
    status: Option<String>,
    template_id: Option<String>,
) -> Result<()> {
    let url = format!("{}/api/email-records", server.trim_end_matches('/'));

    let mut query: Vec<(&str, String)> = vec![
        ("limit", limit.to_string()),
        ("offset", offset.to_string()),
    ];
    if let Some(s) = status {
        query.push(("status", s));
    }
    if let Some(t) = template_id {
        query.push(("template_id", t));
    }

    let resp = reqwest::Client::new()
        .get(&url)
        .query(&query)
        .send()
        .await
        .context("No se pudo contactar al servidor")?;

    if !resp.status().is_success() {
        let body: Value = resp.json().await.unwrap_or_default();
        bail!(
            "El servidor respondió con error: {}",
            body.get("error").and_then(Value::as_str).unwrap_or("?")
        );
    }

    let list: ListRecordsResponse = resp
        .json()
        .await
        .context("Respuesta inválida del servidor")?;

    println!(
        "{} de {} registros (offset {})",
        list.data.len(),
        list.count,
        list.pagination.offset
    );
    for r in &list.data {
        println!(
            "{:<24} {:<8} {:<20} {:<18} {}",
            r.sent_at,
            r.status,
            r.recipient_email,
            r.template_id,
            r.campaign_name.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}
