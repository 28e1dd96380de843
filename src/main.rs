use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use sqlx::{Pool, Sqlite};

use nurture_hub::app;
use nurture_hub::config::app_config::{DeliveryConfig, ServerConfig};
use nurture_hub::logger::init_logger;
use nurture_hub::services::delivery_service::ResendProvider;
use nurture_hub::services::email_service::EmailService;
use nurture_hub::services::record_service::RecordService;

async fn setup_database() -> Pool<Sqlite> {
    // 1) Crear carpeta "data"
    std::fs::create_dir_all("data").expect("No se pudo crear directorio 'data'");

    // 2) Ruta final: ./data/nurture_hub.db
    let db_path = std::env::current_dir()
        .expect("No se pudo obtener el current_dir")
        .join("data")
        .join("nurture_hub.db");
    let db_url = format!("sqlite:{}?mode=rwc", db_path.to_string_lossy());

    log::info!("Conectando a SQLite en {}", db_url);

    Pool::<Sqlite>::connect(&db_url)
        .await
        .expect("No se pudo conectar a la base de datos SQLite.")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let server_config = ServerConfig::from_env().expect("Configuración de servidor inválida");
    let delivery_config =
        DeliveryConfig::from_env().expect("Configuración del proveedor de entrega inválida");

    // Conectarnos a la DB y migrar
    let db_pool = setup_database().await;
    let record_service = RecordService::new(db_pool.clone());
    if let Err(e) = record_service.run_migrations().await {
        panic!("Fallo en migraciones de 'email_records': {:?}", e);
    }

    let from_address = delivery_config.from_address.clone();
    let provider = Arc::new(ResendProvider::new(delivery_config));
    let email_service = EmailService::new(provider, record_service.clone(), from_address);

    // Levantar servidor
    log::info!(
        "Levantando servidor en {}:{}",
        server_config.host,
        server_config.port
    );
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(email_service.clone()))
            .app_data(web::Data::new(record_service.clone()))
            .configure(app::init_app)
    })
    .workers(1)
    .bind((server_config.host.as_str(), server_config.port))?
    .run()
    .await
}
