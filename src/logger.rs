//! logger.rs
//! Inicialización del logger (env_logger, nivel vía RUST_LOG).

pub fn init_logger() {
    // RUST_LOG manda; si no está definida usamos "info".
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}
