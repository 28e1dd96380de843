//! handlers/mod.rs
//! Módulo que agrupa los handlers HTTP (envío y registros).

pub mod email_handler;
pub mod record_handler;
