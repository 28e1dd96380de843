//! lib.rs
//! Módulos compartidos entre el servidor HTTP y el CLI de campañas.

pub mod app;
pub mod config;
pub mod handlers;
pub mod logger;
pub mod models;
pub mod services;
