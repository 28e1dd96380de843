//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod campaign_service;
pub mod contact_service;
pub mod delivery_service;
pub mod email_service;
pub mod personalization_service;
pub mod record_service;
pub mod template_service;
