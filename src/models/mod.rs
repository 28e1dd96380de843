//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod contact_model;
pub mod email_model;
pub mod record_model;
pub mod template_model;
