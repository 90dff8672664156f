//! services/mod.rs
//! Capa de negocio: persistencia, API externa y generación de TwiML.

pub mod call_router_service;
pub mod missed_call_service;
pub mod twiml_service;
