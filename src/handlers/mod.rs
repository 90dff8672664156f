//! handlers/mod.rs
//! Webhooks que consume Twilio (voz + TaskRouter) y la página de inicio.
pub mod assignment_handler;
pub mod call_handler;
pub mod event_handler;
pub mod home_handler;
