//! app.rs
use crate::handlers::{assignment_handler, call_handler, event_handler, home_handler};
use actix_web::web;

/// Límite de los bodies urlencoded. Twilio puede mandar TaskAttributes grandes
/// y el default de actix (16 KB) los corta con 413.
pub const FORM_LIMIT_BYTES: usize = 256 * 1024;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::FormConfig::default().limit(FORM_LIMIT_BYTES))
    .service(
        web::resource("/")
            .route(web::get().to(home_handler::home_endpoint))
            .route(web::post().to(home_handler::home_endpoint)),
    )
    .service(
        web::scope("/call")
            .route(
                "/incoming/",
                web::post().to(call_handler::incoming_call_endpoint),
            )
            .route(
                "/enqueue/",
                web::post().to(call_handler::enqueue_call_endpoint),
            ),
    )
    .route(
        "/assignment",
        web::post().to(assignment_handler::assignment_endpoint),
    )
    .route("/events", web::post().to(event_handler::event_endpoint));
}
