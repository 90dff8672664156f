//! handlers/call_handler.rs
//! Webhooks de voz: menú IVR y encolado según la tecla marcada.

use actix_web::{web, HttpResponse};
use log::error;

use crate::config::app_config::AppConfig;
use crate::models::task_model::{EnqueueForm, Product};
use crate::services::twiml_service;

/// POST /call/incoming/
pub async fn incoming_call_endpoint() -> HttpResponse {
    twiml_response(twiml_service::incoming_call_menu())
}

/// POST /call/enqueue/
/// Sin `Digits` (o con cualquier valor que no sea "1") se encola en Voice.
pub async fn enqueue_call_endpoint(
    config: web::Data<AppConfig>,
    form: Option<web::Form<EnqueueForm>>,
) -> HttpResponse {
    let digits = form.map(|f| f.into_inner().digits).unwrap_or_default();
    let product = Product::from_digits(&digits);
    log::info!("Encolando llamada: digits='{}' -> {}", digits, product);

    twiml_response(twiml_service::enqueue_task(
        product,
        config.workflow_sid.as_deref(),
    ))
}

fn twiml_response(twiml: anyhow::Result<String>) -> HttpResponse {
    match twiml {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/xml")
            .body(body),
        Err(e) => {
            error!("Error generando TwiML: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
