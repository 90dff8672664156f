//! handlers/event_handler.rs
//! Callback de eventos de TaskRouter.

use actix_web::error::UrlencodedError;
use actix_web::{web, HttpResponse};

use crate::config::app_config::AppConfig;
use crate::errors::EventError;
use crate::models::missed_call_model::NewMissedCall;
use crate::models::task_model::{EventForm, TaskAttributes, TaskEvent};
use crate::services::call_router_service::{voicemail_url, CallRouter};
use crate::services::missed_call_service::MissedCallService;

/// POST /events
pub async fn event_endpoint(
    config: web::Data<AppConfig>,
    missed_calls: web::Data<MissedCallService>,
    call_router: web::Data<dyn CallRouter>,
    form: Result<web::Form<EventForm>, actix_web::Error>,
) -> Result<HttpResponse, actix_web::Error> {
    let form = match form {
        Ok(f) => f.into_inner(),
        // Sin body ni content-type de form: evento desconocido.
        // Cualquier otro error (p.ej. 413) se devuelve tal cual.
        Err(e) => match e.as_error::<UrlencodedError>() {
            Some(UrlencodedError::ContentType) => EventForm::default(),
            _ => return Err(e),
        },
    };

    let event = TaskEvent::from_form(&form).map_err(|e| {
        log::warn!("Evento '{}' rechazado: {}", form.event_type, e);
        e
    })?;

    match event {
        TaskEvent::WorkflowTimeout(attrs) => {
            save_missed_call(&missed_calls, &attrs).await?;

            // Si falla la redirección la llamada perdida ya quedó guardada
            let url = voicemail_url(&config);
            if let Err(e) = call_router.redirect_call(&attrs.call_sid, &url).await {
                log::error!(
                    "No se pudo redirigir la llamada {} al buzón: {:?}",
                    attrs.call_sid,
                    e
                );
            }
        }
        TaskEvent::TaskCanceled(attrs) => {
            save_missed_call(&missed_calls, &attrs).await?;
        }
        TaskEvent::Other(event_type) => {
            log::debug!("Evento '{}' ignorado", event_type);
        }
    }

    Ok(HttpResponse::Ok().finish())
}

async fn save_missed_call(
    missed_calls: &MissedCallService,
    attrs: &TaskAttributes,
) -> Result<(), EventError> {
    let id = missed_calls
        .create_missed_call(&NewMissedCall {
            phone_number: attrs.from.clone(),
            selected_product: attrs.selected_product.clone(),
        })
        .await
        .map_err(|e| {
            log::error!("Error guardando missed_call de {}: {:?}", attrs.from, e);
            EventError::Persistence(e)
        })?;

    log::info!(
        "Llamada perdida #{} guardada: from={} product={}",
        id,
        attrs.from,
        attrs.selected_product
    );
    Ok(())
}
