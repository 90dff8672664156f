use actix_web::{web, HttpResponse};

use crate::config::app_config::AppConfig;
use crate::models::task_model::AssignmentInstruction;

/// POST /assignment
/// TaskRouter manda el contexto de la reserva; no lo necesitamos.
pub async fn assignment_endpoint(config: web::Data<AppConfig>) -> HttpResponse {
    HttpResponse::Ok().json(AssignmentInstruction::dequeue(
        &config.post_work_activity_sid,
    ))
}
