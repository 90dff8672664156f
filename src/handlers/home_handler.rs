//! handlers/home_handler.rs
//! Página de inicio con las llamadas perdidas registradas.

use actix_web::{web, HttpResponse};
use quick_xml::escape::escape;

use crate::models::missed_call_model::MissedCallRecord;
use crate::services::missed_call_service::MissedCallService;

/// GET|POST /
pub async fn home_endpoint(missed_calls: web::Data<MissedCallService>) -> HttpResponse {
    match missed_calls.list_missed_calls().await {
        Ok(calls) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_home(&calls)),
        Err(e) => {
            log::error!("Error listando missed_calls: {:?}", e);
            HttpResponse::InternalServerError().body("Internal server error")
        }
    }
}

fn render_home(calls: &[MissedCallRecord]) -> String {
    let rows = if calls.is_empty() {
        r#"<tr><td colspan="3">No missed calls yet.</td></tr>"#.to_string()
    } else {
        calls
            .iter()
            .map(|c| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(c.phone_number.as_str()),
                    escape(c.selected_product.as_str()),
                    c.created_at.format("%Y-%m-%d %H:%M:%S UTC")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>Task Router</title>
</head>
<body>
  <h1>Task Router</h1>
  <p>Incoming calls are routed to the Programmable SMS or Programmable Voice
  queue depending on the key pressed. Calls that no agent picks up are listed below.</p>
  <h2>Missed calls</h2>
  <table>
    <thead><tr><th>Phone number</th><th>Product</th><th>Time</th></tr></thead>
    <tbody>
{rows}
    </tbody>
  </table>
</body>
</html>"#
    )
}
