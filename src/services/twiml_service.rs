//! services/twiml_service.rs
//! Documentos TwiML que devolvemos a Twilio.

use std::io::Cursor;

use anyhow::{Context, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::models::task_model::Product;

pub const MENU_PROMPT: &str = "For Programmable SMS, press one. For Voice, press any other key.";
pub const ENQUEUE_ACTION: &str = "/call/enqueue/";

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Menú IVR: un `<Gather>` de un dígito con el prompt dentro de `<Say>`.
pub fn incoming_call_menu() -> Result<String> {
    document(|w| {
        let gather = BytesStart::new("Gather").with_attributes([
            ("action", ENQUEUE_ACTION),
            ("method", "POST"),
            ("numDigits", "1"),
        ]);
        w.write_event(Event::Start(gather))?;
        text_element(w, "Say", MENU_PROMPT)?;
        w.write_event(Event::End(BytesEnd::new("Gather")))?;
        Ok(())
    })
}

/// Encola la llamada con `{"selected_product": ...}` como atributos de la tarea.
pub fn enqueue_task(product: Product, workflow_sid: Option<&str>) -> Result<String> {
    document(|w| {
        let mut enqueue = BytesStart::new("Enqueue");
        if let Some(sid) = workflow_sid {
            enqueue.push_attribute(("workflowSid", sid));
        }
        w.write_event(Event::Start(enqueue))?;
        text_element(w, "Task", &product.task_payload())?;
        w.write_event(Event::End(BytesEnd::new("Enqueue")))?;
        Ok(())
    })
}

// <?xml ...?><Response> ... </Response>
fn document<F>(body: F) -> Result<String>
where
    F: FnOnce(&mut XmlWriter) -> Result<()>,
{
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("Response")))?;
    body(&mut writer)?;
    writer.write_event(Event::End(BytesEnd::new("Response")))?;

    String::from_utf8(writer.into_inner().into_inner()).context("TwiML no es UTF-8 válido")
}

fn text_element(w: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    w.write_event(Event::Start(BytesStart::new(name)))?;
    w.write_event(Event::Text(BytesText::new(text)))?;
    w.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
