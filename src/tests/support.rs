//! tests/support.rs
//! Helpers compartidos por las pruebas.

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

use crate::services::call_router_service::CallRouter;

/// SQLite en memoria con las migraciones aplicadas.
/// Una sola conexión que nunca expira: si se cierra, se pierde la base.
pub async fn memory_pool() -> Pool<Sqlite> {
    crate::logger::init_test_logger();

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("No se pudo abrir SQLite en memoria");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Fallaron las migraciones");

    pool
}

/// CallRouter que solo anota las redirecciones pedidas.
#[derive(Default)]
pub struct RecordingRouter {
    pub redirects: Mutex<Vec<(String, String)>>,
    pub fail: bool,
}

impl RecordingRouter {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn redirects(&self) -> Vec<(String, String)> {
        self.redirects.lock().unwrap().clone()
    }
}

#[async_trait]
impl CallRouter for RecordingRouter {
    async fn redirect_call(&self, call_sid: &str, url: &str) -> Result<()> {
        self.redirects
            .lock()
            .unwrap()
            .push((call_sid.to_string(), url.to_string()));
        if self.fail {
            return Err(anyhow!("API no disponible"));
        }
        Ok(())
    }
}

/// Textos de los elementos cuya ruta desde la raíz es exactamente `path`.
pub fn xml_texts(xml: &str, path: &[&str]) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();
    let mut texts = Vec::new();

    loop {
        match reader.read_event().expect("XML inválido") {
            Event::Start(e) => {
                stack.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(t) if stack == path => {
                texts.push(t.unescape().expect("texto XML inválido").into_owned());
            }
            Event::Eof => break,
            _ => {}
        }
    }
    texts
}

/// Valor del atributo `name` del primer elemento en `path`.
pub fn xml_attribute(xml: &str, path: &[&str], name: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<String> = Vec::new();

    loop {
        match reader.read_event().expect("XML inválido") {
            Event::Start(e) => {
                stack.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                if stack == path {
                    return attribute_value(&e, name);
                }
            }
            Event::Empty(e) => {
                stack.push(String::from_utf8_lossy(e.name().as_ref()).into_owned());
                if stack == path {
                    return attribute_value(&e, name);
                }
                stack.pop();
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Eof => return None,
            _ => {}
        }
    }
}

fn attribute_value(element: &BytesStart<'_>, name: &str) -> Option<String> {
    element
        .try_get_attribute(name)
        .expect("atributo inválido")
        .map(|a| a.unescape_value().expect("valor inválido").into_owned())
}
