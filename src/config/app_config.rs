//! config/app_config.rs
//! Configuración global de la app, cargada una sola vez desde el entorno (.env).

use std::env;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};

const DEFAULT_EMAIL: &str = "your@email.here";
const DEFAULT_VOICEMAIL_URL: &str = "http://twimlets.com/voicemail";
const DEFAULT_TWILIO_API_BASE: &str = "https://api.twilio.com";
const DEFAULT_DATABASE_URL: &str = "sqlite:data/task_router.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TWILIO_TIMEOUT_SECS: u64 = 10;

/// Valores inmutables que se inyectan a los handlers vía `web::Data`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,

    /// Actividad que TaskRouter aplica al worker después de atender la tarea.
    pub post_work_activity_sid: String,
    /// Workflow al que se encolan las llamadas (opcional en el TwiML).
    pub workflow_sid: Option<String>,
    /// A dónde llegan los mensajes de voz.
    pub notification_email: String,
    pub voicemail_url: String,

    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_api_base: String,
    /// Tope para cada llamada a la API (la redirección se espera dentro del webhook).
    pub twilio_timeout: Duration,
}

impl AppConfig {
    /// Lee la configuración desde variables de entorno.
    /// Falla si falta alguna variable obligatoria.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Arma la configuración con cualquier fuente de variables.
    /// Una variable vacía cuenta como no definida.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let required = |name: &str| optional(name).ok_or_else(|| anyhow!("No se definió {}", name));

        let port = match optional("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT inválido: '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match optional("TWILIO_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("TWILIO_TIMEOUT_SECS inválido: '{}'", raw))?,
            None => DEFAULT_TWILIO_TIMEOUT_SECS,
        };

        Ok(Self {
            host: optional("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: optional("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            post_work_activity_sid: required("POST_WORK_ACTIVITY_SID")?,
            workflow_sid: optional("WORKFLOW_SID"),
            notification_email: optional("EMAIL").unwrap_or_else(|| DEFAULT_EMAIL.to_string()),
            voicemail_url: optional("VOICEMAIL_URL")
                .unwrap_or_else(|| DEFAULT_VOICEMAIL_URL.to_string()),
            twilio_account_sid: required("TWILIO_ACCOUNT_SID")?,
            twilio_auth_token: required("TWILIO_AUTH_TOKEN")?,
            twilio_api_base: optional("TWILIO_API_BASE")
                .unwrap_or_else(|| DEFAULT_TWILIO_API_BASE.to_string()),
            twilio_timeout: Duration::from_secs(timeout_secs),
        })
    }

    #[cfg(test)]
    pub fn test_new() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            post_work_activity_sid: "WA0123456789abcdef0123456789abcdef".to_string(),
            workflow_sid: None,
            notification_email: DEFAULT_EMAIL.to_string(),
            voicemail_url: DEFAULT_VOICEMAIL_URL.to_string(),
            twilio_account_sid: "ACtest".to_string(),
            twilio_auth_token: "token".to_string(),
            twilio_api_base: DEFAULT_TWILIO_API_BASE.to_string(),
            twilio_timeout: Duration::from_secs(DEFAULT_TWILIO_TIMEOUT_SECS),
        }
    }
}
