//! services/call_router_service.rs
//! Acciones salientes contra la API de llamadas (redirigir una llamada en curso).

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;

use crate::config::app_config::AppConfig;

const VOICEMAIL_MESSAGE: &str =
    "Sorry, All agents are busy. Please leave a message. We will call you as soon as possible";

/// Lo único que necesitamos de la API externa: mandar una llamada a otra URL.
#[async_trait]
pub trait CallRouter: Send + Sync {
    async fn redirect_call(&self, call_sid: &str, url: &str) -> Result<()>;
}

/// URL del buzón de voz:
/// `<voicemail_url>?Email=<email>&Message=<mensaje url-encoded>`.
/// El email va tal cual; en el mensaje los espacios van como '+'.
pub fn voicemail_url(config: &AppConfig) -> String {
    let message = urlencoding::encode(VOICEMAIL_MESSAGE).replace("%20", "+");
    format!(
        "{}?Email={}&Message={}",
        config.voicemail_url, config.notification_email, message
    )
}

/// Cliente REST de Twilio (Calls API).
#[derive(Clone)]
pub struct TwilioCallRouter {
    http_client: Client,
    api_base: String,
    account_sid: String,
    auth_token: String,
}

impl TwilioCallRouter {
    /// Cada request lleva el timeout configurado: el webhook de eventos
    /// espera la redirección antes de responder.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.twilio_timeout)
            .build()
            .context("No se pudo construir el cliente HTTP de Twilio")?;

        Ok(Self {
            http_client,
            api_base: config.twilio_api_base.trim_end_matches('/').to_string(),
            account_sid: config.twilio_account_sid.clone(),
            auth_token: config.twilio_auth_token.clone(),
        })
    }

    fn call_url(&self, call_sid: &str) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Calls/{}.json",
            self.api_base, self.account_sid, call_sid
        )
    }
}

#[async_trait]
impl CallRouter for TwilioCallRouter {
    async fn redirect_call(&self, call_sid: &str, url: &str) -> Result<()> {
        let endpoint = self.call_url(call_sid);
        log::info!("(redirect_call) call_sid={} -> {}", call_sid, url);

        let resp = self
            .http_client
            .post(&endpoint)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("Url", url), ("Method", "POST")])
            .send()
            .await
            .context("(redirect_call) Fallo al hacer POST a Calls")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body_txt = resp.text().await.unwrap_or_default();
            log::error!(
                "(redirect_call) La respuesta NO es exitosa. status={} body_txt='{}'",
                status,
                body_txt
            );
            return Err(anyhow!("Error redirigiendo llamada {}: {}", call_sid, body_txt));
        }

        Ok(())
    }
}
