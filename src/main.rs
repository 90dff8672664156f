use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::call_router_service::{CallRouter, TwilioCallRouter};
use crate::services::missed_call_service::MissedCallService;

mod app;
mod config;
mod errors;
mod handlers;
mod logger;
mod models;
mod services;
#[cfg(test)]
mod tests;

async fn setup_database(database_url: &str) -> Result<Pool<Sqlite>> {
    // La carpeta del archivo .db (p.ej. ./data) tiene que existir
    let path = database_url
        .trim_start_matches("sqlite:")
        .trim_start_matches("//")
        .split('?')
        .next()
        .unwrap_or_default();
    if !path.starts_with(":memory:") {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("No se pudo crear directorio {:?}", parent))?;
            }
        }
    }

    log::info!("Conectando a SQLite en {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("DATABASE_URL inválido: {}", database_url))?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .context("No se pudo conectar a la base de datos SQLite.")
}

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = AppConfig::from_env().context("Configuración incompleta")?;

    let db_pool = setup_database(&config.database_url).await?;

    let missed_call_service = MissedCallService::new(db_pool);
    missed_call_service.run_migrations().await?;

    let call_router: Arc<dyn CallRouter> = Arc::new(TwilioCallRouter::new(&config)?);

    let bind_addr = (config.host.clone(), config.port);
    let config = web::Data::new(config);
    let missed_call_service = web::Data::new(missed_call_service);
    let call_router = web::Data::from(call_router);

    log::info!("Levantando servidor en {}:{}", bind_addr.0, bind_addr.1);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(missed_call_service.clone())
            .app_data(call_router.clone())
            .configure(app::init_app)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
