//! logger.rs
//! Configuración del logger usando env_logger.

/// Logger del servidor. El nivel sale de RUST_LOG (por defecto "info").
pub fn init_logger() {
    let log_env = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_env))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}

/// Variante para tests: captura la salida y tolera inicializarse varias veces.
#[cfg(test)]
pub fn init_test_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .is_test(true)
        .try_init();
}
