mod app;
mod config;
mod error;
mod ui;

use std::{fs::File, sync::Mutex};

use engine::{Session, SystemClock, UuidIds};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
};

fn main() -> Result<()> {
    let config = config::load()?;
    init_tracing(&config)?;

    let session = Session::builder()
        .clock(SystemClock::new(config.tz()?))
        .ids(UuidIds)
        .sort(config.sort())
        .page_size(config.page_size)
        .build();
    tracing::info!(timezone = %config.timezone, "starting earnings ledger");

    let mut app = app::App::new(session);
    app.run()?;
    Ok(())
}

/// The terminal is owned by the UI, so log lines go to a file.
fn init_tracing(config: &AppConfig) -> Result<()> {
    if config.log_file.is_empty() {
        return Ok(());
    }
    let file = File::create(&config.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "earnings_tui={level},engine={level}",
            level = config.log_level
        ))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}
