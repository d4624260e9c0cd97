use chrono_tz::Tz;
use clap::Parser;
use engine::{PageSize, SortDir, SortKey, SortState};
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/earnings.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub timezone: String,
    pub page_size: PageSize,
    pub sort_by: SortKey,
    pub sort_dir: SortDir,
    pub log_level: String,
    /// Empty disables logging.
    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timezone: "Europe/Rome".to_string(),
            page_size: PageSize::Five,
            sort_by: SortKey::Date,
            sort_dir: SortDir::Desc,
            log_level: "info".to_string(),
            log_file: "earnings_tui.log".to_string(),
        }
    }
}

impl AppConfig {
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::Timezone(self.timezone.clone()))
    }

    pub fn sort(&self) -> SortState {
        SortState::new(self.sort_by, self.sort_dir)
    }
}

#[derive(Debug, Parser)]
#[command(name = "earnings_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override timezone used for today's date (IANA name).
    #[arg(long)]
    timezone: Option<String>,
    /// Override rows per page (5, 10 or 20).
    #[arg(long)]
    page_size: Option<usize>,
    /// Override log level (e.g. debug).
    #[arg(long)]
    log_level: Option<String>,
    /// Override log file path; pass an empty string to disable logging.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    resolve(Args::parse())
}

fn resolve(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("EARNINGS_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(page_size) = args.page_size {
        settings.page_size = PageSize::try_from(page_size)?;
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = log_file;
    }

    settings.tz()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["earnings_tui", "--config", "does/not/exist.toml"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults_apply_without_a_config_file() {
        let settings = resolve(args(&[])).unwrap();
        assert_eq!(settings.page_size, PageSize::Five);
        assert_eq!(settings.sort(), SortState::default());
        assert_eq!(settings.tz().unwrap(), chrono_tz::Europe::Rome);
    }

    #[test]
    fn cli_overrides_win() {
        let settings = resolve(args(&[
            "--timezone",
            "America/New_York",
            "--page-size",
            "20",
            "--log-file",
            "",
        ]))
        .unwrap();
        assert_eq!(settings.page_size, PageSize::Twenty);
        assert_eq!(settings.tz().unwrap(), chrono_tz::America::New_York);
        assert!(settings.log_file.is_empty());
    }

    #[test]
    fn rejects_unknown_page_size_and_timezone() {
        assert!(matches!(
            resolve(args(&["--page-size", "7"])),
            Err(AppError::Engine(_))
        ));
        assert!(matches!(
            resolve(args(&["--timezone", "Mars/Olympus"])),
            Err(AppError::Timezone(_))
        ));
    }
}
