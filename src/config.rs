use crate::errors::AppError;
use log::LevelFilter;
use std::time::Duration;

pub const DATASET_URI_ENV: &str = "APARTMENTS_DATASET_URI";
pub const DATASET_FORMAT_ENV: &str = "APARTMENTS_DATASET_FORMAT";
pub const WEB_HOSTNAME_ENV: &str = "APARTMENTS_WEB_HOSTNAME";
pub const MAX_ENTRIES_ENV: &str = "APARTMENTS_MAX_ENTRIES";
pub const OFFICE_NAME_ENV: &str = "APARTMENTS_MAP_OFFICE_NAME";
pub const WEB_PORT_ENV: &str = "APARTMENTS_WEB_PORT";
pub const WEB_WORKERS_ENV: &str = "APARTMENTS_WEB_WORKERS";
pub const FETCH_TIMEOUT_ENV: &str = "APARTMENTS_FETCH_TIMEOUT_SECS";
pub const LOG_LEVEL_ENV: &str = "APARTMENTS_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_uri: String,
    /// Kept raw so an unsupported value surfaces as a load error on the page.
    pub dataset_format: String,
    pub web_hostname: String,
    pub max_entries: usize,
    pub office_name: String,
    pub port: u16,
    pub workers: usize,
    pub fetch_timeout: Duration,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    /// A `.env` file in the working directory is honored.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dataset_uri = lookup(DATASET_URI_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "The path to the apartments dataset is not set. Please set the '{DATASET_URI_ENV}' environment variable."
                ))
            })?;

        let dataset_format = lookup(DATASET_FORMAT_ENV).unwrap_or_else(|| "parquet".into());

        let max_entries_raw = lookup(MAX_ENTRIES_ENV).unwrap_or_else(|| "500".into());
        let max_entries = parse_digits(MAX_ENTRIES_ENV, &max_entries_raw)?;

        let port = lookup(WEB_PORT_ENV)
            .map(|v| {
                v.trim().parse::<u16>().map_err(|_| {
                    AppError::Config(format!("'{WEB_PORT_ENV}' should be a port number, but is '{v}'."))
                })
            })
            .transpose()?
            .unwrap_or(8501);

        let workers = match lookup(WEB_WORKERS_ENV) {
            Some(v) => parse_digits(WEB_WORKERS_ENV, &v)?.max(1),
            None => 8,
        };

        let fetch_timeout = match lookup(FETCH_TIMEOUT_ENV) {
            Some(v) => Duration::from_secs(parse_digits(FETCH_TIMEOUT_ENV, &v)? as u64),
            None => Duration::from_secs(60),
        };

        let log_level = match lookup(LOG_LEVEL_ENV) {
            Some(v) => v.trim().parse::<LevelFilter>().map_err(|_| {
                AppError::Config(format!("'{LOG_LEVEL_ENV}' is not a log level: '{v}'."))
            })?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            dataset_uri,
            dataset_format,
            web_hostname: lookup(WEB_HOSTNAME_ENV).unwrap_or_else(|| "localhost:8501".into()),
            max_entries,
            office_name: lookup(OFFICE_NAME_ENV).unwrap_or_else(|| "the Office".into()),
            port,
            workers,
            fetch_timeout,
            log_level,
        })
    }
}

fn parse_digits(key: &str, value: &str) -> Result<usize, AppError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::Config(format!(
            "The environment variable '{key}' should be a number, but is '{value}'."
        )));
    }
    value
        .parse()
        .map_err(|_| AppError::Config(format!("'{key}' is out of range: '{value}'.")))
}

#[cfg(test)]
pub fn create_test_config(dataset_uri: &str, dataset_format: &str) -> AppConfig {
    AppConfig {
        dataset_uri: dataset_uri.to_string(),
        dataset_format: dataset_format.to_string(),
        web_hostname: "localhost:8501".to_string(),
        max_entries: 500,
        office_name: "the Office".to_string(),
        port: 8501,
        workers: 1,
        fetch_timeout: Duration::from_secs(5),
        log_level: LevelFilter::Off,
    }
}
