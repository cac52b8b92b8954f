use crate::error::{config_error, env_error, RelayResult};
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Spreadsheet the leads form writes into
pub const DEFAULT_SHEET_ID: &str = "1l_PBoX6lET_E8Pfm5wwBkAmaFObDJmpVmDlsereA_2k";
/// Range holding the form responses, header row included
pub const DEFAULT_LEADS_RANGE: &str = "Form Responses 1!A:J";
pub const DEFAULT_CALENDAR_ID: &str = "primary";
pub const DEFAULT_VAPI_BASE_URL: &str = "https://api.vapi.ai";
pub const DEFAULT_SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4";
pub const DEFAULT_CALENDAR_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_CONFIG_FILE: &str = "config/relay.toml";

/// Vapi credentials. Each one is checked when a call endpoint is hit, not at startup.
#[derive(Debug, Clone, Default)]
pub struct VapiConfig {
    pub api_key: Option<String>,
    pub assistant_id: Option<String>,
    pub phone_number_id: Option<String>,
    pub base_url: String,
}

/// Google service account and resource settings
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// Path to the service account JSON key
    pub credentials_path: PathBuf,
    pub calendar_id: String,
    pub sheet_id: String,
    pub leads_range: String,
    pub followups_range: Option<String>,
    pub sheets_base_url: String,
    pub calendar_base_url: String,
}

/// Main configuration structure for the relay
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub vapi: VapiConfig,
    pub google: GoogleConfig,
}

/// Optional overrides read from `config/relay.toml`
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    sheet_id: Option<String>,
    leads_range: Option<String>,
    followups_range: Option<String>,
}

impl Config {
    /// Load configuration from `.env`, the process environment and the optional config file
    pub fn load() -> RelayResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> RelayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let credentials_path = var("GOOGLE_APPLICATION_CREDENTIALS")
            .map(PathBuf::from)
            .ok_or_else(|| env_error("GOOGLE_APPLICATION_CREDENTIALS"))?;

        let config_file = var("RELAY_CONFIG").unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        let file = FileConfig::read(Path::new(&config_file))?;

        let port = match var("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| config_error(&format!("Invalid PORT value: {}", port)))?,
            None => DEFAULT_PORT,
        };

        let vapi = VapiConfig {
            api_key: var("VAPI_API_KEY"),
            assistant_id: var("VAPI_ASSISTANT_ID"),
            phone_number_id: var("VAPI_PHONE_NUMBER"),
            base_url: var("VAPI_BASE_URL").unwrap_or_else(|| DEFAULT_VAPI_BASE_URL.to_string()),
        };

        let google = GoogleConfig {
            credentials_path,
            calendar_id: var("GOOGLE_CALENDAR_ID")
                .unwrap_or_else(|| DEFAULT_CALENDAR_ID.to_string()),
            sheet_id: var("GOOGLE_SHEET_ID")
                .or(file.sheet_id)
                .unwrap_or_else(|| DEFAULT_SHEET_ID.to_string()),
            leads_range: var("LEADS_RANGE")
                .or(file.leads_range)
                .unwrap_or_else(|| DEFAULT_LEADS_RANGE.to_string()),
            followups_range: var("FOLLOWUPS_RANGE").or(file.followups_range),
            sheets_base_url: var("GOOGLE_SHEETS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SHEETS_BASE_URL.to_string()),
            calendar_base_url: var("GOOGLE_CALENDAR_BASE_URL")
                .unwrap_or_else(|| DEFAULT_CALENDAR_BASE_URL.to_string()),
        };

        Ok(Config {
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            vapi,
            google,
        })
    }
}

impl FileConfig {
    /// A missing file is fine; a malformed one is not
    fn read(path: &Path) -> RelayResult<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }
}
