use std::collections::HashSet;
use std::path::PathBuf;

use super::Environment;

const DEFAULT_ALLOWED_EXTENSIONS: [&str; 5] = ["txt", "pdf", "csv", "xlsx", "json"];
const DEFAULT_MAX_UPLOAD_MB: usize = 32;

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub uploads: UploadSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// Raw uploads land here and are retained indefinitely.
    pub upload_dir: PathBuf,
    /// Generated reports and charts, namespaced per report id.
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_upload_mb: usize,
    pub allowed_extensions: HashSet<String>,
}

impl UploadSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    /// Accepted from the environment for the eventual generation client;
    /// the template synthesizer does not use it.
    pub api_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub environment: Environment,
    pub json_format: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl Settings {
    /// Reads every setting from the environment, with defaults matching a
    /// local deployment.
    pub fn from_env() -> Result<Self, SettingsError> {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_env("SERVER_PORT", 3000)?;

        let upload_dir =
            PathBuf::from(std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()));
        let output_dir =
            PathBuf::from(std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "static".to_string()));

        let max_upload_mb = parse_env("MAX_UPLOAD_MB", DEFAULT_MAX_UPLOAD_MB)?;
        let allowed_extensions = match std::env::var("ALLOWED_EXTENSIONS") {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_ascii_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        let environment = std::env::var("APP_ENV")
            .ok()
            .map(Environment::try_from)
            .transpose()
            .map_err(|reason| SettingsError::Invalid {
                name: "APP_ENV",
                reason,
            })?
            .unwrap_or(Environment::Local);
        let json_format = std::env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or(false);

        Ok(Self {
            server: ServerSettings { host, port },
            storage: StorageSettings {
                upload_dir,
                output_dir,
            },
            uploads: UploadSettings {
                max_upload_mb,
                allowed_extensions,
            },
            llm: LlmSettings { api_key },
            logging: LoggingSettings {
                environment,
                json_format,
            },
        })
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, SettingsError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| SettingsError::Invalid {
            name,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
