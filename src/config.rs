use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::domain::CaseType;
use crate::error::StatewiseError;
use crate::feed::{DEFAULT_TIMEOUT, STATES_DAILY_URL};

pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub case_types: Vec<CaseType>,
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub case_types: Vec<CaseType>,
    pub output_dir: Utf8PathBuf,
    pub source_url: String,
    pub timeout: Duration,
}

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn resolve(path: Option<&str>) -> Result<ResolvedConfig, StatewiseError> {
        let config_path = match path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from("statewise.json"),
        };

        if path.is_none() && !config_path.exists() {
            return Ok(Self::resolve_config(Config::default()));
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|_| StatewiseError::ConfigRead(config_path.clone()))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|err| StatewiseError::ConfigParse(err.to_string()))?;

        Ok(Self::resolve_config(config))
    }

    pub fn resolve_config(config: Config) -> ResolvedConfig {
        let mut case_types: Vec<CaseType> = Vec::new();
        for case_type in config.case_types {
            if !case_types.contains(&case_type) {
                case_types.push(case_type);
            }
        }
        if case_types.is_empty() {
            case_types.push(CaseType::Confirmed);
        }

        ResolvedConfig {
            case_types,
            output_dir: Utf8PathBuf::from(
                config
                    .output_dir
                    .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
            ),
            source_url: config
                .source_url
                .unwrap_or_else(|| STATES_DAILY_URL.to_string()),
            timeout: config
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
        }
    }
}
