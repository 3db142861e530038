use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StatewiseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    Confirmed,
    Recovered,
    Deceased,
}

impl CaseType {
    pub const ALL: [CaseType; 3] = [CaseType::Confirmed, CaseType::Recovered, CaseType::Deceased];

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseType::Confirmed => "Confirmed",
            CaseType::Recovered => "Recovered",
            CaseType::Deceased => "Deceased",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CaseType {
    type Err = StatewiseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "confirmed" => Ok(CaseType::Confirmed),
            "recovered" => Ok(CaseType::Recovered),
            "deceased" => Ok(CaseType::Deceased),
            _ => Err(StatewiseError::InvalidCaseType(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: String,
    pub status: String,
    values: Vec<(String, String)>,
}

impl DailyRecord {
    pub fn new(date: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            status: status.into(),
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, code: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.push((code.into(), value.into()));
        self
    }

    pub fn from_value(value: &Value) -> Result<Self, StatewiseError> {
        let object = value.as_object().ok_or_else(|| {
            StatewiseError::MalformedRecord("expected a JSON object".to_string())
        })?;
        let date = object
            .get("date")
            .and_then(Value::as_str)
            .ok_or_else(|| StatewiseError::MalformedRecord("missing date field".to_string()))?
            .to_string();
        let status = object
            .get("status")
            .and_then(Value::as_str)
            .ok_or_else(|| StatewiseError::MalformedRecord("missing status field".to_string()))?
            .to_string();

        let mut values = Vec::new();
        for (key, cell) in object {
            if key == "date" || key == "status" {
                continue;
            }
            values.push((key.clone(), stringify_cell(cell)));
        }

        Ok(Self {
            date,
            status,
            values,
        })
    }

    pub fn state_codes(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(code, _)| code.as_str())
    }

    pub fn value_for(&self, code: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(key, _)| key == code)
            .map(|(_, value)| value.as_str())
    }
}

fn stringify_cell(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
