use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::domain::DailyRecord;
use crate::error::StatewiseError;

pub const STATES_DAILY_URL: &str = "https://api.covid19india.org/states_daily.json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub trait FeedClient: Send + Sync {
    fn fetch_states_daily(&self) -> Result<Vec<DailyRecord>, StatewiseError>;
}

#[derive(Clone)]
pub struct FeedHttpClient {
    client: Client,
    url: String,
}

impl FeedHttpClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, StatewiseError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("statewise/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| StatewiseError::FeedHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|err| StatewiseError::FeedHttp(err.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    fn handle_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, StatewiseError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let message = response
            .text()
            .unwrap_or_else(|_| "feed request failed".to_string());
        Err(StatewiseError::FeedStatus { status, message })
    }
}

impl FeedClient for FeedHttpClient {
    fn fetch_states_daily(&self) -> Result<Vec<DailyRecord>, StatewiseError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|err| StatewiseError::FeedHttp(err.to_string()))?;
        let response = Self::handle_status(response)?;
        let status = response.status().as_u16();

        let body: Value = response
            .json()
            .map_err(|err| StatewiseError::FeedHttp(err.to_string()))?;
        debug!(status, url = %self.url, "states_daily request completed");

        parse_states_daily(&body)
    }
}

pub fn parse_states_daily(body: &Value) -> Result<Vec<DailyRecord>, StatewiseError> {
    let records = body
        .get("states_daily")
        .and_then(Value::as_array)
        .ok_or(StatewiseError::MissingStatesDaily)?;
    records.iter().map(DailyRecord::from_value).collect()
}
