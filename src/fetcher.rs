// src/fetcher.rs
use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};

use crate::flag::FlagRecord;
use crate::CodegenError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the flag list with a single blocking GET. No retries; a build
/// step that cannot reach the service simply reports and moves on.
pub struct FlagFetcher {
    http_client: Client,
}

impl FlagFetcher {
    pub fn new() -> Self {
        Self {
            http_client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap(),
        }
    }

    /// Returns the flags in server order. The order is not stable across
    /// calls; it only pins the constant order within one generated file.
    pub fn fetch(&self, base_url: &str, token: &str) -> Result<Vec<FlagRecord>, CodegenError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("flagconst"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !token.is_empty() {
            let value = HeaderValue::from_str(token).map_err(|_| {
                CodegenError::Config("auth token is not a valid header value".to_string())
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        let response = self.http_client.get(base_url).headers(headers).send()?;

        if !response.status().is_success() {
            return Err(CodegenError::Api(format!(
                "unexpected status code: {}",
                response.status()
            )));
        }

        let body = response.text()?;
        let records: Vec<FlagRecord> = serde_json::from_str(&body)?;

        for record in &records {
            if record.name.trim().is_empty() {
                return Err(CodegenError::Api(
                    "response contains a flag with an empty name".to_string(),
                ));
            }
        }

        debug!("fetched {} flags from {}", records.len(), base_url);
        Ok(records)
    }
}

impl Default for FlagFetcher {
    fn default() -> Self {
        Self::new()
    }
}
