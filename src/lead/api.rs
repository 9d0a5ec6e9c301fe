use gloo_net::http::Request;
use log::info;
use thiserror::Error;

use crate::config;
use crate::lead::models::{LeadSubmission, ZipLookupResponse};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("no place found for zip code")]
    NoPlace,
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

pub async fn lookup_city(zip: &str) -> Result<String, ApiError> {
    let response = Request::get(&config::zip_lookup_url(zip)).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<ZipLookupResponse>()
        .await?
        .city()
        .ok_or(ApiError::NoPlace)
}

/// Posts the lead. The response body is never read.
pub async fn submit_lead(submission: &LeadSubmission) -> Result<(), ApiError> {
    let response = Request::post(config::get_webhook_url())
        .json(submission)?
        .send()
        .await?;

    if response.ok() {
        info!("Webhook accepted lead with status {}", response.status());
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_read_well_in_logs() {
        assert_eq!(ApiError::Status(404).to_string(), "unexpected status 404");
        assert_eq!(
            ApiError::Network("Failed to fetch".into()).to_string(),
            "request failed: Failed to fetch"
        );
    }

    #[test]
    fn serde_failures_become_network_errors() {
        let serde_err = serde_json::from_str::<ZipLookupResponse>("not json").unwrap_err();
        let err: ApiError = gloo_net::Error::SerdeError(serde_err).into();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
