use reqwest::blocking;
use serde::Serialize;
use url::Url;

use crate::errors::AppError;
use crate::helper;

#[derive(Serialize)]
struct ConnectionPayload {
    user_id: u64,
}

/// Client for the remote connections endpoint. One POST per contact
/// action; the response is deliberately not inspected and nothing is
/// retried.
pub struct ConnectionsApi {
    pub base_url: Option<String>,
}

impl ConnectionsApi {
    pub fn new() -> Self {
        Self {
            base_url: helper::get_env_value_by_key("CONNECTIONS_API_URL")
                .ok()
                .filter(|uri| is_valid_url(uri)),
        }
    }

    pub fn with_base_url(uri: &str) -> Self {
        Self {
            base_url: Some(uri.to_string()),
        }
    }

    pub fn record_connection(&self, user_id: u64) -> Result<(), AppError> {
        let base_url = self
            .base_url
            .as_ref()
            .ok_or(AppError::NotFound("Connections API URL".to_string()))?;

        let body = serde_json::to_vec(&ConnectionPayload { user_id })
            .map_err(|err| AppError::Persistence(err.to_string()))?;

        let blocking_client = blocking::Client::new();
        blocking_client
            .post(format!("{}/connections", base_url))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        // Fire and forget: the status code is the server's concern
        Ok(())
    }
}

impl Default for ConnectionsApi {
    fn default() -> Self {
        Self::new()
    }
}

pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}
