// Todo API HTTP client.
// Holds the reqwest client and base URL, and maps non-success responses to
// typed errors.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::Deserialize;

use crate::error::{Result, TuidoError};

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "TUIDO_API_URL";

/// Default base URL when the environment variable is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Error body shape the server uses for rejections, e.g.
/// `{"detail": "title (string) is required."}`.
#[derive(Debug, Deserialize)]
struct ErrorDetail {
    detail: String,
}

/// REST client for the todo API.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("tuido"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(TuidoError::Http)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from `TUIDO_API_URL`, falling back to the default
    /// local server address.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&base_url)
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request to the API.
    pub(crate) async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.get(&url).send().await.map_err(TuidoError::Http)?;
        check_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post_json<T: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(TuidoError::Http)?;
        check_response(response).await
    }

    /// Make a PATCH request with a JSON body.
    pub(crate) async fn patch_json<T: serde::Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http
            .patch(&url)
            .json(body)
            .send()
            .await
            .map_err(TuidoError::Http)?;
        check_response(response).await
    }

    /// Make a DELETE request to the API.
    pub(crate) async fn delete(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(TuidoError::Http)?;
        check_response(response).await
    }
}

/// Check response status and convert non-success statuses to errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED | StatusCode::NO_CONTENT => {
            Ok(response)
        }
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(TuidoError::NotFound(url))
        }
        StatusCode::BAD_REQUEST => {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorDetail>(&body)
                .map(|e| e.detail)
                .unwrap_or(body);
            Err(TuidoError::Rejected(detail))
        }
        status => Err(TuidoError::Status {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        }),
    }
}
