//! REST resource client
//!
//! This module provides the `ApiClient` used by every domain store. Each
//! operation issues exactly one network call and returns either the decoded
//! payload or a normalized `ApiError`. All calls carry a bearer token and
//! `Accept: application/json`.

use std::time::Duration;

use config::ApiConfig;
use reqwest::header;
use serde::de::DeserializeOwned;
use url::Url;

use crate::errors::{map_transport_error, ApiError};
use crate::form::RequestBody;

/// HTTP resource client for the clinic REST API
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl ApiClient {
    /// Create a new client from configuration
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Client(format!("invalid base url: {}", e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// GET the full collection: `{base}/{resource}/`
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        token: &str,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.endpoint(&[resource])?;
        self.get_json(url, token).await
    }

    /// GET a single entity: `{base}/{resource}/{id}/`
    ///
    /// A server-side 404 surfaces through the ordinary `Server` error path.
    pub async fn get_by_id<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
        token: &str,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(&[resource, id])?;
        self.get_json(url, token).await
    }

    /// POST a new entity; returns the server's authoritative object
    pub async fn create<T: DeserializeOwned>(
        &self,
        resource: &str,
        body: RequestBody,
        token: &str,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(&[resource])?;
        self.send_body(self.http.post(url), body, token).await
    }

    /// POST against a nested collection path (e.g. a bulk endpoint)
    pub async fn create_at<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
        token: &str,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(&split_path(path))?;
        self.send_body(self.http.post(url), body, token).await
    }

    /// PUT a full replacement payload: `{base}/{resource}/{id}/`
    pub async fn update<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
        body: RequestBody,
        token: &str,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(&[resource, id])?;
        self.send_body(self.http.put(url), body, token).await
    }

    /// DELETE an entity; success carries no body
    pub async fn remove(&self, resource: &str, id: &str, token: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&[resource, id])?;
        let response = self
            .http
            .delete(url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::server(status.as_u16(), &body))
        }
    }

    /// GET the search endpoint: `{base}/{resource}/search/?q=…`
    ///
    /// Callers are responsible for never sending a degenerate query; the
    /// store layer falls back to `list` for empty or whitespace-only input.
    pub async fn search<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &str,
        token: &str,
    ) -> Result<Vec<T>, ApiError> {
        let mut url = self.endpoint(&[resource, "search"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.get_json(url, token).await
    }

    /// Collection GET against an arbitrary path, for auxiliary lists and
    /// report endpoints
    pub async fn get_at<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        token: &str,
    ) -> Result<Vec<T>, ApiError> {
        let mut url = self.endpoint(&split_path(path))?;
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }
        self.get_json(url, token).await
    }

    /// Build `{base}/{segments…}/` — the server routes on the trailing slash
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::Client("base url cannot carry a path".to_string()))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
            path.push("");
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, token: &str) -> Result<T, ApiError> {
        tracing::trace!(url = %url, "GET");
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;
        Self::decode(response).await
    }

    async fn send_body<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        body: RequestBody,
        token: &str,
    ) -> Result<T, ApiError> {
        let request = request
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json");

        let request = match body {
            RequestBody::Json(value) => request.json(&value),
            RequestBody::Form(form) => request.multipart(form.into_multipart()?),
        };

        let response = request.send().await.map_err(map_transport_error)?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Client(format!("response decode: {}", e)))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::server(status.as_u16(), &body))
        }
    }
}

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig::new(
            "https://clinic.example.org/api".to_string(),
            15_000,
            "kinderstore-test".to_string(),
        ))
        .unwrap()
    }

    #[test]
    fn endpoint_keeps_trailing_slash() {
        let url = client().endpoint(&["appointments"]).unwrap();
        assert_eq!(url.as_str(), "https://clinic.example.org/api/appointments/");

        let url = client().endpoint(&["appointments", "12"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://clinic.example.org/api/appointments/12/"
        );
    }

    #[test]
    fn nested_paths_are_split_on_slashes() {
        assert_eq!(
            split_path("vaccination-records/due"),
            vec!["vaccination-records", "due"]
        );
        assert_eq!(split_path("/children/"), vec!["children"]);
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let result = ApiClient::new(&ApiConfig::new(
            "https://".to_string(),
            15_000,
            "kinderstore-test".to_string(),
        ));
        assert!(result.is_err());
    }
}
