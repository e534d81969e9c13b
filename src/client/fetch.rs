use std::time::Duration;

use futures::future::BoxFuture;
use serde_json::Value;
use thiserror::Error;

use crate::store::{Record, ResourceKind};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request for {kind}/{id} failed: {source}")]
    Request {
        kind: &'static str,
        id: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{kind}/{id} rejected with status {status}: {message}")]
    Rejected {
        kind: &'static str,
        id: String,
        status: u16,
        message: String,
    },

    #[error("unexpected payload for {kind}/{id}: {source}")]
    Payload {
        kind: &'static str,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {source}")]
    HttpClientBuild {
        #[source]
        source: reqwest::Error,
    },
}

/// Single-item lookups against the resource API.
pub trait ResourceFetcher {
    fn fetch<'a>(&'a self, kind: ResourceKind, id: &'a str)
        -> BoxFuture<'a, Result<Record, LoadError>>;
}

#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: reqwest::Client,
    api_base: String,
}

impl HttpFetcher {
    /// `api_base` is the absolute URL the API is mounted at, e.g.
    /// `https://akpors.app/api`.
    pub fn new(api_base: &str, timeout: Duration) -> Result<Self, LoadError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("akpors/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|source| LoadError::HttpClientBuild { source })?;
        Ok(Self::with_client(client, api_base))
    }

    pub fn with_client(client: reqwest::Client, api_base: &str) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn item_url(&self, kind: ResourceKind, id: &str) -> String {
        format!("{}/{}/{}", self.api_base, kind.singular(), id)
    }

    async fn fetch_item(&self, kind: ResourceKind, id: &str) -> Result<Record, LoadError> {
        let request_err = |source| LoadError::Request {
            kind: kind.singular(),
            id: id.to_string(),
            source,
        };
        let response = self
            .client
            .get(self.item_url(kind, id))
            .send()
            .await
            .map_err(request_err)?;
        let status = response.status();
        let body: Value = response.json().await.map_err(request_err)?;

        // The API reports lookups it cannot satisfy as `{error: true, message}`.
        let flagged = body.get("error").and_then(Value::as_bool).unwrap_or(false);
        if !status.is_success() || flagged {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("request failed")
                .to_string();
            return Err(LoadError::Rejected {
                kind: kind.singular(),
                id: id.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_value(body).map_err(|source| LoadError::Payload {
            kind: kind.singular(),
            id: id.to_string(),
            source,
        })
    }
}

impl ResourceFetcher for HttpFetcher {
    fn fetch<'a>(&'a self, kind: ResourceKind, id: &'a str)
        -> BoxFuture<'a, Result<Record, LoadError>> {
        Box::pin(self.fetch_item(kind, id))
    }
}
