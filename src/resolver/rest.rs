//! REST resolver for native callers
//!
//! Fetches `GET {base_url}{api_prefix}/{collection}/{id}`. A 404 is a
//! lookup miss, not an error.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::time::Duration;

use super::{AsyncResolver, Envelope, ResolveError};
use crate::config::ApiConfig;
use crate::domain::Entity;

/// Asynchronous resolver backed by the REST API
pub struct RestResolver<E> {
    client: Client,
    api: ApiConfig,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> RestResolver<E> {
    pub fn new(api: &ApiConfig) -> Result<Self, ResolveError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.request_timeout_secs))
            .build()
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        Ok(Self::with_client(client, api))
    }

    /// Share an existing client (and its cookie store)
    pub fn with_client(client: Client, api: &ApiConfig) -> Self {
        Self {
            client,
            api: api.clone(),
            _entity: PhantomData,
        }
    }

    pub fn url_for(&self, id: &str) -> String {
        self.api.entity_url(E::COLLECTION, id)
    }
}

#[async_trait(?Send)]
impl<E: Entity + DeserializeOwned> AsyncResolver<E> for RestResolver<E> {
    async fn fetch(&self, id: &str) -> Result<Option<E>, ResolveError> {
        let url = self.url_for(id);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ResolveError::Timeout
                } else {
                    ResolveError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ResolveError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;
        let envelope: Envelope<E> = serde_json::from_str(&body)?;

        Ok(Some(envelope.into_inner()))
    }
}
