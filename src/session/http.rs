//! Native session transport with a cookie jar

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Duration;

use super::{xsrf_token_from_cookies, SessionError, SessionTransport};
use crate::config::ApiConfig;

/// HTTP session that keeps the cookies the backend sets
pub struct HttpSession {
    client: Client,
    jar: Arc<Jar>,
}

impl HttpSession {
    pub fn new(api: &ApiConfig) -> Result<Self, SessionError> {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .cookie_provider(Arc::clone(&jar))
            .timeout(Duration::from_secs(api.request_timeout_secs))
            .build()
            .map_err(|e| SessionError::Network(e.to_string()))?;

        Ok(Self { client, jar })
    }

    /// Client sharing this session's cookies, for follow-up requests
    pub fn client(&self) -> Client {
        self.client.clone()
    }

    /// Decoded XSRF token stored for `url`, if the backend set one
    pub fn xsrf_token(&self, url: &str) -> Option<String> {
        let url = Url::parse(url).ok()?;
        let cookies = self.jar.cookies(&url)?;
        xsrf_token_from_cookies(cookies.to_str().ok()?)
    }
}

#[async_trait(?Send)]
impl SessionTransport for HttpSession {
    async fn request_cookie(&self, url: &str) -> Result<(), SessionError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(SessionError::Status(response.status().as_u16()))
        }
    }
}
