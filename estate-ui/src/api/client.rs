//! HTTP API Client
//!
//! Browser-side implementations of the resolver, session and title seams.
//! Every request carries credentials so the session cookie travels with it.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, RequestCredentials};

use estate_admin::config::ApiConfig;
use estate_admin::domain::Entity;
use estate_admin::page::TitleSink;
use estate_admin::resolver::{AsyncResolver, Envelope, ResolveError};
use estate_admin::session::{
    xsrf_token_from_cookies, SessionError, SessionTransport, XSRF_HEADER,
};

fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
}

/// Decoded XSRF token from the document's cookies
pub fn xsrf_token() -> Option<String> {
    let document = leptos::document().dyn_into::<HtmlDocument>().ok()?;
    let cookies = document.cookie().ok()?;
    xsrf_token_from_cookies(&cookies)
}

// ============ Resolver ============

/// Fetches one record from the REST API
pub struct ApiResolver<E> {
    api: ApiConfig,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> ApiResolver<E> {
    pub fn new(api: &ApiConfig) -> Self {
        Self {
            api: api.clone(),
            _entity: PhantomData,
        }
    }
}

#[async_trait(?Send)]
impl<E: Entity + DeserializeOwned> AsyncResolver<E> for ApiResolver<E> {
    async fn fetch(&self, id: &str) -> Result<Option<E>, ResolveError> {
        let url = self.api.entity_url(E::COLLECTION, id);

        let response = with_credentials(Request::get(&url))
            .send()
            .await
            .map_err(|e| ResolveError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Ok(None);
        }
        if !response.ok() {
            return Err(ResolveError::Status {
                status: response.status(),
                message: response.text().await.unwrap_or_default(),
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

// ============ Session ============

/// Issues the session cookie request with the browser's cookie jar
pub struct BrowserSession;

#[async_trait(?Send)]
impl SessionTransport for BrowserSession {
    async fn request_cookie(&self, url: &str) -> Result<(), SessionError> {
        let response = with_credentials(Request::get(url))
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SessionError::Status(response.status()))
        }
    }
}

// ============ Saving ============

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMethod {
    Create,
    Update,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    message: String,
}

/// POST or PUT a record body, with the XSRF header when the cookie exists
pub async fn save_record(
    method: SaveMethod,
    url: &str,
    body: &serde_json::Value,
) -> Result<(), String> {
    let builder = match method {
        SaveMethod::Create => Request::post(url),
        SaveMethod::Update => Request::put(url),
    };
    let mut builder = with_credentials(builder);
    match xsrf_token() {
        Some(token) => builder = builder.header(XSRF_HEADER, &token),
        None => log::warn!("No XSRF-TOKEN cookie; the backend may reject this request"),
    }

    let response = builder
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = response.status();
        let error = response
            .json::<ApiError>()
            .await
            .map(|e| e.message)
            .unwrap_or_else(|_| format!("Request failed with status {}", status));
        return Err(error);
    }

    Ok(())
}

// ============ Title ============

/// The browser document's `<title>`
#[derive(Clone, Copy)]
pub struct DocumentTitle;

impl TitleSink for DocumentTitle {
    fn current(&self) -> String {
        leptos::document().title()
    }

    fn set(&self, title: &str) {
        leptos::document().set_title(title);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use estate_admin::page::TitleGuard;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_document_title_guard() {
        leptos::document().set_title("Estate CRM");
        {
            let _guard = TitleGuard::apply(DocumentTitle, "Client List | Dashboard - Estate CRM");
            assert_eq!(leptos::document().title(), "Client List | Dashboard - Estate CRM");
        }
        assert_eq!(leptos::document().title(), "Estate CRM");
    }

    #[wasm_bindgen_test]
    fn test_no_xsrf_cookie_by_default() {
        assert_eq!(xsrf_token(), None);
    }
}
