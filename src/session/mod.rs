//! Session Bootstrap
//!
//! Before any mutating call, the dashboard asks the backend for a session
//! and CSRF cookie (`GET /sanctum/csrf-cookie`). The request is best-effort:
//!
//! - it fires at most once per [`SessionBootstrap`], however often `run` is called
//! - a failure is logged and swallowed, never retried
//! - teardown of the owner cancels it, and a late response is discarded
//!
//! Nothing orders the bootstrap before sibling requests; a mutating call that
//! races it goes out without the XSRF header and fails on its own path.

#[cfg(not(target_arch = "wasm32"))]
mod http;

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpSession;

use async_trait::async_trait;
use futures_util::future::{AbortHandle, AbortRegistration, Abortable};
use std::cell::Cell;
use thiserror::Error;

use crate::config::ApiConfig;

/// Cookie set by the session endpoint
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Header carrying the decoded cookie on mutating calls
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Issues the session request
#[async_trait(?Send)]
pub trait SessionTransport {
    async fn request_cookie(&self, url: &str) -> Result<(), SessionError>;
}

/// Errors from the session endpoint
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Session endpoint returned status {0}")]
    Status(u16),
}

/// How a bootstrap run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The endpoint answered with success
    Established,
    /// The request failed; already logged
    Failed(String),
    /// The owner tore down first; any response was discarded
    Cancelled,
    /// This bootstrap had already fired
    Skipped,
}

/// One-shot, cancellable session cookie request
pub struct SessionBootstrap {
    url: String,
    abort: AbortHandle,
    registration: Cell<Option<AbortRegistration>>,
    cancelled: Cell<bool>,
}

impl SessionBootstrap {
    pub fn new(url: impl Into<String>) -> Self {
        let (abort, registration) = AbortHandle::new_pair();
        Self {
            url: url.into(),
            abort,
            registration: Cell::new(Some(registration)),
            cancelled: Cell::new(false),
        }
    }

    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(api.session_url())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Issue the request, unless this bootstrap already fired
    pub async fn run<T: SessionTransport + ?Sized>(&self, transport: &T) -> BootstrapOutcome {
        let Some(registration) = self.registration.take() else {
            tracing::debug!(url = %self.url, "Session bootstrap already fired");
            return BootstrapOutcome::Skipped;
        };

        match Abortable::new(transport.request_cookie(&self.url), registration).await {
            Ok(Ok(())) => {
                tracing::info!(url = %self.url, "Session cookie established");
                BootstrapOutcome::Established
            }
            Ok(Err(e)) => {
                tracing::warn!(url = %self.url, error = %e, "Session bootstrap failed");
                BootstrapOutcome::Failed(e.to_string())
            }
            Err(_aborted) => {
                tracing::debug!(url = %self.url, "Session bootstrap cancelled, response discarded");
                BootstrapOutcome::Cancelled
            }
        }
    }

    /// Signal teardown. A pending or future `run` resolves as `Cancelled`.
    pub fn cancel(&self) {
        self.cancelled.set(true);
        self.abort.abort();
    }
}

/// Extract and percent-decode the XSRF token from a `Cookie` header value
pub fn xsrf_token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == XSRF_COOKIE)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|token| token.into_owned())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting {
        calls: Cell<usize>,
        fail: bool,
    }

    impl Counting {
        fn new(fail: bool) -> Self {
            Self {
                calls: Cell::new(0),
                fail,
            }
        }
    }

    #[async_trait(?Send)]
    impl SessionTransport for Counting {
        async fn request_cookie(&self, _url: &str) -> Result<(), SessionError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(SessionError::Status(419))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_url_from_config() {
        let bootstrap = SessionBootstrap::from_config(&ApiConfig::default());
        assert_eq!(bootstrap.url(), "http://localhost:8000/sanctum/csrf-cookie");
    }

    #[tokio::test]
    async fn test_success() {
        let transport = Counting::new(false);
        let bootstrap = SessionBootstrap::new("http://backend/sanctum/csrf-cookie");

        assert_eq!(bootstrap.run(&transport).await, BootstrapOutcome::Established);
        assert_eq!(transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_failure_is_absorbed_and_not_retried() {
        let transport = Counting::new(true);
        let bootstrap = SessionBootstrap::new("http://backend/sanctum/csrf-cookie");

        let outcome = bootstrap.run(&transport).await;
        assert_eq!(
            outcome,
            BootstrapOutcome::Failed("Session endpoint returned status 419".to_string())
        );
        assert_eq!(bootstrap.run(&transport).await, BootstrapOutcome::Skipped);
        assert_eq!(transport.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_cancel_before_run_skips_request() {
        let transport = Counting::new(false);
        let bootstrap = SessionBootstrap::new("http://backend/sanctum/csrf-cookie");

        bootstrap.cancel();
        assert!(bootstrap.is_cancelled());
        assert_eq!(bootstrap.run(&transport).await, BootstrapOutcome::Cancelled);
        assert_eq!(transport.calls.get(), 0);
    }

    struct Slow {
        reply: std::cell::RefCell<Option<tokio::sync::oneshot::Receiver<()>>>,
    }

    #[async_trait(?Send)]
    impl SessionTransport for Slow {
        async fn request_cookie(&self, _url: &str) -> Result<(), SessionError> {
            let reply = self.reply.borrow_mut().take();
            match reply {
                Some(rx) => rx.await.map_err(|e| SessionError::Network(e.to_string())),
                None => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn test_cancel_in_flight_discards_response() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let transport = Slow {
            reply: std::cell::RefCell::new(Some(rx)),
        };
        let bootstrap = SessionBootstrap::new("http://backend/sanctum/csrf-cookie");

        let (outcome, _) = tokio::join!(bootstrap.run(&transport), async {
            bootstrap.cancel();
            let _ = tx.send(());
        });

        assert_eq!(outcome, BootstrapOutcome::Cancelled);
    }

    #[test]
    fn test_xsrf_token_from_cookies() {
        let cookies = "theme=dark; XSRF-TOKEN=eyJpdiI6Ik%3D%3D; laravel_session=abc";
        assert_eq!(xsrf_token_from_cookies(cookies), Some("eyJpdiI6Ik==".to_string()));
        assert_eq!(xsrf_token_from_cookies("theme=dark"), None);
        assert_eq!(xsrf_token_from_cookies("XSRF-TOKEN="), None);
        assert_eq!(xsrf_token_from_cookies(""), None);
    }
}
