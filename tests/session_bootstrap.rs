//! Session bootstrap guarantees seen from the dashboard's side

use async_trait::async_trait;
use std::cell::{Cell, RefCell};

use estate_admin::config::ApiConfig;
use estate_admin::session::{
    BootstrapOutcome, SessionBootstrap, SessionError, SessionTransport,
};

#[derive(Default)]
struct Recorder {
    urls: RefCell<Vec<String>>,
    refuse: Cell<bool>,
}

#[async_trait(?Send)]
impl SessionTransport for Recorder {
    async fn request_cookie(&self, url: &str) -> Result<(), SessionError> {
        self.urls.borrow_mut().push(url.to_string());
        if self.refuse.get() {
            Err(SessionError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[tokio::test]
async fn test_fires_once_per_mount() {
    let transport = Recorder::default();
    let bootstrap = SessionBootstrap::from_config(&ApiConfig::default());

    let mut outcomes = Vec::new();
    for _ in 0..10 {
        outcomes.push(bootstrap.run(&transport).await);
    }

    assert_eq!(outcomes[0], BootstrapOutcome::Established);
    assert!(outcomes[1..].iter().all(|o| *o == BootstrapOutcome::Skipped));
    assert_eq!(
        *transport.urls.borrow(),
        vec!["http://localhost:8000/sanctum/csrf-cookie".to_string()]
    );
}

#[tokio::test]
async fn test_remount_fires_again() {
    let transport = Recorder::default();
    let api = ApiConfig::default();

    for _ in 0..2 {
        let bootstrap = SessionBootstrap::from_config(&api);
        bootstrap.run(&transport).await;
    }

    assert_eq!(transport.urls.borrow().len(), 2);
}

#[tokio::test]
async fn test_unreachable_backend_is_not_fatal() {
    let transport = Recorder::default();
    transport.refuse.set(true);
    let bootstrap = SessionBootstrap::from_config(&ApiConfig::default());

    let outcome = bootstrap.run(&transport).await;

    assert!(matches!(outcome, BootstrapOutcome::Failed(_)));
    assert!(!bootstrap.is_cancelled());
}

#[tokio::test]
async fn test_teardown_before_start() {
    let transport = Recorder::default();
    let bootstrap = SessionBootstrap::from_config(&ApiConfig::default());

    bootstrap.cancel();

    assert_eq!(bootstrap.run(&transport).await, BootstrapOutcome::Cancelled);
    assert!(transport.urls.borrow().is_empty());
}
