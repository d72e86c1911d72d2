//! Entity Resolvers
//!
//! One capability for turning a route identifier into a record, with two
//! interchangeable variants:
//!
//! - [`Resolver`]: synchronous lookup against an in-memory collection
//! - [`AsyncResolver`]: asynchronous fetch from an external collaborator
//!
//! Page shells hold a [`Strategy`] and never care which variant backs it.
//! Whatever the variant, the view only ever receives [`ViewProps`].

mod error;
mod lookup;
#[cfg(not(target_arch = "wasm32"))]
mod rest;

pub use error::ResolveError;
pub use lookup::MockCollection;
#[cfg(not(target_arch = "wasm32"))]
pub use rest::RestResolver;

use async_trait::async_trait;
use futures_util::future;
use futures_util::stream::{self, LocalBoxStream, StreamExt};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

use crate::domain::Entity;

/// Everything a view receives from its page shell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewProps<E> {
    pub entity: Option<E>,
    pub loading: bool,
    pub error: bool,
}

impl<E> ViewProps<E> {
    /// Settled without a record: a lookup miss
    pub fn empty() -> Self {
        Self {
            entity: None,
            loading: false,
            error: false,
        }
    }

    pub fn loading() -> Self {
        Self {
            entity: None,
            loading: true,
            error: false,
        }
    }

    pub fn found(entity: E) -> Self {
        Self {
            entity: Some(entity),
            loading: false,
            error: false,
        }
    }

    pub fn failed() -> Self {
        Self {
            entity: None,
            loading: false,
            error: true,
        }
    }

    /// Settled, no error, and still nothing to show
    pub fn is_not_found(&self) -> bool {
        self.entity.is_none() && !self.loading && !self.error
    }

    pub fn map<F>(self, f: impl FnOnce(E) -> F) -> ViewProps<F> {
        ViewProps {
            entity: self.entity.map(f),
            loading: self.loading,
            error: self.error,
        }
    }
}

impl<E> From<Option<E>> for ViewProps<E> {
    fn from(entity: Option<E>) -> Self {
        entity.map_or_else(Self::empty, Self::found)
    }
}

impl<E> Default for ViewProps<E> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Progress of a single resolution
#[derive(Debug, Clone, PartialEq)]
pub enum ResolveState<E> {
    Pending,
    Found(E),
    NotFound,
    Failed(String),
}

impl<E> ResolveState<E> {
    pub fn from_result(result: Result<Option<E>, ResolveError>) -> Self {
        match result {
            Ok(Some(entity)) => Self::Found(entity),
            Ok(None) => Self::NotFound,
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn into_props(self) -> ViewProps<E> {
        match self {
            Self::Pending => ViewProps::loading(),
            Self::Found(entity) => ViewProps::found(entity),
            Self::NotFound => ViewProps::empty(),
            Self::Failed(_) => ViewProps::failed(),
        }
    }
}

impl<E> From<ResolveState<E>> for ViewProps<E> {
    fn from(state: ResolveState<E>) -> Self {
        state.into_props()
    }
}

/// Synchronous lookup by identifier
pub trait Resolver<E: Entity> {
    fn resolve(&self, id: &str) -> Option<E>;
}

/// Asynchronous fetch by identifier
///
/// `Ok(None)` means the collaborator answered and has no such record.
#[async_trait(?Send)]
pub trait AsyncResolver<E: Entity> {
    async fn fetch(&self, id: &str) -> Result<Option<E>, ResolveError>;
}

/// REST payloads arrive either bare or wrapped in a `data` envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Envelope<E> {
    Wrapped { data: E },
    Bare(E),
}

impl<E> Envelope<E> {
    pub fn into_inner(self) -> E {
        match self {
            Self::Wrapped { data } => data,
            Self::Bare(entity) => entity,
        }
    }
}

/// The resolution strategy a screen declares
pub enum Strategy<E: Entity> {
    Lookup(Rc<dyn Resolver<E>>),
    Fetch(Rc<dyn AsyncResolver<E>>),
}

impl<E: Entity> Clone for Strategy<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Lookup(r) => Self::Lookup(Rc::clone(r)),
            Self::Fetch(r) => Self::Fetch(Rc::clone(r)),
        }
    }
}

impl<E: Entity> Strategy<E> {
    pub fn lookup(resolver: impl Resolver<E> + 'static) -> Self {
        Self::Lookup(Rc::new(resolver))
    }

    pub fn fetch(resolver: impl AsyncResolver<E> + 'static) -> Self {
        Self::Fetch(Rc::new(resolver))
    }

    pub fn is_async(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// Props available before any asynchronous work completes
    pub fn initial(&self, id: &str) -> ViewProps<E> {
        match self {
            Self::Lookup(resolver) => resolver.resolve(id).into(),
            Self::Fetch(_) if id.is_empty() => ViewProps::empty(),
            Self::Fetch(_) => ViewProps::loading(),
        }
    }

    /// Final props once the resolution has settled
    ///
    /// An empty id never reaches the collaborator.
    pub async fn settle(&self, id: &str) -> ViewProps<E> {
        match self {
            Self::Lookup(resolver) => resolver.resolve(id).into(),
            Self::Fetch(_) if id.is_empty() => ViewProps::empty(),
            Self::Fetch(resolver) => {
                let state = ResolveState::from_result(resolver.fetch(id).await);
                if let ResolveState::Failed(reason) = &state {
                    tracing::debug!(collection = E::COLLECTION, id, %reason, "Entity fetch failed");
                }
                state.into_props()
            }
        }
    }

    /// Every props value the view should render, in order
    ///
    /// A lookup yields one settled value; a fetch yields the loading value
    /// first and the settled value second.
    pub fn states<'a>(&'a self, id: &'a str) -> LocalBoxStream<'a, ViewProps<E>> {
        if !self.is_async() || id.is_empty() {
            return stream::once(future::ready(self.initial(id))).boxed_local();
        }

        stream::once(future::ready(ViewProps::loading()))
            .chain(stream::once(self.settle(id)))
            .boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Client, Timestamps};
    use chrono::{TimeZone, Utc};

    fn client(id: &str, name: &str) -> Client {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Client {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.test", id),
            phone_number: None,
            address: Address::default(),
            status: "active".to_string(),
            kind: "individual".to_string(),
            timestamps: Timestamps::new(at, at),
        }
    }

    struct Remote(Result<Option<Client>, ()>);

    #[async_trait(?Send)]
    impl AsyncResolver<Client> for Remote {
        async fn fetch(&self, _id: &str) -> Result<Option<Client>, ResolveError> {
            self.0
                .clone()
                .map_err(|_| ResolveError::Network("connection refused".to_string()))
        }
    }

    #[test]
    fn test_state_to_props() {
        assert_eq!(ResolveState::<Client>::Pending.into_props(), ViewProps::loading());
        assert_eq!(ResolveState::<Client>::NotFound.into_props(), ViewProps::empty());
        assert_eq!(
            ResolveState::<Client>::Failed("boom".into()).into_props(),
            ViewProps::failed()
        );
        let props = ResolveState::Found(client("c-1", "Acme")).into_props();
        assert_eq!(props.entity.map(|c| c.name), Some("Acme".to_string()));
    }

    #[test]
    fn test_props_map_keeps_flags() {
        let props = ViewProps::<Client>::failed().map(|c| c.name);
        assert!(props.error);
        assert!(props.entity.is_none());
        assert!(!ViewProps::<Client>::loading().is_not_found());
        assert!(ViewProps::<Client>::empty().is_not_found());
    }

    #[test]
    fn test_envelope_accepts_both_shapes() {
        let bare = r#"{"id":"u-1","name":"Ana","email":"a@e.test","role":"agent","status":"active","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}"#;
        let wrapped = format!("{{\"data\":{}}}", bare);

        let a: Envelope<crate::domain::User> = serde_json::from_str(bare).unwrap();
        let b: Envelope<crate::domain::User> = serde_json::from_str(&wrapped).unwrap();
        assert_eq!(a.into_inner(), b.into_inner());
    }

    #[test]
    fn test_lookup_strategy_is_settled_immediately() {
        let strategy = Strategy::lookup(MockCollection::new(vec![client("c-42", "Acme")]));
        assert!(!strategy.is_async());

        let props = strategy.initial("c-42");
        assert_eq!(props.entity.as_ref().map(|c| c.id.as_str()), Some("c-42"));
        assert!(!props.loading);
        assert!(!props.error);

        assert!(strategy.initial("c-404").is_not_found());
    }

    #[tokio::test]
    async fn test_fetch_strategy_yields_loading_then_entity() {
        let strategy = Strategy::fetch(Remote(Ok(Some(client("c-7", "Beta")))));
        let states: Vec<_> = strategy.states("c-7").collect().await;

        assert_eq!(states.len(), 2);
        assert_eq!(states[0], ViewProps::loading());
        assert_eq!(states[1].entity.as_ref().map(|c| c.id.as_str()), Some("c-7"));
        assert!(!states[1].loading);
    }

    #[tokio::test]
    async fn test_fetch_failure_sets_error_flag() {
        let strategy = Strategy::fetch(Remote(Err(())));
        let props = strategy.settle("c-7").await;
        assert_eq!(props, ViewProps::failed());
    }

    #[tokio::test]
    async fn test_fetch_with_empty_id_skips_collaborator() {
        let strategy = Strategy::fetch(Remote(Err(())));
        let states: Vec<_> = strategy.states("").collect().await;
        assert_eq!(states, vec![ViewProps::empty()]);
    }
}
