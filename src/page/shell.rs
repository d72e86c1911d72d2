//! The page shell contract
//!
//! Route activation in, `(title, view props)` out, with no business logic in
//! between. Collection and creation screens carry no strategy and hand their
//! view nothing.

use futures_util::stream::{self, LocalBoxStream, StreamExt};

use super::{Screen, TitleGuard, TitleSink};
use crate::config::AppConfig;
use crate::domain::Entity;
use crate::resolver::{Strategy, ViewProps};

pub struct PageShell<E: Entity> {
    screen: Screen,
    strategy: Option<Strategy<E>>,
}

impl<E: Entity> PageShell<E> {
    /// Shell for a collection or creation screen
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            strategy: None,
        }
    }

    /// Shell for a screen that resolves a record from its path parameter
    pub fn with_strategy(screen: Screen, strategy: Strategy<E>) -> Self {
        Self {
            screen,
            strategy: Some(strategy),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn strategy(&self) -> Option<&Strategy<E>> {
        self.strategy.as_ref()
    }

    pub fn title(&self, config: &AppConfig) -> String {
        self.screen.title(&config.app_name)
    }

    /// Write the title; it reverts when the returned guard drops
    pub fn mount<S: TitleSink>(&self, config: &AppConfig, sink: S) -> TitleGuard<S> {
        TitleGuard::apply(sink, &self.title(config))
    }

    /// Props for the first render; `None` when the view takes no props
    pub fn initial_props(&self, id: &str) -> Option<ViewProps<E>> {
        self.strategy.as_ref().map(|s| s.initial(id))
    }

    /// Props once resolution has settled
    pub async fn settle(&self, id: &str) -> Option<ViewProps<E>> {
        match &self.strategy {
            Some(strategy) => Some(strategy.settle(id).await),
            None => None,
        }
    }

    /// Every props value the view renders, in order
    pub fn renders<'a>(&'a self, id: &'a str) -> LocalBoxStream<'a, ViewProps<E>> {
        match &self.strategy {
            Some(strategy) => strategy.states(id),
            None => stream::empty().boxed_local(),
        }
    }
}
