//! Page shell behavior across both resolution strategies

use async_trait::async_trait;
use futures_util::StreamExt;
use std::cell::Cell;
use std::rc::Rc;

use estate_admin::config::AppConfig;
use estate_admin::domain::Property;
use estate_admin::mock;
use estate_admin::page::{MemoryTitle, PageShell, Screen, TitleSink};
use estate_admin::resolver::{AsyncResolver, ResolveError, Strategy, ViewProps};

/// Serves properties from the bundled records, counting calls
struct Backend {
    calls: Rc<Cell<usize>>,
    fail: bool,
}

#[async_trait(?Send)]
impl AsyncResolver<Property> for Backend {
    async fn fetch(&self, id: &str) -> Result<Option<Property>, ResolveError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(ResolveError::Status {
                status: 500,
                message: "upstream error".to_string(),
            });
        }
        Ok(mock::properties().get(id).cloned())
    }
}

fn property_shell(fail: bool) -> (PageShell<Property>, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let backend = Backend {
        calls: Rc::clone(&calls),
        fail,
    };
    (
        PageShell::with_strategy(Screen::PropertyDetails, Strategy::fetch(backend)),
        calls,
    )
}

#[test]
fn test_client_details_lookup() {
    let config = AppConfig::default();
    let shell = PageShell::with_strategy(Screen::ClientDetails, Strategy::lookup(mock::clients()));

    let document = MemoryTitle::new("");
    let _guard = shell.mount(&config, document.clone());
    assert_eq!(document.current(), "Client Details | Dashboard - Estate CRM");

    let props = shell.initial_props("c-42").unwrap();
    assert_eq!(props.entity.as_ref().map(|c| c.name.as_str()), Some("Acme"));
    assert!(!props.loading);
    assert!(!props.error);
}

#[test]
fn test_client_details_unknown_id() {
    let shell = PageShell::with_strategy(Screen::ClientDetails, Strategy::lookup(mock::clients()));
    assert_eq!(shell.initial_props("c-0").unwrap(), ViewProps::empty());
}

#[tokio::test]
async fn test_property_details_loading_then_resolved() {
    let (shell, calls) = property_shell(false);

    let renders: Vec<_> = shell.renders("p-9").collect().await;

    assert_eq!(renders.len(), 2);
    assert!(renders[0].loading);
    assert!(renders[0].entity.is_none());

    let settled = &renders[1];
    assert!(!settled.loading);
    assert!(!settled.error);
    assert_eq!(settled.entity.as_ref().map(|p| p.id.as_str()), Some("p-9"));
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn test_property_details_fetch_failure() {
    let (shell, _) = property_shell(true);

    assert_eq!(shell.initial_props("p-9"), Some(ViewProps::loading()));
    assert_eq!(shell.settle("p-9").await, Some(ViewProps::failed()));
}

#[tokio::test]
async fn test_property_details_missing_record() {
    let (shell, calls) = property_shell(false);

    let props = shell.settle("p-404").await.unwrap();
    assert!(props.is_not_found());
    assert_eq!(calls.get(), 1);
}

#[tokio::test]
async fn test_empty_id_never_reaches_backend() {
    let (shell, calls) = property_shell(false);

    let renders: Vec<_> = shell.renders("").collect().await;
    assert_eq!(renders, vec![ViewProps::empty()]);
    assert_eq!(calls.get(), 0);
}

#[test]
fn test_titles_follow_app_name() {
    let mut config = AppConfig::default();
    config.apply_overrides(|key| (key == "ESTATE_APP_NAME").then(|| "Harbor Realty".to_string()));

    for screen in Screen::all() {
        let shell = PageShell::<Property>::new(*screen);
        assert_eq!(
            shell.title(&config),
            format!("{} | Dashboard - Harbor Realty", screen.label())
        );
    }
}

#[test]
fn test_navigation_restores_title() {
    let config = AppConfig::default();
    let document = MemoryTitle::new("Estate CRM");

    {
        let list = PageShell::<Property>::new(Screen::PropertyList);
        let _guard = list.mount(&config, document.clone());
        assert_eq!(document.current(), "Property List | Dashboard - Estate CRM");
    }

    assert_eq!(document.current(), "Estate CRM");
}
