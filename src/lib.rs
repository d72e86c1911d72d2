//! # Estate Admin
//!
//! Core of the real-estate CRM admin dashboard: the routing table and page
//! shell contract, the session bootstrap, and the record resolvers every
//! screen builds on. The crate is platform-neutral so the browser UI and the
//! native CLI share it.
//!
//! ## Modules
//!
//! - [`page`]: screens, document titles, breadcrumbs and page shells
//! - [`resolver`]: synchronous and asynchronous record resolution
//! - [`session`]: one-shot CSRF cookie bootstrap
//! - [`domain`]: record shapes for each dashboard section
//! - [`filter`]: list filtering criteria
//! - [`mock`]: bundled records for the lookup strategy
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use estate_admin::config::AppConfig;
//! use estate_admin::page::{PageShell, Screen};
//! use estate_admin::resolver::Strategy;
//!
//! let config = AppConfig::default();
//! let shell = PageShell::with_strategy(
//!     Screen::ClientDetails,
//!     Strategy::lookup(estate_admin::mock::clients()),
//! );
//!
//! assert_eq!(shell.title(&config), "Client Details | Dashboard - Estate CRM");
//!
//! let props = shell.initial_props("c-42").unwrap();
//! assert_eq!(props.entity.map(|c| c.name), Some("Acme".to_string()));
//! assert!(!props.loading && !props.error);
//! ```

pub mod config;
pub mod domain;
pub mod filter;
pub mod mock;
pub mod page;
pub mod resolver;
pub mod session;

pub use config::AppConfig;
pub use domain::{Client, Development, Entity, Lead, Property, Transfer, User};
pub use filter::ListFilter;
pub use page::{PageShell, Screen};
pub use resolver::{AsyncResolver, Resolver, Strategy, ViewProps};
pub use session::{BootstrapOutcome, SessionBootstrap};
