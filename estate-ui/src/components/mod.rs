//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod breadcrumbs;
pub mod filter_bar;
pub mod loading;
pub mod nav;
pub mod toast;

pub use breadcrumbs::Breadcrumbs;
pub use filter_bar::FilterBar;
pub use loading::Loading;
pub use nav::Nav;
pub use toast::Toast;
