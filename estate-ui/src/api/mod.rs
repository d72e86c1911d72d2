//! Backend access from the browser

pub mod client;

pub use client::{save_record, ApiResolver, BrowserSession, DocumentTitle, SaveMethod};
