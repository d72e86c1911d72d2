//! Views
//!
//! Presentation only. Each view receives plain values from its page and
//! never resolves anything itself.

pub mod details;
pub mod form;
pub mod record_list;

pub use details::{DetailView, Field};
pub use form::{FieldKind, FormField, RecordForm};
pub use record_list::{RecordTable, Row};
