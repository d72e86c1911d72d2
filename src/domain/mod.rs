//! Domain Records
//!
//! Entity records for every dashboard section and the [`Entity`] trait that
//! filters, resolvers and views are written against.

mod records;
mod types;

pub use records::{Client, Development, Lead, Property, Transfer, User};
pub use types::{Address, Money, Timestamps};

/// Common accessors shared by every record
///
/// `id` is unique within the record's collection.
pub trait Entity: Clone + std::fmt::Debug + 'static {
    /// REST collection name, e.g. `"clients"`
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    /// Name shown in lists and page headings
    fn display_name(&self) -> &str;

    fn status(&self) -> Option<&str> {
        None
    }

    fn kind(&self) -> Option<&str> {
        None
    }

    /// Monetary value used by price filters
    fn price(&self) -> Option<Money> {
        None
    }

    fn timestamps(&self) -> &Timestamps;
}
