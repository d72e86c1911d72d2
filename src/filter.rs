//! List Filters
//!
//! Criteria a list screen applies to its collection: name substring, status,
//! type, price range and creation-date range. A filter lives only as long as
//! the list screen that owns it and is never persisted.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::ApiConfig;
use crate::domain::{Entity, Money};

/// Inclusive price bounds, either side optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Option<Money>,
    pub max: Option<Money>,
}

impl PriceRange {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, price: Money) -> bool {
        self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
    }
}

/// Inclusive calendar-date bounds (UTC), either side optional
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, instant: &DateTime<Utc>) -> bool {
        let date = instant.date_naive();
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// Current criteria of a list screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListFilter {
    /// Case-insensitive substring of the display name
    pub name: Option<String>,
    pub status: Option<String>,
    pub kind: Option<String>,
    pub price: PriceRange,
    pub created: DateRange,
}

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn price_between(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.price = PriceRange { min, max };
        self
    }

    pub fn created_between(mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        self.created = DateRange { from, to };
        self
    }

    /// True when no criterion is set (blank strings count as unset)
    pub fn is_empty(&self) -> bool {
        set(&self.name).is_none()
            && set(&self.status).is_none()
            && set(&self.kind).is_none()
            && self.price.is_empty()
            && self.created.is_empty()
    }

    /// Whether a record satisfies every set criterion
    pub fn matches<E: Entity>(&self, entity: &E) -> bool {
        if let Some(needle) = set(&self.name) {
            if !entity
                .display_name()
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        if let Some(status) = set(&self.status) {
            if !entity.status().is_some_and(|s| s.eq_ignore_ascii_case(status)) {
                return false;
            }
        }

        if let Some(kind) = set(&self.kind) {
            if !entity.kind().is_some_and(|k| k.eq_ignore_ascii_case(kind)) {
                return false;
            }
        }

        if !self.price.is_empty() && !entity.price().is_some_and(|p| self.price.contains(p)) {
            return false;
        }

        self.created.contains(&entity.timestamps().created_at)
    }

    /// Keep the records matching this filter, preserving order
    pub fn apply<'a, E: Entity>(&self, records: impl IntoIterator<Item = &'a E>) -> Vec<&'a E> {
        records.into_iter().filter(|e| self.matches(*e)).collect()
    }

    /// Shape the filter as URL query pairs for a list request
    ///
    /// Unset criteria are omitted; prices go out in major units.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(name) = set(&self.name) {
            pairs.push(("name", name.to_string()));
        }
        if let Some(status) = set(&self.status) {
            pairs.push(("status", status.to_string()));
        }
        if let Some(kind) = set(&self.kind) {
            pairs.push(("type", kind.to_string()));
        }
        if let Some(min) = self.price.min {
            pairs.push(("min_price", format!("{:.2}", min.major())));
        }
        if let Some(max) = self.price.max {
            pairs.push(("max_price", format!("{:.2}", max.major())));
        }
        if let Some(from) = self.created.from {
            pairs.push(("from", from.to_string()));
        }
        if let Some(to) = self.created.to {
            pairs.push(("to", to.to_string()));
        }

        pairs
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// List request URL for `E`'s collection with this filter applied
    pub fn request_url<E: Entity>(&self, api: &ApiConfig) -> String {
        let url = api.collection_url(E::COLLECTION);
        match self.to_query_string() {
            query if query.is_empty() => url,
            query => format!("{}?{}", url, query),
        }
    }
}

fn set(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
