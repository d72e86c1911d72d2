//! Shared value types used by every record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monetary amount stored in minor units (cents)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Build from a major-unit amount, rounding to the nearest cent
    pub fn from_major(major: f64) -> Self {
        Self((major * 100.0).round() as i64)
    }

    pub const fn minor(&self) -> i64 {
        self.0
    }

    pub fn major(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = (abs / 100).to_string();
        let cents = abs % 100;

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}{}.{:02}", sign, grouped, cents)
    }
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    /// Single-line rendering, skipping blank parts
    pub fn one_line(&self) -> String {
        [
            self.street.as_deref(),
            Some(self.city.as_str()),
            self.state.as_deref(),
            self.zip_code.as_deref(),
            self.country.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// Creation and last-update instants of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn new(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at,
        }
    }

    /// Whether `updated_at >= created_at`. Expected of backend data, never enforced.
    pub fn is_consistent(&self) -> bool {
        self.updated_at >= self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_major(1_250_000.0).to_string(), "1,250,000.00");
        assert_eq!(Money::from_minor(99).to_string(), "0.99");
        assert_eq!(Money::from_minor(-123_456).to_string(), "-1,234.56");
        assert_eq!(Money::from_minor(100_000).to_string(), "1,000.00");
    }

    #[test]
    fn test_money_major_rounding() {
        assert_eq!(Money::from_major(19.999).minor(), 2000);
        assert_eq!(Money::from_minor(250).major(), 2.5);
    }

    #[test]
    fn test_address_one_line() {
        let address = Address {
            street: Some("12 Harbour Rd".to_string()),
            city: "Lisbon".to_string(),
            state: Some("  ".to_string()),
            zip_code: None,
            country: Some("Portugal".to_string()),
        };
        assert_eq!(address.one_line(), "12 Harbour Rd, Lisbon, Portugal");
    }

    #[test]
    fn test_timestamps_consistency() {
        let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        assert!(Timestamps::new(earlier, later).is_consistent());
        assert!(Timestamps::new(earlier, earlier).is_consistent());
        assert!(!Timestamps::new(later, earlier).is_consistent());
    }

    #[test]
    fn test_timestamps_wire_names() {
        let json = r#"{"createdAt":"2024-03-01T09:30:00Z","updatedAt":"2024-03-02T10:00:00Z"}"#;
        let ts: Timestamps = serde_json::from_str(json).unwrap();
        assert!(ts.is_consistent());
        assert_eq!(ts.created_at, Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
    }
}
