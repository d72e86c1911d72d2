//! Record shapes for each dashboard section
//!
//! Pure data-transfer descriptions. Status and type stay open strings: the
//! backend owns their vocabularies.

use serde::{Deserialize, Serialize};

use super::types::{Address, Money, Timestamps};
use super::Entity;

/// A customer of the agency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub address: Address,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// A prospective client captured from a marketing source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub source: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub budget: Option<Money>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// A single listed property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    /// Surface in square metres
    pub area: f64,
    pub address: Address,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: Money,
    #[serde(default)]
    pub development_id: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// A property development grouping several units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Development {
    pub id: String,
    pub name: String,
    pub area: f64,
    pub address: Address,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub price: Money,
    pub units: u32,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// A dashboard user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// A wallet-to-wallet payment transfer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub id: String,
    pub reference: String,
    pub from_wallet: String,
    pub to_wallet: String,
    pub amount: Money,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Entity for Client {
    const COLLECTION: &'static str = "clients";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.kind)
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

impl Entity for Lead {
    const COLLECTION: &'static str = "leads";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.kind)
    }

    fn price(&self) -> Option<Money> {
        self.budget
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

impl Entity for Property {
    const COLLECTION: &'static str = "properties";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.kind)
    }

    fn price(&self) -> Option<Money> {
        Some(self.price)
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

impl Entity for Development {
    const COLLECTION: &'static str = "developments";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.kind)
    }

    fn price(&self) -> Option<Money> {
        Some(self.price)
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    // Role doubles as the type criterion
    fn kind(&self) -> Option<&str> {
        Some(&self.role)
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

impl Entity for Transfer {
    const COLLECTION: &'static str = "transfers";

    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.reference
    }

    fn status(&self) -> Option<&str> {
        Some(&self.status)
    }

    fn kind(&self) -> Option<&str> {
        Some(&self.kind)
    }

    fn price(&self) -> Option<Money> {
        Some(self.amount)
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_from_wire() {
        let json = r#"{
            "id": "d-1",
            "name": "Marina Heights",
            "area": 5400.5,
            "address": {"city": "Porto", "zipCode": "4000-001"},
            "status": "selling",
            "type": "residential",
            "price": 125000000,
            "units": 48,
            "createdAt": "2023-05-01T00:00:00Z",
            "updatedAt": "2024-01-15T12:00:00Z"
        }"#;

        let development: Development = serde_json::from_str(json).unwrap();
        assert_eq!(development.id(), "d-1");
        assert_eq!(development.kind, "residential");
        assert_eq!(development.address.zip_code.as_deref(), Some("4000-001"));
        assert_eq!(development.price().map(|p| p.to_string()).as_deref(), Some("1,250,000.00"));
        assert!(development.timestamps().is_consistent());
    }

    #[test]
    fn test_client_serializes_camel_case() {
        let json = r#"{
            "id": "c-1",
            "name": "Acme",
            "email": "hello@acme.test",
            "phoneNumber": "+351 210 000 000",
            "address": {"city": "Lisbon"},
            "status": "active",
            "type": "company",
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;

        let client: Client = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&client).unwrap();

        assert_eq!(value["phoneNumber"], "+351 210 000 000");
        assert_eq!(value["type"], "company");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("timestamps").is_none());
    }

    #[test]
    fn test_user_role_is_kind() {
        let json = r#"{
            "id": "u-1", "name": "Ana", "email": "ana@estate.test",
            "role": "agent", "status": "active",
            "createdAt": "2024-01-01T00:00:00Z", "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.kind(), Some("agent"));
        assert_eq!(user.price(), None);
    }
}
