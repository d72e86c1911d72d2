//! Bundled mock records
//!
//! Screens that use the synchronous lookup strategy read from these
//! collections. The fixtures are compiled into the binary.

use serde::de::DeserializeOwned;

use crate::domain::{Client, Development, Entity, Lead, Property, Transfer, User};
use crate::resolver::MockCollection;

const CLIENTS: &str = include_str!("fixtures/clients.json");
const LEADS: &str = include_str!("fixtures/leads.json");
const PROPERTIES: &str = include_str!("fixtures/properties.json");
const DEVELOPMENTS: &str = include_str!("fixtures/developments.json");
const USERS: &str = include_str!("fixtures/users.json");
const TRANSFERS: &str = include_str!("fixtures/transfers.json");

fn load<E: Entity + DeserializeOwned>(json: &str) -> MockCollection<E> {
    match MockCollection::from_json(json) {
        Ok(collection) => collection,
        Err(e) => {
            tracing::error!(collection = E::COLLECTION, error = %e, "Invalid mock fixture");
            MockCollection::default()
        }
    }
}

pub fn clients() -> MockCollection<Client> {
    load(CLIENTS)
}

pub fn leads() -> MockCollection<Lead> {
    load(LEADS)
}

pub fn properties() -> MockCollection<Property> {
    load(PROPERTIES)
}

pub fn developments() -> MockCollection<Development> {
    load(DEVELOPMENTS)
}

pub fn users() -> MockCollection<User> {
    load(USERS)
}

pub fn transfers() -> MockCollection<Transfer> {
    load(TRANSFERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        assert_eq!(clients().len(), 3);
        assert_eq!(leads().len(), 3);
        assert_eq!(properties().len(), 3);
        assert_eq!(developments().len(), 2);
        assert_eq!(users().len(), 3);
        assert_eq!(transfers().len(), 2);
    }

    #[test]
    fn test_fixture_timestamps_are_ordered() {
        assert!(clients().all().iter().all(|c| c.timestamps.is_consistent()));
        assert!(properties().all().iter().all(|p| p.timestamps.is_consistent()));
        assert!(transfers().all().iter().all(|t| t.timestamps.is_consistent()));
    }

    #[test]
    fn test_known_records() {
        assert_eq!(clients().get("c-42").map(|c| c.name.as_str()), Some("Acme"));
        assert!(properties().get("p-9").is_some());
        assert_eq!(
            leads().get("l-2").and_then(|l| l.client_id.clone()),
            Some("c-7".to_string())
        );
    }
}
