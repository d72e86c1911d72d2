//! Property screens
//!
//! Property details and the edit prefill are fetched from the backend; the
//! list reads the bundled records.

use estate_admin::config::AppConfig;
use estate_admin::domain::Property;
use estate_admin::mock;
use estate_admin::page::{PageShell, Screen};
use estate_admin::resolver::Strategy;
use leptos::*;

use super::{detail_page, form_page, format_time, list_page};
use crate::api::ApiResolver;
use crate::views::{Field, FieldKind, FormField};

static PROPERTY_FIELDS: &[FormField] = &[
    FormField::required("name", "Name", FieldKind::Text),
    FormField::required("area", "Area (m²)", FieldKind::Number),
    FormField::required("price", "Price", FieldKind::Money),
    FormField::optional("address.street", "Street", FieldKind::Text),
    FormField::required("address.city", "City", FieldKind::Text),
    FormField::optional("address.state", "State", FieldKind::Text),
    FormField::optional("address.zipCode", "Zip code", FieldKind::Text),
    FormField::optional("address.country", "Country", FieldKind::Text),
    FormField::required("status", "Status", FieldKind::Text),
    FormField::required("type", "Type", FieldKind::Text),
    FormField::optional("developmentId", "Development", FieldKind::Text),
];

fn describe(property: Property) -> Vec<Field> {
    vec![
        Field::new("Name", &property.name),
        Field::new("Price", property.price),
        Field::new("Area", format!("{} m²", property.area)),
        Field::new("Address", property.address.one_line()),
        Field::new("Status", &property.status),
        Field::new("Type", &property.kind),
        Field::optional("Development", property.development_id.as_ref()),
        Field::new("Listed", format_time(&property.timestamps.created_at)),
        Field::new("Updated", format_time(&property.timestamps.updated_at)),
    ]
}

#[component]
pub fn PropertyList() -> impl IntoView {
    list_page(
        Screen::PropertyList,
        mock::properties(),
        Screen::PropertyDetails,
        Some(Screen::PropertyCreate),
    )
}

#[component]
pub fn PropertyCreate() -> impl IntoView {
    form_page::<Property>(Screen::PropertyCreate, PROPERTY_FIELDS, None)
}

#[component]
pub fn PropertyDetails() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let shell = PageShell::with_strategy(
        Screen::PropertyDetails,
        Strategy::fetch(ApiResolver::<Property>::new(&config.api)),
    );
    detail_page(shell, describe, Some(Screen::PropertyEdit))
}

#[component]
pub fn PropertyEdit() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    form_page(
        Screen::PropertyEdit,
        PROPERTY_FIELDS,
        Some(Strategy::fetch(ApiResolver::<Property>::new(&config.api))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_round_trips_property() {
        let property = mock::properties().get("p-9").cloned().unwrap();
        let record = serde_json::to_value(&property).unwrap();

        let inputs: Vec<String> = PROPERTY_FIELDS.iter().map(|f| f.read(&record)).collect();
        assert_eq!(inputs[2], "685000.00");

        let body = crate::views::form::build_body(PROPERTY_FIELDS.iter().zip(inputs)).unwrap();
        assert_eq!(body["price"], 68_500_000);
        assert_eq!(body["address"]["city"], "Portland");
        assert_eq!(body["developmentId"], "d-1");
    }
}
