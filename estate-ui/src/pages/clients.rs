//! Client screens

use estate_admin::domain::Client;
use estate_admin::mock;
use estate_admin::page::{PageShell, Screen};
use estate_admin::resolver::Strategy;
use leptos::*;

use super::{detail_page, form_page, format_time, list_page};
use crate::views::{Field, FieldKind, FormField};

static CLIENT_FIELDS: &[FormField] = &[
    FormField::required("name", "Name", FieldKind::Text),
    FormField::required("email", "Email", FieldKind::Email),
    FormField::optional("phoneNumber", "Phone", FieldKind::Text),
    FormField::optional("address.street", "Street", FieldKind::Text),
    FormField::required("address.city", "City", FieldKind::Text),
    FormField::optional("address.state", "State", FieldKind::Text),
    FormField::optional("address.zipCode", "Zip code", FieldKind::Text),
    FormField::optional("address.country", "Country", FieldKind::Text),
    FormField::required("status", "Status", FieldKind::Text),
    FormField::required("type", "Type", FieldKind::Text),
];

fn describe(client: Client) -> Vec<Field> {
    vec![
        Field::new("Name", &client.name),
        Field::new("Email", &client.email),
        Field::optional("Phone", client.phone_number.as_ref()),
        Field::new("Address", client.address.one_line()),
        Field::new("Status", &client.status),
        Field::new("Type", &client.kind),
        Field::new("Created", format_time(&client.timestamps.created_at)),
        Field::new("Updated", format_time(&client.timestamps.updated_at)),
    ]
}

#[component]
pub fn ClientList() -> impl IntoView {
    list_page(
        Screen::ClientList,
        mock::clients(),
        Screen::ClientDetails,
        Some(Screen::ClientCreate),
    )
}

#[component]
pub fn ClientCreate() -> impl IntoView {
    form_page::<Client>(Screen::ClientCreate, CLIENT_FIELDS, None)
}

#[component]
pub fn ClientDetails() -> impl IntoView {
    let shell = PageShell::with_strategy(Screen::ClientDetails, Strategy::lookup(mock::clients()));
    detail_page(shell, describe, Some(Screen::ClientEdit))
}

#[component]
pub fn ClientEdit() -> impl IntoView {
    form_page(
        Screen::ClientEdit,
        CLIENT_FIELDS,
        Some(Strategy::lookup(mock::clients())),
    )
}
