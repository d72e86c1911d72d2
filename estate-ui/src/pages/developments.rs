//! Development screens

use estate_admin::domain::Development;
use estate_admin::mock;
use estate_admin::page::{PageShell, Screen};
use estate_admin::resolver::Strategy;
use leptos::*;

use super::{detail_page, format_time, list_page};
use crate::views::Field;

fn describe(development: Development) -> Vec<Field> {
    vec![
        Field::new("Name", &development.name),
        Field::new("Units", development.units),
        Field::new("Price", development.price),
        Field::new("Area", format!("{} m²", development.area)),
        Field::new("Address", development.address.one_line()),
        Field::new("Status", &development.status),
        Field::new("Type", &development.kind),
        Field::new("Created", format_time(&development.timestamps.created_at)),
    ]
}

#[component]
pub fn DevelopmentList() -> impl IntoView {
    list_page(
        Screen::DevelopmentList,
        mock::developments(),
        Screen::DevelopmentDetails,
        None,
    )
}

#[component]
pub fn DevelopmentDetails() -> impl IntoView {
    let shell = PageShell::with_strategy(
        Screen::DevelopmentDetails,
        Strategy::lookup(mock::developments()),
    );
    detail_page(shell, describe, None)
}
