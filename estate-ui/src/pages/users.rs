//! User screens

use estate_admin::domain::User;
use estate_admin::mock;
use estate_admin::page::{PageShell, Screen};
use estate_admin::resolver::Strategy;
use leptos::*;

use super::{detail_page, form_page, format_time, list_page};
use crate::views::{Field, FieldKind, FormField};

static USER_FIELDS: &[FormField] = &[
    FormField::required("name", "Name", FieldKind::Text),
    FormField::required("email", "Email", FieldKind::Email),
    FormField::required("role", "Role", FieldKind::Text),
    FormField::required("status", "Status", FieldKind::Text),
];

fn describe(user: User) -> Vec<Field> {
    vec![
        Field::new("Name", &user.name),
        Field::new("Email", &user.email),
        Field::new("Role", &user.role),
        Field::new("Status", &user.status),
        Field::new("Member since", format_time(&user.timestamps.created_at)),
    ]
}

#[component]
pub fn UserList() -> impl IntoView {
    list_page(
        Screen::UserList,
        mock::users(),
        Screen::UserProfile,
        Some(Screen::UserCreate),
    )
}

#[component]
pub fn UserCreate() -> impl IntoView {
    form_page::<User>(Screen::UserCreate, USER_FIELDS, None)
}

#[component]
pub fn UserProfile() -> impl IntoView {
    let shell = PageShell::with_strategy(Screen::UserProfile, Strategy::lookup(mock::users()));
    detail_page(shell, describe, None)
}
