//! Wallet screens

use estate_admin::config::AppConfig;
use estate_admin::domain::Transfer;
use estate_admin::mock;
use estate_admin::page::{PageShell, Screen};
use estate_admin::resolver::Strategy;
use leptos::*;

use super::{detail_page, format_time, list_page};
use crate::api::ApiResolver;
use crate::views::Field;

fn describe(transfer: Transfer) -> Vec<Field> {
    vec![
        Field::new("Reference", &transfer.reference),
        Field::new("Amount", transfer.amount),
        Field::new("From", &transfer.from_wallet),
        Field::new("To", &transfer.to_wallet),
        Field::new("Status", &transfer.status),
        Field::new("Type", &transfer.kind),
        Field::new("Created", format_time(&transfer.timestamps.created_at)),
        Field::new("Updated", format_time(&transfer.timestamps.updated_at)),
    ]
}

#[component]
pub fn WalletTransfers() -> impl IntoView {
    list_page(
        Screen::WalletTransfers,
        mock::transfers(),
        Screen::WalletTransferDetails,
        None,
    )
}

#[component]
pub fn WalletTransferDetails() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let shell = PageShell::with_strategy(
        Screen::WalletTransferDetails,
        Strategy::fetch(ApiResolver::<Transfer>::new(&config.api)),
    );
    detail_page(shell, describe, None)
}
