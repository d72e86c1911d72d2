//! Lead screens

use estate_admin::domain::Lead;
use estate_admin::mock;
use estate_admin::page::{PageShell, Screen};
use estate_admin::resolver::Strategy;
use leptos::*;

use super::{detail_page, format_time, list_page};
use crate::views::Field;

fn describe(lead: Lead) -> Vec<Field> {
    vec![
        Field::new("Name", &lead.name),
        Field::new("Email", &lead.email),
        Field::optional("Phone", lead.phone_number.as_ref()),
        Field::new("Source", &lead.source),
        Field::new("Status", &lead.status),
        Field::new("Type", &lead.kind),
        Field::optional("Budget", lead.budget),
        Field::optional("Client", lead.client_id.as_ref()),
        Field::new("Created", format_time(&lead.timestamps.created_at)),
    ]
}

#[component]
pub fn LeadList() -> impl IntoView {
    list_page(Screen::LeadList, mock::leads(), Screen::LeadDetails, None)
}

#[component]
pub fn LeadDetails() -> impl IntoView {
    let shell = PageShell::with_strategy(Screen::LeadDetails, Strategy::lookup(mock::leads()));
    detail_page(shell, describe, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_lead_budget() {
        let lead = mock::leads().get("l-1").cloned().unwrap();
        let fields = describe(lead);
        assert_eq!(fields[6], Field::new("Budget", "450,000.00"));
        assert_eq!(fields[7], Field::new("Client", "-"));
    }
}
