//! Filter Bar Component
//!
//! Edits a [`ListFilter`] in place. Blank inputs clear their criterion.

use chrono::NaiveDate;
use estate_admin::domain::Money;
use estate_admin::filter::ListFilter;
use leptos::*;

fn text(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn price(value: &str) -> Option<Money> {
    value.trim().parse::<f64>().ok().filter(|v| *v >= 0.0).map(Money::from_major)
}

fn date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[component]
pub fn FilterBar(
    filter: RwSignal<ListFilter>,
    /// Status values seen in the collection
    statuses: Vec<String>,
    /// Type values seen in the collection
    kinds: Vec<String>,
    /// Show the price bounds
    #[prop(default = false)]
    priced: bool,
) -> impl IntoView {
    let input_class = "bg-gray-700 rounded-lg px-3 py-2 text-white border border-gray-600 \
                       focus:border-primary-500 focus:outline-none";

    view! {
        <form
            class="bg-gray-800 rounded-xl p-4 grid md:grid-cols-4 gap-3"
            on:submit=|ev: ev::SubmitEvent| ev.prevent_default()
        >
            <input
                type="search"
                placeholder="Name"
                class=input_class
                on:input=move |ev| filter.update(|f| f.name = text(event_target_value(&ev)))
            />

            <Choice label="Any status" options=statuses input_class=input_class
                on_change=move |v| filter.update(|f| f.status = text(v)) />

            <Choice label="Any type" options=kinds input_class=input_class
                on_change=move |v| filter.update(|f| f.kind = text(v)) />

            <div class="flex space-x-2">
                <input type="date" class=input_class
                    on:change=move |ev| filter.update(|f| f.created.from = date(&event_target_value(&ev))) />
                <input type="date" class=input_class
                    on:change=move |ev| filter.update(|f| f.created.to = date(&event_target_value(&ev))) />
            </div>

            {priced.then(|| view! {
                <input type="number" min="0" step="0.01" placeholder="Min price" class=input_class
                    on:input=move |ev| filter.update(|f| f.price.min = price(&event_target_value(&ev))) />
                <input type="number" min="0" step="0.01" placeholder="Max price" class=input_class
                    on:input=move |ev| filter.update(|f| f.price.max = price(&event_target_value(&ev))) />
            })}

            <button
                type="reset"
                class="px-4 py-2 rounded-lg text-sm bg-gray-700 text-gray-300 hover:text-white"
                on:click=move |_| filter.set(ListFilter::new())
            >
                "Clear"
            </button>
        </form>
    }
}

#[component]
fn Choice(
    label: &'static str,
    options: Vec<String>,
    input_class: &'static str,
    on_change: impl Fn(String) + 'static,
) -> impl IntoView {
    view! {
        <select class=input_class on:change=move |ev| on_change(event_target_value(&ev))>
            <option value="">{label}</option>
            {options
                .into_iter()
                .map(|o| view! { <option value=o.clone()>{o}</option> })
                .collect_view()}
        </select>
    }
}
