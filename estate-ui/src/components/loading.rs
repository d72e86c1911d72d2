//! Loading indicator for records still being resolved

use leptos::*;

/// Spinner with an optional caption, e.g. the id being fetched
#[component]
pub fn Loading(
    #[prop(optional, into)]
    label: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-3" role="status">
            <div class="loading-spinner w-8 h-8" />
            {label.map(|label| view! {
                <span class="text-sm text-gray-400">{move || format!("{}...", label.get())}</span>
            })}
        </div>
    }
}
