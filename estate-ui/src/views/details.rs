//! Detail card for a single resolved record

use estate_admin::page::Screen;
use estate_admin::resolver::ViewProps;
use leptos::*;
use leptos_router::*;

use crate::components::Loading;

/// One labelled value on a detail card
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    pub fn new(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
        }
    }

    /// `-` for a missing value
    pub fn optional(label: &'static str, value: Option<impl ToString>) -> Self {
        Self {
            label,
            value: value.map_or_else(|| "-".to_string(), |v| v.to_string()),
        }
    }
}

/// Renders whatever state the page shell handed over
#[component]
pub fn DetailView(
    #[prop(into)]
    props: Signal<ViewProps<Vec<Field>>>,
    /// Section list to fall back to
    back: Screen,
    /// Edit screen for this record, if the section has one
    #[prop(default = None)]
    edit: Option<Screen>,
    #[prop(into)]
    id: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <A href=back.path() class="text-sm text-gray-400 hover:text-white">
                    {format!("← Back to {}", back.label())}
                </A>
                {move || edit.map(|screen| view! {
                    <A
                        href=screen.href(&id.get())
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Edit"
                    </A>
                })}
            </div>

            {move || {
                let props = props.get();
                if props.loading {
                    view! { <Loading label=Signal::derive(move || format!("Loading {}", id.get())) /> }.into_view()
                } else if props.error {
                    view! {
                        <div class="bg-red-900/40 border border-red-700 rounded-xl p-6">
                            <h2 class="text-lg font-semibold">"Failed to load"</h2>
                            <p class="text-gray-300 mt-1">"The record could not be fetched. Try again later."</p>
                        </div>
                    }
                    .into_view()
                } else {
                    match props.entity {
                        Some(fields) => view! {
                            <dl class="bg-gray-800 rounded-xl p-6 grid md:grid-cols-2 gap-4">
                                {fields
                                    .into_iter()
                                    .map(|field| view! {
                                        <div>
                                            <dt class="text-sm text-gray-400">{field.label}</dt>
                                            <dd class="text-lg">{field.value}</dd>
                                        </div>
                                    })
                                    .collect_view()}
                            </dl>
                        }
                        .into_view(),
                        None => view! {
                            <div class="bg-gray-800 rounded-xl p-12 text-center">
                                <h2 class="text-xl font-semibold">"Not found"</h2>
                                <p class="text-gray-400 mt-1">
                                    {move || format!("No record with id \"{}\".", id.get())}
                                </p>
                            </div>
                        }
                        .into_view(),
                    }
                }
            }}
        </div>
    }
}
