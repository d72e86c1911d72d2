//! Record table for list screens

use estate_admin::domain::Entity;
use estate_admin::page::Screen;
use leptos::*;
use leptos_router::*;

/// One table row, flattened from any record
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub name: String,
    pub status: String,
    pub kind: String,
    pub price: Option<String>,
    pub created: String,
}

impl Row {
    pub fn from_entity<E: Entity>(entity: &E) -> Self {
        Self {
            id: entity.id().to_string(),
            name: entity.display_name().to_string(),
            status: entity.status().unwrap_or("-").to_string(),
            kind: entity.kind().unwrap_or("-").to_string(),
            price: entity.price().map(|p| p.to_string()),
            created: entity.timestamps().created_at.format("%Y-%m-%d").to_string(),
        }
    }
}

#[component]
pub fn RecordTable(
    #[prop(into)]
    rows: Signal<Vec<Row>>,
    /// Screen each row links to
    details: Screen,
    #[prop(default = false)]
    priced: bool,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl overflow-hidden">
            <table class="w-full text-left">
                <thead class="bg-gray-700 text-gray-300 text-sm">
                    <tr>
                        <th class="px-4 py-3">"Name"</th>
                        <th class="px-4 py-3">"Status"</th>
                        <th class="px-4 py-3">"Type"</th>
                        {priced.then(|| view! { <th class="px-4 py-3 text-right">"Price"</th> })}
                        <th class="px-4 py-3">"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows.get();
                        if rows.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="5" class="px-4 py-12 text-center text-gray-400">
                                        "No records match these filters."
                                    </td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            rows.into_iter()
                                .map(|row| {
                                    let href = details.href(&row.id);
                                    view! {
                                        <tr class="border-t border-gray-700 hover:bg-gray-700/50">
                                            <td class="px-4 py-3">
                                                <A href=href class="text-primary-400 hover:underline">{row.name}</A>
                                            </td>
                                            <td class="px-4 py-3 capitalize">{row.status}</td>
                                            <td class="px-4 py-3 capitalize">{row.kind}</td>
                                            {priced.then(|| view! {
                                                <td class="px-4 py-3 text-right tabular-nums">
                                                    {row.price.unwrap_or_else(|| "-".to_string())}
                                                </td>
                                            })}
                                            <td class="px-4 py-3 text-gray-400">{row.created}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
