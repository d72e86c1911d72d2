//! Overview Page
//!
//! Record counts per section.

use estate_admin::domain::Property;
use estate_admin::mock;
use estate_admin::page::{PageShell, Screen, Section};
use leptos::*;
use leptos_router::*;

use super::mount_title;

fn count(section: Section) -> usize {
    match section {
        Section::Client => mock::clients().len(),
        Section::Lead => mock::leads().len(),
        Section::Property => mock::properties().len(),
        Section::Development => mock::developments().len(),
        Section::User => mock::users().len(),
        Section::Wallet => mock::transfers().len(),
    }
}

#[component]
pub fn Overview() -> impl IntoView {
    mount_title(&PageShell::<Property>::new(Screen::Overview));

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Overview"</h1>
                <p class="text-gray-400 mt-1">"Everything the agency is tracking"</p>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                {Section::ALL
                    .into_iter()
                    .map(|section| view! {
                        <A
                            href=section.path()
                            class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600 transition-colors"
                        >
                            <div class="text-sm text-gray-400">{section.list_screen().label()}</div>
                            <div class="text-3xl font-bold mt-2">{count(section)}</div>
                        </A>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
