//! Navigation Component
//!
//! Header navigation bar with the app name and one link per section.

use estate_admin::config::AppConfig;
use estate_admin::page::{Section, Surface};
use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let logo = config.asset_url("logo.svg");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href=Surface::Dashboard.path() class="flex items-center space-x-3">
                        <img src=logo alt="" class="w-8 h-8" />
                        <span class="text-xl font-bold text-white">{config.app_name}</span>
                    </A>

                    // Section links
                    <div class="flex items-center space-x-1">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink href=section.path() label=section.label() /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
