//! Breadcrumb bar for the current route

use estate_admin::page::Screen;
use leptos::*;
use leptos_router::*;

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let location = use_location();
    let crumbs = create_memo(move |_| {
        location
            .pathname
            .with(|path| Screen::match_path(path))
            .map(|(screen, _)| screen.breadcrumbs())
            .unwrap_or_default()
    });

    view! {
        <ol class="flex items-center space-x-2 text-sm text-gray-400 mb-6">
            {move || {
                let crumbs = crumbs.get();
                let last = crumbs.len().saturating_sub(1);
                crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        let label = match crumb.href {
                            Some(href) => view! {
                                <A href=href class="hover:text-white">{crumb.label}</A>
                            }
                            .into_view(),
                            None => view! {
                                <span class="text-white">{crumb.label}</span>
                            }
                            .into_view(),
                        };
                        view! {
                            <li class="flex items-center space-x-2">
                                {label}
                                {(i < last).then(|| view! { <span>"/"</span> })}
                            </li>
                        }
                    })
                    .collect_view()
            }}
        </ol>
    }
}
