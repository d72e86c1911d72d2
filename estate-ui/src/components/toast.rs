//! Save and error notices
//!
//! Each notice clears itself on a timer, or on its close button.

use leptos::*;

use crate::state::GlobalState;

#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="fixed bottom-20 right-4 z-50 space-y-2" aria-live="polite">
            {move || state.success.get().map(|msg| view! {
                <Notice message=msg kind=NoticeKind::Saved on_dismiss=move || state.success.set(None) />
            })}
            {move || state.error.get().map(|msg| view! {
                <Notice message=msg kind=NoticeKind::Failed on_dismiss=move || state.error.set(None) />
            })}
        </div>
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoticeKind {
    Saved,
    Failed,
}

impl NoticeKind {
    fn icon(self) -> &'static str {
        match self {
            NoticeKind::Saved => "✓",
            NoticeKind::Failed => "✕",
        }
    }

    fn class(self) -> &'static str {
        match self {
            NoticeKind::Saved => "bg-green-600",
            NoticeKind::Failed => "bg-red-600",
        }
    }
}

#[component]
fn Notice<F>(
    #[prop(into)]
    message: String,
    kind: NoticeKind,
    on_dismiss: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg animate-slide-in",
            kind.class()
        )>
            <span class="text-lg">{kind.icon()}</span>
            <span class="text-sm font-medium flex-1">{message}</span>
            <button
                type="button"
                class="text-white/70 hover:text-white"
                aria-label="Dismiss"
                on:click=move |_| on_dismiss()
            >
                "×"
            </button>
        </div>
    }
}
