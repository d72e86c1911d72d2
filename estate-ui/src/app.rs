//! App Root Component
//!
//! Main application component with routing and global providers.

use estate_admin::config::AppConfig;
use estate_admin::page::{Screen, Surface};
use estate_admin::session::{BootstrapOutcome, SessionBootstrap};
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use crate::api::BrowserSession;
use crate::components::{Breadcrumbs, Nav, Toast};
use crate::pages::*;
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let bootstrap = Rc::new(SessionBootstrap::from_config(&config.api));
    provide_context(config);
    let state = provide_global_state();

    // Ask for the session cookie once per mount
    let task = Rc::clone(&bootstrap);
    spawn_local(async move {
        let outcome = task.run(&BrowserSession).await;
        if outcome != BootstrapOutcome::Cancelled {
            state.session.set(Some(outcome));
        }
    });
    on_cleanup(move || bootstrap.cancel());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Breadcrumbs />
                    <Routes>
                        <Route path="/" view=|| view! { <Redirect path=Surface::Dashboard.path() /> } />
                        <Route path=Screen::Overview.path() view=Overview />
                        <Route path=Screen::ClientList.path() view=ClientList />
                        <Route path=Screen::ClientCreate.path() view=ClientCreate />
                        <Route path=Screen::ClientDetails.path() view=ClientDetails />
                        <Route path=Screen::ClientEdit.path() view=ClientEdit />
                        <Route path=Screen::LeadList.path() view=LeadList />
                        <Route path=Screen::LeadDetails.path() view=LeadDetails />
                        <Route path=Screen::PropertyList.path() view=PropertyList />
                        <Route path=Screen::PropertyCreate.path() view=PropertyCreate />
                        <Route path=Screen::PropertyDetails.path() view=PropertyDetails />
                        <Route path=Screen::PropertyEdit.path() view=PropertyEdit />
                        <Route path=Screen::DevelopmentList.path() view=DevelopmentList />
                        <Route path=Screen::DevelopmentDetails.path() view=DevelopmentDetails />
                        <Route path=Screen::UserList.path() view=UserList />
                        <Route path=Screen::UserCreate.path() view=UserCreate />
                        <Route path=Screen::UserProfile.path() view=UserProfile />
                        <Route path=Screen::WalletTransfers.path() view=WalletTransfers />
                        <Route path=Screen::WalletTransferDetails.path() view=WalletTransferDetails />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with session status
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer component showing session status
#[component]
fn Footer() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="flex items-center space-x-2">
                    {move || {
                        let ready = state.session.with(|s| s == &Some(BootstrapOutcome::Established));
                        let dot = if ready { "bg-green-400" } else { "bg-gray-500" };
                        view! {
                            <span class="flex items-center space-x-1 text-gray-300">
                                <span class=format!("w-2 h-2 rounded-full {}", dot) />
                                <span>{state.session_label()}</span>
                            </span>
                        }
                    }}
                </div>

                // Saving indicator
                {move || {
                    state.saving.get().then(|| view! {
                        <div class="flex items-center space-x-2 text-primary-400">
                            <div class="loading-spinner w-4 h-4" />
                            <span>"Saving..."</span>
                        </div>
                    })
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=Surface::Dashboard.path()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
