//! Page Shells
//!
//! One component per routing-table row. A page mounts its title guard,
//! resolves its record through the declared strategy, and hands a view
//! nothing but props.

pub mod clients;
pub mod developments;
pub mod leads;
pub mod overview;
pub mod properties;
pub mod users;
pub mod wallet;

pub use clients::{ClientCreate, ClientDetails, ClientEdit, ClientList};
pub use developments::{DevelopmentDetails, DevelopmentList};
pub use leads::{LeadDetails, LeadList};
pub use overview::Overview;
pub use properties::{PropertyCreate, PropertyDetails, PropertyEdit, PropertyList};
pub use users::{UserCreate, UserList, UserProfile};
pub use wallet::{WalletTransferDetails, WalletTransfers};

use estate_admin::config::AppConfig;
use estate_admin::domain::Entity;
use estate_admin::filter::ListFilter;
use estate_admin::page::{PageShell, Screen};
use estate_admin::resolver::{MockCollection, Strategy, ViewProps};
use leptos::*;
use leptos_router::*;
use serde::Serialize;
use serde_json::Value;

use crate::api::{DocumentTitle, SaveMethod};
use crate::components::{FilterBar, Loading};
use crate::views::{DetailView, Field, FormField, RecordForm, RecordTable, Row};

/// Write the shell's title for as long as the page is mounted
pub fn mount_title<E: Entity>(shell: &PageShell<E>) {
    let config = expect_context::<AppConfig>();
    let guard = shell.mount(&config, DocumentTitle);
    on_cleanup(move || drop(guard));
}

/// The `:id` path parameter, empty when absent
pub fn use_route_id() -> Memo<String> {
    let params = use_params_map();
    create_memo(move |_| params.with(|p| p.get("id").cloned().unwrap_or_default()))
}

/// Props for the current id under the given strategy
///
/// A lookup settles synchronously. A fetch shows the loading props until
/// its resource resolves for the current id, and refetches when the id
/// changes.
pub fn use_entity<E: Entity>(strategy: Strategy<E>, id: Memo<String>) -> Signal<ViewProps<E>> {
    if !strategy.is_async() {
        return Signal::derive(move || id.with(|id| strategy.initial(id)));
    }

    let fetcher = strategy.clone();
    let resource = create_local_resource(
        move || id.get(),
        move |id| {
            let strategy = fetcher.clone();
            async move { strategy.settle(&id).await }
        },
    );

    Signal::derive(move || {
        let pending = resource.loading().get();
        let settled = resource.get();
        id.with(|id| fetched_props(&strategy, id, pending, settled))
    })
}

/// Settled props for `id`, or the strategy's initial props while they are
/// pending or still describe the previous record
fn fetched_props<E: Entity>(
    strategy: &Strategy<E>,
    id: &str,
    pending: bool,
    settled: Option<ViewProps<E>>,
) -> ViewProps<E> {
    match settled {
        Some(props) if !pending && props.entity.as_ref().map_or(true, |e| e.id() == id) => props,
        _ => strategy.initial(id),
    }
}

fn format_time(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut values: Vec<String> = values.map(str::to_string).collect();
    values.sort_unstable();
    values.dedup();
    values
}

/// Filterable table over a bundled collection
pub fn list_page<E: Entity>(
    screen: Screen,
    records: MockCollection<E>,
    details: Screen,
    create: Option<Screen>,
) -> impl IntoView {
    mount_title(&PageShell::<E>::new(screen));

    let priced = records.all().iter().any(|r| r.price().is_some());
    let statuses = distinct(records.all().iter().filter_map(|r| r.status()));
    let kinds = distinct(records.all().iter().filter_map(|r| r.kind()));
    let total = records.len();

    let filter = create_rw_signal(ListFilter::new());
    let records = store_value(records);
    let rows = Signal::derive(move || {
        filter.with(|f| {
            records.with_value(|c| c.filter(f).into_iter().map(|e| Row::from_entity(e)).collect::<Vec<_>>())
        })
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{screen.label()}</h1>
                    <p class="text-gray-400 mt-1">
                        {move || format!("{} of {} records", rows.with(Vec::len), total)}
                    </p>
                </div>
                {create.map(|create| view! {
                    <A
                        href=create.path()
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        {format!("+ New {}", details.section().map(|s| s.label()).unwrap_or_default())}
                    </A>
                })}
            </div>

            <FilterBar filter=filter statuses=statuses kinds=kinds priced=priced />
            <RecordTable rows=rows details=details priced=priced />
        </div>
    }
}

/// Detail card for the record named by the route
pub fn detail_page<E: Entity>(
    shell: PageShell<E>,
    describe: fn(E) -> Vec<Field>,
    edit: Option<Screen>,
) -> impl IntoView {
    mount_title(&shell);

    let id = use_route_id();
    let props = match shell.strategy() {
        Some(strategy) => use_entity(strategy.clone(), id),
        None => Signal::derive(ViewProps::empty),
    };
    let fields = Signal::derive(move || props.get().map(describe));
    let back = shell
        .screen()
        .section()
        .map(|s| s.list_screen())
        .unwrap_or(Screen::Overview);

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{shell.screen().label()}</h1>
            <DetailView props=fields back=back edit=edit id=id />
        </div>
    }
}

/// What an edit form can show for its resolved record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditGate {
    Ready,
    Loading,
    Failed,
    Missing,
}

impl EditGate {
    fn of<E>(method: SaveMethod, props: &ViewProps<E>) -> Self {
        match method {
            SaveMethod::Create => EditGate::Ready,
            SaveMethod::Update if props.loading => EditGate::Loading,
            SaveMethod::Update if props.error => EditGate::Failed,
            SaveMethod::Update if props.entity.is_none() => EditGate::Missing,
            SaveMethod::Update => EditGate::Ready,
        }
    }
}

fn prefill<E: Serialize>(props: &ViewProps<E>) -> Option<Value> {
    props
        .entity
        .as_ref()
        .and_then(|record| serde_json::to_value(record).ok())
}

/// Create form, or edit form prefilled through `existing`
///
/// An edit form resolves its record with the same strategy as the details
/// screen, and only renders once that record is found.
pub fn form_page<E: Entity + Serialize>(
    screen: Screen,
    fields: &'static [FormField],
    existing: Option<Strategy<E>>,
) -> impl IntoView {
    let config = expect_context::<AppConfig>();
    mount_title(&PageShell::<E>::new(screen));

    let id = use_route_id();
    let method = if screen.takes_id() {
        SaveMethod::Update
    } else {
        SaveMethod::Create
    };

    let api = config.api.clone();
    let url = Signal::derive(move || match method {
        SaveMethod::Create => api.collection_url(E::COLLECTION),
        SaveMethod::Update => id.with(|id| api.entity_url(E::COLLECTION, id)),
    });

    let props = match existing {
        Some(strategy) => use_entity(strategy, id),
        None => Signal::derive(ViewProps::empty),
    };
    let record = Signal::derive(move || props.with(prefill));
    let gate = create_memo(move |_| props.with(|p| EditGate::of(method, p)));

    let done = screen
        .section()
        .map(|s| s.list_screen())
        .unwrap_or(Screen::Overview);

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{screen.label()}</h1>
            {move || match gate.get() {
                EditGate::Ready => view! {
                    <RecordForm fields=fields method=method url=url record=record done=done />
                }
                .into_view(),
                EditGate::Loading => view! {
                    <Loading label=Signal::derive(move || format!("Loading {}", id.get())) />
                }
                .into_view(),
                EditGate::Failed => view! {
                    <div class="bg-red-900/40 border border-red-700 rounded-xl p-6">
                        <h2 class="text-lg font-semibold">"Failed to load"</h2>
                        <p class="text-gray-300 mt-1">"The record could not be fetched, so it cannot be edited."</p>
                    </div>
                }
                .into_view(),
                EditGate::Missing => view! {
                    <div class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-lg font-semibold">"Not found"</h2>
                        <p class="text-gray-400 mt-1">
                            {move || format!("No record with id \"{}\".", id.get())}
                        </p>
                        <A href=done.path() class="text-sm text-primary-400 hover:underline">
                            {format!("Back to {}", done.label())}
                        </A>
                    </div>
                }
                .into_view(),
            }}
        </div>
    }
}
