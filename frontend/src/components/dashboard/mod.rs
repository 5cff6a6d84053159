//! Dashboard
//!
//! The `/` route: chat for the selected file on the left, the catalog of
//! uploaded files on the right. The selection comes from the
//! `file_name`/`table_name` query parameters or from clicking "Open".

pub mod file_list;

pub use file_list::FileList;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::bindings::{get_files, ApiError, FileEntry};
use crate::components::chat::ChatPanel;
use crate::components::design_system::{LinkButton, LoadingSpinner, Panel, PanelHeader};
use crate::services::navigation::{FILE_NAME_PARAM, TABLE_NAME_PARAM, UPLOAD_PATH};
use crate::services::selection::{provide_selection_state, use_selection_state, Selection};

/// Catalog as loaded for the file panel
pub type CatalogResource = LocalResource<Result<Vec<FileEntry>, ApiError>>;

#[component]
pub fn Dashboard() -> impl IntoView {
    view! { <DashboardLayout catalog=LocalResource::new(get_files) /> }
}

/// Dashboard body over an already created catalog resource
#[component]
pub fn DashboardLayout(catalog: CatalogResource) -> impl IntoView {
    let query = use_query_map();

    // Read once up front so a deep link renders the chat on the first frame
    let initial = query.with_untracked(|q| {
        Selection::from_query(
            q.get(FILE_NAME_PARAM).as_deref(),
            q.get(TABLE_NAME_PARAM).as_deref(),
        )
    });
    let state = provide_selection_state(initial.map(Selection::Selected).unwrap_or_default());

    // Later navigations to `/?file_name=..&table_name=..` while mounted
    Effect::new(move |_| {
        query.with(|q| {
            state.apply_query(
                q.get(FILE_NAME_PARAM).as_deref(),
                q.get(TABLE_NAME_PARAM).as_deref(),
            )
        });
    });

    view! {
        <div class="flex h-[calc(100vh-4rem)] gap-6 p-6">
            {move || match state.selection.get() {
                Selection::Selected(file) => view! { <ChatPanel file=file /> }.into_any(),
                Selection::None => view! { <ChooseFilePlaceholder /> }.into_any(),
            }}
            <FilePanel catalog=catalog />
        </div>
    }
}

#[component]
fn FilePanel(catalog: CatalogResource) -> impl IntoView {
    let state = use_selection_state();
    let on_open = Callback::new(move |file: FileEntry| state.select(file));

    view! {
        <Panel class="w-[30%]">
            <PanelHeader title="Uploaded Files">
                "Click a file to view or chat about it."
            </PanelHeader>

            <div class="flex-1 min-h-0 overflow-y-auto px-6 py-5">
                <Suspense fallback=|| view! {
                    <div class="flex justify-center py-8" data-role="catalog-loading">
                        <LoadingSpinner label="Loading files" />
                    </div>
                }>
                    {move || Suspend::new(async move {
                        match catalog.await {
                            Ok(entries) => view! {
                                <FileList entries=entries on_open=on_open />
                            }.into_any(),
                            Err(e) => view! {
                                <FileList entries=Vec::new() error=e.to_string() on_open=on_open />
                            }.into_any(),
                        }
                    })}
                </Suspense>
            </div>

            {move || state.selection.with(Selection::is_selected).then(|| view! {
                <div class="shrink-0 border-t border-zinc-700/50 px-6 py-4">
                    <LinkButton href=UPLOAD_PATH class="w-full">
                        "UPLOAD & QUERY"
                    </LinkButton>
                </div>
            })}
        </Panel>
    }
}

#[component]
fn ChooseFilePlaceholder() -> impl IntoView {
    view! {
        <Panel class="w-[70%]">
            <div class="flex-1 flex flex-col items-center justify-center gap-3 p-10 text-center" data-role="choose-file">
                <h2 class="text-xl font-semibold text-zinc-100">"Start by choosing a file"</h2>
                <p class="text-sm text-zinc-400">"Upload a new CSV to begin chatting."</p>
                <LinkButton href=UPLOAD_PATH class="mt-2">
                    "Upload new file"
                </LinkButton>
            </div>
        </Panel>
    }
}
