//! File List Component
//!
//! Renders the catalog in the dashboard's right-hand panel:
//! - one row per uploaded file with an "Open" action
//! - the empty state when nothing has been uploaded
//! - an inline error line when the catalog could not be fetched

use leptos::ev;
use leptos::prelude::*;
use phosphor_leptos::{Icon, FILE_CSV};

use crate::bindings::FileEntry;
use crate::components::design_system::{Button, ButtonVariant};

pub const EMPTY_CATALOG_MESSAGE: &str = "No files found yet.";

#[component]
pub fn FileList(
    entries: Vec<FileEntry>,
    /// Why the catalog is unavailable, if it is
    #[prop(optional)]
    error: Option<String>,
    /// Called with the entry whose "Open" button was clicked
    on_open: Callback<FileEntry>,
) -> impl IntoView {
    let is_empty = entries.is_empty();

    view! {
        <div class="space-y-3" data-role="file-list">
            {error.map(|e| view! {
                <p class="text-sm text-red-300" data-role="catalog-error">
                    "Could not load files: " {e}
                </p>
            })}

            {entries
                .into_iter()
                .map(|file| view! { <FileRow file=file on_open=on_open /> })
                .collect_view()}

            {is_empty.then(|| view! { <EmptyCatalog /> })}
        </div>
    }
}

#[component]
fn FileRow(file: FileEntry, on_open: Callback<FileEntry>) -> impl IntoView {
    let file_name = file.file_name.clone();
    let open = move |_: ev::MouseEvent| on_open.run(file.clone());

    view! {
        <div
            class="group flex items-center justify-between gap-3 rounded-xl border border-zinc-700/60 bg-zinc-900/30 px-4 py-3 hover:bg-zinc-900/50 hover:border-zinc-600 transition"
            data-role="file-entry"
        >
            <div class="min-w-0 flex items-center gap-3">
                <span class="shrink-0 text-indigo-300">
                    <Icon icon=FILE_CSV size="20px" />
                </span>
                <div class="min-w-0">
                    <h3 class="truncate text-sm font-medium text-zinc-100">{file_name}</h3>
                    <p class="mt-0.5 text-xs text-zinc-500">"Ready to query"</p>
                </div>
            </div>

            <div class="opacity-0 group-hover:opacity-100 focus-within:opacity-100 transition">
                <Button variant=ButtonVariant::Ghost on_click=open action="open">
                    "Open"
                </Button>
            </div>
        </div>
    }
}

#[component]
fn EmptyCatalog() -> impl IntoView {
    view! {
        <div
            class="rounded-xl border border-dashed border-zinc-700/60 bg-zinc-900/30 p-6 text-sm text-zinc-400"
            data-role="empty-catalog"
        >
            {EMPTY_CATALOG_MESSAGE}
        </div>
    }
}
