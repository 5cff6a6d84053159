//! File list rendering and the "Open" action.

#![cfg(target_arch = "wasm32")]

mod common;

use leptos::prelude::*;
use merch_lense_frontend::bindings::FileEntry;
use merch_lense_frontend::components::dashboard::file_list::EMPTY_CATALOG_MESSAGE;
use merch_lense_frontend::components::dashboard::FileList;
use merch_lense_frontend::services::selection::{Selection, SelectionState};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use common::{click, container, count, find};

wasm_bindgen_test_configure!(run_in_browser);

fn sample_catalog() -> Vec<FileEntry> {
    vec![
        FileEntry::new("q1_sales.csv", "sales_q1"),
        FileEntry::new("q2_sales.csv", "sales_q2"),
        FileEntry::new("returns.csv", "returns_2024"),
    ]
}

#[wasm_bindgen_test]
fn test_empty_catalog_shows_message() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! { <FileList entries=Vec::new() on_open=Callback::new(|_: FileEntry| {}) /> }
    });

    assert_eq!(count(&root, "[data-role='file-entry']"), 0);
    let empty = find(&root, "[data-role='empty-catalog']").expect("empty state should render");
    assert_eq!(empty.text_content().unwrap_or_default().trim(), EMPTY_CATALOG_MESSAGE);
}

#[wasm_bindgen_test]
fn test_one_row_per_entry() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! { <FileList entries=sample_catalog() on_open=Callback::new(|_: FileEntry| {}) /> }
    });

    assert_eq!(count(&root, "[data-role='file-entry']"), 3);
    assert!(find(&root, "[data-role='empty-catalog']").is_none());

    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("q1_sales.csv"));
    assert!(text.contains("returns.csv"));
    // Table names are internal and never shown
    assert!(!text.contains("sales_q1"));
}

#[wasm_bindgen_test]
fn test_catalog_error_is_shown_with_empty_state() {
    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), || {
        view! {
            <FileList
                entries=Vec::new()
                error="Request failed with status 502".to_string()
                on_open=Callback::new(|_: FileEntry| {})
            />
        }
    });

    let error = find(&root, "[data-role='catalog-error']").expect("error line should render");
    assert!(error.text_content().unwrap_or_default().contains("502"));
    assert!(find(&root, "[data-role='empty-catalog']").is_some());
}

#[wasm_bindgen_test]
fn test_open_selects_the_clicked_entry() {
    let state = SelectionState::new(Selection::None);

    let root = container();
    let _handle = leptos::mount::mount_to(root.clone(), move || {
        let on_open = Callback::new(move |file: FileEntry| state.select(file));
        view! { <FileList entries=sample_catalog() on_open=on_open /> }
    });

    let open_buttons = root
        .query_selector_all("[data-role='file-entry'] [data-action='open']")
        .unwrap();
    assert_eq!(open_buttons.length(), 3);
    open_buttons
        .item(1)
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>()
        .click();

    assert_eq!(
        state.selection.get_untracked(),
        Selection::Selected(FileEntry::new("q2_sales.csv", "sales_q2"))
    );

    // The first match is the first row
    click(&root, "[data-role='file-entry'] [data-action='open']");
    assert_eq!(
        state.selection.get_untracked().file().map(|f| f.table_name.clone()),
        Some("sales_q1".to_string())
    );
}
