//! Selection State
//!
//! The file/table pair the chat panel is bound to. Set either from the
//! dashboard's query string or by opening a catalog entry; there is no way
//! back to the empty state within a page session.

use leptos::prelude::*;

use crate::bindings::FileEntry;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(FileEntry),
}

impl Selection {
    /// Selection carried by `file_name`/`table_name` query parameters.
    /// Both must be present and non-empty.
    pub fn from_query(file_name: Option<&str>, table_name: Option<&str>) -> Option<FileEntry> {
        match (file_name, table_name) {
            (Some(file_name), Some(table_name)) if !file_name.is_empty() && !table_name.is_empty() => {
                Some(FileEntry::new(file_name, table_name))
            }
            _ => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    pub fn file(&self) -> Option<&FileEntry> {
        match self {
            Selection::Selected(file) => Some(file),
            Selection::None => None,
        }
    }

    /// Select `file`; returns whether the selection changed
    pub fn select(&mut self, file: FileEntry) -> bool {
        if self.file() == Some(&file) {
            return false;
        }
        *self = Selection::Selected(file);
        true
    }
}

#[derive(Clone, Copy)]
pub struct SelectionState {
    pub selection: RwSignal<Selection>,
}

impl SelectionState {
    pub fn new(initial: Selection) -> Self {
        Self {
            selection: RwSignal::new(initial),
        }
    }

    /// Open a file. Re-selecting the current file does not notify subscribers,
    /// so the chat panel (and its transcript) survives.
    pub fn select(&self, file: FileEntry) {
        let changed = self.selection.try_maybe_update(|s| {
            let changed = s.select(file.clone());
            (changed, changed)
        });
        if changed == Some(true) {
            log::info!("Selected {} ({})", file.file_name, file.table_name);
        }
    }

    pub fn apply_query(&self, file_name: Option<&str>, table_name: Option<&str>) {
        if let Some(file) = Selection::from_query(file_name, table_name) {
            self.select(file);
        }
    }
}

pub fn provide_selection_state(initial: Selection) -> SelectionState {
    let state = SelectionState::new(initial);
    provide_context(state);
    state
}

pub fn use_selection_state() -> SelectionState {
    expect_context::<SelectionState>()
}
