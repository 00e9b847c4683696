//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::modal::{ModalController, ModalState, SaveOutcome};
use crate::models::{FilterMode, TodoId};
use crate::theme::{self, Theme};
use crate::todo_list::TodoList;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Backing list of items
    pub todos: TodoList,
    /// Search box text
    pub search: String,
    /// Active filter
    pub filter: FilterMode,
    /// Whether the filter dropdown is expanded
    pub filter_menu_open: bool,
    /// Light or dark
    pub theme: Theme,
    /// Create/edit overlay
    pub modal: ModalController,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Memoized modal visibility.
///
/// Draft edits write to `modal` on every keystroke; observers of this memo
/// only re-run when the overlay actually opens or closes.
pub fn modal_visibility(store: AppStore) -> Memo<bool> {
    Memo::new(move |_| store.modal().read().is_visible())
}

// ========================
// Store Helper Functions
// ========================

/// Toggle an item's completed flag
pub fn store_toggle_item(store: &AppStore, id: TodoId) {
    if store.todos().write().toggle_complete(id) {
        log::debug!("[STORE] Toggled item {}", id);
    }
}

/// Delete an item, closing the modal if it was editing it
pub fn store_delete_item(store: &AppStore, id: TodoId) {
    let removed = store.todos().write().delete(id);
    if let Some(item) = removed {
        log::info!("[STORE] Deleted item {} ({:?})", id, item.text);
        if store.modal().read_untracked().state() == ModalState::Edit(id) {
            store.modal().write().forget(id);
            log::debug!("[MODAL] Closed edit of deleted item {}", id);
        }
    }
}

/// Open the modal with an empty draft
pub fn store_open_create(store: &AppStore) {
    if store.modal().write().open_create() {
        log::debug!("[MODAL] Opened for new item");
    }
}

/// Open the modal on an existing item
pub fn store_open_edit(store: &AppStore, id: TodoId) {
    let mut modal = store.modal().get_untracked();
    let opened = modal.open_edit(id, &store.todos().read_untracked());
    if opened {
        store.modal().set(modal);
        log::debug!("[MODAL] Opened edit for item {}", id);
    }
}

pub fn store_set_draft(store: &AppStore, text: String) {
    store.modal().write().set_draft(text);
}

pub fn store_cancel_modal(store: &AppStore) {
    if store.modal().read_untracked().is_visible() {
        store.modal().write().cancel();
        log::debug!("[MODAL] Cancelled");
    }
}

/// Commit the draft. The modal only closes when something was committed.
///
/// The list is only written when the draft can actually be committed.
pub fn store_save_modal(store: &AppStore) -> SaveOutcome {
    let mut modal = store.modal().get_untracked();
    if !modal.is_visible() {
        return SaveOutcome::NotOpen;
    }
    if !modal.has_content() {
        log::debug!("[MODAL] Blank draft not saved");
        return SaveOutcome::Rejected;
    }
    let outcome = modal.save(&mut store.todos().write());
    match outcome {
        SaveOutcome::Added(id) => log::info!("[STORE] Added item {}", id),
        SaveOutcome::Edited(id) => log::info!("[STORE] Edited item {}", id),
        SaveOutcome::Stale(id) => log::warn!("[MODAL] Item {} vanished before save", id),
        SaveOutcome::Rejected | SaveOutcome::NotOpen => return outcome,
    }
    store.modal().set(modal);
    outcome
}

pub fn store_set_filter(store: &AppStore, mode: FilterMode) {
    store.filter().set(mode);
    store.filter_menu_open().set(false);
    log::debug!("[STORE] Filter set to {}", mode);
}

pub fn store_toggle_filter_menu(store: &AppStore) {
    store.filter_menu_open().update(|open| *open = !*open);
}

/// Flip light/dark and apply it to the document
pub fn store_toggle_theme(store: &AppStore) {
    let next = store.theme().get_untracked().toggled();
    store.theme().set(next);
    theme::apply(next);
    log::debug!("[STORE] Theme set to {}", next.as_str());
}
