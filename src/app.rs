//! Todo List App
//!
//! Main application component: header, toolbar, list and the note modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::assets::Icon;
use crate::components::{FilterDropdown, IconImage, NoteModal, SearchBar, ThemeToggle, TodoListView};
use crate::config::AppConfig;
use crate::store::{store_open_create, AppState, AppStateStoreFields};
use crate::theme::{self, Theme};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let initial_theme = Theme::initial(config.dark_mode);
    theme::apply(initial_theme);

    // Provide the store to all children
    let store = Store::new(AppState::new(initial_theme));
    provide_context(store);

    let host_id = config.host_id().unwrap_or_default();
    let title = config.title.clone();

    let container_class = move || format!("app-container {}", store.theme().get().as_str());

    view! {
        <div class=container_class>
            <h1 class="header-title">{title}</h1>

            <div class="toolbar-row">
                <SearchBar />
                <FilterDropdown />
                <ThemeToggle />
            </div>

            <TodoListView />

            <p class="item-count">
                {move || {
                    let todos = store.todos().read();
                    format!("{} items, {} completed", todos.len(), todos.completed_count())
                }}
            </p>

            <div class="add-button-container">
                <button class="add-btn" on:click=move |_| store_open_create(&store)>
                    <IconImage icon=Icon::Add />
                </button>
            </div>

            <NoteModal host_id=host_id />
        </div>
    }
}
