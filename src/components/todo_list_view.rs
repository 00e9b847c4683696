//! Todo List View Component
//!
//! Displays the filtered items, or an empty-state placeholder when nothing
//! matches.

use leptos::prelude::*;

use crate::assets::Icon;
use crate::components::{IconImage, TodoRow};
use crate::models::TodoItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let store = use_app_store();

    // Recomputed whenever the list, search text or filter changes
    let rows = Memo::new(move |_| {
        let search = store.search().get();
        let filter = store.filter().get();
        let rows: Vec<(usize, TodoItem)> = store
            .todos()
            .read()
            .filtered_view(&search, filter)
            .map(|(position, item)| (position, item.clone()))
            .collect();
        rows
    });

    view! {
        <Show
            when=move || !rows.get().is_empty()
            fallback=|| view! { <EmptyState /> }
        >
            <div class="todo-list">
                <For
                    each=move || rows.get()
                    key=|(position, item)| (item.id, *position, item.text.clone(), item.completed)
                    children=move |(position, item)| view! { <TodoRow item=item position=position /> }
                />
            </div>
        </Show>
    }
}

/// Shown when the filtered view is empty
#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <IconImage icon=Icon::Empty class="empty-image" />
            <p class="empty-text">"Empty ..."</p>
        </div>
    }
}
