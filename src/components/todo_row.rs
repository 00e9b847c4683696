//! Todo Row Component
//!
//! Individual item in the list view.

use leptos::prelude::*;

use crate::assets::Icon;
use crate::components::IconImage;
use crate::models::TodoItem;
use crate::store::{store_delete_item, store_open_edit, store_toggle_item, use_app_store};

/// A single item row. `position` is the item's index in the full list.
#[component]
pub fn TodoRow(item: TodoItem, position: usize) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let completed = item.completed;
    let label = format!("{} #{}", item.text, position + 1);

    view! {
        <div class=if completed { "todo-row completed" } else { "todo-row" }>
            <label class="todo-check">
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |_| store_toggle_item(&store, id)
                />
                <span class="check-box">
                    {completed.then(|| view! { <IconImage icon=Icon::Check /> })}
                </span>
                <span class="todo-text">{label}</span>
            </label>

            <div class="row-actions">
                <button class="icon-btn edit-btn" on:click=move |_| store_open_edit(&store, id)>
                    <IconImage icon=Icon::Edit />
                </button>
                <button class="icon-btn delete-btn" on:click=move |_| store_delete_item(&store, id)>
                    <IconImage icon=Icon::Delete />
                </button>
            </div>
        </div>
        <hr class="separator" />
    }
}
