//! Filter Dropdown Component
//!
//! Button showing the active filter with a menu of all filter modes.

use leptos::prelude::*;

use crate::assets::Icon;
use crate::components::IconImage;
use crate::models::FILTER_MODES;
use crate::store::{store_set_filter, store_toggle_filter_menu, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterDropdown() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="filter-dropdown">
            <button class="dropdown-btn" on:click=move |_| store_toggle_filter_menu(&store)>
                <span class="dropdown-label">{move || store.filter().get().label()}</span>
                <IconImage icon=Icon::Dropdown />
            </button>

            <Show when=move || store.filter_menu_open().get()>
                <div class="dropdown-menu">
                    {FILTER_MODES.iter().map(|mode| {
                        let mode = *mode;
                        let is_selected = move || store.filter().get() == mode;
                        view! {
                            <div
                                class=move || if is_selected() { "dropdown-option active" } else { "dropdown-option" }
                                on:click=move |_| store_set_filter(&store, mode)
                            >
                                {mode.label()}
                            </div>
                        }
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
