//! Search Bar Component

use leptos::prelude::*;

use crate::assets::Icon;
use crate::components::IconImage;
use crate::store::{use_app_store, AppStateStoreFields};

/// Text box filtering the list by substring
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-container">
            <input
                type="text"
                class="search-input"
                placeholder="Search note..."
                prop:value=move || store.search().get()
                on:input=move |ev| store.search().set(event_target_value(&ev))
            />
            <span class="search-icon">
                <IconImage icon=Icon::Search />
            </span>
        </div>
    }
}
