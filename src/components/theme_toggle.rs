//! Theme Toggle Component

use leptos::prelude::*;

use crate::components::IconImage;
use crate::store::{store_toggle_theme, use_app_store, AppStateStoreFields};

/// Switches between light and dark mode
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    let title = move || {
        if store.theme().get().is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <button
            class="icon-btn theme-toggle"
            title=title
            on:click=move |_| store_toggle_theme(&store)
        >
            {move || view! { <IconImage icon=store.theme().get().toggle_icon() /> }}
        </button>
    }
}
