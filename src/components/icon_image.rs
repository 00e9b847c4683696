//! Icon Image Component

use leptos::prelude::*;

use crate::assets::Icon;

/// `<img>` for a named icon
#[component]
pub fn IconImage(
    icon: Icon,
    #[prop(into, optional)] class: Option<String>,
) -> impl IntoView {
    view! {
        <img
            src=icon.src()
            alt=icon.alt()
            class=class.unwrap_or_else(|| "icon".to_string())
        />
    }
}
