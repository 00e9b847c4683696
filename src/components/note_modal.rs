//! Note Modal Component
//!
//! Create/edit overlay rendered through the modal host portal.

use leptos::html;
use leptos::prelude::*;
use leptos_modal_host::{HostId, ModalPortal};

use crate::modal::SaveOutcome;
use crate::store::{
    modal_visibility, store_cancel_modal, store_save_modal, store_set_draft, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn NoteModal(host_id: HostId) -> impl IntoView {
    let store = use_app_store();
    let input_ref = NodeRef::<html::Input>::new();

    let visible = modal_visibility(store);
    let title = move || store.modal().read().title();
    let draft = move || store.modal().read().draft().to_string();

    let focus_input = move || {
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    // Focus the input each time the overlay mounts
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    // A blank draft keeps the overlay open; send the user back to the input
    let save = move || {
        if store_save_modal(&store) == SaveOutcome::Rejected {
            focus_input();
        }
    };

    view! {
        <ModalPortal
            host_id=host_id
            visible=visible
            on_backdrop=Callback::new(move |_: ()| store_cancel_modal(&store))
        >
            <div class="note-form">
                <h2 class="note-title">{title}</h2>
                <input
                    node_ref=input_ref
                    type="text"
                    class="note-input"
                    placeholder="Enter your note"
                    prop:value=draft
                    on:input=move |ev| store_set_draft(&store, event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        match ev.key().as_str() {
                            "Enter" => save(),
                            "Escape" => store_cancel_modal(&store),
                            _ => {}
                        }
                    }
                />
                <div class="note-buttons">
                    <button class="btn" on:click=move |_| store_cancel_modal(&store)>"Cancel"</button>
                    <button class="btn primary" on:click=move |_| save()>"Save"</button>
                </div>
            </div>
        </ModalPortal>
    }
}
