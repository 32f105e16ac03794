//! Name Modal Component
//!
//! Single-field dialog for creating a category or a person.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::html;
use leptos::prelude::*;

/// Open flag, input text and in-flight flag of one modal
#[derive(Clone, Copy)]
pub struct ModalState {
    pub open: RwSignal<bool>,
    pub value: RwSignal<String>,
    pub busy: RwSignal<bool>,
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            open: RwSignal::new(false),
            value: RwSignal::new(String::new()),
            busy: RwSignal::new(false),
        }
    }

    pub fn show(&self) {
        self.open.set(true);
    }

    /// Hide and forget the typed text
    pub fn close(&self) {
        self.open.set(false);
        self.value.set(String::new());
    }

    /// Mark a submit in flight; false if one already is
    pub fn begin(&self) -> bool {
        if self.busy.get_untracked() {
            return false;
        }
        self.busy.set(true);
        true
    }

    pub fn finish(&self) {
        self.busy.set(false);
    }
}

#[component]
pub fn NameModal(
    state: ModalState,
    #[prop(into)] title: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_submit: Callback<String>,
) -> impl IntoView {
    let input_ref = NodeRef::<html::Input>::new();

    // Focus the field whenever the modal opens
    Effect::new(move |_| {
        if state.open.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // Backdrop click hides without clearing
    let on_backdrop = move |ev: MouseEvent| {
        if ev.target() == ev.current_target() {
            state.open.set(false);
        }
    };

    let on_form_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.run(state.value.get_untracked());
    };

    view! {
        <div class="modal" class:hidden=move || !state.open.get() on:click=on_backdrop>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button type="button" class="btn-icon" title="Close" on:click=move |_| state.close()>
                        "×"
                    </button>
                </div>
                <form class="modal-form" on:submit=on_form_submit>
                    <input
                        type="text"
                        node_ref=input_ref
                        placeholder=placeholder
                        prop:value=move || state.value.get()
                        on:input=move |ev| state.value.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn primary" disabled=move || state.busy.get()>
                        {submit_label}
                    </button>
                </form>
            </div>
        </div>
    }
}
