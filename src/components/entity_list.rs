//! Entity List Component
//!
//! Cards for categories, people or files, or the empty state when there
//! are none. Names and descriptions are inserted as text nodes.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::dashboard::DeleteTarget;
use crate::nav::Selection;
use crate::render::{Card, EmptyAction, EmptyState, ListBody};

/// Blocking browser confirmation; no window means no
fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

fn card_class(target: &DeleteTarget) -> &'static str {
    match target {
        DeleteTarget::Category(_) => "category-card",
        DeleteTarget::Person(_) => "person-card",
        DeleteTarget::File { .. } => "file-card",
    }
}

#[component]
pub fn EntityList(
    /// `None` while the first response for this view is pending
    body: Signal<Option<ListBody>>,
    #[prop(into)] on_select: Callback<Selection>,
    #[prop(into)] on_delete: Callback<DeleteTarget>,
    #[prop(into)] on_empty_action: Callback<EmptyAction>,
) -> impl IntoView {
    view! {
        <div class="cards-container">
            {move || match body.get() {
                None => view! { <div class="loading">"Loading..."</div> }.into_any(),
                Some(ListBody::Empty(state)) | Some(ListBody::Failed(state)) => {
                    view! { <EmptyStateBlock state=state on_action=on_empty_action /> }.into_any()
                }
                Some(ListBody::Cards(cards)) => cards
                    .into_iter()
                    .map(|card| view! { <EntityCard card=card on_select=on_select on_delete=on_delete /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn EntityCard(card: Card, on_select: Callback<Selection>, on_delete: Callback<DeleteTarget>) -> impl IntoView {
    let Card { model, select, delete, .. } = card;
    let class = card_class(&delete);
    let selectable = select.is_some();
    let prompt = delete.confirm_prompt();

    let on_open = move |_: MouseEvent| {
        if let Some(selection) = select.clone() {
            on_select.run(selection);
        }
    };

    let on_delete_click = move |ev: MouseEvent| {
        ev.stop_propagation();
        if confirm(&prompt) {
            on_delete.run(delete.clone());
        }
    };

    view! {
        <div class=class>
            <div class="card-content" class:clickable=selectable on:click=on_open>
                <div class="card-icon">{model.icon}</div>
                <div class="card-info">
                    <div class="card-title">{model.title}</div>
                    <div class="card-subtitle muted">{model.subtitle}</div>
                    {model.description.map(|d| view! { <div class="file-desc">{d}</div> })}
                </div>
            </div>
            <div class="card-actions">
                <button class="btn-icon btn-delete" title="Delete" on:click=on_delete_click>
                    <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                        <polyline points="3 6 5 6 21 6"></polyline>
                        <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"></path>
                    </svg>
                </button>
            </div>
        </div>
    }
}

#[component]
fn EmptyStateBlock(state: EmptyState, on_action: Callback<EmptyAction>) -> impl IntoView {
    let EmptyState { icon, heading, lines, hint, action } = state;
    let class = if heading.is_some() { "welcome-message" } else { "empty-state-small" };

    view! {
        <div class=class>
            {icon.map(|i| view! { <div class="welcome-icon">{i}</div> })}
            {heading.map(|h| view! { <h3>{h}</h3> })}
            {lines.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
            {hint.map(|h| view! { <p class="hint muted">{h}</p> })}
            {action.map(|a| view! {
                <button class="btn primary btn-large" on:click=move |_| on_action.run(a)>
                    {a.label()}
                </button>
            })}
        </div>
    }
}
