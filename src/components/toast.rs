use leptos::prelude::*;

use crate::context::use_app_context;

/// Single toast slot, styled by outcome
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();

    let class = move || match ctx.toast.get() {
        Some(t) if t.ok => "toast show",
        Some(_) => "toast show error",
        None => "toast",
    };

    view! {
        <div id="toast" class=class role="status">
            {move || ctx.toast.get().map(|t| t.message).unwrap_or_default()}
        </div>
    }
}
