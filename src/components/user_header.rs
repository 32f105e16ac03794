use leptos::prelude::*;

use crate::render::avatar_initial;

/// Top bar with the signed-in name, avatar initial and logout
#[component]
pub fn UserHeader(#[prop(into)] username: String, #[prop(into)] on_logout: Callback<()>) -> impl IntoView {
    let initial = avatar_initial(&username);

    view! {
        <header class="topbar">
            <div class="brand">"Memoir"</div>
            <div class="user-info">
                <div class="avatar" id="userAvatar">{initial}</div>
                <span id="username">{username}</span>
                <button class="btn ghost" id="logoutBtn" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </div>
        </header>
    }
}
