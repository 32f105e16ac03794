//! Login page view.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth;
use crate::config::LOGIN_REDIRECT_MS;
use crate::context::{use_app_context, use_client};
use crate::nav::Page;

#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_app_context();
    let client = use_client();

    let (name, set_name) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let client = client.clone();
        let name = name.get_untracked();
        let password = password.get_untracked();
        set_busy.set(true);

        spawn_local(async move {
            match auth::login(&client, &name, &password).await {
                Ok(_) => {
                    ctx.toast_ok("Logged in — redirecting...");
                    ctx.go_after(Page::Dashboard, LOGIN_REDIRECT_MS);
                }
                Err(e) => {
                    ctx.toast_err(e.user_message("Login failed"));
                    set_busy.set(false);
                }
            }
        });
    };

    let to_signup = move |ev: MouseEvent| {
        ev.prevent_default();
        ctx.go(Page::SignUp);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Memoir"</h1>
                <p class="muted">"Sign in to your account"</p>
                <form id="loginForm" on:submit=submit>
                    <label for="loginName">"Name"</label>
                    <input
                        id="loginName"
                        type="text"
                        autocomplete="username"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <label for="loginPassword">"Password"</label>
                    <input
                        id="loginPassword"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn primary" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <p class="auth-switch">
                    "No account? "
                    <a href="#" on:click=to_signup>"Create one"</a>
                </p>
            </div>
        </div>
    }
}
