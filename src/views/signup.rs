//! Registration page view.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth;
use crate::config::SIGNUP_REDIRECT_MS;
use crate::context::{use_app_context, use_client};
use crate::nav::Page;

#[component]
pub fn SignUp() -> impl IntoView {
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
            match auth::sign_up(&client, &name, &password).await {
                Ok(()) => {
                    ctx.toast_ok("Account created — please sign in");
                    ctx.go_after(Page::Login, SIGNUP_REDIRECT_MS);
                }
                Err(e) => {
                    ctx.toast_err(e.user_message("Sign up failed"));
                    set_busy.set(false);
                }
            }
        });
    };

    let to_login = move |ev: MouseEvent| {
        ev.prevent_default();
        ctx.go(Page::Login);
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create account"</h1>
                <form id="signupForm" on:submit=submit>
                    <label for="signupName">"Name"</label>
                    <input
                        id="signupName"
                        type="text"
                        autocomplete="username"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <label for="signupPassword">"Password"</label>
                    <input
                        id="signupPassword"
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn primary" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <p class="auth-switch">
                    "Already registered? "
                    <a href="#" on:click=to_login>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
