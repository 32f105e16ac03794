//! Memoir Frontend App
//!
//! Picks the page and hosts the toast.

use leptos::prelude::*;

use crate::api::BrowserClient;
use crate::auth;
use crate::components::ToastHost;
use crate::config::ApiConfig;
use crate::context::{AppContext, Toast};
use crate::nav::Page;
use crate::views::{Dashboard, Login, SignUp};

#[component]
pub fn App() -> impl IntoView {
    let client = BrowserClient::browser(ApiConfig::from_build_env());
    log::info!("api base {}", client.config().base_url);

    // State
    let (page, set_page) = signal(auth::landing_page(client.session()));
    let (toast, set_toast) = signal(None::<Toast>);

    // Provide context to all children
    provide_context(AppContext::new((page, set_page), (toast, set_toast)));
    provide_context(client);

    view! {
        {move || match page.get() {
            Page::Login => view! { <Login /> }.into_any(),
            Page::SignUp => view! { <SignUp /> }.into_any(),
            Page::Dashboard => view! { <Dashboard /> }.into_any(),
        }}
        <ToastHost />
    }
}
