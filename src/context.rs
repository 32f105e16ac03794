//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BrowserClient;
use crate::config::TOAST_MS;
use crate::nav::Page;

/// Transient notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub ok: bool,
}

/// Outcome message for the user, raised outside a component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
    pub ok: bool,
}

impl Notice {
    pub fn ok(message: &'static str) -> Self {
        Self { message, ok: true }
    }

    pub fn err(message: &'static str) -> Self {
        Self { message, ok: false }
    }
}

/// Clear the slot only if it still holds toast `id`
fn clear_if_current(slot: &mut Option<Toast>, id: u64) {
    if slot.as_ref().map(|t| t.id) == Some(id) {
        *slot = None;
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page on screen - read
    pub page: ReadSignal<Page>,
    /// Page on screen - write
    set_page: WriteSignal<Page>,
    /// Visible toast - read
    pub toast: ReadSignal<Option<Toast>>,
    /// Visible toast - write
    set_toast: WriteSignal<Option<Toast>>,
    toast_seq: StoredValue<u64>,
}

impl AppContext {
    pub fn new(
        page: (ReadSignal<Page>, WriteSignal<Page>),
        toast: (ReadSignal<Option<Toast>>, WriteSignal<Option<Toast>>),
    ) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            toast: toast.0,
            set_toast: toast.1,
            toast_seq: StoredValue::new(0),
        }
    }

    /// Switch page now
    pub fn go(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Switch page after `ms`
    pub fn go_after(&self, page: Page, ms: u32) {
        let set_page = self.set_page;
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            set_page.set(page);
        });
    }

    /// Show a toast, replacing the current one
    pub fn toast(&self, message: impl Into<String>, ok: bool) {
        self.toast_seq.update_value(|seq| *seq += 1);
        let id = self.toast_seq.get_value();
        self.set_toast.set(Some(Toast { id, message: message.into(), ok }));

        let set_toast = self.set_toast;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            set_toast.update(|slot| clear_if_current(slot, id));
        });
    }

    pub fn notify(&self, notice: Notice) {
        self.toast(notice.message, notice.ok);
    }

    pub fn toast_ok(&self, message: impl Into<String>) {
        self.toast(message, true);
    }

    pub fn toast_err(&self, message: impl Into<String>) {
        self.toast(message, false);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

pub fn use_client() -> BrowserClient {
    use_context::<BrowserClient>().expect("BrowserClient should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast { id, message: format!("t{}", id), ok: true }
    }

    #[test]
    fn test_old_timer_leaves_newer_toast() {
        let mut slot = Some(toast(2));
        clear_if_current(&mut slot, 1);
        assert_eq!(slot, Some(toast(2)));

        clear_if_current(&mut slot, 2);
        assert_eq!(slot, None);
    }
}
