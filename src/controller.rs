//! Dashboard Controller
//!
//! Ties the store, the API client and toasts together. Built once per
//! dashboard mount; every handler on the page goes through it. The async
//! flows are free functions over any transport so they run in tests.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, BrowserClient, Transport};
use crate::components::ModalState;
use crate::context::{AppContext, Notice};
use crate::dashboard::{
    category_draft, delete_entity, fetch_listing, load_failure_message, person_draft, DeleteTarget,
};
use crate::nav::{Navigator, Selection, Ticket, View};
use crate::session::KeyValueStore;
use crate::store::{store_apply, store_navigate, store_reload, store_settle, store_view_untracked, DashboardStore};

/// Fetch `view` into the store under `ticket`. Returns the failure to show,
/// which is `None` for success and for a view the user already left.
pub async fn load_into<T: Transport, K: KeyValueStore>(
    client: &ApiClient<T, K>,
    store: &DashboardStore,
    ticket: Ticket,
    view: View,
) -> Option<Notice> {
    match fetch_listing(client, &view).await {
        Ok(listing) => {
            if !store_apply(store, ticket, listing) {
                log::debug!("dropping stale {} response", view.name());
            }
            None
        }
        Err(e) => {
            log::warn!("loading {} failed: {}", view.name(), e);
            if store_settle(store, ticket) {
                Some(Notice::err(load_failure_message(&view)))
            } else {
                None
            }
        }
    }
}

/// Delete `target`, then refetch the list on screen (only that list)
pub async fn delete_and_reload<T: Transport, K: KeyValueStore>(
    client: &ApiClient<T, K>,
    store: &DashboardStore,
    target: &DeleteTarget,
    notify: impl Fn(Notice),
) {
    if let Err(e) = delete_entity(client, target).await {
        log::warn!("delete failed: {}", e);
        return notify(Notice::err("Delete failed"));
    }
    notify(Notice::ok(target.success_message()));

    let (ticket, view) = store_reload(store);
    if let Some(notice) = load_into(client, store, ticket, view).await {
        notify(notice);
    }
}

#[derive(Clone)]
pub struct DashboardController {
    client: BrowserClient,
    store: DashboardStore,
    ctx: AppContext,
}

impl DashboardController {
    pub fn new(client: BrowserClient, store: DashboardStore, ctx: AppContext) -> Self {
        Self { client, store, ctx }
    }

    pub fn client(&self) -> &BrowserClient {
        &self.client
    }

    fn navigate(&self, step: impl FnOnce(&mut Navigator) -> Option<Ticket>) {
        if let Some((ticket, view)) = store_navigate(&self.store, step) {
            self.load(ticket, view);
        }
    }

    pub fn select(&self, selection: Selection) {
        self.navigate(|nav| nav.select(selection));
    }

    pub fn back(&self) {
        self.navigate(Navigator::back);
    }

    /// Refetch the list on screen
    pub fn reload(&self) {
        let (ticket, view) = store_reload(&self.store);
        self.load(ticket, view);
    }

    fn load(&self, ticket: Ticket, view: View) {
        let this = self.clone();
        spawn_local(async move {
            if let Some(notice) = load_into(&this.client, &this.store, ticket, view).await {
                this.ctx.notify(notice);
            }
        });
    }

    /// Caller has already confirmed with the user
    pub fn delete(&self, target: DeleteTarget) {
        let this = self.clone();
        spawn_local(async move {
            let ctx = this.ctx;
            delete_and_reload(&this.client, &this.store, &target, |notice| ctx.notify(notice)).await;
        });
    }

    pub fn create_category(&self, raw: &str, modal: ModalState) {
        let name = match category_draft(raw) {
            Ok(name) => name,
            Err(rejected) => return self.ctx.toast_err(rejected.message()),
        };
        if !modal.begin() {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            let result = this.client.create_category(&name).await;
            modal.finish();
            match result {
                Ok(category) => {
                    log::info!("created category {}", category.id);
                    this.ctx.toast_ok("✅ Category created!");
                    modal.close();
                    this.reload();
                }
                Err(e) => this.ctx.toast_err(e.user_message("Failed to create category")),
            }
        });
    }

    pub fn create_person(&self, raw: &str, modal: ModalState) {
        let (name, category_id) = match person_draft(raw, &store_view_untracked(&self.store)) {
            Ok(draft) => draft,
            Err(rejected) => return self.ctx.toast_err(rejected.message()),
        };
        if !modal.begin() {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            let result = this.client.create_person(&name, category_id).await;
            modal.finish();
            match result {
                Ok(person) => {
                    log::info!("created person {} in category {}", person.id, category_id);
                    this.ctx.toast_ok("✅ Person added!");
                    modal.close();
                    this.reload();
                }
                Err(e) => this.ctx.toast_err(e.user_message("Failed to add person")),
            }
        });
    }
}
