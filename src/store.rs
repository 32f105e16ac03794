//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store is
//! created per dashboard mount.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::dashboard::Listing;
use crate::nav::{Navigator, Ticket, View};
use crate::render::{list_body, load_failed, ListBody};

/// Dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Current view and fetch generation
    pub nav: Navigator,
    /// Last list applied for the current view
    pub listing: Option<Listing>,
    /// A fetch for the current view is in flight
    pub loading: bool,
    /// The latest fetch for the current view failed
    pub failed: bool,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

// ========================
// Store Helper Functions
// ========================

/// Apply a navigation step. On a transition the old list is dropped and
/// the ticket plus new view are returned for fetching.
pub fn store_navigate(
    store: &DashboardStore,
    step: impl FnOnce(&mut Navigator) -> Option<Ticket>,
) -> Option<(Ticket, View)> {
    let field = store.nav();
    let moved = {
        let mut nav = field.write();
        step(&mut *nav).map(|ticket| (ticket, nav.view().clone()))
    };
    if moved.is_some() {
        store.listing().set(None);
        store.failed().set(false);
        store.loading().set(true);
    }
    moved
}

/// Stamp a refetch of the current view; the old list stays visible
pub fn store_reload(store: &DashboardStore) -> (Ticket, View) {
    let field = store.nav();
    let (ticket, view) = {
        let mut nav = field.write();
        let ticket = nav.reload();
        (ticket, nav.view().clone())
    };
    store.failed().set(false);
    store.loading().set(true);
    (ticket, view)
}

fn is_current(store: &DashboardStore, ticket: Ticket) -> bool {
    store.nav().with_untracked(|nav| nav.is_current(ticket))
}

/// Show `listing` if `ticket` is still current; stale results are dropped
pub fn store_apply(store: &DashboardStore, ticket: Ticket, listing: Listing) -> bool {
    if !is_current(store, ticket) {
        return false;
    }
    store.listing().set(Some(listing));
    store.failed().set(false);
    store.loading().set(false);
    true
}

/// Record a failed fetch. Any list already shown stays; false when the
/// ticket is stale and nothing changed.
pub fn store_settle(store: &DashboardStore, ticket: Ticket) -> bool {
    if !is_current(store, ticket) {
        return false;
    }
    store.failed().set(true);
    store.loading().set(false);
    true
}

pub fn store_view(store: &DashboardStore) -> View {
    store.nav().with(|nav| nav.view().clone())
}

pub fn store_view_untracked(store: &DashboardStore) -> View {
    store.nav().with_untracked(|nav| nav.view().clone())
}

pub fn store_loading(store: &DashboardStore) -> bool {
    store.loading().get()
}

/// Cards or empty state for the current list; `None` while the first
/// response is pending, a failure block if it never came
pub fn store_list_body(store: &DashboardStore) -> Option<ListBody> {
    let view = store_view(store);
    let body = store.listing().with(|listing| listing.as_ref().map(|l| list_body(l, &view)));
    match body {
        Some(body) => Some(body),
        None if store.failed().get() => Some(ListBody::Failed(load_failed(&view))),
        None => None,
    }
}
