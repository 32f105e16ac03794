//! Dashboard page view.
//!
//! Header, the section for the current view, the shared card list and the
//! two create modals.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth;
use crate::components::{EntityList, ModalState, NameModal, UploadPanel, UserHeader};
use crate::context::{use_app_context, use_client};
use crate::controller::DashboardController;
use crate::dashboard::DeleteTarget;
use crate::nav::{Selection, View};
use crate::render::{display_name, EmptyAction};
use crate::store::{store_list_body, store_loading, store_view, DashboardState};

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();
    let client = use_client();

    let session = match auth::require_session(client.session()) {
        Ok(session) => session,
        Err(page) => {
            Effect::new(move |_| ctx.go(page));
            return view! { <div class="page-dashboard"></div> }.into_any();
        }
    };

    let store = Store::new(DashboardState::default());
    let controller = DashboardController::new(client, store, ctx);

    let category_modal = ModalState::new();
    let person_modal = ModalState::new();

    let view_state = Memo::new(move |_| store_view(&store));
    let body = Signal::derive(move || store_list_body(&store));

    // Handlers
    let on_select = {
        let c = controller.clone();
        Callback::new(move |selection: Selection| c.select(selection))
    };
    let on_delete = {
        let c = controller.clone();
        Callback::new(move |target: DeleteTarget| c.delete(target))
    };
    let on_back = {
        let c = controller.clone();
        Callback::new(move |_: ()| c.back())
    };
    let reload = {
        let c = controller.clone();
        Callback::new(move |_: ()| c.reload())
    };
    let create_category = {
        let c = controller.clone();
        Callback::new(move |raw: String| c.create_category(&raw, category_modal))
    };
    let create_person = {
        let c = controller.clone();
        Callback::new(move |raw: String| c.create_person(&raw, person_modal))
    };
    let on_empty_action = {
        let c = controller.clone();
        Callback::new(move |action: EmptyAction| match action {
            EmptyAction::CreateCategory => category_modal.show(),
            EmptyAction::AddPerson => person_modal.show(),
            EmptyAction::Retry => c.reload(),
        })
    };
    let logout = {
        let client = controller.client().clone();
        Callback::new(move |_: ()| ctx.go(auth::logout(client.session())))
    };

    // Initial state: the full category list
    controller.reload();

    view! {
        <div class="page-dashboard">
            <UserHeader username=display_name(session.username.as_deref()) on_logout=logout />
            <main class="dashboard" class:busy=move || store_loading(&store)>
                {move || match view_state.get() {
                    View::Categories => view! {
                        <div class="section-header" id="categoryView">
                            <h2>"Your Categories"</h2>
                            <button id="addCategoryBtn" class="btn primary" on:click=move |_| category_modal.show()>
                                "+ New Category"
                            </button>
                        </div>
                    }.into_any(),
                    View::People { category } => view! {
                        <div class="section-header" id="personView">
                            <button id="backToCategoriesBtn" class="btn ghost" on:click=move |_| on_back.run(())>
                                "← Categories"
                            </button>
                            <h2 id="categoryTitle">{category.cat_name}</h2>
                            <button id="addPersonBtn" class="btn primary" on:click=move |_| person_modal.show()>
                                "+ Add Person"
                            </button>
                        </div>
                    }.into_any(),
                    View::Files { category, person } => view! {
                        <div class="section-header" id="fileView">
                            <button id="backToPeopleBtn" class="btn ghost" on:click=move |_| on_back.run(())>
                                "← People"
                            </button>
                            <div class="title-block">
                                <div class="breadcrumb muted" id="breadcrumbCategory">{category.cat_name}</div>
                                <h2 id="personTitle">{person.person_name}</h2>
                            </div>
                        </div>
                        <UploadPanel view_state=Signal::from(view_state) on_uploaded=reload />
                    }.into_any(),
                }}
                <EntityList
                    body=body
                    on_select=on_select
                    on_delete=on_delete
                    on_empty_action=on_empty_action
                />
            </main>
            <NameModal
                state=category_modal
                title="New Category"
                placeholder="e.g. Family"
                submit_label="Create"
                on_submit=create_category
            />
            <NameModal
                state=person_modal
                title="Add Person"
                placeholder="Name"
                submit_label="Add"
                on_submit=create_person
            />
        </div>
    }
    .into_any()
}
