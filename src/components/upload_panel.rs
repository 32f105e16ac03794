//! Upload Panel Component
//!
//! Drop zone / file picker, optional description and a progress bar for
//! uploading one file to the person on screen.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_filedrop::{
    clear_selection, create_file_drop_signals, make_on_dragleave, make_on_dragover, make_on_drop,
    make_on_input_change, zone_class,
};

use crate::api::{percent, prepare_upload, upload_file};
use crate::context::{use_app_context, use_client};
use crate::nav::View;

#[component]
pub fn UploadPanel(
    /// View the panel belongs to; the person is read from it on submit
    view_state: Signal<View>,
    #[prop(into)] on_uploaded: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let client = use_client();
    let fd = create_file_drop_signals();
    let input_ref = NodeRef::<html::Input>::new();

    let (description, set_description) = signal(String::new());
    // Percent while an upload runs, hidden otherwise
    let (progress, set_progress) = signal(None::<u32>);

    let browse = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let start_upload = move |_| {
        if progress.get_untracked().is_some() {
            return;
        }
        let view = view_state.get_untracked();
        let job = match prepare_upload(
            view.current_person(),
            fd.selected_read.get_untracked(),
            &description.get_untracked(),
        ) {
            Ok(job) => job,
            Err(rejected) => return ctx.toast_err(rejected.message()),
        };

        let client = client.clone();
        set_progress.set(Some(0));
        spawn_local(async move {
            let result = upload_file(&client, job, move |fraction| set_progress.set(Some(percent(fraction)))).await;
            set_progress.set(None);
            match result {
                Ok(record) => {
                    log::info!("uploaded {:?}", record.map(|r| r.id));
                    ctx.toast_ok("✅ Uploaded!");
                    clear_selection(&fd);
                    set_description.set(String::new());
                    if let Some(input) = input_ref.get_untracked() {
                        input.set_value("");
                    }
                    on_uploaded.run(());
                }
                Err(e) => {
                    log::warn!("upload failed: {}", e);
                    ctx.toast_err("Upload failed");
                }
            }
        });
    };

    view! {
        <div class="upload-section">
            <div
                id="dropZone"
                class=move || zone_class("drop-zone", fd.hovering_read.get())
                on:click=browse
                on:dragover=make_on_dragover(fd)
                on:dragleave=make_on_dragleave(fd)
                on:drop=make_on_drop(fd)
            >
                <div class="drop-icon">"⬆️"</div>
                <p>
                    {move || fd.selected_name().unwrap_or_else(|| "Drop a file here or click to browse".to_string())}
                </p>
            </div>
            <input
                id="fileInput"
                type="file"
                class="hidden"
                node_ref=input_ref
                on:change=make_on_input_change(fd)
            />
            <div class="upload-row">
                <input
                    id="descInput"
                    type="text"
                    placeholder="Description (optional)"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <button
                    id="uploadBtn"
                    class="btn primary"
                    disabled=move || progress.get().is_some()
                    on:click=start_upload
                >
                    "Upload"
                </button>
            </div>
            <div id="progressWrap" class="progress-wrap" class:hidden=move || progress.get().is_none()>
                <div
                    id="progressBar"
                    class="progress-bar"
                    style=move || format!("width: {}%", progress.get().unwrap_or(0))
                ></div>
            </div>
        </div>
    }
}
