//! Leptos FileDrop Utilities
//!
//! Single-file selection for Leptos via an `<input type="file">` or HTML5
//! drag-and-drop onto a zone. Dropping replaces any previous selection.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

/// Drop zone state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    /// A drag is currently over the zone
    pub hovering_read: ReadSignal<bool>,
    pub hovering_write: WriteSignal<bool>,
    /// The single selected file, if any
    pub selected_read: ReadSignal<Option<File>, LocalStorage>,
    pub selected_write: WriteSignal<Option<File>, LocalStorage>,
}

impl FileDropSignals {
    /// Name of the selected file, for display
    pub fn selected_name(&self) -> Option<String> {
        self.selected_read.with(|f| f.as_ref().map(|f| f.name()))
    }
}

pub fn create_file_drop_signals() -> FileDropSignals {
    let (hovering_read, hovering_write) = signal(false);
    let (selected_read, selected_write) = signal_local(None::<File>);
    FileDropSignals {
        hovering_read,
        hovering_write,
        selected_read,
        selected_write,
    }
}

/// CSS class for the zone, `drag` appended while hovered
pub fn zone_class(base: &str, hovering: bool) -> String {
    if hovering {
        format!("{} drag", base)
    } else {
        base.to_string()
    }
}

/// First file of a browser file list
pub fn first_file(list: Option<FileList>) -> Option<File> {
    list.and_then(|files| files.get(0))
}

/// Drop the current selection
pub fn clear_selection(fd: &FileDropSignals) {
    fd.selected_write.set(None);
}

/// Create dragover handler - marks the zone as hovered
pub fn make_on_dragover(fd: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        fd.hovering_write.set(true);
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(fd: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        fd.hovering_write.set(false);
    }
}

/// Create drop handler
/// Replaces the selection with the first dropped file; an empty drop keeps it
pub fn make_on_drop(fd: FileDropSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        fd.hovering_write.set(false);

        let dropped = first_file(ev.data_transfer().and_then(|dt| dt.files()));
        if dropped.is_some() {
            fd.selected_write.set(dropped);
        }
    }
}

/// Create change handler for a file input
pub fn make_on_input_change(fd: FileDropSignals) -> impl Fn(Event) + Copy + 'static {
    move |ev: Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        fd.selected_write.set(first_file(input.files()));
    }
}
