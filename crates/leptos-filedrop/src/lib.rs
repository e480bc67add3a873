//! Leptos FileDrop Utilities
//!
//! Drag-and-drop and click-to-pick file intake for Leptos.
//! Handlers only collect `web_sys::File` handles; deciding what to keep is up to the caller.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// A MIME allow-list such as `image/png, image/jpeg`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AcceptList(pub &'static [&'static str]);

impl AcceptList {
    /// Whether `content_type` is in the list (case-insensitive, parameters ignored)
    pub fn accepts(&self, content_type: &str) -> bool {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        !essence.is_empty() && self.0.iter().any(|allowed| *allowed == essence)
    }

    /// Value for an `<input type="file" accept=...>` attribute
    pub fn as_attribute(&self) -> String {
        self.0.join(",")
    }
}

/// Drop zone state signals
#[derive(Clone, Copy)]
pub struct FileDropSignals {
    pub hovering_read: ReadSignal<bool>,
    pub hovering_write: WriteSignal<bool>,
}

pub fn create_file_drop_signals() -> FileDropSignals {
    let (hovering_read, hovering_write) = signal(false);
    FileDropSignals {
        hovering_read,
        hovering_write,
    }
}

/// Collect files from a `FileList`, keeping at most `limit`
pub fn collect_files(list: Option<web_sys::FileList>, limit: usize) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .take(limit)
        .collect()
}

/// Files carried by a drop event
pub fn files_from_drop(ev: &web_sys::DragEvent, limit: usize) -> Vec<web_sys::File> {
    collect_files(ev.data_transfer().and_then(|dt| dt.files()), limit)
}

/// Files chosen through an `<input type="file">` change event
pub fn files_from_input(ev: &web_sys::Event, limit: usize) -> Vec<web_sys::File> {
    let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = collect_files(input.files(), limit);
    // Reset so picking the same file again still fires `change`
    input.set_value("");
    files
}

/// Create dragover handler; required for the browser to allow a drop
pub fn make_on_dragover(signals: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if !signals.hovering_read.get_untracked() {
            signals.hovering_write.set(true);
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(signals: FileDropSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        signals.hovering_write.set(false);
    }
}

/// Create drop handler; forwards at most `limit` files to `on_files`
pub fn make_on_drop<F>(signals: FileDropSignals, limit: usize, on_files: F) -> impl Fn(web_sys::DragEvent) + 'static
where
    F: Fn(Vec<web_sys::File>) + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        signals.hovering_write.set(false);

        let files = files_from_drop(&ev, limit);
        if !files.is_empty() {
            on_files(files);
        }
    }
}
