//! Screenshot Drop Zone Component
//!
//! Drag-and-drop or click-to-pick target for one task's screenshot.

use leptos::html;
use leptos::prelude::*;
use leptos_filedrop::{create_file_drop_signals, files_from_input, make_on_dragleave, make_on_dragover, make_on_drop};
use web_sys::File;

use crate::staging::IMAGE_TYPES;

/// Drop zone that forwards the first dropped or picked file
#[component]
pub fn ScreenshotDrop(
    /// Name of the file currently staged for this task
    #[prop(into)]
    staged_name: Signal<Option<String>>,
    /// Called with the chosen file; filtering happens in the caller
    #[prop(into)]
    on_file: Callback<File>,
) -> impl IntoView {
    let signals = create_file_drop_signals();
    let input_ref = NodeRef::<html::Input>::new();

    let on_dragover = make_on_dragover(signals);
    let on_dragleave = make_on_dragleave(signals);
    let on_drop = make_on_drop(signals, 1, move |files| {
        if let Some(file) = files.into_iter().next() {
            on_file.run(file);
        }
    });

    let on_change = move |ev: web_sys::Event| {
        if let Some(file) = files_from_input(&ev, 1).into_iter().next() {
            on_file.run(file);
        }
    };

    let open_picker = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class=move || if signals.hovering_read.get() { "screenshot-drop active" } else { "screenshot-drop" }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=open_picker
        >
            <input
                type="file"
                class="hidden-input"
                accept=IMAGE_TYPES.as_attribute()
                node_ref=input_ref
                on:click=|ev| ev.stop_propagation()
                on:change=on_change
            />
            {move || match staged_name.get() {
                Some(name) => view! { <p class="staged-name">{name}</p> }.into_any(),
                None => view! {
                    <p class="drop-hint">"Drag & drop or click to upload a screenshot (PNG, JPG, GIF, WEBP)"</p>
                }
                .into_any(),
            }}
        </div>
    }
}
