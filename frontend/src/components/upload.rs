//! File upload widget with drag & drop support.
//!
//! Renders an [`UploadIntake`] held in a [`StoredValue`]. Every mutation
//! refreshes a snapshot signal of [`EntryView`]s; the embedding form hears
//! about the file set through `on_files_change`. Upload timers live in an
//! [`UploadTimers`] registry disposed together with the widget.

use intake::{EntryId, FileKind, IntakeConfig, UploadIntake};
use leptos::*;
use web_sys::{DragEvent, Event, HtmlInputElement};

use crate::components::ProgressBar;
use crate::services::{drive_upload, UploadTimers};
use crate::types::{files_from_list, BrowserFile, EntryView};

#[component]
pub fn FileUpload(
    /// Constraints for this widget, fixed for its lifetime
    #[prop(optional)]
    config: Option<IntakeConfig>,
    /// Receives the file set whenever it changes
    #[prop(optional, into)]
    on_files_change: Option<Callback<Vec<BrowserFile>>>,
    /// Id of the hidden file input
    #[prop(optional, into)]
    input_id: Option<String>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let accept = config.accept.clone();
    let multiple = config.multiple;
    let hint = config.hint();

    let intake = store_value(UploadIntake::<BrowserFile>::new(config));
    let timers: StoredValue<UploadTimers> = store_value(UploadTimers::new());
    let (entries, set_entries) = create_signal(Vec::<EntryView>::new());
    let (is_dragging, set_is_dragging) = create_signal(false);

    let refresh = move || {
        let Some(snapshot) = intake
            .try_with_value(|i| i.entries().iter().map(EntryView::from).collect::<Vec<_>>())
        else {
            return;
        };
        set_entries.set(snapshot);
    };

    let notify = move || {
        let Some(callback) = on_files_change else {
            return;
        };
        if let Some(files) = intake.try_with_value(|i| i.files()) {
            callback.call(files);
        }
    };

    let handle_files = move |files: Vec<BrowserFile>| {
        log::debug!("📎 {} file(s) selected", files.len());

        let Some(started) = intake.try_update_value(|i| i.select(files)) else {
            return;
        };
        // A replacing selection cancels the timers of the entries it dropped
        let live = intake.try_with_value(|i| i.uploading_ids()).unwrap_or_default();
        timers.try_update_value(|t| t.retain_live(&live));
        refresh();
        notify();

        for id in started {
            drive_upload(intake, timers, id, move |_| refresh());
        }
    };

    let remove_file = move |id: EntryId| {
        timers.try_update_value(|t| t.stop(id));
        let removed = intake.try_update_value(|i| i.remove_id(id)).flatten();
        if removed.is_some() {
            refresh();
            notify();
        }
    };

    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        handle_files(files_from_list(input.files()));
        // Allow picking the same file again
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
        let files = ev.data_transfer().and_then(|dt| dt.files());
        handle_files(files_from_list(files));
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragging.set(false);
    };

    view! {
        <div class="file-upload">
            <div
                class=move || if is_dragging.get() { "drop-zone dragging" } else { "drop-zone" }
                on:drop=on_drop
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
            >
                <input
                    type="file"
                    id=input_id
                    class="drop-zone-input"
                    accept=accept
                    multiple=multiple
                    on:change=on_change
                />
                <div class="upload-icon">"📤"</div>
                <p class="upload-text">"Drag and drop files here, or click to browse"</p>
                <p class="upload-hint">{hint}</p>
            </div>

            <Show
                when=move || !entries.with(|e| e.is_empty())
                fallback=|| view! { }
            >
                <div class="file-list">
                    <For
                        each=move || entries.get()
                        key=|entry| entry.id
                        children=move |entry| {
                            view! {
                                <EntryRow id=entry.id entries=entries on_remove=remove_file/>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

/// One line of the file list, tracking its entry by id.
#[component]
fn EntryRow(
    id: EntryId,
    entries: ReadSignal<Vec<EntryView>>,
    #[prop(into)] on_remove: Callback<EntryId>,
) -> impl IntoView {
    let current = move || entries.with(|list| list.iter().find(|e| e.id == id).cloned());

    let Some(initial) = current() else {
        return view! { }.into_view();
    };
    let icon_class = match initial.kind {
        FileKind::Image => "file-icon image",
        FileKind::Document => "file-icon document",
    };
    let icon = initial.kind.icon();
    let name = initial.name;
    let size_label = initial.size_label;
    let error_text = initial.error.unwrap_or_default();
    let status = move || current().map(|e| e.status).unwrap_or("error");
    let progress = Signal::derive(move || current().map(|e| e.progress).unwrap_or(0.0));

    view! {
        <div class="file-card">
            <div class=icon_class>{icon}</div>
            <div class="file-body">
                <div class="file-header">
                    <p class="file-name">{name}</p>
                    <button
                        class="file-remove"
                        title="Remove"
                        on:click=move |_| on_remove.call(id)
                    >
                        "✕"
                    </button>
                </div>
                <div class="file-meta">
                    <p class="file-size">{size_label}</p>
                    <Show when=move || status() == "success" fallback=|| view! { }>
                        <span class="file-status success">"✅ Uploaded"</span>
                    </Show>
                    <Show when=move || status() == "error" fallback=|| view! { }>
                        <span class="file-status error">
                            "⚠️ " {error_text.clone()}
                        </span>
                    </Show>
                </div>
                <Show when=move || status() == "uploading" fallback=|| view! { }>
                    <ProgressBar value=progress/>
                </Show>
            </div>
        </div>
    }
    .into_view()
}
