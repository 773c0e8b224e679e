//! Documents step of the new-case form.
//!
//! Embeds one [`FileUpload`] for the pathology report and, when the patient
//! has slides, a second one for slide files. "Continue" stays disabled until
//! a report file is present.

use intake::{IntakeConfig, SlideAvailability};
use leptos::*;

use crate::components::FileUpload;
use crate::types::BrowserFile;
use crate::{REPORT_INPUT_ID, SLIDE_INPUT_ID};

#[component]
pub fn DocumentsStep() -> impl IntoView {
    let (availability, set_availability) = create_signal(SlideAvailability::ReportOnly);
    let (report_files, set_report_files) = create_signal(Vec::<BrowserFile>::new());
    let (slide_files, set_slide_files) = create_signal(Vec::<BrowserFile>::new());
    let (needs_pickup, set_needs_pickup) = create_signal(false);
    let (submitted, set_submitted) = create_signal(false);

    let on_availability = move |value: &'static str| {
        if let Some(choice) = SlideAvailability::from_value(value) {
            // A new slide widget starts empty
            set_slide_files.set(Vec::new());
            set_needs_pickup.set(false);
            set_availability.set(choice);
        }
    };

    let on_continue = move |_| {
        log::info!(
            "📨 Case documents ready: {} report file(s), {} slide file(s), pickup: {}",
            report_files.with(|f| f.len()),
            slide_files.with(|f| f.len()),
            needs_pickup.get()
        );
        set_submitted.set(true);
    };

    view! {
        <Show
            when=move || !submitted.get()
            fallback=|| view! {
                <div class="success-card">
                    <h2>"Case Submitted"</h2>
                    <p>"An expert pathologist will be assigned to review your documents."</p>
                </div>
            }
        >
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">"Upload Documents"</h2>
                    <p class="card-description">
                        "Upload your pathology report and slides (if available)"
                    </p>
                </div>

                <div class="card-content">
                    <fieldset class="slide-availability">
                        <legend>"Do you have glass slides or digital slides?"</legend>
                        {SlideAvailability::ALL
                            .into_iter()
                            .map(|choice| {
                                view! {
                                    <label class="radio-option">
                                        <input
                                            type="radio"
                                            name="has-slides"
                                            value=choice.value()
                                            prop:checked=move || availability.get() == choice
                                            on:change=move |_| on_availability(choice.value())
                                        />
                                        {choice.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </fieldset>

                    <Show
                        when=move || availability.get() == SlideAvailability::NeedSlides
                        fallback=|| view! { }
                    >
                        <div class="alert">
                            "We'll guide you through the process of retrieving your slides from the lab after case submission."
                        </div>
                    </Show>

                    <div class="field">
                        <label for=REPORT_INPUT_ID>"Pathology Report (Required)"</label>
                        <FileUpload
                            config=IntakeConfig::pathology_report()
                            input_id=REPORT_INPUT_ID
                            on_files_change={move |files: Vec<BrowserFile>| set_report_files.set(files)}
                        />
                    </div>

                    {move || {
                        availability.get().slide_source().map(|source| {
                            view! {
                                <div class="field">
                                    <label for=SLIDE_INPUT_ID>{source.label()}</label>
                                    <FileUpload
                                        config=IntakeConfig::slides(source)
                                        input_id=SLIDE_INPUT_ID
                                        on_files_change={move |files: Vec<BrowserFile>| set_slide_files.set(files)}
                                    />
                                </div>
                            }
                        })
                    }}

                    <Show
                        when=move || availability.get().offers_pickup()
                        fallback=|| view! { }
                    >
                        <label class="checkbox-option">
                            <input
                                type="checkbox"
                                prop:checked=move || needs_pickup.get()
                                on:change=move |ev| set_needs_pickup.set(event_target_checked(&ev))
                            />
                            "I need slide pickup and delivery service (Premium add-on)"
                        </label>
                    </Show>

                    <div class="alert">
                        "All uploads are encrypted and stored securely. Only the assigned expert pathologist will have access."
                    </div>

                    <button
                        class="button primary"
                        disabled=move || report_files.with(|f| f.is_empty())
                        on:click=on_continue
                    >
                        "Continue"
                    </button>
                </div>
            </div>
        </Show>
    }
}
