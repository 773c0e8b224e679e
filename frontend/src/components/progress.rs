use leptos::*;

/// Thin progress bar, `value` in percent.
#[component]
pub fn ProgressBar(#[prop(into)] value: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div
                class="progress-fill"
                style=move || format!("width: {:.0}%;", value.get().clamp(0.0, 100.0))
            ></div>
        </div>
    }
}
