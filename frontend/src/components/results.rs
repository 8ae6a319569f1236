//! Similarity report rendering.
//!
//! Owns the `#results-container` element. Its content is derived from the
//! controller's [`ResultsView`], so a new submission replaces the previous
//! rows instead of appending to them.

use leptos::*;

use crate::{FormController, ReportEntry, ResultsView};

#[component]
pub fn ResultsPanel(controller: RwSignal<FormController>) -> impl IntoView {
    let results = create_memo(move |_| controller.with(|c| c.results().clone()));

    view! {
        <div id="results-container">
            {move || results.with(render_results)}
        </div>
    }
}

fn render_results(results: &ResultsView) -> View {
    let title = results.has_title().then(|| view! { <ReportTitle/> });

    let placeholder = results.placeholder().map(|text| {
        view! {
            <div class="report">
                <div class="row">
                    <div class="col-md-12">
                        <p>{text}</p>
                    </div>
                </div>
            </div>
        }
    });

    let error = results.error_message().map(|message| {
        let message = message.to_string();
        view! {
            <div class="alert alert-danger" role="alert">
                <strong>"Comparison failed: "</strong>
                {message}
            </div>
        }
    });

    let rows = results
        .rows()
        .iter()
        .cloned()
        .enumerate()
        .map(|(i, entry)| view! { <ReportRow position={i + 1} entry=entry/> })
        .collect_view();

    view! {
        {title}
        {placeholder}
        {error}
        {rows}
    }
    .into_view()
}

#[component]
fn ReportTitle() -> impl IntoView {
    view! {
        <div class="row">
            <div class="col-12">
                <h5>"Report results"</h5>
            </div>
        </div>
    }
}

#[component]
fn ReportRow(position: usize, entry: ReportEntry) -> impl IntoView {
    view! {
        <div class="report">
            <div class="row">
                <h6 class="mt-4">{format!("Report {}", position)}</h6>
                <div class="col-md-6">
                    <p>"File 1: " {entry.file1.clone()}</p>
                </div>
                <div class="col-md-6">
                    <p>"File 2: " {entry.file2.clone()}</p>
                </div>
            </div>
            <div class="row">
                <div class="col-md-12">
                    <div class="progress">
                        <div
                            class="progress-bar"
                            role="progressbar"
                            style=entry.bar_style()
                            aria-valuenow=entry.clamped().to_string()
                            aria-valuemin="0"
                            aria-valuemax="100"
                        >
                            {entry.display_percentage()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
