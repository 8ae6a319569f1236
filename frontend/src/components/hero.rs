//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Plagium Detector"</h1>
            <p class="subtitle">
                "Upload two or more Python files to compare their syntax trees. "
                "Each pair gets a similarity score between 0 and 100%."
            </p>
        </div>
    }
}
