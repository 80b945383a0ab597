//! Inline loading spinner.

use leptos::prelude::*;

/// An animated spinner sized to sit inside a button.
#[component]
pub fn Spinner(
    /// Accessible label announced by screen readers.
    #[prop(default = "Loading\u{2026}".into(), into)]
    label: String,
) -> impl IntoView {
    view! {
        <span class="spinner" role="status" aria-label=label></span>
    }
}
