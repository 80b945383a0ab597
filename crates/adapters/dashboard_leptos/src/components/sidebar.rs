//! Sidebar navigation for the dashboard shell.

use leptos::prelude::*;
use mikrodash_domain::section::Section;

/// Sidebar with one link per dashboard section and a sign-out action.
#[component]
pub fn Sidebar(
    /// Invoked when the user clicks "Sign out".
    #[prop(into)]
    on_sign_out: Callback<()>,
) -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">"MikroDash"</div>
            <nav>
                <ul>
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <li>
                                    <a href=format!("#{}", section.anchor())>{section.title()}</a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
            <button class="sidebar-sign-out" on:click=move |_| on_sign_out.run(())>
                "Sign out"
            </button>
        </aside>
    }
}
