use leptos::prelude::*;

#[component]
pub fn SiteHeader(
    /// Name of the signed-in router user.
    #[prop(into)]
    user: String,
) -> impl IntoView {
    view! {
        <header class="site-header">
            <h1>"Dashboard"</h1>
            <span class="site-header-user">"Signed in as " <strong>{user}</strong></span>
        </header>
    }
}
