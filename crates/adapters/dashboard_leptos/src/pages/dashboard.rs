//! Dashboard shell: sidebar, header, and the section panels.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use mikrodash_app::navigation::Route;
use mikrodash_domain::section::Section;

use crate::auth::{BrowserAuthService, session_service};
use crate::components::{Sidebar, SiteHeader, use_toasts};

/// User name of the stored session, if a valid one exists.
///
/// A session that no longer decodes is dropped.
fn stored_user(service: &BrowserAuthService) -> Option<String> {
    match service.current_session() {
        Ok(session) => session.map(|credentials| credentials.user().to_string()),
        Err(err) => {
            leptos::logging::warn!("discarding stored session: {err}");
            if let Err(err) = service.sign_out() {
                leptos::logging::error!("failed to clear stored session: {err:?}");
            }
            None
        }
    }
}

/// Dashboard page. Redirects to the sign-in page when no session is stored
/// or once the user signs out.
#[component]
pub fn Dashboard() -> impl IntoView {
    let toasts = use_toasts();

    let (user, set_user) = signal(stored_user(&session_service()));

    let on_sign_out = Callback::new(move |()| {
        match session_service().sign_out() {
            Ok(()) => set_user.set(None),
            Err(err) => {
                leptos::logging::error!("sign-out failed: {err:?}");
                toasts.error(err.notification());
            }
        }
    });

    move || match user.get() {
        Some(user) => view! { <DashboardShell user on_sign_out/> }.into_any(),
        None => view! { <Redirect path=Route::Login.path()/> }.into_any(),
    }
}

#[component]
fn DashboardShell(user: String, on_sign_out: Callback<()>) -> impl IntoView {
    let (overview, rest): (Vec<Section>, Vec<Section>) =
        Section::ALL.into_iter().partition(|section| section.is_overview());

    view! {
        <div class="dashboard">
            <Sidebar on_sign_out/>
            <div class="dashboard-inset">
                <SiteHeader user/>
                <div class="dashboard-content">
                    <div class="overview-row">
                        {overview.into_iter().map(|section| view! { <Panel section/> }).collect::<Vec<_>>()}
                    </div>
                    {rest.into_iter().map(|section| view! { <Panel section/> }).collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}

/// Placeholder panel for a dashboard section.
#[component]
fn Panel(section: Section) -> impl IntoView {
    view! {
        <section id=section.anchor() class="panel">
            <h2 class="panel-title">{section.title()}</h2>
        </section>
    }
}
