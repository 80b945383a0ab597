use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

pub mod api;
pub mod auth;
mod components;
mod pages;
pub mod storage;

use components::ToastContainer;
use pages::{Dashboard, Login, NotFound};

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    auth::provide_router_endpoint();

    view! {
        <ToastContainer>
            <Router>
                <main>
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=Login/>
                        <Route path=path!("login") view=Login/>
                        <Route path=path!("dashboard") view=Dashboard/>
                    </Routes>
                </main>
            </Router>
        </ToastContainer>
    }
}
