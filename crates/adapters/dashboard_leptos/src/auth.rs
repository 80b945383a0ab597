//! Wiring of the sign-in use-case to the browser adapters.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mikrodash_app::endpoint::RouterEndpoint;
use mikrodash_app::services::auth_service::AuthService;
use mikrodash_domain::config::ClientConfig;

use crate::api::{self, RestRouterApi};
use crate::storage::BrowserSessionStore;

/// [`AuthService`] backed by `gloo-net` and `sessionStorage`.
pub type BrowserAuthService = AuthService<RestRouterApi, BrowserSessionStore>;

/// Build an auth service talking to the router in `config`.
pub fn auth_service(config: ClientConfig) -> BrowserAuthService {
    AuthService::new(RestRouterApi::new(config), BrowserSessionStore)
}

/// Auth service for the session-only operations (restore, sign out).
///
/// These never call the router, so the endpoint does not need to be
/// resolved yet.
pub fn session_service() -> BrowserAuthService {
    auth_service(ClientConfig::default())
}

/// Reactive router endpoint, provided through Leptos context.
#[derive(Clone, Copy)]
struct EndpointContext(ReadSignal<RouterEndpoint>);

/// Provide the router endpoint to the component tree.
///
/// Stays [`RouterEndpoint::Loading`] until the daemon's `/config.json`
/// settles, then becomes `Ready`, or `Fallback` to the built-in router when
/// it cannot be loaded.
pub fn provide_router_endpoint() {
    let (endpoint, set_endpoint) = signal(RouterEndpoint::Loading);

    spawn_local(async move {
        let loaded = api::fetch_client_config().await;
        if let Err(err) = &loaded {
            leptos::logging::warn!("using default router endpoint: {err}");
        }
        set_endpoint.set(RouterEndpoint::resolve(loaded));
    });

    provide_context(EndpointContext(endpoint));
}

/// Access the router endpoint from Leptos context.
///
/// Must be called within a component tree below [`crate::App`].
pub fn use_router_endpoint() -> ReadSignal<RouterEndpoint> {
    use_context::<EndpointContext>()
        .expect("EndpointContext not found in context")
        .0
}
