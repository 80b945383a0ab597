//! Sign-in page: credential form probing the router REST API.

use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use mikrodash_app::endpoint::RouterEndpoint;
use mikrodash_app::login_form::{KeyAction, LoginForm};
use mikrodash_app::services::auth_service::SIGNED_IN_NOTICE;
use mikrodash_domain::error::MikroDashError;

use crate::auth::{auth_service, use_router_endpoint};
use crate::components::{Spinner, use_toasts};

/// Sign-in card with user and password fields.
///
/// Validation runs before any request. While a request is in flight every
/// control is disabled and the button shows a spinner. Submitting is
/// disabled until the router endpoint is resolved.
#[component]
pub fn Login() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let (show_password, set_show_password) = signal(false);
    let password_ref = NodeRef::<html::Input>::new();

    let toasts = use_toasts();
    let endpoint = use_router_endpoint();
    let navigate = use_navigate();

    let loading = move || form.with(LoginForm::is_loading);
    let submit_disabled = move || loading() || endpoint.with(RouterEndpoint::is_loading);
    let fallback_router = move || {
        endpoint.with(|endpoint| match endpoint {
            RouterEndpoint::Fallback(config) => Some(config.router_url.clone()),
            RouterEndpoint::Loading | RouterEndpoint::Ready(_) => None,
        })
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(config) = endpoint.with_untracked(|endpoint| endpoint.config().cloned()) else {
            return;
        };
        let Some(credentials) = form.try_update(LoginForm::submit).flatten() else {
            return;
        };

        let service = auth_service(config);
        let toasts = toasts.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let result = service.sign_in(&credentials).await;
            form.update(LoginForm::finish_submit);
            match result {
                Ok(signed_in) => {
                    toasts.success(SIGNED_IN_NOTICE);
                    navigate(signed_in.redirect_to().path(), NavigateOptions::default());
                }
                Err(err @ MikroDashError::Router(_)) => {
                    leptos::logging::warn!("sign-in failed: {err}");
                    toasts.error(err.notification());
                }
                Err(err) => {
                    leptos::logging::error!("unexpected sign-in failure: {err:?}");
                    toasts.error(err.notification());
                }
            }
        });
    };

    let on_reset = move |ev: leptos::ev::Event| {
        ev.prevent_default();
        form.update(LoginForm::reset);
        set_show_password.set(false);
    };

    let on_user_keydown = move |ev: KeyboardEvent| {
        if LoginForm::user_key_action(&ev.key()) == KeyAction::FocusPassword {
            ev.prevent_default();
            if let Some(input) = password_ref.get()
                && let Err(err) = input.focus()
            {
                leptos::logging::warn!("failed to focus password field: {err:?}");
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">"Sign in"</h2>
                    <p class="card-description">"Sign in with your MikroTik user credential"</p>
                </div>
                <div class="card-content">
                    {move || fallback_router().map(|router_url| view! {
                        <p class="card-notice">"Router configuration unavailable, signing in to " {router_url}</p>
                    })}
                    <form on:submit=on_submit on:reset=on_reset novalidate=true>
                        <div class="field">
                            <label for="user">"User"</label>
                            <input
                                id="user"
                                type="text"
                                placeholder="username"
                                autofocus=true
                                autocomplete="username"
                                prop:value=move || form.with(|f| f.user().to_string())
                                disabled=loading
                                on:input=move |ev| form.update(|f| f.set_user(event_target_value(&ev)))
                                on:keydown=on_user_keydown
                            />
                            {move || form.with(LoginForm::user_error).map(|err| view! {
                                <p class="field-error">{err.to_string()}</p>
                            })}
                        </div>

                        <div class="field">
                            <label for="password">"Password"</label>
                            <div class="password-input">
                                <input
                                    id="password"
                                    node_ref=password_ref
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="********"
                                    autocomplete="current-password"
                                    prop:value=move || form.with(|f| f.password().to_string())
                                    disabled=loading
                                    on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                                />
                                <button
                                    type="button"
                                    class="password-toggle"
                                    disabled=loading
                                    on:click=move |_| set_show_password.update(|shown| *shown = !*shown)
                                >
                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                            {move || form.with(LoginForm::password_error).map(|err| view! {
                                <p class="field-error">{err.to_string()}</p>
                            })}
                        </div>

                        <div class="field form-actions">
                            <button type="submit" class="btn-primary" disabled=submit_disabled>
                                {move || if loading() {
                                    view! { <Spinner/> }.into_any()
                                } else {
                                    view! { <span>"Sign in"</span> }.into_any()
                                }}
                            </button>
                            <button type="reset" class="btn-secondary" disabled=loading>
                                "Clear"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
