//! # mikrodash-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the compiled **Leptos dashboard bundle** (`index.html`, wasm, js, css)
//! - Fall back to `index.html` for unknown paths so client-side routes
//!   (`/login`, `/dashboard`) survive a page reload
//! - Serve the **runtime client configuration** as `/config.json`, so the
//!   router endpoint is deployment configuration rather than a constant baked
//!   into the wasm bundle
//! - Answer `/health` for liveness probes
//!
//! ## What this adapter does *not* do
//! The browser talks to the router directly. Credentials never pass through
//! this server.
//!
//! ## Dependency rule
//! Depends on `mikrodash-domain` for the shared [`ClientConfig`] type. Never
//! leaks axum types into the domain.
//!
//! [`ClientConfig`]: mikrodash_domain::config::ClientConfig

pub mod assets;
pub mod config;
pub mod router;
pub mod state;
