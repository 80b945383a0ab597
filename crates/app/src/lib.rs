//! # mikrodash-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `RouterApi`: authenticated calls to the router REST API
//!   - `SessionStore`: browser-session key/value storage
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AuthService`: sign in (probe → commit), restore, sign out
//!   - `LoginForm`: the login form state machine driven by the UI
//!   - `RouterEndpoint`: which router sign-in talks to, once resolved
//! - Orchestrate domain objects without knowing *how* HTTP or storage work
//!
//! ## Dependency rule
//! Depends on `mikrodash-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//! Nothing here may assume a multi-threaded runtime: the main consumer is a
//! single-threaded WebAssembly app.

pub mod endpoint;
pub mod login_form;
pub mod navigation;
pub mod ports;
pub mod services;
