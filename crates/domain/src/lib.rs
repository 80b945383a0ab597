//! # mikrodash-domain
//!
//! Pure domain model for the mikrodash router dashboard.
//!
//! ## Responsibilities
//! - Define **Credentials** and their input-shape rules (required fields,
//!   minimum password length)
//! - Define the **session token** stored in the browser (`base64("user:password")`)
//! - Define the **router wire contracts**: the optional-safe error body and the
//!   `/rest/system/resource` payload used as the login probe
//! - Define the **client configuration** shared by the daemon and the browser app
//! - Define the **dashboard sections** rendered by the shell
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod config;
pub mod credentials;
pub mod router;
pub mod section;
pub mod session;
