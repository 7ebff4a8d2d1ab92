//! # API crate — the network boundary of CourseHub
//!
//! Everything that talks to the hosted Remote Data Service lives here. The
//! `store` crate defines the generic table interface and the typed gateway;
//! this crate supplies the production implementation plus the identity
//! client.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | The two endpoint/credential values required at startup, read from the environment with a fail-fast error when missing |
//! | [`error`] | The [`ApiError`] taxonomy: service, validation, not-found, configuration |
//! | [`rest`] | [`RestStore`] — `store::TableStore` over the service's REST dialect (filter/order encoding, API-key and bearer headers, `return=representation`) |
//! | [`auth`] | [`AuthClient`] and [`Session`] — password sign-in, sign-out, and session (de)serialization for restore |

pub mod auth;
pub mod config;
pub mod error;
pub mod rest;

pub use auth::{AuthClient, Session, SESSION_STORAGE_KEY};
pub use config::{ConfigError, ServiceConfig};
pub use error::ApiError;
pub use rest::RestStore;
