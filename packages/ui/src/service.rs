//! Shared remote-service constructor for all views.
//!
//! Returns a [`store::DataService`] backed by [`api::RestStore`], acting as
//! the signed-in user when a session is given and as the anonymous role
//! otherwise. Views construct one per operation rather than sharing a
//! global client, so the identity each request carries is always the one
//! that was current when the user acted.

use api::{RestStore, ServiceConfig, Session};
use store::DataService;

pub fn make_service(config: &ServiceConfig, session: Option<&Session>) -> DataService<RestStore> {
    let token = session.map(|s| s.access_token.as_str());
    DataService::new(RestStore::with_token(config, token))
}
