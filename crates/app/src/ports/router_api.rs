//! Router API port: authenticated calls to the router REST interface.

use std::future::Future;

use mikrodash_domain::credentials::Credentials;
use mikrodash_domain::router::{RouterError, SystemResource};

/// Client for the router REST API.
///
/// Credentials are passed to every call; implementations must not keep a
/// process-wide default `Authorization` header. Returned futures are not
/// required to be `Send`.
pub trait RouterApi {
    /// `GET /rest/system/resource` with HTTP Basic auth.
    ///
    /// Succeeds only on status 200. Any other status becomes
    /// [`RouterError::Rejected`] carrying the parsed error body.
    fn system_resource(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Result<SystemResource, RouterError>>;
}
