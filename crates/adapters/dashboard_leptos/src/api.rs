//! HTTP clients wrapping `gloo-net`: the daemon's `/config.json` and the
//! router REST API.

use gloo_net::http::Request;
use mikrodash_app::ports::RouterApi;
use mikrodash_domain::config::{ClientConfig, ClientConfigError};
use mikrodash_domain::credentials::Credentials;
use mikrodash_domain::router::{RouterError, SystemResource};

/// Path of the runtime configuration served by `mikrodashd`.
const CONFIG_PATH: &str = "/config.json";

/// Failure to load the runtime configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFetchError {
    /// No response, or a body that is not a client config document.
    #[error("config request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("config request answered with status {0}")]
    Status(u16),
    #[error(transparent)]
    Invalid(#[from] ClientConfigError),
}

/// Fetch the runtime configuration served by `mikrodashd`.
pub async fn fetch_client_config() -> Result<ClientConfig, ConfigFetchError> {
    let resp = Request::get(CONFIG_PATH).send().await?;
    if !resp.ok() {
        return Err(ConfigFetchError::Status(resp.status()));
    }
    let config: ClientConfig = resp.json().await?;
    config.validate()?;
    Ok(config)
}

/// Router REST client. Credentials travel in each request's own
/// `Authorization` header.
#[derive(Debug, Clone)]
pub struct RestRouterApi {
    config: ClientConfig,
}

impl RestRouterApi {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }
}

fn network_error(err: gloo_net::Error) -> RouterError {
    RouterError::Network(err.to_string())
}

impl RouterApi for RestRouterApi {
    async fn system_resource(
        &self,
        credentials: &Credentials,
    ) -> Result<SystemResource, RouterError> {
        let resp = Request::get(&self.config.system_resource_url())
            .header("Authorization", &credentials.basic_auth_header())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network_error)?;

        let status = resp.status();
        // An unreadable body is treated like an empty one: status decides.
        let body = resp.binary().await.unwrap_or_default();

        SystemResource::from_response(status, &body)
    }
}
