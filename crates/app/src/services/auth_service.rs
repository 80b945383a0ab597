//! Auth service: sign in against the router and keep the session token.

use mikrodash_domain::credentials::Credentials;
use mikrodash_domain::error::MikroDashError;
use mikrodash_domain::router::SystemResource;
use mikrodash_domain::session::{SESSION_KEY, SessionToken};

use crate::navigation::Route;
use crate::ports::{RouterApi, SessionStore};

/// Notification shown once the router accepted the credentials.
pub const SIGNED_IN_NOTICE: &str = "Connected, redirecting...";

/// Result of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIn {
    /// The user name the router accepted.
    pub user: String,
    /// What the probe returned about the router.
    pub resource: SystemResource,
}

impl SignedIn {
    /// Page to navigate to after signing in.
    #[must_use]
    pub fn redirect_to(&self) -> Route {
        Route::Dashboard
    }
}

/// Application service for the login lifecycle.
pub struct AuthService<R, S> {
    router: R,
    store: S,
}

impl<R: RouterApi, S: SessionStore> AuthService<R, S> {
    /// Create a new service backed by the given router client and store.
    pub fn new(router: R, store: S) -> Self {
        Self { router, store }
    }

    /// Probe the router with `credentials` and, only if it answers 200,
    /// commit the session token to the store.
    ///
    /// A rejected or unreachable router leaves the store untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MikroDashError::Router`] when the probe fails, or
    /// [`MikroDashError::Storage`] when the commit fails.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SignedIn, MikroDashError> {
        tracing::debug!(user = credentials.user(), "probing router");

        let resource = match self.router.system_resource(credentials).await {
            Ok(resource) => resource,
            Err(err) => {
                tracing::warn!(user = credentials.user(), error = %err, "sign-in rejected");
                return Err(err.into());
            }
        };

        self.store
            .set(SESSION_KEY, credentials.to_token().as_str())?;

        tracing::info!(
            user = credentials.user(),
            router = resource.describe().as_deref().unwrap_or("unknown"),
            "signed in"
        );
        Ok(SignedIn {
            user: credentials.user().to_string(),
            resource,
        })
    }

    /// Credentials committed by an earlier sign-in, if any.
    ///
    /// # Errors
    ///
    /// Returns [`MikroDashError::Storage`] when the store cannot be read, or
    /// [`MikroDashError::Session`] when the stored token does not decode.
    pub fn current_session(&self) -> Result<Option<Credentials>, MikroDashError> {
        let Some(raw) = self.store.get(SESSION_KEY)? else {
            return Ok(None);
        };
        let credentials = SessionToken::from_stored(raw).decode()?;
        Ok(Some(credentials))
    }

    /// Forget the stored session.
    ///
    /// # Errors
    ///
    /// Returns [`MikroDashError::Storage`] when the store cannot be written.
    pub fn sign_out(&self) -> Result<(), MikroDashError> {
        self.store.remove(SESSION_KEY)?;
        tracing::info!("signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mikrodash_domain::error::StorageError;
    use mikrodash_domain::router::{RouterError, RouterErrorBody};
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct StubRouter {
        response: Result<SystemResource, RouterError>,
        calls: Mutex<Vec<String>>,
    }

    impl StubRouter {
        fn answering(response: Result<SystemResource, RouterError>) -> Self {
            Self {
                response,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl RouterApi for StubRouter {
        async fn system_resource(
            &self,
            credentials: &Credentials,
        ) -> Result<SystemResource, RouterError> {
            self.calls
                .lock()
                .unwrap()
                .push(credentials.basic_auth_header());
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct InMemoryStore {
        values: Mutex<HashMap<String, String>>,
        read_only: bool,
    }

    impl SessionStore for InMemoryStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::Backend("quota exceeded".to_string()));
            }
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn credentials() -> Credentials {
        Credentials::new("admin", "password").unwrap()
    }

    fn unauthorized() -> RouterError {
        RouterError::Rejected {
            status: 401,
            body: RouterErrorBody::parse(br#"{"error":401,"message":"Unauthorized"}"#),
        }
    }

    fn resource() -> SystemResource {
        SystemResource {
            board_name: Some("RB5009".to_string()),
            version: Some("7.14".to_string()),
            ..SystemResource::default()
        }
    }

    #[tokio::test]
    async fn should_store_token_and_redirect_when_router_accepts() {
        let svc = AuthService::new(StubRouter::answering(Ok(resource())), InMemoryStore::default());

        let signed_in = svc.sign_in(&credentials()).await.unwrap();

        assert_eq!(signed_in.user, "admin");
        assert_eq!(signed_in.resource.board_name.as_deref(), Some("RB5009"));
        assert_eq!(signed_in.redirect_to().path(), "/dashboard");
        assert_eq!(
            svc.store.get(SESSION_KEY).unwrap().as_deref(),
            Some("YWRtaW46cGFzc3dvcmQ=")
        );
    }

    #[tokio::test]
    async fn should_send_basic_auth_with_each_probe() {
        let svc = AuthService::new(StubRouter::answering(Ok(resource())), InMemoryStore::default());

        svc.sign_in(&credentials()).await.unwrap();

        let calls = svc.router.calls.lock().unwrap();
        assert_eq!(calls.as_slice(), ["Basic YWRtaW46cGFzc3dvcmQ="]);
    }

    #[tokio::test]
    async fn should_not_store_token_when_router_rejects() {
        let svc = AuthService::new(StubRouter::answering(Err(unauthorized())), InMemoryStore::default());

        let err = svc.sign_in(&credentials()).await.unwrap_err();

        assert!(matches!(err, MikroDashError::Router(RouterError::Rejected { status: 401, .. })));
        assert_eq!(err.notification(), "Error: 401 Unauthorized");
        assert!(svc.store.get(SESSION_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn should_not_store_token_when_router_unreachable() {
        let svc = AuthService::new(
            StubRouter::answering(Err(RouterError::Network("Failed to fetch".to_string()))),
            InMemoryStore::default(),
        );

        let err = svc.sign_in(&credentials()).await.unwrap_err();

        assert!(matches!(err, MikroDashError::Router(RouterError::Network(_))));
        assert!(svc.store.get(SESSION_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn should_keep_previous_session_when_new_sign_in_fails() {
        let store = InMemoryStore::default();
        store
            .set(SESSION_KEY, SessionToken::encode("old", "oldpassword").as_str())
            .unwrap();
        let svc = AuthService::new(StubRouter::answering(Err(unauthorized())), store);

        svc.sign_in(&credentials()).await.unwrap_err();

        let restored = svc.current_session().unwrap().unwrap();
        assert_eq!(restored.user(), "old");
    }

    #[tokio::test]
    async fn should_report_storage_error_when_commit_fails() {
        let store = InMemoryStore {
            read_only: true,
            ..InMemoryStore::default()
        };
        let svc = AuthService::new(StubRouter::answering(Ok(resource())), store);

        let err = svc.sign_in(&credentials()).await.unwrap_err();

        assert!(matches!(err, MikroDashError::Storage(StorageError::Backend(_))));
    }

    #[tokio::test]
    async fn should_restore_session_after_sign_in() {
        let svc = AuthService::new(StubRouter::answering(Ok(resource())), InMemoryStore::default());
        svc.sign_in(&credentials()).await.unwrap();

        let restored = svc.current_session().unwrap();

        assert_eq!(restored, Some(credentials()));
    }

    #[test]
    fn should_return_no_session_when_store_empty() {
        let svc = AuthService::new(StubRouter::answering(Ok(resource())), InMemoryStore::default());
        assert!(svc.current_session().unwrap().is_none());
    }

    #[test]
    fn should_report_corrupt_session_token() {
        let store = InMemoryStore::default();
        store.set(SESSION_KEY, "not-a-token").unwrap();
        let svc = AuthService::new(StubRouter::answering(Ok(resource())), store);

        let err = svc.current_session().unwrap_err();

        assert!(matches!(err, MikroDashError::Session(_)));
    }

    #[tokio::test]
    async fn should_clear_session_on_sign_out() {
        let svc = AuthService::new(StubRouter::answering(Ok(resource())), InMemoryStore::default());
        svc.sign_in(&credentials()).await.unwrap();

        svc.sign_out().unwrap();

        assert!(svc.current_session().unwrap().is_none());
    }
}
