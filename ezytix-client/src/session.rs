use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use ezytix_core::user::User;

use crate::api::EzytixClient;
use crate::error::ApiResult;

/// Seam over `GET /auth/me` so the session cache can be driven against
/// test doubles.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn me(&self) -> ApiResult<Option<User>>;
}

#[async_trait]
impl AuthApi for EzytixClient {
    async fn me(&self) -> ApiResult<Option<User>> {
        EzytixClient::me(self).await
    }
}

#[derive(Debug, Clone)]
enum SessionState {
    /// `/auth/me` has not been asked yet.
    Unresolved,
    Anonymous,
    Authenticated(User),
}

/// Process-wide, lazily-initialized session cache. The first `current()`
/// call fetches `/auth/me` and caches the answer; `invalidate()` drops it
/// on logout. The backend is injected explicitly, never ambient.
pub struct SessionCache {
    api: Arc<dyn AuthApi>,
    state: Mutex<SessionState>,
}

impl SessionCache {
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self {
            api,
            state: Mutex::new(SessionState::Unresolved),
        }
    }

    /// Current user, fetching once on first use. A fetch failure leaves
    /// the cache unresolved so the next call retries.
    pub async fn current(&self) -> ApiResult<Option<User>> {
        {
            let state = self.state.lock().await;
            match &*state {
                SessionState::Anonymous => return Ok(None),
                SessionState::Authenticated(user) => return Ok(Some(user.clone())),
                SessionState::Unresolved => {}
            }
        }
        self.refresh().await
    }

    /// Re-fetch `/auth/me` and replace the cached answer.
    pub async fn refresh(&self) -> ApiResult<Option<User>> {
        match self.api.me().await {
            Ok(user) => {
                let mut state = self.state.lock().await;
                *state = match &user {
                    Some(u) => SessionState::Authenticated(u.clone()),
                    None => SessionState::Anonymous,
                };
                Ok(user)
            }
            Err(err) => {
                tracing::warn!(error = %err, "session fetch failed");
                Err(err)
            }
        }
    }

    /// Forget the cached session (logout).
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        *state = SessionState::Anonymous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use chrono::Utc;
    use ezytix_core::user::Role;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn user() -> User {
        User {
            id: 7,
            full_name: "Hilmian Arya".to_string(),
            username: "hilmian".to_string(),
            email: "hilmian@ezytix.com".to_string(),
            phone: "+62 812 3456 7890".to_string(),
            role: Role::Customer,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    struct FakeAuth {
        calls: AtomicUsize,
        reply: Option<User>,
        fail_first: bool,
    }

    #[async_trait]
    impl AuthApi for FakeAuth {
        async fn me(&self) -> ApiResult<Option<User>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && call == 0 {
                return Err(ApiError::Request("connection refused".to_string()));
            }
            Ok(self.reply.clone())
        }
    }

    #[tokio::test]
    async fn test_current_fetches_once_and_caches() {
        let auth = Arc::new(FakeAuth {
            calls: AtomicUsize::new(0),
            reply: Some(user()),
            fail_first: false,
        });
        let session = SessionCache::new(auth.clone());

        assert!(session.current().await.unwrap().is_some());
        assert!(session.current().await.unwrap().is_some());
        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_anonymous_is_cached_too() {
        let auth = Arc::new(FakeAuth {
            calls: AtomicUsize::new(0),
            reply: None,
            fail_first: false,
        });
        let session = SessionCache::new(auth.clone());

        assert!(session.current().await.unwrap().is_none());
        assert!(session.current().await.unwrap().is_none());
        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_retries_next_time() {
        let auth = Arc::new(FakeAuth {
            calls: AtomicUsize::new(0),
            reply: Some(user()),
            fail_first: true,
        });
        let session = SessionCache::new(auth.clone());

        assert!(session.current().await.is_err());
        assert!(session.current().await.unwrap().is_some());
        assert_eq!(auth.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_logs_out() {
        let auth = Arc::new(FakeAuth {
            calls: AtomicUsize::new(0),
            reply: Some(user()),
            fail_first: false,
        });
        let session = SessionCache::new(auth.clone());

        assert!(session.current().await.unwrap().is_some());
        session.invalidate().await;
        assert!(session.current().await.unwrap().is_none());
        // Logout does not trigger another network fetch.
        assert_eq!(auth.calls.load(Ordering::SeqCst), 1);
    }
}
