use std::sync::Arc;

use axum::http::HeaderMap;

use crate::repos::user_repo::UserRow;
use crate::services::auth::{
    access_jwt::TokenCodec, cors::CorsPolicy, directory::UserDirectory, request::IncomingRequest,
};

/// Cookie consulted when there is no usable bearer header.
pub const TOKEN_COOKIE: &str = "token";

/// Exactly one of these is produced per authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// OPTIONS from an allowed origin; answer 204 with CORS headers only.
    CorsPreflight,
    MissingToken,
    InvalidToken,
    UserNotFound,
    Authenticated(UserRow),
}

/// Outcome plus the CORS headers the final response should carry.
#[derive(Debug, Clone)]
pub struct AuthDecision {
    pub cors: Option<HeaderMap>,
    pub outcome: AuthOutcome,
}

/// Where the token was read from (for logs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Header,
    Cookie,
}

/// Header first, cookie fallback. The first non-empty token wins.
pub fn extract_token<'a>(req: &IncomingRequest<'a>) -> Option<(&'a str, TokenSource)> {
    req.bearer_token()
        .map(|t| (t, TokenSource::Header))
        .or_else(|| req.cookie(TOKEN_COOKIE).map(|t| (t, TokenSource::Cookie)))
}

/// Resolves the user behind a request.
///
/// Stateless per call: the codec, directory and CORS policy are shared read-only.
#[derive(Clone)]
pub struct RequestAuthenticator {
    codec: Arc<dyn TokenCodec>,
    directory: Arc<dyn UserDirectory>,
    cors: CorsPolicy,
}

impl std::fmt::Debug for RequestAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestAuthenticator")
            .field("cors", &self.cors)
            .finish_non_exhaustive()
    }
}

impl RequestAuthenticator {
    pub fn new(
        codec: Arc<dyn TokenCodec>,
        directory: Arc<dyn UserDirectory>,
        cors: CorsPolicy,
    ) -> Self {
        Self {
            codec,
            directory,
            cors,
        }
    }

    pub async fn authenticate(&self, req: &IncomingRequest<'_>) -> AuthDecision {
        let cors = self.cors.headers_for(req.origin());

        if cors.is_some() && req.is_preflight() {
            return AuthDecision {
                cors,
                outcome: AuthOutcome::CorsPreflight,
            };
        }

        let outcome = self.resolve_user(req).await;
        AuthDecision { cors, outcome }
    }

    async fn resolve_user(&self, req: &IncomingRequest<'_>) -> AuthOutcome {
        let Some((token, source)) = extract_token(req) else {
            tracing::debug!("no token in authorization header or cookie");
            return AuthOutcome::MissingToken;
        };

        let claims = match self.codec.verify(token).await {
            Ok(claims) => claims,
            Err(err) => {
                tracing::warn!(error = %err, ?source, "token verification failed");
                return AuthOutcome::InvalidToken;
            }
        };

        let user_id = match claims.user_id() {
            Ok(Some(id)) => id,
            Ok(None) => {
                tracing::info!(?source, "token carries no user id");
                return AuthOutcome::UserNotFound;
            }
            Err(err) => {
                tracing::warn!(error = %err, ?source, "token subject rejected");
                return AuthOutcome::InvalidToken;
            }
        };

        tracing::debug!(%user_id, exp = ?claims.exp, iat = ?claims.iat, ?source, "token verified");

        match self.directory.find_by_id(user_id).await {
            Ok(Some(user)) => AuthOutcome::Authenticated(user),
            Ok(None) => {
                tracing::info!(%user_id, "token subject has no user record");
                AuthOutcome::UserNotFound
            }
            Err(err) => {
                // Backend failures are reported like any other verification failure.
                tracing::error!(error = ?err, %user_id, "user lookup failed");
                AuthOutcome::InvalidToken
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::repos::{error::RepoError, user_repo::UserRow};
    use crate::services::auth::{
        access_jwt::{JwtCodec, test_tokens::SECRET},
        cors::CorsPolicy,
        directory::UserDirectory,
    };

    use super::RequestAuthenticator;

    pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

    #[derive(Default)]
    pub struct MemoryDirectory {
        users: HashMap<Uuid, UserRow>,
    }

    impl MemoryDirectory {
        pub fn with(users: impl IntoIterator<Item = UserRow>) -> Self {
            Self {
                users: users.into_iter().map(|u| (u.id, u)).collect(),
            }
        }
    }

    #[async_trait]
    impl UserDirectory for MemoryDirectory {
        async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
            Ok(self.users.get(&user_id).cloned())
        }
    }

    pub struct BrokenDirectory;

    #[async_trait]
    impl UserDirectory for BrokenDirectory {
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
            Err(RepoError::Db(sqlx::Error::PoolTimedOut))
        }
    }

    pub fn user(name: &str) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            user_name: name.to_string(),
            image_url: None,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn authenticator(directory: impl UserDirectory + 'static) -> RequestAuthenticator {
        RequestAuthenticator::new(
            Arc::new(JwtCodec::new(SECRET, 0)),
            Arc::new(directory),
            CorsPolicy::new([ALLOWED_ORIGIN]),
        )
    }
}
