/// Factory: build `RequestAuthenticator` from application `Config`.
use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::repos::user_repo::PgUserDirectory;
use crate::services::auth::{CorsPolicy, JwtCodec, RequestAuthenticator};

pub fn build_authenticator(config: &Config, db: PgPool) -> Arc<RequestAuthenticator> {
    let codec = JwtCodec::new(&config.jwt_secret, config.access_token_leeway_seconds);
    let directory = PgUserDirectory::new(db);
    let cors = CorsPolicy::new(config.cors_allowed_origins.iter().cloned());

    Arc::new(RequestAuthenticator::new(
        Arc::new(codec),
        Arc::new(directory),
        cors,
    ))
}
