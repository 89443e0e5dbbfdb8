/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: auth: RequestAuthenticator (secret / user directory / CORS allowlist を内包)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::RequestAuthenticator;

#[derive(Clone, Debug)]
pub struct AppState {
    pub auth: Arc<RequestAuthenticator>,
}

impl AppState {
    pub fn new(auth: Arc<RequestAuthenticator>) -> Self {
        Self { auth }
    }
}
