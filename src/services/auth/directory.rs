use async_trait::async_trait;
use uuid::Uuid;

use crate::repos::{error::RepoError, user_repo::UserRow};

/// User lookup used after a token has been verified.
///
/// Returns:
/// - `Ok(Some(_))` => user exists
/// - `Ok(None)`    => no such user
/// - `Err(_)`      => backend failure
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserRow>, RepoError>;
}
