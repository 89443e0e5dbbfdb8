/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が token 検証 + user 取得まで済ませて request extensions に格納する
 *
 * Notes
 * - 権限 (role/scope) は持たない。認可は handler/service 側の責務
 */

use crate::repos::user_repo::UserRow;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `user` は token の `id` から引いた users の行そのもの
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user: UserRow,
}

impl AuthCtx {
    pub fn new(user: UserRow) -> Self {
        Self { user }
    }
}
