/*
 * Responsibility
 * - GET /me (認証済みユーザーを返す)
 * - token 検証と user 取得は middleware 済み。ここでは AuthCtx を DTO に詰めるだけ
 */
use axum::Json;

use crate::api::v1::{dto::users::UserResponse, extractors::AuthCtxExtractor};

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<UserResponse> {
    Json(UserResponse::from(ctx.user))
}
