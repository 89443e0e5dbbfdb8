/*
 * Responsibility
 * - ドメインに近い処理 (認証) を HTTP 層から切り離して置く
 */
pub mod auth;
