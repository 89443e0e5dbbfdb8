/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth::access (認証 + CORS), http (request id / trace / limit / timeout)
 */
pub mod auth;
pub mod http;
