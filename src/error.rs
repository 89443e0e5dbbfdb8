/*
 * Responsibility
 * - アプリ共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - 認証の失敗は 3 種類 (token なし / token 不正 / user なし) に畳み込む
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AppError {
    /// No bearer header and no `token` cookie.
    #[error("Token is missing")]
    MissingToken,
    /// Signature, expiry and format failures all land here.
    #[error("Invalid token")]
    InvalidToken,
    #[error("User not found")]
    UserNotFound,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingToken | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
            AppError::UserNotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AppError::MissingToken => "Token is missing",
            AppError::InvalidToken => "Invalid token",
            AppError::UserNotFound => "User not found",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.message(),
        };

        (self.status(), Json(body)).into_response()
    }
}
