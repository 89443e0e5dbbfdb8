//! access token 検証 → AuthCtx を extensions に入れる
//!
//! - token は `Authorization: Bearer <jwt>` を優先し、無ければ `token` cookie を使う
//! - 許可 origin からのリクエストには、成功/失敗を問わず CORS ヘッダを付ける
//! - 許可 origin からの OPTIONS は preflight として 204 で返す（handler まで届かない）

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::services::auth::{AuthDecision, AuthOutcome, IncomingRequest};
use crate::state::AppState;

/// 認証が必要な Router に middleware を適用する。
///
/// 例：
/// ```ignore
/// let protected = Router::new().route("/me", get(me));
/// let protected = middleware::auth::access::apply(protected, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    // Body is not Sync; only the head is borrowed across the await.
    let (parts, body) = req.into_parts();

    let AuthDecision { cors, outcome } = state
        .auth
        .authenticate(&IncomingRequest::from_parts(&parts))
        .await;

    let mut res = match outcome {
        AuthOutcome::CorsPreflight => StatusCode::NO_CONTENT.into_response(),
        AuthOutcome::MissingToken => AppError::MissingToken.into_response(),
        AuthOutcome::InvalidToken => AppError::InvalidToken.into_response(),
        AuthOutcome::UserNotFound => AppError::UserNotFound.into_response(),
        AuthOutcome::Authenticated(user) => {
            let mut req = Request::from_parts(parts, body);
            // middleware → extractor への受け渡し
            req.extensions_mut().insert(AuthCtx::new(user));
            next.run(req).await
        }
    };

    if let Some(cors) = cors {
        attach_cors(res.headers_mut(), cors);
    }

    res
}

fn attach_cors(headers: &mut HeaderMap, cors: HeaderMap) {
    // Replaces any value the inner handler may have set.
    headers.extend(cors);
}
