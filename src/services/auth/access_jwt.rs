use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

// Errors returned by token verification + claim validation.
// Callers collapse all of these into one external "invalid token" answer.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("empty 'id' claim")]
    EmptySubject,
    #[error("invalid 'id' claim (expected UUID)")]
    InvalidSubject,
}

/// Decoded token payload.
///
/// NOTE:
/// - `id` carries the user id as a string. A missing or null `id` still verifies;
///   it simply names no user.
/// - `exp` is validated by jsonwebtoken only when the token carries it.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub exp: Option<u64>,
    #[serde(default)]
    pub iat: Option<u64>,
}

impl Claims {
    /// Project convention: user ids are UUIDs.
    ///
    /// - `Ok(None)` => no `id` claim (no user to look up)
    /// - `Err(_)`   => `id` present but empty or not a UUID
    pub fn user_id(&self) -> Result<Option<Uuid>, TokenError> {
        let Some(raw) = self.id.as_deref() else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(TokenError::EmptySubject);
        }
        Uuid::parse_str(raw)
            .map(Some)
            .map_err(|_| TokenError::InvalidSubject)
    }
}

/// Verifies a signed token string and returns its claims.
#[async_trait]
pub trait TokenCodec: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}

/// HMAC (shared secret) JWT verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct JwtCodec {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("JwtCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtCodec {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // Tokens without `exp` are accepted; `exp`/`nbf` are checked when present.
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        // No issuer/audience contract for these tokens.
        validation.validate_aud = false;
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }
}

#[async_trait]
impl TokenCodec for JwtCodec {
    async fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode(token)
    }
}
