pub mod access_jwt;
pub mod authenticator;
pub mod cors;
pub mod directory;
pub mod factory;
pub mod request;

pub use access_jwt::{Claims, JwtCodec, TokenCodec, TokenError};
pub use authenticator::{AuthDecision, AuthOutcome, RequestAuthenticator};
pub use cors::CorsPolicy;
pub use directory::UserDirectory;
pub use factory::build_authenticator;
pub use request::IncomingRequest;
