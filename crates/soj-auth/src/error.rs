use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated — run `soj auth login`")]
    NotAuthenticated,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("auth API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("session rejected: token invalid or expired")]
    Unauthorized,

    #[error("unrecognized role: {0:?}")]
    UnrecognizedRole(String),

    #[error("malformed auth response: {0}")]
    Parse(String),

    #[error("token store error: {0}")]
    TokenStore(String),

    #[error("profile cache error: {0}")]
    ProfileCache(String),
}
