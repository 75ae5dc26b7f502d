use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("Invalid or expired session token")]
    Invalid,

    #[error("Token encoding failed: {0}")]
    Encoding(String),
}

/// Issues and verifies the signed session token carried by the admin
/// cookie. Expiry is embedded in the token; there is no server-side
/// session state to revoke.
pub trait TokenProvider: Send + Sync {
    fn issue_session_token(&self, user_id: Uuid) -> Result<String, TokenError>;
    fn verify_session_token(&self, token: &str) -> Result<Uuid, TokenError>;
}
