use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::jwt_config::JwtConfig;
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenError, TokenProvider,
};

/// Structure for JWT Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid, // User ID
    pub iss: String,
    pub exp: i64, // Expiration timestamp
    pub token_type: String,
}

/// Signs and verifies the session token carried by the admin cookie.
/// There is exactly one token type; the claim is kept so stale tokens
/// from other deployments are rejected.
#[derive(Clone)]
pub struct JwtSessionService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtSessionService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }
}

impl TokenProvider for JwtSessionService {
    fn issue_session_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        let expiration = Utc::now() + Duration::seconds(self.config.session_expiry);
        let claims = SessionClaims {
            sub: user_id,
            iss: self.config.issuer.clone(),
            exp: expiration.timestamp(),
            token_type: "session".to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Encoding(e.to_string()))
    }

    fn verify_session_token(&self, token: &str) -> Result<Uuid, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false; // We will enforce manually

        let decoded = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?;

        let claims = decoded.claims;

        if claims.token_type != "session" {
            return Err(TokenError::Invalid);
        }

        if claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Invalid);
        }

        Ok(claims.sub)
    }
}
