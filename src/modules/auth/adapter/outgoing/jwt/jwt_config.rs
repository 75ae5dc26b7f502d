use std::env;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        let session_expiry = env::var("SESSION_EXPIRY_SECS")
            .unwrap_or_else(|_| "86400".to_string()) // Default 1 day
            .parse::<i64>()
            .expect("Invalid SESSION_EXPIRY_SECS value");

        Self {
            secret_key,
            issuer: String::from("portfolio-backend"),
            session_expiry,
        }
    }
}
