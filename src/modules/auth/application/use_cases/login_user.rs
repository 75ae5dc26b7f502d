use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;

#[derive(Debug, Clone)]
pub enum LoginError {
    /// Unknown email and wrong password collapse into one variant so the
    /// response can't be used to probe which emails exist.
    InvalidCredentials,
    RepositoryError(String),
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "invalid email or password"),
            LoginError::RepositoryError(msg) => write!(f, "repository error: {}", msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub session_token: String,
    pub user: UserSummary,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, email: &str, password: &str) -> Result<LoginOutcome, LoginError>;
}

pub struct LoginUserService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(
        user_query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            user_query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, email: &str, password: &str) -> Result<LoginOutcome, LoginError> {
        let user = self
            .user_query
            .find_by_email(email.trim())
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let verified = self
            .password_hasher
            .verify_password(password, &user.password_hash)
            .await
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        if !verified {
            return Err(LoginError::InvalidCredentials);
        }

        let session_token = self
            .token_provider
            .issue_session_token(user.id)
            .map_err(|e| LoginError::RepositoryError(e.to_string()))?;

        Ok(LoginOutcome {
            session_token,
            user: UserSummary::from(&user),
        })
    }
}
