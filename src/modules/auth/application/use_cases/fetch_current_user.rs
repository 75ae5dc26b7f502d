use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::UserSummary;
use crate::modules::auth::application::ports::outgoing::user_query::UserQuery;

#[derive(Debug, Clone)]
pub enum FetchCurrentUserError {
    /// The session token verified but its user no longer exists.
    UserNotFound,
    RepositoryError(String),
}

impl fmt::Display for FetchCurrentUserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchCurrentUserError::UserNotFound => write!(f, "user not found"),
            FetchCurrentUserError::RepositoryError(msg) => {
                write!(f, "repository error: {}", msg)
            }
        }
    }
}

#[async_trait]
pub trait FetchCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<UserSummary, FetchCurrentUserError>;
}

pub struct FetchCurrentUserService<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> FetchCurrentUserService<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> FetchCurrentUserUseCase for FetchCurrentUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<UserSummary, FetchCurrentUserError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(|e| FetchCurrentUserError::RepositoryError(e.to_string()))?
            .ok_or(FetchCurrentUserError::UserNotFound)?;

        Ok(UserSummary::from(&user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::User;
    use crate::modules::auth::application::ports::outgoing::user_query::UserQueryError;
    use chrono::Utc;

    struct MockUserQuery {
        user: Option<User>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone())
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<User>, UserQueryError> {
            Ok(self.user.clone())
        }
    }

    #[tokio::test]
    async fn test_resolves_existing_user() {
        let id = Uuid::new_v4();
        let service = FetchCurrentUserService::new(MockUserQuery {
            user: Some(User {
                id,
                email: "admin@example.com".to_string(),
                name: None,
                password_hash: "hash".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            }),
        });

        let summary = service.execute(id).await.unwrap();

        assert_eq!(summary.id, id);
        assert_eq!(summary.email, "admin@example.com");
    }

    #[tokio::test]
    async fn test_missing_user_is_not_found() {
        let service = FetchCurrentUserService::new(MockUserQuery { user: None });

        let result = service.execute(Uuid::new_v4()).await;

        assert!(matches!(
            result.unwrap_err(),
            FetchCurrentUserError::UserNotFound
        ));
    }
}
