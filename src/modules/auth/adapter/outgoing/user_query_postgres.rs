use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::adapter::outgoing::sea_orm_entity::users::{self, Column, Entity};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let user = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(model_to_user))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let normalized = email.trim().to_lowercase();

        let user = Entity::find()
            .filter(Column::Email.eq(&normalized))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user.map(model_to_user))
    }
}

fn model_to_user(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        name: model.name,
        password_hash: model.password_hash,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn user_model(email: &str) -> users::Model {
        let now = Utc::now().fixed_offset();
        users::Model {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: Some("Admin User".to_string()),
            password_hash: "$argon2id$stub".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_by_email_maps_model() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model("admin@example.com")]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_email("admin@example.com").await.unwrap();

        let user = user.expect("user should be found");
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(user.name.as_deref(), Some("Admin User"));
    }

    #[tokio::test]
    async fn test_find_by_id_missing_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<users::Model>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let user = query.find_by_id(Uuid::new_v4()).await.unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_database_error_is_mapped() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));
        let result = query.find_by_email("admin@example.com").await;

        assert!(matches!(
            result.unwrap_err(),
            UserQueryError::DatabaseError(msg) if msg.contains("connection timeout")
        ));
    }
}
