use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        user::{event::CreateUser, User},
    },
    repository::user::UserRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};
use crate::repository::password::hash_password;

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, name, email
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, name, email
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(User::from))
    }

    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let hashed_password = hash_password(event.password).await?;
        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, name, email, password_hash)
                VALUES ($1, $2, $3, $4);
            "#,
        )
        .bind(user_id)
        .bind(&event.name)
        .bind(&event.email)
        .bind(hashed_password)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user has been created".into(),
            ));
        }

        Ok(User {
            user_id,
            name: event.name,
            email: event.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_create_and_find_user(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = UserRepositoryImpl::new(ConnectionPool::new(pool));

        let user = repo
            .create(CreateUser {
                name: "Front Desk".into(),
                email: "desk@example.com".into(),
                password: "Pa55w0rd".into(),
            })
            .await?;

        let found = repo.find_current_user(user.user_id).await?;
        assert_eq!(found, Some(user.clone()));

        let by_email = repo.find_by_email("desk@example.com").await?;
        assert_eq!(by_email, Some(user));
        Ok(())
    }
}
