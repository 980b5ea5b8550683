use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::SpaceId,
    space::{
        event::{CreateSpace, DeleteSpace, UpdateSpace},
        Space,
    },
};
use kernel::repository::space::SpaceRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::space::SpaceRow, ConnectionPool};

#[derive(new)]
pub struct SpaceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SpaceRepository for SpaceRepositoryImpl {
    async fn create(&self, event: CreateSpace) -> AppResult<SpaceId> {
        let space_id = SpaceId::new();
        sqlx::query(
            r#"
                INSERT INTO spaces (space_id, name, description, capacity, rental_fee, image_url)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(space_id)
        .bind(event.name)
        .bind(event.description)
        .bind(event.capacity)
        .bind(event.rental_fee)
        .bind(event.image_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(space_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Space>> {
        let rows = sqlx::query_as::<_, SpaceRow>(
            r#"
                SELECT
                    space_id,
                    name,
                    description,
                    capacity,
                    rental_fee,
                    image_url
                FROM spaces
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Space::from).collect())
    }

    async fn find_by_id(&self, space_id: SpaceId) -> AppResult<Option<Space>> {
        let row = sqlx::query_as::<_, SpaceRow>(
            r#"
                SELECT
                    space_id,
                    name,
                    description,
                    capacity,
                    rental_fee,
                    image_url
                FROM spaces
                WHERE space_id = $1
            "#,
        )
        .bind(space_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Space::from))
    }

    async fn update(&self, event: UpdateSpace) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE spaces
                SET
                    name = $2,
                    description = $3,
                    capacity = $4,
                    rental_fee = $5,
                    image_url = $6
                WHERE space_id = $1
            "#,
        )
        .bind(event.space_id)
        .bind(event.name)
        .bind(event.description)
        .bind(event.capacity)
        .bind(event.rental_fee)
        .bind(event.image_url)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Space ({}) was not found.",
                event.space_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteSpace) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM spaces
                WHERE space_id = $1
            "#,
        )
        .bind(event.space_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            AppError::from_delete_error(
                e,
                "The space cannot be deleted because it is referenced by reservations.",
            )
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Space ({}) was not found.",
                event.space_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_register_space(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = SpaceRepositoryImpl::new(ConnectionPool::new(pool));

        let space = CreateSpace {
            name: "Garden Terrace".into(),
            description: Some("Open-air terrace for daytime ceremonies".into()),
            capacity: Some(150),
            rental_fee: Some(dec!(2500.00)),
            image_url: None,
        };

        let space_id = repo.create(space).await?;

        let res = repo.find_all().await?;
        assert_eq!(res.len(), 1);

        let res = repo.find_by_id(space_id).await?;
        assert!(res.is_some());

        let Space {
            space_id: id,
            name,
            description,
            capacity,
            rental_fee,
            image_url,
        } = res.unwrap();
        assert_eq!(id, space_id);
        assert_eq!(name, "Garden Terrace");
        assert_eq!(
            description.as_deref(),
            Some("Open-air terrace for daytime ceremonies")
        );
        assert_eq!(capacity, Some(150));
        assert_eq!(rental_fee, Some(dec!(2500)));
        assert_eq!(image_url, None);

        repo.delete(DeleteSpace { space_id }).await?;
        assert!(repo.find_by_id(space_id).await?.is_none());
        Ok(())
    }
}
