use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ServiceId,
    service::{
        event::{CreateService, DeleteService, UpdateService},
        Service,
    },
};
use kernel::repository::service::ServiceRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::service::ServiceRow, ConnectionPool};

#[derive(new)]
pub struct ServiceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ServiceRepository for ServiceRepositoryImpl {
    async fn create(&self, event: CreateService) -> AppResult<ServiceId> {
        let service_id = ServiceId::new();
        sqlx::query(
            r#"
                INSERT INTO services (service_id, name, description, price)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(service_id)
        .bind(event.name)
        .bind(event.description)
        .bind(event.price)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(service_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Service>> {
        let rows = sqlx::query_as::<_, ServiceRow>(
            r#"
                SELECT service_id, name, description, price
                FROM services
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Service::from).collect())
    }

    async fn find_by_id(&self, service_id: ServiceId) -> AppResult<Option<Service>> {
        let row = sqlx::query_as::<_, ServiceRow>(
            r#"
                SELECT service_id, name, description, price
                FROM services
                WHERE service_id = $1
            "#,
        )
        .bind(service_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Service::from))
    }

    async fn update(&self, event: UpdateService) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE services
                SET name = $2, description = $3, price = $4
                WHERE service_id = $1
            "#,
        )
        .bind(event.service_id)
        .bind(event.name)
        .bind(event.description)
        .bind(event.price)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Service ({}) was not found.",
                event.service_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteService) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM services
                WHERE service_id = $1
            "#,
        )
        .bind(event.service_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Service ({}) was not found.",
                event.service_id
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
    async fn test_service_crud(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ServiceRepositoryImpl::new(ConnectionPool::new(pool));

        let service_id = repo
            .create(CreateService {
                name: "Catering".into(),
                description: None,
                price: Some(dec!(35.50)),
            })
            .await?;

        repo.update(UpdateService {
            service_id,
            name: "Catering Premium".into(),
            description: Some("Three-course menu".into()),
            price: None,
        })
        .await?;

        let service = repo.find_by_id(service_id).await?.unwrap();
        assert_eq!(service.name, "Catering Premium");
        assert_eq!(service.price, None);

        repo.delete(DeleteService { service_id }).await?;
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }
}
