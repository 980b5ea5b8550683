use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    client::{
        event::{CreateClient, DeleteClient, UpdateClient},
        Client,
    },
    id::ClientId,
};
use kernel::repository::client::ClientRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::client::ClientRow, ConnectionPool};

#[derive(new)]
pub struct ClientRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ClientRepository for ClientRepositoryImpl {
    async fn create(&self, event: CreateClient) -> AppResult<ClientId> {
        let client_id = ClientId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO clients
                (client_id, name, contact_name, contact_email, contact_phone, address)
                VALUES ($1, $2, $3, $4, $5, $6);
            "#,
        )
        .bind(client_id)
        .bind(event.name)
        .bind(event.contact_name)
        .bind(event.contact_email)
        .bind(event.contact_phone)
        .bind(event.address)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No client record has been created".into(),
            ));
        }

        Ok(client_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, ClientRow>(
            r#"
                SELECT
                client_id,
                name,
                contact_name,
                contact_email,
                contact_phone,
                address
                FROM clients
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Client::from).collect())
    }

    async fn find_by_id(&self, client_id: ClientId) -> AppResult<Option<Client>> {
        let row = sqlx::query_as::<_, ClientRow>(
            r#"
                SELECT
                client_id,
                name,
                contact_name,
                contact_email,
                contact_phone,
                address
                FROM clients
                WHERE client_id = $1
            "#,
        )
        .bind(client_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Client::from))
    }

    async fn update(&self, event: UpdateClient) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE clients
                SET
                    name = $2,
                    contact_name = $3,
                    contact_email = $4,
                    contact_phone = $5,
                    address = $6
                WHERE client_id = $1
            "#,
        )
        .bind(event.client_id)
        .bind(event.name)
        .bind(event.contact_name)
        .bind(event.contact_email)
        .bind(event.contact_phone)
        .bind(event.address)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Client ({}) was not found.",
                event.client_id
            )));
        }

        Ok(())
    }

    async fn delete(&self, event: DeleteClient) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM clients
                WHERE client_id = $1
            "#,
        )
        .bind(event.client_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            AppError::from_delete_error(
                e,
                "The client cannot be deleted because it still has reservations. \
                 Delete or reassign those reservations first.",
            )
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Client ({}) was not found.",
                event.client_id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_event(name: &str) -> CreateClient {
        CreateClient {
            name: name.into(),
            contact_name: Some("Rosa Huamán".into()),
            contact_email: Some("rosa@example.com".into()),
            contact_phone: None,
            address: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_client_crud(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = ClientRepositoryImpl::new(ConnectionPool::new(pool));

        let zeta = repo.create(create_event("Zeta Corp")).await?;
        let alpha = repo.create(create_event("Alpha Events")).await?;

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 2);
        // 名前順に並ぶ
        assert_eq!(all[0].client_id, alpha);
        assert_eq!(all[1].client_id, zeta);

        repo.update(UpdateClient {
            client_id: zeta,
            name: "Zeta Corporation".into(),
            contact_name: None,
            contact_email: None,
            contact_phone: Some("+51 999 888 777".into()),
            address: Some("Av. Larco 123".into()),
        })
        .await?;

        let updated = repo.find_by_id(zeta).await?.unwrap();
        assert_eq!(updated.name, "Zeta Corporation");
        assert_eq!(updated.contact_name, None);
        assert_eq!(updated.contact_phone.as_deref(), Some("+51 999 888 777"));

        repo.delete(DeleteClient { client_id: zeta }).await?;
        assert!(repo.find_by_id(zeta).await?.is_none());

        let res = repo.delete(DeleteClient { client_id: zeta }).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
