use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking_request::{event::CreateBookingRequest, BookingRequest},
    id::BookingRequestId,
};
use kernel::repository::booking_request::BookingRequestRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::booking_request::BookingRequestRow, ConnectionPool};

#[derive(new)]
pub struct BookingRequestRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRequestRepository for BookingRequestRepositoryImpl {
    async fn create(&self, event: CreateBookingRequest) -> AppResult<BookingRequestId> {
        let mut tx = self.db.begin().await?;

        // 希望スペースが指定されている場合は存在を確認する
        if let Some(space_id) = event.space_id {
            let space_row = sqlx::query("SELECT space_id FROM spaces WHERE space_id = $1")
                .bind(space_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
            if space_row.is_none() {
                return Err(AppError::UnprocessableEntity(format!(
                    "Requested space ({space_id}) does not exist."
                )));
            }
        }

        let booking_request_id = BookingRequestId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO booking_requests
                (booking_request_id, full_name, email, phone, event_date,
                event_type, space_id, guest_count, details)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9);
            "#,
        )
        .bind(booking_request_id)
        .bind(event.full_name)
        .bind(event.email)
        .bind(event.phone)
        .bind(event.event_date)
        .bind(event.event_type.as_ref())
        .bind(event.space_id)
        .bind(event.guest_count)
        .bind(event.details)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::from_write_error(
                e,
                AppError::UnprocessableEntity("Requested space does not exist.".into()),
            )
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking request has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_request_id)
    }

    async fn find_all(&self) -> AppResult<Vec<BookingRequest>> {
        sqlx::query_as::<_, BookingRequestRow>(
            r#"
                SELECT
                b.booking_request_id,
                b.full_name,
                b.email,
                b.phone,
                b.event_date,
                b.event_type,
                b.space_id,
                s.name AS space_name,
                b.guest_count,
                b.details,
                b.requested_at
                FROM booking_requests AS b
                LEFT JOIN spaces AS s ON b.space_id = s.space_id
                ORDER BY b.requested_at DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(BookingRequest::try_from)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kernel::model::{booking_request::EventType, id::SpaceId};

    fn request(space_id: Option<SpaceId>) -> CreateBookingRequest {
        CreateBookingRequest {
            full_name: "Lucía Torres".into(),
            email: "lucia@example.com".into(),
            phone: "+51 987 654 321".into(),
            event_date: NaiveDate::from_ymd_opt(2025, 9, 13).unwrap(),
            event_type: EventType::Wedding,
            space_id,
            guest_count: 120,
            details: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_booking_requests(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = BookingRequestRepositoryImpl::new(ConnectionPool::new(pool));

        let id = repo.create(request(None)).await?;
        let all = repo.find_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].booking_request_id, id);
        assert_eq!(all[0].event_type, EventType::Wedding);
        assert!(all[0].space.is_none());

        let res = repo.create(request(Some(SpaceId::new()))).await;
        assert!(matches!(res, Err(AppError::UnprocessableEntity(_))));
        Ok(())
    }
}
