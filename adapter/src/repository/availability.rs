use async_trait::async_trait;
use derive_new::new;
use kernel::model::availability::{group_by_date, AvailabilityRange, BookedDay, BookedSlot};
use kernel::repository::availability::AvailabilityRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::availability::BookedSlotRow, ConnectionPool};

#[derive(new)]
pub struct AvailabilityRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AvailabilityRepository for AvailabilityRepositoryImpl {
    async fn find_booked_days(&self, range: AvailabilityRange) -> AppResult<Vec<BookedDay>> {
        // キャンセル済み・完了済みの予約も含めて取得する
        let slots = sqlx::query_as::<_, BookedSlotRow>(
            r#"
                SELECT
                r.event_date,
                r.space_id,
                s.name AS space_name,
                r.status
                FROM reservations AS r
                INNER JOIN spaces AS s ON r.space_id = s.space_id
                WHERE ($1::date IS NULL OR r.event_date >= $1)
                  AND ($2::date IS NULL OR r.event_date <= $2)
                ORDER BY r.event_date ASC, s.name ASC, r.start_time ASC
            "#,
        )
        .bind(range.from)
        .bind(range.to)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(BookedSlot::try_from)
        .collect::<AppResult<Vec<_>>>()?;

        Ok(group_by_date(slots))
    }
}
