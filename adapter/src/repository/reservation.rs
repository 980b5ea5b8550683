use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{ClientId, ReservationId, SpaceId},
    reservation::{
        event::{CreateReservation, DeleteReservation, UpdateReservation},
        Reservation, ReservationDetail,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::reservation::ReservationRow, ConnectionPool};
use crate::repository::payment::fetch_payments;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let mut tx = self.db.begin().await?;

        // 事前のチェックとして、指定のクライアントとスペースが存在するかを調べる。
        // 同じスペース・時間帯の重複予約はここでは検出しない。
        let (client_id, space_id) = (event.client_id, event.space_id);
        self.ensure_references_exist(&mut tx, client_id, space_id).await?;

        let reservation_id = ReservationId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO reservations
                (reservation_id, client_id, space_id, event_date,
                start_time, end_time, status, total_price, notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9);
            "#,
        )
        .bind(reservation_id)
        .bind(event.client_id)
        .bind(event.space_id)
        .bind(event.event_date)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.status.as_ref())
        .bind(event.total_price)
        .bind(event.notes)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::from_write_error(e, missing_reference(client_id, space_id)))?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(reservation_id)
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT
                r.reservation_id,
                r.client_id,
                c.name AS client_name,
                r.space_id,
                s.name AS space_name,
                r.event_date,
                r.start_time,
                r.end_time,
                r.status,
                r.total_price,
                r.notes
                FROM reservations AS r
                INNER JOIN clients AS c ON r.client_id = c.client_id
                INNER JOIN spaces AS s ON r.space_id = s.space_id
                ORDER BY r.event_date DESC, r.start_time DESC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Reservation::try_from)
        .collect()
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, ReservationRow>(
            r#"
                SELECT
                r.reservation_id,
                r.client_id,
                c.name AS client_name,
                r.space_id,
                s.name AS space_name,
                r.event_date,
                r.start_time,
                r.end_time,
                r.status,
                r.total_price,
                r.notes
                FROM reservations AS r
                INNER JOIN clients AS c ON r.client_id = c.client_id
                INNER JOIN spaces AS s ON r.space_id = s.space_id
                WHERE r.reservation_id = $1
                ;
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Reservation::try_from)
        .transpose()
    }

    async fn find_detail_by_id(
        &self,
        reservation_id: ReservationId,
    ) -> AppResult<Option<ReservationDetail>> {
        let Some(reservation) = self.find_by_id(reservation_id).await? else {
            return Ok(None);
        };
        let payments = fetch_payments(self.db.inner_ref(), reservation_id).await?;

        Ok(Some(ReservationDetail::new(reservation, payments)))
    }

    async fn update(&self, event: UpdateReservation) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let (client_id, space_id) = (event.client_id, event.space_id);
        self.ensure_references_exist(&mut tx, client_id, space_id).await?;

        let res = sqlx::query(
            r#"
                UPDATE reservations
                SET
                    client_id = $2,
                    space_id = $3,
                    event_date = $4,
                    start_time = $5,
                    end_time = $6,
                    status = $7,
                    total_price = $8,
                    notes = $9
                WHERE reservation_id = $1
            "#,
        )
        .bind(event.reservation_id)
        .bind(event.client_id)
        .bind(event.space_id)
        .bind(event.event_date)
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(event.status.as_ref())
        .bind(event.total_price)
        .bind(event.notes)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::from_write_error(e, missing_reference(client_id, space_id)))?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Reservation ({}) was not found.",
                event.reservation_id
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(())
    }

    async fn delete(&self, event: DeleteReservation) -> AppResult<()> {
        // payments は ON DELETE CASCADE で一緒に消える
        let res = sqlx::query(
            r#"
                DELETE FROM reservations WHERE reservation_id = $1;
            "#,
        )
        .bind(event.reservation_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Reservation ({}) was not found.",
                event.reservation_id
            )));
        }

        Ok(())
    }
}

// 事前チェックの後にクライアントかスペースが削除された場合
fn missing_reference(client_id: ClientId, space_id: SpaceId) -> AppError {
    AppError::EntityNotFound(format!(
        "Client ({client_id}) or space ({space_id}) was not found."
    ))
}

impl ReservationRepositoryImpl {
    // create, update の中で、参照先のクライアント・スペースの存在を確認するために
    // 内部的に使うメソッド
    async fn ensure_references_exist(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        client_id: ClientId,
        space_id: SpaceId,
    ) -> AppResult<()> {
        let client_row = sqlx::query("SELECT client_id FROM clients WHERE client_id = $1")
            .bind(client_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if client_row.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "Client ({client_id}) was not found."
            )));
        }

        let space_row = sqlx::query("SELECT space_id FROM spaces WHERE space_id = $1")
            .bind(space_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if space_row.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "Space ({space_id}) was not found."
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{
        client::ClientRepositoryImpl, payment::PaymentRepositoryImpl,
        space::SpaceRepositoryImpl,
    };
    use chrono::{NaiveDate, NaiveTime};
    use kernel::model::{
        client::event::CreateClient,
        payment::{event::CreatePayment, PaymentMethod},
        reservation::ReservationStatus,
        space::event::CreateSpace,
    };
    use kernel::repository::{
        client::ClientRepository, payment::PaymentRepository, space::SpaceRepository,
    };
    use rust_decimal_macros::dec;

    async fn seed(pool: &ConnectionPool) -> anyhow::Result<(ClientId, SpaceId)> {
        let client_id = ClientRepositoryImpl::new(pool.clone())
            .create(CreateClient {
                name: "Familia Quispe".into(),
                contact_name: None,
                contact_email: None,
                contact_phone: None,
                address: None,
            })
            .await?;
        let space_id = SpaceRepositoryImpl::new(pool.clone())
            .create(CreateSpace {
                name: "Main Hall".into(),
                description: None,
                capacity: Some(200),
                rental_fee: Some(dec!(3000)),
                image_url: None,
            })
            .await?;
        Ok((client_id, space_id))
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_reservation_with_payments(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (client_id, space_id) = seed(&pool).await?;
        let repo = ReservationRepositoryImpl::new(pool.clone());
        let payments = PaymentRepositoryImpl::new(pool.clone());

        let reservation_id = repo
            .create(CreateReservation::new(
                client_id,
                space_id,
                NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
                time(18, 0),
                time(23, 30),
                ReservationStatus::Pending,
                dec!(4200.00),
                None,
            ))
            .await?;

        for (day, amount) in [(1, dec!(1000)), (15, dec!(1500))] {
            payments
                .create(CreatePayment::new(
                    reservation_id,
                    NaiveDate::from_ymd_opt(2025, 5, day).unwrap(),
                    amount,
                    PaymentMethod::Transfer,
                    None,
                    None,
                ))
                .await?;
        }

        let detail = repo.find_detail_by_id(reservation_id).await?.unwrap();
        assert_eq!(detail.reservation.client.name, "Familia Quispe");
        assert_eq!(detail.payments.len(), 2);
        // 支払日の新しい順
        assert_eq!(detail.payments[0].amount, dec!(1500));
        assert_eq!(detail.ledger.total_paid, dec!(2500));
        assert_eq!(detail.ledger.balance_due, dec!(1700));

        repo.update(UpdateReservation::new(
            reservation_id,
            client_id,
            space_id,
            NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
            time(17, 0),
            time(23, 0),
            ReservationStatus::Confirmed,
            dec!(4200.00),
            Some("Add a dance floor".into()),
        ))
        .await?;
        let updated = repo.find_by_id(reservation_id).await?.unwrap();
        assert_eq!(updated.status, ReservationStatus::Confirmed);
        assert_eq!(updated.start_time, time(17, 0));

        // 予約があるクライアントは削除できない
        let res = ClientRepositoryImpl::new(pool.clone())
            .delete(kernel::model::client::event::DeleteClient { client_id })
            .await;
        assert!(matches!(res, Err(AppError::ReferencedEntity(_))));

        repo.delete(DeleteReservation { reservation_id }).await?;
        assert!(repo.find_by_id(reservation_id).await?.is_none());
        assert!(payments.find_by_reservation_id(reservation_id).await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a PostgreSQL instance via DATABASE_URL"]
    async fn test_create_with_unknown_client_fails(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let pool = ConnectionPool::new(pool);
        let (_, space_id) = seed(&pool).await?;
        let repo = ReservationRepositoryImpl::new(pool);

        let res = repo
            .create(CreateReservation::new(
                ClientId::new(),
                space_id,
                NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
                time(10, 0),
                time(12, 0),
                ReservationStatus::Pending,
                dec!(100),
                None,
            ))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
        Ok(())
    }
}
