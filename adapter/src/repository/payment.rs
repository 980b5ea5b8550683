use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{PaymentId, ReservationId},
    payment::{
        event::{CreatePayment, DeletePayment},
        Payment,
    },
};
use kernel::repository::payment::PaymentRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::payment::PaymentRow, ConnectionPool};

#[derive(new)]
pub struct PaymentRepositoryImpl {
    db: ConnectionPool,
}

// 予約詳細の取得でも使うので、リポジトリの外に出しておく
pub(crate) async fn fetch_payments<'e, E>(
    executor: E,
    reservation_id: ReservationId,
) -> AppResult<Vec<Payment>>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_as::<_, PaymentRow>(
        r#"
            SELECT
            payment_id,
            reservation_id,
            payment_date,
            amount,
            method,
            reference_number,
            notes
            FROM payments
            WHERE reservation_id = $1
            ORDER BY payment_date DESC, created_at DESC
        "#,
    )
    .bind(reservation_id)
    .fetch_all(executor)
    .await
    .map_err(AppError::SpecificOperationError)?
    .into_iter()
    .map(Payment::try_from)
    .collect()
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryImpl {
    async fn create(&self, event: CreatePayment) -> AppResult<PaymentId> {
        let mut tx = self.db.begin().await?;

        // 支払い先の予約が存在するか
        {
            let reservation_row = sqlx::query(
                r#"
                    SELECT reservation_id
                    FROM reservations
                    WHERE reservation_id = $1
                "#,
            )
            .bind(event.reservation_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if reservation_row.is_none() {
                return Err(AppError::EntityNotFound(format!(
                    "Reservation ({}) was not found.",
                    event.reservation_id
                )));
            }
        }

        let reservation_id = event.reservation_id;
        let payment_id = PaymentId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO payments
                (payment_id, reservation_id, payment_date, amount, method,
                reference_number, notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7);
            "#,
        )
        .bind(payment_id)
        .bind(event.reservation_id)
        .bind(event.payment_date)
        .bind(event.amount)
        .bind(event.method.as_ref())
        .bind(event.reference_number)
        .bind(event.notes)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::from_write_error(
                e,
                AppError::EntityNotFound(format!("Reservation ({reservation_id}) was not found.")),
            )
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No payment record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(payment_id)
    }

    async fn find_by_reservation_id(
        &self,
        reservation_id: ReservationId,
    ) -> AppResult<Vec<Payment>> {
        fetch_payments(self.db.inner_ref(), reservation_id).await
    }

    async fn delete(&self, event: DeletePayment) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM payments
                WHERE payment_id = $1 AND reservation_id = $2
            "#,
        )
        .bind(event.payment_id)
        .bind(event.reservation_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "Payment ({}) was not found for reservation ({}).",
                event.payment_id, event.reservation_id
            )));
        }

        Ok(())
    }
}
