use crate::model::{
    id::{PaymentId, ReservationId},
    payment::{
        event::{CreatePayment, DeletePayment},
        Payment,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, event: CreatePayment) -> AppResult<PaymentId>;
    // 支払日の新しい順
    async fn find_by_reservation_id(&self, reservation_id: ReservationId)
        -> AppResult<Vec<Payment>>;
    async fn delete(&self, event: DeletePayment) -> AppResult<()>;
}
