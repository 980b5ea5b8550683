use crate::model::{
    id::ReservationId,
    reservation::{
        event::{CreateReservation, DeleteReservation, UpdateReservation},
        Reservation, ReservationDetail,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId>;
    // イベント日の新しい順
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    // 支払い一覧と残高を含めて取得する
    async fn find_detail_by_id(
        &self,
        reservation_id: ReservationId,
    ) -> AppResult<Option<ReservationDetail>>;
    async fn update(&self, event: UpdateReservation) -> AppResult<()>;
    // 支払いはあわせて削除される
    async fn delete(&self, event: DeleteReservation) -> AppResult<()>;
}
