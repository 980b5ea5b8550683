use crate::model::{
    booking_request::{event::CreateBookingRequest, BookingRequest},
    id::BookingRequestId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRequestRepository: Send + Sync {
    async fn create(&self, event: CreateBookingRequest) -> AppResult<BookingRequestId>;
    // 新しい申込順
    async fn find_all(&self) -> AppResult<Vec<BookingRequest>>;
}
