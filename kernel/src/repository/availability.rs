use crate::model::availability::{AvailabilityRange, BookedDay};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    async fn find_booked_days(&self, range: AvailabilityRange) -> AppResult<Vec<BookedDay>>;
}
