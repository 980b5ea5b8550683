use super::parse_text_column;
use chrono::NaiveDate;
use kernel::model::{availability::BookedSlot, id::SpaceId};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct BookedSlotRow {
    pub event_date: NaiveDate,
    pub space_id: SpaceId,
    pub space_name: String,
    pub status: String,
}

impl TryFrom<BookedSlotRow> for BookedSlot {
    type Error = AppError;

    fn try_from(value: BookedSlotRow) -> Result<Self, Self::Error> {
        let BookedSlotRow {
            event_date,
            space_id,
            space_name,
            status,
        } = value;
        Ok(BookedSlot {
            event_date,
            space_id,
            space_name,
            status: parse_text_column("reservation status", &status)?,
        })
    }
}
