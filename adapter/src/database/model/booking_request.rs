use super::parse_text_column;
use chrono::{DateTime, NaiveDate, Utc};
use kernel::model::{
    booking_request::{BookingRequest, RequestedSpace},
    id::{BookingRequestId, SpaceId},
};
use shared::error::AppError;

// spaces と LEFT JOIN するので、スペース未指定の申込は space_id, space_name ともに None
#[derive(sqlx::FromRow)]
pub struct BookingRequestRow {
    pub booking_request_id: BookingRequestId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub event_date: NaiveDate,
    pub event_type: String,
    pub space_id: Option<SpaceId>,
    pub space_name: Option<String>,
    pub guest_count: i32,
    pub details: Option<String>,
    pub requested_at: DateTime<Utc>,
}

impl TryFrom<BookingRequestRow> for BookingRequest {
    type Error = AppError;

    fn try_from(value: BookingRequestRow) -> Result<Self, Self::Error> {
        let BookingRequestRow {
            booking_request_id,
            full_name,
            email,
            phone,
            event_date,
            event_type,
            space_id,
            space_name,
            guest_count,
            details,
            requested_at,
        } = value;
        let space = match (space_id, space_name) {
            (Some(space_id), Some(name)) => Some(RequestedSpace { space_id, name }),
            _ => None,
        };
        Ok(BookingRequest {
            booking_request_id,
            full_name,
            email,
            phone,
            event_date,
            event_type: parse_text_column("event type", &event_type)?,
            space,
            guest_count,
            details,
            requested_at,
        })
    }
}
