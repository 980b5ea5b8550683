use crate::model::{booking_request::EventType, id::SpaceId};
use chrono::NaiveDate;

pub struct CreateBookingRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub event_date: NaiveDate,
    pub event_type: EventType,
    pub space_id: Option<SpaceId>,
    pub guest_count: i32,
    pub details: Option<String>,
}
