use crate::model::id::{BookingRequestId, SpaceId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
    Wedding,
    Corporate,
    Birthday,
    Graduation,
    Other,
}

/// 公開サイトの予約申込フォームから送られた申込
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub booking_request_id: BookingRequestId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub event_date: NaiveDate,
    pub event_type: EventType,
    pub space: Option<RequestedSpace>,
    pub guest_count: i32,
    pub details: Option<String>,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedSpace {
    pub space_id: SpaceId,
    pub name: String,
}
