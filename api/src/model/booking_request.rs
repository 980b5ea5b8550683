use super::{blank_as_none, trimmed};
use chrono::{DateTime, NaiveDate, Utc};
use garde::Validate;
use kernel::model::{
    booking_request::{event::CreateBookingRequest, BookingRequest, EventType, RequestedSpace},
    id::{BookingRequestId, SpaceId},
};
use serde::{Deserialize, Serialize};

// 公開サイトの申込フォーム
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitBookingRequest {
    #[garde(length(min = 1, max = 255))]
    #[serde(deserialize_with = "trimmed")]
    pub full_name: String,
    #[garde(email, length(max = 255))]
    #[serde(deserialize_with = "trimmed")]
    pub email: String,
    #[garde(length(min = 1, max = 64))]
    #[serde(deserialize_with = "trimmed")]
    pub phone: String,
    #[garde(skip)]
    pub event_date: NaiveDate,
    #[garde(skip)]
    pub event_type: EventType,
    #[garde(skip)]
    #[serde(default)]
    pub space_id: Option<SpaceId>,
    #[garde(range(min = 1))]
    pub guest_count: i32,
    #[garde(skip)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub details: Option<String>,
}

impl From<SubmitBookingRequest> for CreateBookingRequest {
    fn from(value: SubmitBookingRequest) -> Self {
        let SubmitBookingRequest {
            full_name,
            email,
            phone,
            event_date,
            event_type,
            space_id,
            guest_count,
            details,
        } = value;
        CreateBookingRequest {
            full_name,
            email,
            phone,
            event_date,
            event_type,
            space_id,
            guest_count,
            details,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequestsResponse {
    pub items: Vec<BookingRequestResponse>,
}

impl From<Vec<BookingRequest>> for BookingRequestsResponse {
    fn from(value: Vec<BookingRequest>) -> Self {
        Self {
            items: value.into_iter().map(BookingRequestResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequestResponse {
    pub id: BookingRequestId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub event_date: NaiveDate,
    pub event_type: EventType,
    pub space: Option<RequestedSpaceResponse>,
    pub guest_count: i32,
    pub details: Option<String>,
    pub requested_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestedSpaceResponse {
    pub id: SpaceId,
    pub name: String,
}

impl From<RequestedSpace> for RequestedSpaceResponse {
    fn from(value: RequestedSpace) -> Self {
        let RequestedSpace { space_id, name } = value;
        Self { id: space_id, name }
    }
}

impl From<BookingRequest> for BookingRequestResponse {
    fn from(value: BookingRequest) -> Self {
        let BookingRequest {
            booking_request_id,
            full_name,
            email,
            phone,
            event_date,
            event_type,
            space,
            guest_count,
            details,
            requested_at,
        } = value;
        Self {
            id: booking_request_id,
            full_name,
            email,
            phone,
            event_date,
            event_type,
            space: space.map(RequestedSpaceResponse::from),
            guest_count,
            details,
            requested_at,
        }
    }
}
