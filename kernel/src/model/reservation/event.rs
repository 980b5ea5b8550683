use crate::model::{
    id::{ClientId, ReservationId, SpaceId},
    reservation::ReservationStatus,
};
use chrono::{NaiveDate, NaiveTime};
use derive_new::new;
use rust_decimal::Decimal;

#[derive(new)]
pub struct CreateReservation {
    pub client_id: ClientId,
    pub space_id: SpaceId,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: ReservationStatus,
    pub total_price: Decimal,
    pub notes: Option<String>,
}

#[derive(new, Debug)]
pub struct UpdateReservation {
    pub reservation_id: ReservationId,
    pub client_id: ClientId,
    pub space_id: SpaceId,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: ReservationStatus,
    pub total_price: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug)]
pub struct DeleteReservation {
    pub reservation_id: ReservationId,
}
