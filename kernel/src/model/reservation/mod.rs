use crate::model::{
    id::{ClientId, ReservationId, SpaceId},
    ledger::PaymentLedger,
    payment::Payment,
};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub mod event;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: ReservationStatus,
    pub total_price: Decimal,
    pub notes: Option<String>,
    pub client: ReservationClient,
    pub space: ReservationSpace,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationClient {
    pub client_id: ClientId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationSpace {
    pub space_id: SpaceId,
    pub name: String,
}

/// 予約の編集画面で使う、支払い一覧と残高を含めた予約情報
#[derive(Debug)]
pub struct ReservationDetail {
    pub reservation: Reservation,
    pub payments: Vec<Payment>,
    pub ledger: PaymentLedger,
}

impl ReservationDetail {
    pub fn new(reservation: Reservation, payments: Vec<Payment>) -> Self {
        let ledger = PaymentLedger::summarize(reservation.total_price, &payments);
        Self {
            reservation,
            payments,
            ledger,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case("pending", ReservationStatus::Pending)]
    #[case("confirmed", ReservationStatus::Confirmed)]
    #[case("cancelled", ReservationStatus::Cancelled)]
    #[case("completed", ReservationStatus::Completed)]
    fn status_is_stored_as_lowercase_text(#[case] text: &str, #[case] status: ReservationStatus) {
        assert_eq!(text.parse::<ReservationStatus>().unwrap(), status);
        assert_eq!(status.as_ref(), text);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!("booked".parse::<ReservationStatus>().is_err());
        assert_eq!(ReservationStatus::iter().count(), 4);
    }
}
