use super::{
    blank_as_none, deserialize_time, non_negative, payment::PaymentResponse, serialize_hh_mm,
};
use chrono::{NaiveDate, NaiveTime};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{ClientId, ReservationId, SpaceId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation, ReservationClient, ReservationDetail, ReservationSpace, ReservationStatus,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// 終了時刻は開始時刻より後でなければならない
fn is_after(start_time: &NaiveTime) -> impl FnOnce(&NaiveTime, &()) -> garde::Result + '_ {
    move |end_time, _| {
        if end_time > start_time {
            Ok(())
        } else {
            Err(garde::Error::new("end time must be after start time"))
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    #[garde(skip)]
    pub client_id: ClientId,
    #[garde(skip)]
    pub space_id: SpaceId,
    #[garde(skip)]
    pub event_date: NaiveDate,
    #[garde(skip)]
    #[serde(deserialize_with = "deserialize_time")]
    pub start_time: NaiveTime,
    #[garde(custom(is_after(&self.start_time)))]
    #[serde(deserialize_with = "deserialize_time")]
    pub end_time: NaiveTime,
    #[garde(skip)]
    #[serde(default = "default_status")]
    pub status: ReservationStatus,
    #[garde(custom(non_negative))]
    pub total_price: Decimal,
    #[garde(skip)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub notes: Option<String>,
}

fn default_status() -> ReservationStatus {
    ReservationStatus::Pending
}

impl From<ReservationRequest> for CreateReservation {
    fn from(value: ReservationRequest) -> Self {
        let ReservationRequest {
            client_id,
            space_id,
            event_date,
            start_time,
            end_time,
            status,
            total_price,
            notes,
        } = value;
        CreateReservation::new(
            client_id,
            space_id,
            event_date,
            start_time,
            end_time,
            status,
            total_price,
            notes,
        )
    }
}

#[derive(new)]
pub struct UpdateReservationRequestWithId(ReservationId, ReservationRequest);

impl From<UpdateReservationRequestWithId> for UpdateReservation {
    fn from(value: UpdateReservationRequestWithId) -> Self {
        let UpdateReservationRequestWithId(
            reservation_id,
            ReservationRequest {
                client_id,
                space_id,
                event_date,
                start_time,
                end_time,
                status,
                total_price,
                notes,
            },
        ) = value;
        UpdateReservation::new(
            reservation_id,
            client_id,
            space_id,
            event_date,
            start_time,
            end_time,
            status,
            total_price,
            notes,
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub event_date: NaiveDate,
    #[serde(serialize_with = "serialize_hh_mm")]
    pub start_time: NaiveTime,
    #[serde(serialize_with = "serialize_hh_mm")]
    pub end_time: NaiveTime,
    pub status: ReservationStatus,
    pub total_price: Decimal,
    pub notes: Option<String>,
    pub client: ReservationClientResponse,
    pub space: ReservationSpaceResponse,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            event_date,
            start_time,
            end_time,
            status,
            total_price,
            notes,
            client,
            space,
        } = value;
        Self {
            id: reservation_id,
            event_date,
            start_time,
            end_time,
            status,
            total_price,
            notes,
            client: client.into(),
            space: space.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationClientResponse {
    pub id: ClientId,
    pub name: String,
}

impl From<ReservationClient> for ReservationClientResponse {
    fn from(value: ReservationClient) -> Self {
        let ReservationClient { client_id, name } = value;
        Self {
            id: client_id,
            name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSpaceResponse {
    pub id: SpaceId,
    pub name: String,
}

impl From<ReservationSpace> for ReservationSpaceResponse {
    fn from(value: ReservationSpace) -> Self {
        let ReservationSpace { space_id, name } = value;
        Self { id: space_id, name }
    }
}

/// 予約の編集画面向け。支払い一覧と入金状況を含む。
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetailResponse {
    #[serde(flatten)]
    pub reservation: ReservationResponse,
    pub payments: Vec<PaymentResponse>,
    pub total_paid: Decimal,
    pub balance_due: Decimal,
    pub has_outstanding_balance: bool,
}

impl From<ReservationDetail> for ReservationDetailResponse {
    fn from(value: ReservationDetail) -> Self {
        let ReservationDetail {
            reservation,
            payments,
            ledger,
        } = value;
        Self {
            reservation: reservation.into(),
            payments: payments.into_iter().map(PaymentResponse::from).collect(),
            total_paid: ledger.total_paid,
            balance_due: ledger.balance_due,
            has_outstanding_balance: ledger.has_outstanding_balance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::{
        id::PaymentId,
        payment::{Payment, PaymentMethod},
    };
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn request(start: &str, end: &str, total_price: &str) -> ReservationRequest {
        let json = format!(
            r#"{{
                "clientId": "{}",
                "spaceId": "{}",
                "eventDate": "2025-06-14",
                "startTime": "{start}",
                "endTime": "{end}",
                "totalPrice": "{total_price}",
                "notes": ""
            }}"#,
            ClientId::new(),
            SpaceId::new(),
        );
        serde_json::from_str(&json).unwrap()
    }

    #[rstest]
    #[case("18:00", "23:30", "4500.00", true)]
    #[case("09:00:00", "09:01:00", "0", true)]
    #[case("18:00", "18:00", "4500.00", false)]
    #[case("23:00", "01:00", "4500.00", false)]
    #[case("18:00", "23:00", "-1", false)]
    #[case("18:00", "23:00", "4500.005", false)]
    #[case("18:00", "23:00", "10000000000.00", false)]
    fn validates_time_order_and_price(
        #[case] start: &str,
        #[case] end: &str,
        #[case] total_price: &str,
        #[case] valid: bool,
    ) {
        assert_eq!(request(start, end, total_price).validate(&()).is_ok(), valid);
    }

    #[test]
    fn status_defaults_to_pending_and_blank_notes_are_dropped() {
        let req = request("10:00", "12:00", "100");
        assert_eq!(req.status, ReservationStatus::Pending);
        assert_eq!(req.notes, None);
    }

    fn reservation() -> Reservation {
        Reservation {
            reservation_id: ReservationId::new(),
            event_date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(),
            start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(23, 30, 0).unwrap(),
            status: ReservationStatus::Confirmed,
            total_price: dec!(4500.00),
            notes: None,
            client: ReservationClient {
                client_id: ClientId::new(),
                name: "Alpha Events".into(),
            },
            space: ReservationSpace {
                space_id: SpaceId::new(),
                name: "Main Hall".into(),
            },
        }
    }

    #[test]
    fn response_uses_hh_mm_times() {
        let json = serde_json::to_value(ReservationResponse::from(reservation())).unwrap();
        assert_eq!(json["startTime"], "18:00");
        assert_eq!(json["endTime"], "23:30");
        assert_eq!(json["status"], "confirmed");
        assert_eq!(json["client"]["name"], "Alpha Events");
        assert_eq!(json["space"]["name"], "Main Hall");
    }

    #[test]
    fn detail_response_reports_the_ledger() {
        let reservation = reservation();
        let payments = vec![Payment {
            payment_id: PaymentId::new(),
            reservation_id: reservation.reservation_id,
            payment_date: NaiveDate::from_ymd_opt(2025, 5, 2).unwrap(),
            amount: dec!(1500.00),
            method: PaymentMethod::Transfer,
            reference_number: Some("OP-0042".into()),
            notes: None,
        }];
        let detail = ReservationDetailResponse::from(ReservationDetail::new(reservation, payments));
        assert_eq!(detail.total_paid, dec!(1500.00));
        assert_eq!(detail.balance_due, dec!(3000.00));
        assert!(detail.has_outstanding_balance);

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["startTime"], "18:00");
        assert_eq!(json["payments"][0]["method"], "transfer");
    }
}
