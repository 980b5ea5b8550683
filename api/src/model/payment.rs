use super::{blank_as_none, positive};
use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    id::{PaymentId, ReservationId},
    payment::{event::CreatePayment, Payment, PaymentMethod},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[garde(skip)]
    pub payment_date: NaiveDate,
    #[garde(custom(positive))]
    pub amount: Decimal,
    #[garde(skip)]
    pub method: PaymentMethod,
    #[garde(length(max = 255))]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub reference_number: Option<String>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub notes: Option<String>,
}

impl PaymentRequest {
    pub fn into_event(self, reservation_id: ReservationId) -> CreatePayment {
        let PaymentRequest {
            payment_date,
            amount,
            method,
            reference_number,
            notes,
        } = self;
        CreatePayment::new(
            reservation_id,
            payment_date,
            amount,
            method,
            reference_number,
            notes,
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: PaymentId,
    pub reservation_id: ReservationId,
    pub payment_date: NaiveDate,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
}

impl From<Payment> for PaymentResponse {
    fn from(value: Payment) -> Self {
        let Payment {
            payment_id,
            reservation_id,
            payment_date,
            amount,
            method,
            reference_number,
            notes,
        } = value;
        Self {
            id: payment_id,
            reservation_id,
            payment_date,
            amount,
            method,
            reference_number,
            notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("250.50", true)]
    #[case("0.01", true)]
    #[case("0", false)]
    #[case("-100", false)]
    #[case("0.004", false)]
    #[case("100.999", false)]
    #[case("100000000000", false)]
    fn amount_must_be_positive(#[case] amount: &str, #[case] valid: bool) {
        let json = format!(
            r#"{{"paymentDate": "2025-05-02", "amount": "{amount}", "method": "yape"}}"#
        );
        let req: PaymentRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(req.validate(&()).is_ok(), valid);
    }

    #[test]
    fn unknown_method_is_rejected_on_parse() {
        let json = r#"{"paymentDate": "2025-05-02", "amount": "10", "method": "bitcoin"}"#;
        assert!(serde_json::from_str::<PaymentRequest>(json).is_err());
    }

    #[test]
    fn event_is_bound_to_the_reservation() {
        let reservation_id = ReservationId::new();
        let json = r#"{
            "paymentDate": "2025-05-02",
            "amount": "10",
            "method": "cash",
            "referenceNumber": " "
        }"#;
        let req: PaymentRequest = serde_json::from_str(json).unwrap();
        let event = req.into_event(reservation_id);
        assert_eq!(event.reservation_id, reservation_id);
        assert_eq!(event.method, PaymentMethod::Cash);
        assert_eq!(event.reference_number, None);
    }
}
