use crate::model::{
    id::{PaymentId, ReservationId},
    payment::PaymentMethod,
};
use chrono::NaiveDate;
use derive_new::new;
use rust_decimal::Decimal;

#[derive(new)]
pub struct CreatePayment {
    pub reservation_id: ReservationId,
    pub payment_date: NaiveDate,
    pub amount: Decimal,
    pub method: PaymentMethod,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug)]
pub struct DeletePayment {
    pub payment_id: PaymentId,
    pub reservation_id: ReservationId,
}
