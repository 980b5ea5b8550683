use super::parse_text_column;
use chrono::NaiveDate;
use kernel::model::{
    id::{PaymentId, ReservationId},
    payment::Payment,
};
use rust_decimal::Decimal;
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct PaymentRow {
    pub payment_id: PaymentId,
    pub reservation_id: ReservationId,
    pub payment_date: NaiveDate,
    pub amount: Decimal,
    pub method: String,
    pub reference_number: Option<String>,
    pub notes: Option<String>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = AppError;

    fn try_from(value: PaymentRow) -> Result<Self, Self::Error> {
        let PaymentRow {
            payment_id,
            reservation_id,
            payment_date,
            amount,
            method,
            reference_number,
            notes,
        } = value;
        Ok(Payment {
            payment_id,
            reservation_id,
            payment_date,
            amount,
            method: parse_text_column("payment method", &method)?,
            reference_number,
            notes,
        })
    }
}
