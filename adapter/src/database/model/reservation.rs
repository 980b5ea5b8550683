use super::parse_text_column;
use chrono::{NaiveDate, NaiveTime};
use kernel::model::{
    id::{ClientId, ReservationId, SpaceId},
    reservation::{Reservation, ReservationClient, ReservationSpace},
};
use rust_decimal::Decimal;
use shared::error::AppError;

// clients, spaces と JOIN して取得する予約の行
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub client_id: ClientId,
    pub client_name: String,
    pub space_id: SpaceId,
    pub space_name: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
    pub total_price: Decimal,
    pub notes: Option<String>,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            reservation_id,
            client_id,
            client_name,
            space_id,
            space_name,
            event_date,
            start_time,
            end_time,
            status,
            total_price,
            notes,
        } = value;
        Ok(Reservation {
            reservation_id,
            event_date,
            start_time,
            end_time,
            status: parse_text_column("reservation status", &status)?,
            total_price,
            notes,
            client: ReservationClient {
                client_id,
                name: client_name,
            },
            space: ReservationSpace {
                space_id,
                name: space_name,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::reservation::ReservationStatus;
    use rust_decimal_macros::dec;

    fn row(status: &str) -> ReservationRow {
        ReservationRow {
            reservation_id: ReservationId::new(),
            client_id: ClientId::new(),
            client_name: "Familia Quispe".into(),
            space_id: SpaceId::new(),
            space_name: "Main Hall".into(),
            event_date: NaiveDate::from_ymd_opt(2025, 6, 21).unwrap(),
            start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(23, 30, 0).unwrap(),
            status: status.into(),
            total_price: dec!(4200.00),
            notes: None,
        }
    }

    #[test]
    fn row_converts_into_reservation() {
        let reservation = Reservation::try_from(row("confirmed")).unwrap();
        assert_eq!(reservation.status, ReservationStatus::Confirmed);
        assert_eq!(reservation.client.name, "Familia Quispe");
        assert_eq!(reservation.space.name, "Main Hall");
        assert_eq!(reservation.total_price, dec!(4200));
    }

    #[test]
    fn unknown_status_is_a_conversion_error() {
        let res = Reservation::try_from(row("on-hold"));
        assert!(matches!(res, Err(AppError::ConversionEntityError(_))));
    }
}
