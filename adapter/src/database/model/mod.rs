pub mod auth;
pub mod availability;
pub mod booking_request;
pub mod client;
pub mod payment;
pub mod reservation;
pub mod service;
pub mod space;
pub mod user;

use shared::error::{AppError, AppResult};
use std::str::FromStr;

// TEXT 列に保存している列挙値をドメインの型に戻す
pub(crate) fn parse_text_column<T: FromStr>(column: &str, value: &str) -> AppResult<T> {
    value
        .parse()
        .map_err(|_| AppError::ConversionEntityError(format!("invalid {column}: {value}")))
}
