pub mod auth;
pub mod availability;
pub mod booking_request;
pub mod catalog;
pub mod client;
pub mod payment;
pub mod reservation;
pub mod service;
pub mod space;
pub mod user;

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse<Id> {
    pub id: Id,
}

// フォームの空欄は "" で送られてくるので None として扱う
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|s| {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }))
}

// 必須の文字列は前後の空白を落としてから検証する
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

// 時刻は HH:MM と HH:MM:SS のどちらも受け付ける
pub(crate) fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&value, "%H:%M:%S"))
        .map_err(serde::de::Error::custom)
}

// 時刻は分までで返す（HH:MM）
pub(crate) fn serialize_hh_mm<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&time.format("%H:%M").to_string())
}

/// 金額のバリデーションを必須項目・任意項目の両方に使うためのトレイト
pub(crate) trait DecimalField {
    fn amount(&self) -> Option<Decimal>;
}

impl DecimalField for Decimal {
    fn amount(&self) -> Option<Decimal> {
        Some(*self)
    }
}

impl DecimalField for Option<Decimal> {
    fn amount(&self) -> Option<Decimal> {
        *self
    }
}

// 金額の列は NUMERIC(12, 2)。小数 3 桁以上や 10 桁を超える整数部は保存できない
const MAX_SCALE: u32 = 2;
const AMOUNT_LIMIT: i64 = 10_000_000_000;

fn fits_money_column(v: Decimal) -> garde::Result {
    if v.normalize().scale() > MAX_SCALE {
        return Err(garde::Error::new("must have at most 2 decimal places"));
    }
    if v.abs() >= Decimal::new(AMOUNT_LIMIT, 0) {
        return Err(garde::Error::new("must be less than 10000000000"));
    }
    Ok(())
}

pub(crate) fn non_negative<T: DecimalField>(value: &T, _: &()) -> garde::Result {
    match value.amount() {
        Some(v) if v < Decimal::ZERO => Err(garde::Error::new("must not be negative")),
        Some(v) => fits_money_column(v),
        None => Ok(()),
    }
}

pub(crate) fn positive<T: DecimalField>(value: &T, _: &()) -> garde::Result {
    match value.amount() {
        Some(v) if v <= Decimal::ZERO => Err(garde::Error::new("must be positive")),
        Some(v) => fits_money_column(v),
        None => Ok(()),
    }
}
