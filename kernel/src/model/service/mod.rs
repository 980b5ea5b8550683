use crate::model::id::ServiceId;
use rust_decimal::Decimal;

pub mod event;

/// 予約とは独立した追加サービス（ケータリング、装飾など）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub service_id: ServiceId,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}
