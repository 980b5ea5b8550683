use crate::model::id::SpaceId;
use rust_decimal::Decimal;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    pub space_id: SpaceId,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub rental_fee: Option<Decimal>,
    pub image_url: Option<String>,
}
