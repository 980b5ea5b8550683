use crate::model::id::SpaceId;
use rust_decimal::Decimal;

pub struct CreateSpace {
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub rental_fee: Option<Decimal>,
    pub image_url: Option<String>,
}

#[derive(Debug)]
pub struct UpdateSpace {
    pub space_id: SpaceId,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub rental_fee: Option<Decimal>,
    pub image_url: Option<String>,
}

#[derive(Debug)]
pub struct DeleteSpace {
    pub space_id: SpaceId,
}
