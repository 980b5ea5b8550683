use kernel::model::{id::SpaceId, space::Space};
use rust_decimal::Decimal;

#[derive(sqlx::FromRow)]
pub struct SpaceRow {
    pub space_id: SpaceId,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub rental_fee: Option<Decimal>,
    pub image_url: Option<String>,
}

impl From<SpaceRow> for Space {
    fn from(value: SpaceRow) -> Self {
        let SpaceRow {
            space_id,
            name,
            description,
            capacity,
            rental_fee,
            image_url,
        } = value;
        Space {
            space_id,
            name,
            description,
            capacity,
            rental_fee,
            image_url,
        }
    }
}
