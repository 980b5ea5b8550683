use super::{blank_as_none, non_negative, trimmed};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::SpaceId,
    space::{
        event::{CreateSpace, UpdateSpace},
        Space,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpaceRequest {
    #[garde(length(min = 1, max = 255))]
    #[serde(deserialize_with = "trimmed")]
    pub name: String,
    #[garde(skip)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub capacity: Option<i32>,
    #[garde(custom(non_negative))]
    #[serde(default)]
    pub rental_fee: Option<Decimal>,
    #[garde(url)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub image_url: Option<String>,
}

impl From<SpaceRequest> for CreateSpace {
    fn from(value: SpaceRequest) -> Self {
        let SpaceRequest {
            name,
            description,
            capacity,
            rental_fee,
            image_url,
        } = value;
        CreateSpace {
            name,
            description,
            capacity,
            rental_fee,
            image_url,
        }
    }
}

#[derive(new)]
pub struct UpdateSpaceRequestWithId(SpaceId, SpaceRequest);

impl From<UpdateSpaceRequestWithId> for UpdateSpace {
    fn from(value: UpdateSpaceRequestWithId) -> Self {
        let UpdateSpaceRequestWithId(
            space_id,
            SpaceRequest {
                name,
                description,
                capacity,
                rental_fee,
                image_url,
            },
        ) = value;
        UpdateSpace {
            space_id,
            name,
            description,
            capacity,
            rental_fee,
            image_url,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacesResponse {
    pub items: Vec<SpaceResponse>,
}

impl From<Vec<Space>> for SpacesResponse {
    fn from(value: Vec<Space>) -> Self {
        Self {
            items: value.into_iter().map(SpaceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceResponse {
    pub id: SpaceId,
    pub name: String,
    pub description: Option<String>,
    pub capacity: Option<i32>,
    pub rental_fee: Option<Decimal>,
    pub image_url: Option<String>,
}

impl From<Space> for SpaceResponse {
    fn from(value: Space) -> Self {
        let Space {
            space_id,
            name,
            description,
            capacity,
            rental_fee,
            image_url,
        } = value;
        Self {
            id: space_id,
            name,
            description,
            capacity,
            rental_fee,
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"name": "Main Hall", "capacity": 200, "rentalFee": "3500.00"}"#, true)]
    #[case(r#"{"name": "Main Hall", "rentalFee": 0, "imageUrl": ""}"#, true)]
    #[case(r#"{"name": "Main Hall", "imageUrl": "https://example.com/hall.jpg"}"#, true)]
    #[case(r#"{"name": "Main Hall", "capacity": -1}"#, false)]
    #[case(r#"{"name": "Main Hall", "rentalFee": "-10"}"#, false)]
    #[case(r#"{"name": "Main Hall", "imageUrl": "hall.jpg"}"#, false)]
    #[case(r#"{"name": ""}"#, false)]
    #[case(r#"{"name": "   "}"#, false)]
    #[case(r#"{"name": "Main Hall", "rentalFee": "12.345"}"#, false)]
    #[case(r#"{"name": "Main Hall", "rentalFee": "10000000000"}"#, false)]
    fn validates_space_fields(#[case] json: &str, #[case] valid: bool) {
        let req: SpaceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.validate(&()).is_ok(), valid);
    }

    #[test]
    fn name_longer_than_the_column_is_rejected() {
        let json = format!(r#"{{"name": "{}"}}"#, "h".repeat(256));
        let req: SpaceRequest = serde_json::from_str(&json).unwrap();
        assert!(req.validate(&()).is_err());
    }
}
