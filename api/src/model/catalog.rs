use super::{service::ServiceResponse, space::SpaceResponse};
use kernel::model::{service::Service, space::Space};
use serde::Serialize;

/// 公開サイトのカタログに載せるパッケージ。DB には持たない固定の一覧。
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub const PACKAGES: [PackageResponse; 3] = [
    PackageResponse {
        slug: "basic",
        title: "Basic Package",
        description: "Venue, basic furniture, service staff and a menu of your choice.",
        image_url: "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?q=80&w=1200",
    },
    PackageResponse {
        slug: "premium",
        title: "Premium Package",
        description: "Everything in the basic package plus decoration, DJ service and a five-hour open bar.",
        image_url: "https://images.unsplash.com/photo-1464366400600-7168b8af9bc3?q=80&w=1200",
    },
    PackageResponse {
        slug: "all-inclusive",
        title: "All-Inclusive Package",
        description: "The complete experience with photography, video, an event coordinator and more.",
        image_url: "https://images.unsplash.com/photo-1465495976277-4387d4b0b4c6?q=80&w=1200",
    },
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub spaces: Vec<SpaceResponse>,
    pub packages: Vec<PackageResponse>,
    pub services: Vec<ServiceResponse>,
}

impl CatalogResponse {
    pub fn new(spaces: Vec<Space>, services: Vec<Service>) -> Self {
        Self {
            spaces: spaces.into_iter().map(SpaceResponse::from).collect(),
            packages: PACKAGES.to_vec(),
            services: services.into_iter().map(ServiceResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::model::id::SpaceId;

    #[test]
    fn catalog_always_lists_the_packages() {
        let spaces = vec![Space {
            space_id: SpaceId::new(),
            name: "Main Hall".into(),
            description: None,
            capacity: Some(200),
            rental_fee: None,
            image_url: None,
        }];
        let json = serde_json::to_value(CatalogResponse::new(spaces, Vec::new())).unwrap();
        assert_eq!(json["spaces"][0]["capacity"], 200);
        assert_eq!(json["packages"].as_array().unwrap().len(), 3);
        assert_eq!(json["packages"][2]["slug"], "all-inclusive");
        assert!(json["services"].as_array().unwrap().is_empty());
    }
}
