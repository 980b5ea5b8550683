use super::{blank_as_none, non_negative, trimmed};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::ServiceId,
    service::{
        event::{CreateService, UpdateService},
        Service,
    },
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    #[garde(length(min = 1, max = 255))]
    #[serde(deserialize_with = "trimmed")]
    pub name: String,
    #[garde(skip)]
    #[serde(default, deserialize_with = "blank_as_none")]
    pub description: Option<String>,
    #[garde(custom(non_negative))]
    #[serde(default)]
    pub price: Option<Decimal>,
}

impl From<ServiceRequest> for CreateService {
    fn from(value: ServiceRequest) -> Self {
        let ServiceRequest {
            name,
            description,
            price,
        } = value;
        CreateService {
            name,
            description,
            price,
        }
    }
}

#[derive(new)]
pub struct UpdateServiceRequestWithId(ServiceId, ServiceRequest);

impl From<UpdateServiceRequestWithId> for UpdateService {
    fn from(value: UpdateServiceRequestWithId) -> Self {
        let UpdateServiceRequestWithId(
            service_id,
            ServiceRequest {
                name,
                description,
                price,
            },
        ) = value;
        UpdateService {
            service_id,
            name,
            description,
            price,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesResponse {
    pub items: Vec<ServiceResponse>,
}

impl From<Vec<Service>> for ServicesResponse {
    fn from(value: Vec<Service>) -> Self {
        Self {
            items: value.into_iter().map(ServiceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub id: ServiceId,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

impl From<Service> for ServiceResponse {
    fn from(value: Service) -> Self {
        let Service {
            service_id,
            name,
            description,
            price,
        } = value;
        Self {
            id: service_id,
            name,
            description,
            price,
        }
    }
}
