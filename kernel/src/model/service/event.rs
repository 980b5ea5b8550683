use crate::model::id::ServiceId;
use rust_decimal::Decimal;

pub struct CreateService {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

#[derive(Debug)]
pub struct UpdateService {
    pub service_id: ServiceId,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

#[derive(Debug)]
pub struct DeleteService {
    pub service_id: ServiceId,
}
