use kernel::model::{id::ServiceId, service::Service};
use rust_decimal::Decimal;

#[derive(sqlx::FromRow)]
pub struct ServiceRow {
    pub service_id: ServiceId,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

impl From<ServiceRow> for Service {
    fn from(value: ServiceRow) -> Self {
        let ServiceRow {
            service_id,
            name,
            description,
            price,
        } = value;
        Service {
            service_id,
            name,
            description,
            price,
        }
    }
}
