use crate::model::catalog::CatalogResponse;
use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_catalog(State(registry): State<AppRegistry>) -> AppResult<Json<CatalogResponse>> {
    let spaces = registry.space_repository().find_all().await?;
    let services = registry.service_repository().find_all().await?;
    Ok(Json(CatalogResponse::new(spaces, services)))
}
