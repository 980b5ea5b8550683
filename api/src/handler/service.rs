use crate::{
    extractor::AuthorizedUser,
    model::{
        service::{ServiceRequest, ServiceResponse, ServicesResponse, UpdateServiceRequestWithId},
        CreatedResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::ServiceId, service::event::DeleteService};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_service(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<ServiceRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse<ServiceId>>)> {
    req.validate(&())?;

    registry
        .service_repository()
        .create(req.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn show_service_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ServicesResponse>> {
    registry
        .service_repository()
        .find_all()
        .await
        .map(ServicesResponse::from)
        .map(Json)
}

pub async fn show_service(
    _user: AuthorizedUser,
    Path(service_id): Path<ServiceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ServiceResponse>> {
    registry
        .service_repository()
        .find_by_id(service_id)
        .await
        .and_then(|c| match c {
            Some(c) => Ok(Json(c.into())),
            None => Err(AppError::EntityNotFound("service not found".into())),
        })
}

pub async fn update_service(
    _user: AuthorizedUser,
    Path(service_id): Path<ServiceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ServiceRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_service = UpdateServiceRequestWithId::new(service_id, req);
    registry
        .service_repository()
        .update(update_service.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_service(
    _user: AuthorizedUser,
    Path(service_id): Path<ServiceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .service_repository()
        .delete(DeleteService { service_id })
        .await
        .map(|_| StatusCode::OK)
}
