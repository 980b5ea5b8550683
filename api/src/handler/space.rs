use crate::{
    extractor::AuthorizedUser,
    model::{
        space::{SpaceRequest, SpaceResponse, SpacesResponse, UpdateSpaceRequestWithId},
        CreatedResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::SpaceId, space::event::DeleteSpace};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_space(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<SpaceRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse<SpaceId>>)> {
    req.validate(&())?;

    registry
        .space_repository()
        .create(req.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn show_space_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpacesResponse>> {
    registry
        .space_repository()
        .find_all()
        .await
        .map(SpacesResponse::from)
        .map(Json)
}

pub async fn show_space(
    _user: AuthorizedUser,
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SpaceResponse>> {
    registry
        .space_repository()
        .find_by_id(space_id)
        .await
        .and_then(|s| match s {
            Some(s) => Ok(Json(s.into())),
            None => Err(AppError::EntityNotFound("space not found".into())),
        })
}

pub async fn update_space(
    _user: AuthorizedUser,
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<SpaceRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_space = UpdateSpaceRequestWithId::new(space_id, req);
    registry
        .space_repository()
        .update(update_space.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_space(
    _user: AuthorizedUser,
    Path(space_id): Path<SpaceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .space_repository()
        .delete(DeleteSpace { space_id })
        .await
        .map(|_| StatusCode::OK)
}
