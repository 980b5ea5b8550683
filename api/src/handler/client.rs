use crate::{
    extractor::AuthorizedUser,
    model::{
        client::{ClientRequest, ClientResponse, ClientsResponse, UpdateClientRequestWithId},
        CreatedResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{client::event::DeleteClient, id::ClientId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_client(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<ClientRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse<ClientId>>)> {
    req.validate(&())?;

    registry
        .client_repository()
        .create(req.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn show_client_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ClientsResponse>> {
    registry
        .client_repository()
        .find_all()
        .await
        .map(ClientsResponse::from)
        .map(Json)
}

pub async fn show_client(
    _user: AuthorizedUser,
    Path(client_id): Path<ClientId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ClientResponse>> {
    registry
        .client_repository()
        .find_by_id(client_id)
        .await
        .and_then(|c| match c {
            Some(c) => Ok(Json(c.into())),
            None => Err(AppError::EntityNotFound("client not found".into())),
        })
}

pub async fn update_client(
    _user: AuthorizedUser,
    Path(client_id): Path<ClientId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ClientRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_client = UpdateClientRequestWithId::new(client_id, req);
    registry
        .client_repository()
        .update(update_client.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_client(
    _user: AuthorizedUser,
    Path(client_id): Path<ClientId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .client_repository()
        .delete(DeleteClient { client_id })
        .await
        .map(|_| StatusCode::OK)
}
