use crate::{
    extractor::AuthorizedUser,
    model::{
        reservation::{
            ReservationDetailResponse, ReservationRequest, ReservationsResponse,
            UpdateReservationRequestWithId,
        },
        CreatedResponse,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::ReservationId, reservation::event::DeleteReservation};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_reservation(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<ReservationRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse<ReservationId>>)> {
    req.validate(&())?;

    registry
        .reservation_repository()
        .create(req.into())
        .await
        .map(|id| (StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn show_reservation_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationsResponse>> {
    registry
        .reservation_repository()
        .find_all()
        .await
        .map(ReservationsResponse::from)
        .map(Json)
}

// 支払い一覧と入金状況をあわせて返す
pub async fn show_reservation(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationDetailResponse>> {
    registry
        .reservation_repository()
        .find_detail_by_id(reservation_id)
        .await
        .and_then(|r| match r {
            Some(r) => Ok(Json(r.into())),
            None => Err(AppError::EntityNotFound("reservation not found".into())),
        })
}

pub async fn update_reservation(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ReservationRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    let update_reservation = UpdateReservationRequestWithId::new(reservation_id, req);
    registry
        .reservation_repository()
        .update(update_reservation.into())
        .await
        .map(|_| StatusCode::OK)
}

pub async fn delete_reservation(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .reservation_repository()
        .delete(DeleteReservation { reservation_id })
        .await
        .map(|_| StatusCode::OK)
}
