use crate::{
    extractor::AuthorizedUser,
    model::{payment::PaymentRequest, CreatedResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::{PaymentId, ReservationId},
    payment::event::DeletePayment,
};
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn register_payment(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<PaymentRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse<PaymentId>>)> {
    req.validate(&())?;

    registry
        .payment_repository()
        .create(req.into_event(reservation_id))
        .await
        .map(|id| (StatusCode::CREATED, Json(CreatedResponse { id })))
}

pub async fn delete_payment(
    _user: AuthorizedUser,
    Path((reservation_id, payment_id)): Path<(ReservationId, PaymentId)>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .payment_repository()
        .delete(DeletePayment {
            payment_id,
            reservation_id,
        })
        .await
        .map(|_| StatusCode::OK)
}
