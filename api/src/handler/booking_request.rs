use crate::{
    extractor::AuthorizedUser,
    model::{
        booking_request::{BookingRequestsResponse, SubmitBookingRequest},
        CreatedResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::id::BookingRequestId;
use registry::AppRegistry;
use shared::error::AppResult;

// 公開フォームからの申込。ログイン不要
pub async fn submit_booking_request(
    State(registry): State<AppRegistry>,
    Json(req): Json<SubmitBookingRequest>,
) -> AppResult<(StatusCode, Json<CreatedResponse<BookingRequestId>>)> {
    req.validate(&())?;

    let booking_request_id = registry.booking_request_repository().create(req.into()).await?;
    tracing::info!(%booking_request_id, "booking request received");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: booking_request_id,
        }),
    ))
}

pub async fn show_booking_request_list(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingRequestsResponse>> {
    registry
        .booking_request_repository()
        .find_all()
        .await
        .map(BookingRequestsResponse::from)
        .map(Json)
}
