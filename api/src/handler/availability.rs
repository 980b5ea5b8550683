use crate::{
    extractor::AuthorizedUser,
    model::availability::{
        AdminAvailabilityResponse, AvailabilityQuery, PublicAvailabilityResponse,
    },
};
use axum::{
    extract::{Query, State},
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_public_availability(
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PublicAvailabilityResponse>> {
    query.validate(&())?;

    registry
        .availability_repository()
        .find_booked_days(query.into())
        .await
        .map(PublicAvailabilityResponse::from)
        .map(Json)
}

pub async fn show_admin_availability(
    _user: AuthorizedUser,
    Query(query): Query<AvailabilityQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AdminAvailabilityResponse>> {
    query.validate(&())?;

    registry
        .availability_repository()
        .find_booked_days(query.into())
        .await
        .map(AdminAvailabilityResponse::from)
        .map(Json)
}
