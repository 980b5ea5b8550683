use super::{
    auth::build_auth_routers, availability::build_availability_routers,
    booking_request::build_booking_request_routers, catalog::build_catalog_routers,
    client::build_client_routers, health::build_health_check_routers,
    reservation::build_reservation_routers, service::build_service_routers,
    space::build_space_routers, user::build_user_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_auth_routers())
        .merge(build_user_routers())
        .merge(build_catalog_routers())
        .merge(build_availability_routers())
        .merge(build_booking_request_routers())
        .merge(build_client_routers())
        .merge(build_space_routers())
        .merge(build_service_routers())
        .merge(build_reservation_routers());
    Router::new().nest("/api/v1", router)
}
