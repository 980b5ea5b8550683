use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking_request::{show_booking_request_list, submit_booking_request};

pub fn build_booking_request_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", post(submit_booking_request))
        .route("/", get(show_booking_request_list));

    Router::new().nest("/booking-requests", routers)
}
