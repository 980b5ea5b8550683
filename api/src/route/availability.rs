use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::availability::{show_admin_availability, show_public_availability};

pub fn build_availability_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/availability", get(show_public_availability))
        .route("/admin/availability", get(show_admin_availability))
}
