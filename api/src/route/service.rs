use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::service::{
    delete_service, register_service, show_service, show_service_list, update_service,
};

pub fn build_service_routers() -> Router<AppRegistry> {
    let services_routers = Router::new()
        .route("/", post(register_service))
        .route("/", get(show_service_list))
        .route("/:service_id", get(show_service))
        .route("/:service_id", put(update_service))
        .route("/:service_id", delete(delete_service));

    Router::new().nest("/services", services_routers)
}
