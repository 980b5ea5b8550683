use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::client::{
    delete_client, register_client, show_client, show_client_list, update_client,
};

pub fn build_client_routers() -> Router<AppRegistry> {
    let clients_routers = Router::new()
        .route("/", post(register_client))
        .route("/", get(show_client_list))
        .route("/:client_id", get(show_client))
        .route("/:client_id", put(update_client))
        .route("/:client_id", delete(delete_client));

    Router::new().nest("/clients", clients_routers)
}
