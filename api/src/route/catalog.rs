use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::catalog::show_catalog;

pub fn build_catalog_routers() -> Router<AppRegistry> {
    Router::new().route("/catalog", get(show_catalog))
}
