use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::{
    payment::{delete_payment, register_payment},
    reservation::{
        delete_reservation, register_reservation, show_reservation, show_reservation_list,
        update_reservation,
    },
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservations_routers = Router::new()
        .route("/", post(register_reservation))
        .route("/", get(show_reservation_list))
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id", put(update_reservation))
        .route("/:reservation_id", delete(delete_reservation))
        .route("/:reservation_id/payments", post(register_payment))
        .route(
            "/:reservation_id/payments/:payment_id",
            delete(delete_payment),
        );

    Router::new().nest("/reservations", reservations_routers)
}
