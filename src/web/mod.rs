pub mod routes;

use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tokio::sync::RwLock;

use crate::store::EnrollmentStore;

/// Shared handle to the enrollment store. A single lock over the whole
/// catalog keeps each precondition check atomic with its mutation under
/// concurrent requests.
pub type SharedStore = Arc<RwLock<EnrollmentStore>>;

/// Build the application router over a shared store. `main` and the
/// integration tests serve the same app.
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/activities") }))
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            delete(routes::activities::unregister_handler),
        )
        .with_state(store)
}
