use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::models::Activity;
use crate::store::EnrollmentError;
use crate::web::SharedStore;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn activities_handler(
    State(store): State<SharedStore>,
) -> Json<BTreeMap<String, Activity>> {
    Json(store.read().await.activities().clone())
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<SharedStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut store = store.write().await;
    store
        .signup(&activity_name, &query.email)
        .map(|c| {
            Json(serde_json::json!({
                "message": format!("Signed up {} for {}", c.email, c.activity)
            }))
        })
        .map_err(reject)
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(store): State<SharedStore>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut store = store.write().await;
    store
        .unregister(&activity_name, &query.email)
        .map(|c| {
            Json(serde_json::json!({
                "message": format!("Unregistered {} from {}", c.email, c.activity)
            }))
        })
        .map_err(reject)
}

fn reject(err: EnrollmentError) -> (StatusCode, Json<Value>) {
    tracing::warn!(error = %err, "Enrollment request rejected");

    let status = match err {
        EnrollmentError::ActivityNotFound(_) | EnrollmentError::NotRegistered { .. } => {
            StatusCode::NOT_FOUND
        }
        EnrollmentError::AlreadyRegistered { .. } | EnrollmentError::ActivityFull { .. } => {
            StatusCode::BAD_REQUEST
        }
    };

    (status, Json(serde_json::json!({ "detail": err.to_string() })))
}
