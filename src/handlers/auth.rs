use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::errors::AppResult;
use crate::models::User;
use crate::services::TaskService;

#[axum::debug_handler]
pub async fn create_user(
    State(service): State<TaskService>,
    Json(user): Json<User>,
) -> AppResult<Json<Value>> {
    let outcome = service.create_user(user).await?;
    Ok(Json(json!({ "status": outcome.status() })))
}

#[axum::debug_handler]
pub async fn login(
    State(service): State<TaskService>,
    Json(user): Json<User>,
) -> AppResult<Json<Value>> {
    let outcome = service.login(&user.username, &user.password).await?;
    Ok(Json(json!({ "status": outcome.status() })))
}
