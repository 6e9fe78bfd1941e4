use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::{json, Value};
use crate::errors::AppResult;
use crate::models::{Task, TasksQuery};
use crate::services::TaskService;

pub async fn create_task(
    State(service): State<TaskService>,
    Json(task): Json<Task>,
) -> AppResult<Json<Value>> {
    service.create_task(task).await?;
    Ok(Json(json!({ "status": "Task created" })))
}

pub async fn get_tasks(
    State(service): State<TaskService>,
    Query(query): Query<TasksQuery>,
) -> AppResult<Json<Value>> {
    tracing::debug!("Listing tasks for user: {}", query.name);

    let tasks: Vec<_> = service
        .get_tasks(&query.name)
        .await?
        .into_iter()
        .map(Task::into_tuple)
        .collect();

    Ok(Json(json!({ "tasks": tasks })))
}
