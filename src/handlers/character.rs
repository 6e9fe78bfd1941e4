use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use crate::errors::AppResult;
use crate::models::Character;
use crate::services::QuoteService;

pub async fn list_characters(State(service): State<QuoteService>) -> AppResult<Json<Value>> {
    let characters = service.list_characters().await?;
    Ok(Json(json!({ "characters": characters })))
}

pub async fn get_character(
    State(service): State<QuoteService>,
    Path(name): Path<String>,
) -> AppResult<Json<Value>> {
    tracing::debug!("Looking up character: {}", name);
    let character = service.get_character(&name).await?;
    Ok(Json(json!({ "character": character })))
}

pub async fn create_character(
    State(service): State<QuoteService>,
    Json(character): Json<Character>,
) -> AppResult<Json<Value>> {
    service.create_character(&character).await?;
    Ok(Json(json!({
        "message": format!("Character '{}' added successfully", character.name)
    })))
}
