use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use crate::errors::AppResult;
use crate::models::Quote;
use crate::services::QuoteService;

pub async fn create_quote(
    State(service): State<QuoteService>,
    Json(quote): Json<Quote>,
) -> AppResult<Json<Value>> {
    service.create_quote(&quote).await?;
    Ok(Json(json!({
        "message": format!("Quote added: '{}' by {}", quote.text, quote.author)
    })))
}

pub async fn get_quote(State(service): State<QuoteService>) -> AppResult<Json<Value>> {
    let quote = service.random_quote().await?;
    Ok(Json(json!({ "quote": quote.text, "author": quote.author })))
}

pub async fn get_quote_by_author(
    State(service): State<QuoteService>,
    Path(author): Path<String>,
) -> AppResult<Json<Value>> {
    let quotes = service.quotes_by_author(&author).await?;
    Ok(Json(json!({ "author": author, "quotes": quotes })))
}
