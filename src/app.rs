use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use crate::handlers;
use crate::services::{QuoteService, TaskService};

pub fn task_app(service: TaskService, max_body_size: usize) -> Router {
    Router::new()
        .route("/create_user/", post(handlers::create_user))
        .route("/login/", post(handlers::login))
        .route("/create_task/", post(handlers::create_task))
        .route("/get_tasks/", get(handlers::get_tasks))
        // Any origin, method and header, credentials included.
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .with_state(service)
}

pub fn quote_app(service: QuoteService, max_body_size: usize) -> Router {
    Router::new()
        .route("/characters", get(handlers::list_characters))
        .route("/characters/:name", get(handlers::get_character))
        .route("/create_character", post(handlers::create_character))
        .route("/create_quote", post(handlers::create_quote))
        .route("/quote", get(handlers::get_quote))
        .route("/quote/:author", get(handlers::get_quote_by_author))
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tempfile::tempdir;
    use tower::ServiceExt;
    use crate::store::Store;

    const LIMIT: usize = 64 * 1024;

    fn tasks() -> Router {
        task_app(
            TaskService::new(Store::in_memory("users.csv"), Store::in_memory("tasks.csv")),
            LIMIT,
        )
    }

    fn quotes() -> Router {
        quote_app(
            QuoteService::new(Store::in_memory("characters.csv"), Store::in_memory("quotes.csv")),
            LIMIT,
        )
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_register_twice() {
        let app = tasks();
        let body = json!({ "username": "alice", "password": "secret" });

        let (status, value) = send(&app, Method::POST, "/create_user/", Some(body.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, json!({ "status": "User created" }));

        let (_, value) = send(&app, Method::POST, "/create_user/", Some(body)).await;
        assert_eq!(value, json!({ "status": "User already exists" }));
    }

    #[tokio::test]
    async fn test_login_flow() {
        let app = tasks();
        send(
            &app,
            Method::POST,
            "/create_user/",
            Some(json!({ "username": "alice", "password": "secret" })),
        )
        .await;

        let (_, value) = send(
            &app,
            Method::POST,
            "/login/",
            Some(json!({ "username": " alice ", "password": "secret" })),
        )
        .await;
        assert_eq!(value, json!({ "status": "Logged in" }));

        let (status, value) = send(
            &app,
            Method::POST,
            "/login/",
            Some(json!({ "username": "alice", "password": "wrong" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, json!({ "status": "Invalid username or password" }));
    }

    #[tokio::test]
    async fn test_tasks_round_trip() {
        let app = tasks();

        let (_, value) = send(&app, Method::GET, "/get_tasks/?name=bob", None).await;
        assert_eq!(value, json!({ "tasks": [] }));

        let (_, value) = send(
            &app,
            Method::POST,
            "/create_task/",
            Some(json!({ "task": "laundry", "deadline": "friday", "user": "bob" })),
        )
        .await;
        assert_eq!(value, json!({ "status": "Task created" }));
        send(
            &app,
            Method::POST,
            "/create_task/",
            Some(json!({ "task": "dishes", "deadline": "today", "user": "carol" })),
        )
        .await;

        let (_, value) = send(&app, Method::GET, "/get_tasks/?name=bob", None).await;
        assert_eq!(value, json!({ "tasks": [["laundry", "friday", "bob"]] }));
    }

    #[tokio::test]
    async fn test_get_tasks_requires_name() {
        let (status, _) = send(&tasks(), Method::GET, "/get_tasks/", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_task_routes_allow_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/login/")
            .header(header::ORIGIN, "http://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = tasks().oneshot(request).await.unwrap();
        let headers = response.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://example.com"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn test_characters() {
        let app = quotes();

        let (status, value) = send(&app, Method::GET, "/characters", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value, json!({ "detail": "No characters found" }));

        let (status, value) = send(
            &app,
            Method::POST,
            "/create_character",
            Some(json!({ "name": "Yoda", "description": "Jedi master" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, json!({ "message": "Character 'Yoda' added successfully" }));

        let (_, value) = send(&app, Method::GET, "/characters", None).await;
        assert_eq!(
            value,
            json!({ "characters": [{ "name": "Yoda", "description": "Jedi master" }] })
        );

        let (status, value) = send(&app, Method::GET, "/characters/yoda", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            value,
            json!({ "character": { "name": "Yoda", "description": "Jedi master" } })
        );

        let (status, value) = send(&app, Method::GET, "/characters/Vader", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value, json!({ "detail": "Character not found" }));
    }

    #[tokio::test]
    async fn test_quotes() {
        let app = quotes();

        let (status, value) = send(&app, Method::GET, "/quote", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value, json!({ "detail": "No quotes available" }));

        let (_, value) = send(
            &app,
            Method::POST,
            "/create_quote",
            Some(json!({ "text": "Do or do not", "author": "Yoda" })),
        )
        .await;
        assert_eq!(value, json!({ "message": "Quote added: 'Do or do not' by Yoda" }));

        let (status, value) = send(&app, Method::GET, "/quote", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value, json!({ "quote": "Do or do not", "author": "Yoda" }));

        let (_, value) = send(&app, Method::GET, "/quote/YODA", None).await;
        assert_eq!(value, json!({ "author": "YODA", "quotes": ["Do or do not"] }));

        let (status, value) = send(&app, Method::GET, "/quote/Kenobi", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(value, json!({ "detail": "No quotes found for author: Kenobi" }));
    }

    #[tokio::test]
    async fn test_csv_backed_service_persists_between_apps() {
        let dir = tempdir().unwrap();
        let service = || {
            QuoteService::new(
                Store::csv(dir.path().join("characters.csv")),
                Store::csv(dir.path().join("quotes.csv")),
            )
        };
        service().ensure().await.unwrap();

        let first = quote_app(service(), LIMIT);
        send(
            &first,
            Method::POST,
            "/create_quote",
            Some(json!({ "text": "Hello, there", "author": "Kenobi" })),
        )
        .await;

        let second = quote_app(service(), LIMIT);
        let (_, value) = send(&second, Method::GET, "/quote/kenobi", None).await;
        assert_eq!(value["quotes"], json!(["Hello, there"]));

        let contents = std::fs::read_to_string(dir.path().join("quotes.csv")).unwrap();
        assert_eq!(contents, "text,author\n\"Hello, there\",Kenobi\n");
    }
}
