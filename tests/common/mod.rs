#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use library_catalog::api::{handlers::AppState, router::create_router};
use library_catalog::application::ServiceDependencies;
use library_catalog::domain::{Book, User};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// テストごとに空のインメモリストアで依存関係を作成
pub fn create_test_deps() -> ServiceDependencies {
    ServiceDependencies::in_memory()
}

/// テスト用のルーターを作成
pub fn create_test_app(deps: ServiceDependencies) -> axum::Router {
    create_router(Arc::new(AppState { service_deps: deps }))
}

pub fn quijote() -> Book {
    Book::new("1234567890", "El Quijote", "Miguel de Cervantes", "available")
}

pub fn cien_anos() -> Book {
    Book::new(
        "0987654321",
        "Cien años de soledad",
        "Gabriel García Márquez",
        "available",
    )
}

pub fn juan() -> User {
    User::new("Juan Pérez", "juan@example.com", "active")
}

pub fn maria() -> User {
    User::new("María García", "maria@example.com", "active")
}

/// リクエストを送信し、ステータスとJSONボディを返す
///
/// ボディが空の場合は `Value::Null` を返す。
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, json)
}
