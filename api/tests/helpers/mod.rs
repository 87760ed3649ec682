#![allow(dead_code)]

use std::sync::Arc;

use axum::{Json, Router};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use clap::Parser;
use culinary_api::{
    application::http::server::http_server::{api_routes, state},
    args::Args,
};
use serde_json::json;

pub const TWO_RECIPES: &str = r#"[
    {
        "recipeName": "Veggie Stir Fry",
        "difficulty": "Easy",
        "prepTime": "20 mins",
        "calories": 380,
        "ingredients": [
            { "name": "broccoli", "quantity": "1 head", "status": "available" },
            { "name": "soy sauce", "quantity": "2 tbsp", "status": "missing" }
        ],
        "steps": ["Chop the vegetables.", "Stir fry on high heat.", "Season and serve."]
    },
    {
        "recipeName": "Cheese Omelette",
        "difficulty": "Medium",
        "prepTime": "10 mins",
        "calories": 450,
        "ingredients": [
            { "name": "eggs", "quantity": "3", "status": "available" },
            { "name": "butter", "quantity": "1 tbsp", "status": "missing" }
        ],
        "steps": ["Whisk the eggs.", "Fold in the cheese."]
    }
]"#;

/// Nothing listens on port 1, so every generation fails fast.
pub const UNREACHABLE_GEMINI: &str = "http://127.0.0.1:1/v1beta";

pub const JPEG_BYTES: &[u8] = b"\xFF\xD8\xFF\xE0fake-jpeg";

pub const PNG_DATA_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

pub fn test_app(gemini_base_url: &str) -> TestServer {
    let args = Args::try_parse_from([
        "culinary-api",
        "--gemini-api-key",
        "test-key",
        "--gemini-base-url",
        gemini_base_url,
        "--server-root-path",
        "",
    ])
    .expect("valid test arguments");

    let router = api_routes(state(Arc::new(args)).expect("service builds"));
    TestServer::new(router).expect("test server starts")
}

/// Multipart form with a single `image` file field.
pub fn image_form(bytes: &[u8], content_type: &str) -> MultipartForm {
    let part = Part::bytes(bytes.to_vec())
        .file_name("fridge")
        .mime_type(content_type);

    MultipartForm::new().add_part("image", part)
}

/// Serves a Gemini-shaped answer carrying `recipes_json` on a random local port
/// and returns its base url.
pub async fn fake_gemini(recipes_json: &str) -> String {
    let body = json!({
        "candidates": [
            { "content": { "parts": [{ "text": recipes_json }] } }
        ]
    });
    let app = Router::new().fallback(move || {
        let body = body.clone();
        async move { Json(body) }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake gemini");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake gemini serves");
    });

    format!("http://{addr}/v1beta")
}

/// Creates a session and returns its id.
pub async fn create_session(server: &TestServer) -> String {
    let response = server.post("/sessions").await;
    assert_eq!(response.status_code(), 201);

    let body: serde_json::Value = response.json();
    body["data"]["id"]
        .as_str()
        .expect("session id")
        .to_string()
}

/// Creates a session holding the two sample recipes on the recipe list.
pub async fn session_with_recipes(server: &TestServer) -> String {
    let session_id = create_session(server).await;

    let response = server
        .post(&format!("/sessions/{session_id}/image?wait=true"))
        .multipart(image_form(JPEG_BYTES, "image/jpeg"))
        .await;
    assert_eq!(response.status_code(), 200);

    session_id
}
