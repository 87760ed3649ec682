mod helpers;

use helpers::{
    TWO_RECIPES, UNREACHABLE_GEMINI, create_session, fake_gemini,
    session_with_recipes, test_app,
};
use serde_json::{Value, json};

#[tokio::test]
async fn test_add_and_remove_items() {
    let server = test_app(UNREACHABLE_GEMINI);
    let session_id = create_session(&server).await;
    let items = format!("/sessions/{session_id}/shopping-list/items");

    for name in ["soy sauce", "butter", " soy sauce "] {
        let response = server.post(&items).json(&json!({ "name": name })).await;
        assert_eq!(response.status_code(), 200);
    }

    let body: Value = server.get(&format!("/sessions/{session_id}")).await.json();
    assert_eq!(body["data"]["shopping_list"], json!(["soy sauce", "butter"]));

    let body: Value = server.delete(&format!("{items}/soy%20sauce")).await.json();
    assert_eq!(body["data"]["shopping_list"], json!(["butter"]));
}

#[tokio::test]
async fn test_blank_item_names_are_rejected() {
    let server = test_app(UNREACHABLE_GEMINI);
    let session_id = create_session(&server).await;
    let items = format!("/sessions/{session_id}/shopping-list/items");

    for name in ["", "   "] {
        let response = server.post(&items).json(&json!({ "name": name })).await;
        assert_eq!(response.status_code(), 400, "{name:?}");
    }
}

#[tokio::test]
async fn test_shopping_overlay_returns_to_previous_screen() {
    let server = test_app(&fake_gemini(TWO_RECIPES).await);
    let session_id = session_with_recipes(&server).await;
    server.post(&format!("/sessions/{session_id}/recipes/0/select")).await;

    let body: Value = server
        .post(&format!("/sessions/{session_id}/shopping-list/open"))
        .await
        .json();
    assert_eq!(body["data"]["stage"], "shopping");

    let body: Value = server
        .post(&format!("/sessions/{session_id}/shopping-list/close"))
        .await
        .json();
    assert_eq!(body["data"]["stage"], "cooking");
    assert_eq!(body["data"]["cooking"]["step_index"], 0);
}

#[tokio::test]
async fn test_closing_a_closed_list_conflicts() {
    let server = test_app(UNREACHABLE_GEMINI);
    let session_id = create_session(&server).await;

    let response = server.post(&format!("/sessions/{session_id}/shopping-list/close")).await;

    assert_eq!(response.status_code(), 409);
}
