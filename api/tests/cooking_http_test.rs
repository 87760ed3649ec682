mod helpers;

use axum_test::TestServer;
use helpers::{
    TWO_RECIPES, UNREACHABLE_GEMINI, create_session, fake_gemini,
    session_with_recipes, test_app,
};
use serde_json::Value;

async fn post(server: &TestServer, uri: String) -> (u16, Value) {
    let response = server.post(&uri).await;
    (response.status_code().as_u16(), response.json())
}

#[tokio::test]
async fn test_step_through_a_recipe() {
    let server = test_app(&fake_gemini(TWO_RECIPES).await);
    let session_id = session_with_recipes(&server).await;

    let (status, body) = post(&server, format!("/sessions/{session_id}/recipes/0/select")).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["stage"], "cooking");
    assert_eq!(body["data"]["selected_recipe"], 0);
    assert_eq!(body["data"]["cooking"]["step_index"], 0);
    assert_eq!(body["data"]["cooking"]["step_count"], 3);
    assert_eq!(body["data"]["cooking"]["current_step"], "Chop the vegetables.");

    let (_, body) = post(&server, format!("/sessions/{session_id}/cooking/previous")).await;
    assert_eq!(body["data"]["cooking"]["step_index"], 0);

    for _ in 0..4 {
        post(&server, format!("/sessions/{session_id}/cooking/next")).await;
    }
    let session: Value = server.get(&format!("/sessions/{session_id}")).await.json();
    assert_eq!(session["data"]["cooking"]["step_index"], 2);
    assert_eq!(session["data"]["cooking"]["current_step"], "Season and serve.");

    let (_, body) = post(&server, format!("/sessions/{session_id}/cooking/exit")).await;
    assert_eq!(body["data"]["stage"], "recipe_list");
    assert!(body["data"]["cooking"].is_null());
    assert_eq!(body["data"]["recipes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_read_aloud_stops_on_step_change() {
    let server = test_app(&fake_gemini(TWO_RECIPES).await);
    let session_id = session_with_recipes(&server).await;
    post(&server, format!("/sessions/{session_id}/recipes/1/select")).await;

    let (status, body) = post(&server, format!("/sessions/{session_id}/cooking/read-aloud")).await;
    assert_eq!(status, 200);
    assert_eq!(body["data"]["cooking"]["speaking"], true);
    assert_eq!(body["data"]["cooking"]["current_step"], "Whisk the eggs.");

    let (_, body) = post(&server, format!("/sessions/{session_id}/cooking/next")).await;
    assert_eq!(body["data"]["cooking"]["speaking"], false);
    assert_eq!(body["data"]["cooking"]["current_step"], "Fold in the cheese.");

    post(&server, format!("/sessions/{session_id}/cooking/read-aloud")).await;
    let session: Value = server.get(&format!("/sessions/{session_id}")).await.json();
    assert_eq!(session["data"]["cooking"]["speaking"], true);

    let (_, body) = post(&server, format!("/sessions/{session_id}/cooking/stop-reading")).await;
    assert_eq!(body["data"]["cooking"]["speaking"], false);
    assert_eq!(body["data"]["cooking"]["step_index"], 1);
}

#[tokio::test]
async fn test_select_missing_recipe_is_not_found() {
    let server = test_app(&fake_gemini(TWO_RECIPES).await);
    let session_id = session_with_recipes(&server).await;

    let (status, _) = post(&server, format!("/sessions/{session_id}/recipes/9/select")).await;

    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_cooking_controls_outside_cooking_conflict() {
    let server = test_app(UNREACHABLE_GEMINI);
    let session_id = create_session(&server).await;

    for action in ["next", "previous", "read-aloud", "stop-reading", "exit"] {
        let (status, body) = post(&server, format!("/sessions/{session_id}/cooking/{action}")).await;
        assert_eq!(status, 409, "{action}");
        assert_eq!(body["code"], "E_CONFLICT");
    }
}
