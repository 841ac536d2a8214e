mod support;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;
use serde_json::json;

use backend_interfaces_http::build_game_router;
use support::{game_state, send, MemoryGames, SwitchableStorage};

fn router() -> (Router, Arc<MemoryGames>) {
    let repo = Arc::new(MemoryGames::default());
    let router = build_game_router(game_state(repo.clone(), Arc::new(SwitchableStorage::default())));
    (router, repo)
}

fn hades() -> serde_json::Value {
    json!({"title": "Hades", "genre": "Roguelike", "platform": "PC"})
}

#[tokio::test]
async fn created_game_appears_once_in_listing() {
    let (router, _) = router();
    let created = send(&router, "POST", "/games/", Some(hades())).await;
    assert_eq!(created.status, StatusCode::CREATED);
    let game = created.json();
    let id = game["id"].as_i64().expect("id");
    assert!(id > 0);
    assert_eq!(game["title"], "Hades");

    let listed = send(&router, "GET", "/games/", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let matching: Vec<_> = listed
        .json()
        .as_array()
        .expect("array")
        .iter()
        .filter(|item| item["title"] == "Hades")
        .cloned()
        .collect();
    assert_eq!(matching, vec![game]);
}

#[tokio::test]
async fn collection_answers_without_trailing_slash() {
    let (router, _) = router();
    assert_eq!(send(&router, "POST", "/games", Some(hades())).await.status, StatusCode::CREATED);
    let listed = send(&router, "GET", "/games", None).await;
    assert_eq!(listed.json().as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn update_replaces_every_field() {
    let (router, _) = router();
    let id = send(&router, "POST", "/games/", Some(hades())).await.json()["id"]
        .as_i64()
        .expect("id");

    let updated = send(
        &router,
        "PUT",
        &format!("/games/{}", id),
        Some(json!({"title": "Hades", "genre": "Action", "platform": "PC"})),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(
        updated.json(),
        json!({"id": id, "title": "Hades", "genre": "Action", "platform": "PC"})
    );

    let fetched = send(&router, "GET", &format!("/games/{}", id), None).await;
    assert_eq!(fetched.json(), updated.json());

    let genres: Vec<_> = send(&router, "GET", "/games/", None)
        .await
        .json()
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["genre"].clone())
        .collect();
    assert_eq!(genres, vec![json!("Action")]);
}

#[tokio::test]
async fn unknown_ids_are_404() {
    let (router, _) = router();
    let get = send(&router, "GET", "/games/999", None).await;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
    assert_eq!(get.json(), json!({"error": "Game not found"}));

    let put = send(&router, "PUT", "/games/999", Some(hades())).await;
    assert_eq!(put.status, StatusCode::NOT_FOUND);

    let delete = send(&router, "DELETE", "/games/999", None).await;
    assert_eq!(delete.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_delete_is_404() {
    let (router, _) = router();
    let id = send(&router, "POST", "/games/", Some(hades())).await.json()["id"]
        .as_i64()
        .expect("id");
    let uri = format!("/games/{}", id);

    let first = send(&router, "DELETE", &uri, None).await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.json()["title"], "Hades");

    let second = send(&router, "DELETE", &uri, None).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_payload_lists_every_field() {
    let (router, repo) = router();
    let response = send(&router, "POST", "/games/", Some(json!({"title": 42}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["error"], "invalid payload");
    let fields: Vec<_> = body["fields"]
        .as_array()
        .expect("fields")
        .iter()
        .map(|item| item["field"].as_str().unwrap_or_default().to_string())
        .collect();
    assert!(fields.contains(&"title".to_string()));
    assert!(fields.contains(&"genre".to_string()));
    assert!(fields.contains(&"platform".to_string()));
    assert_eq!(repo.count(), 0);
}

#[tokio::test]
async fn non_numeric_id_is_400() {
    let (router, _) = router();
    let response = send(&router, "GET", "/games/abc", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["fields"][0]["field"], "id");
}

#[tokio::test]
async fn storage_failure_is_opaque_500() {
    let (router, repo) = router();
    repo.broken.store(true, Ordering::SeqCst);
    let response = send(&router, "GET", "/games/", None).await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json(), json!({"error": "internal server error"}));
    assert!(!response.text.contains("MySQL"));
}
