mod common;

use axum_test::TestServer;

async fn server_with_token() -> (TestServer, String) {
    let server = common::make_server();
    let token = common::login(&server, common::VOLUNTEER_EMAIL).await;
    (server, token)
}

fn ids(items: &serde_json::Value) -> Vec<&str> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap())
        .collect()
}

// ─── SEARCH ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_shelter_list_without_query_returns_all() {
    let (server, token) = server_with_token().await;

    let response = server
        .get("/api/shelters")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 5);
    assert_eq!(json["filter"], "all");
    assert_eq!(ids(&json["items"]), vec!["1", "2", "3", "4", "5"]);
    assert_eq!(json["filters"].as_array().unwrap().len(), 5);
    assert_eq!(json["filters"][0]["selected"], true);
}

#[tokio::test]
async fn test_shelter_search_matches_address() {
    let (server, token) = server_with_token().await;

    let json = server
        .get("/api/shelters")
        .add_query_param("q", "서울")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();

    assert_eq!(ids(&json["items"]), vec!["1", "2", "3"]);
}

#[tokio::test]
async fn test_shelter_search_no_match_is_empty() {
    let (server, token) = server_with_token().await;

    let response = server
        .get("/api/shelters")
        .add_query_param("q", "제주")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["count"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_shelter_filter_by_activity() {
    let (server, token) = server_with_token().await;

    let json = server
        .get("/api/shelters")
        .add_query_param("filter", "bath")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();

    assert_eq!(ids(&json["items"]), vec!["1", "3"]);
}

#[tokio::test]
async fn test_shelter_filter_today_combines_with_query() {
    let (server, token) = server_with_token().await;

    let json = server
        .get("/api/shelters")
        .add_query_param("q", "서울")
        .add_query_param("filter", "today")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();

    assert_eq!(ids(&json["items"]), vec!["1", "2"]);
}

#[tokio::test]
async fn test_shelter_unknown_filter_rejected() {
    let (server, token) = server_with_token().await;

    let response = server
        .get("/api/shelters")
        .add_query_param("filter", "swim")
        .authorization_bearer(&token)
        .await;

    response.assert_status_bad_request();
}

// ─── DETAIL ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_shelter_detail() {
    let (server, token) = server_with_token().await;

    let response = server
        .get("/api/shelters/1")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["shelter"]["name"], "강남 행복 보호소");
    assert_eq!(json["shelter"]["tags"].as_array().unwrap().len(), 3);
    assert_eq!(json["animals"].as_array().unwrap().len(), 4);
    assert_eq!(json["slot_count"], 4);

    let schedule = json["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0]["label"], "1/10 (토)");
    assert_eq!(ids(&schedule[0]["slots"]), vec!["s1", "s2", "s4"]);
    assert_eq!(ids(&schedule[1]["slots"]), vec!["s3"]);

    assert_eq!(ids(&json["posts"]), vec!["p1", "p2", "p4"]);
}

#[tokio::test]
async fn test_shelter_detail_not_found() {
    let (server, token) = server_with_token().await;

    let response = server
        .get("/api/shelters/999")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_shelter_without_slots_has_empty_schedule() {
    let (server, token) = server_with_token().await;

    let json = server
        .get("/api/shelters/4/schedule")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["shelter_id"], "4");
    assert!(json["groups"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_shelter_animals_lists_all() {
    let (server, token) = server_with_token().await;

    let json = server
        .get("/api/shelters/1/animals")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["count"], 5);
}

// ─── ANIMALS AND SLOTS ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_animal_detail_resolves_shelter() {
    let (server, token) = server_with_token().await;

    let json = server
        .get("/api/animals/a1")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["name"], "초코");
    assert_eq!(json["shelter"]["state"], "resolved");
    assert_eq!(json["shelter"]["name"], "강남 행복 보호소");
}

#[tokio::test]
async fn test_animal_without_shelter() {
    let (server, token) = server_with_token().await;

    let json = server
        .get("/api/animals/a10")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["shelter"]["state"], "none");
}

#[tokio::test]
async fn test_apply_open_slot() {
    let (server, token) = server_with_token().await;

    let response = server
        .post("/api/slots/s1/apply")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "봉사 신청이 완료되었습니다!");
    assert_eq!(json["target_id"], "s1");

    let slot = server
        .get("/api/slots/s1")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();
    assert_eq!(slot["current_applicants"], 3);
}

#[tokio::test]
async fn test_apply_full_slot_conflict() {
    let (server, token) = server_with_token().await;

    let response = server
        .post("/api/slots/s2/apply")
        .authorization_bearer(&token)
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

// ─── FAVORITES ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_toggle_favorite_round_trip() {
    let (server, token) = server_with_token().await;

    let first = server
        .post("/api/shelters/2/favorite")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();
    assert_eq!(first["is_favorite"], true);

    let detail = server
        .get("/api/shelters/2")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();
    assert_eq!(detail["shelter"]["is_favorite"], true);

    let second = server
        .post("/api/shelters/2/favorite")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();
    assert_eq!(second["is_favorite"], false);
}

#[tokio::test]
async fn test_favorites_are_per_session() {
    let server = common::make_server();
    let first = common::login(&server, common::VOLUNTEER_EMAIL).await;
    let second = common::login(&server, common::VOLUNTEER_EMAIL).await;

    server
        .post("/api/shelters/1/favorite")
        .authorization_bearer(&first)
        .await
        .assert_status_ok();

    let json = server
        .get("/api/shelters/1")
        .authorization_bearer(&second)
        .await
        .json::<serde_json::Value>();
    assert_eq!(json["shelter"]["is_favorite"], true);
}

#[tokio::test]
async fn test_toggle_favorite_unknown_shelter() {
    let (server, token) = server_with_token().await;

    let response = server
        .post("/api/shelters/999/favorite")
        .authorization_bearer(&token)
        .await;

    response.assert_status_not_found();
}
