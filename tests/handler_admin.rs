mod common;

use axum::http::StatusCode;
use axum_test::TestServer;

async fn admin_server() -> (TestServer, String) {
    let server = common::make_server();
    let token = common::login(&server, common::ADMIN_EMAIL).await;
    (server, token)
}

#[tokio::test]
async fn test_dashboard_overview() {
    let (server, token) = admin_server().await;

    let response = server.get("/api/admin").authorization_bearer(&token).await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["tab"], "applications");
    assert_eq!(json["overview"]["shelter_id"], "1");
    assert_eq!(json["overview"]["pending_applications"], 3);
    assert_eq!(json["overview"]["slots"], 4);
    assert_eq!(json["overview"]["animals_in_care"], 4);
    assert_eq!(json["overview"]["posts"], 3);

    let ids: Vec<&str> = json["applications"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["ap1", "ap4", "ap5"]);
}

#[tokio::test]
async fn test_dashboard_schedule_tab() {
    let (server, token) = admin_server().await;

    let json = server
        .get("/api/admin")
        .add_query_param("tab", "schedule")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();

    let groups = json["schedule"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["date"], "2026-01-10");
}

#[tokio::test]
async fn test_dashboard_forbidden_for_volunteer() {
    let server = common::make_server();
    let token = common::login(&server, common::VOLUNTEER_EMAIL).await;

    let response = server.get("/api/admin").authorization_bearer(&token).await;

    response.assert_status(StatusCode::FORBIDDEN);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "forbidden");
}

#[tokio::test]
async fn test_approve_pending_application() {
    let (server, token) = admin_server().await;

    let json = server
        .post("/api/admin/applications/ap4/approve")
        .authorization_bearer(&token)
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["message"], "신청을 승인했습니다");
}

#[tokio::test]
async fn test_reject_pending_application() {
    let (server, token) = admin_server().await;

    let response = server
        .post("/api/admin/applications/ap5/reject")
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "신청을 거절했습니다");
}

#[tokio::test]
async fn test_approve_other_shelter_application_not_found() {
    let (server, token) = admin_server().await;

    server
        .post("/api/admin/applications/ap2/approve")
        .authorization_bearer(&token)
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_approve_forbidden_for_volunteer() {
    let server = common::make_server();
    let token = common::login(&server, common::VOLUNTEER_EMAIL).await;

    server
        .post("/api/admin/applications/ap1/approve")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::FORBIDDEN);
}
