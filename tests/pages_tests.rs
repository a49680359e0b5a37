#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Datelike, Utc};
use cognito_portfolio::entities::github::{fallback_profile, fallback_repositories};
use common::TestApp;
use serde_json::Value;

async fn get_page(app: &TestApp, uri: &str) -> (StatusCode, Value) {
    let service = init_app!(app);
    let resp = test::call_service(&service, test::TestRequest::get().uri(uri).to_request()).await;
    let status = resp.status();
    let body: Value = if status.is_success() {
        test::read_body_json(resp).await
    } else {
        Value::Null
    };
    (status, body)
}

#[actix_rt::test]
async fn home_shows_three_projects_and_all_testimonials() {
    let app = TestApp::new();
    app.add_projects(5).await;

    let (status, body) = get_page(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], "home");
    let ids: Vec<i64> = body["context"]["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(body["context"]["testimonials"], Value::Array(vec![]));
}

#[actix_rt::test]
async fn every_page_receives_globals() {
    let app = TestApp::new();

    for uri in ["/", "/about", "/projects", "/services", "/partners", "/contact"] {
        let (status, body) = get_page(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["context"]["current_year"], Utc::now().year(), "{}", uri);
        assert_eq!(body["context"]["site_name"], "Cognito Inc.", "{}", uri);
    }
}

#[actix_rt::test]
async fn projects_page_lists_everything() {
    let app = TestApp::new();
    app.add_projects(5).await;

    let (_, body) = get_page(&app, "/projects").await;

    assert_eq!(body["page"], "projects");
    assert_eq!(body["context"]["projects"].as_array().unwrap().len(), 5);
    assert_eq!(body["context"]["repositories"].as_array().unwrap().len(), 4);
}

#[actix_rt::test]
async fn project_detail_renders_known_project() {
    let app = TestApp::new();
    app.add_projects(2).await;

    let (status, body) = get_page(&app, "/project/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], "project_detail");
    assert_eq!(body["context"]["project"]["name"], "Project 2");
    assert_eq!(body["context"]["features"], serde_json::json!(["Fast", "Safe"]));
}

#[actix_rt::test]
async fn unknown_or_malformed_project_id_is_not_found() {
    let app = TestApp::new();
    app.add_projects(1).await;

    assert_eq!(get_page(&app, "/project/999").await.0, StatusCode::NOT_FOUND);
    assert_eq!(get_page(&app, "/project/abc").await.0, StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn about_page_falls_back_when_github_is_down() {
    let app = TestApp::new();

    let (status, body) = get_page(&app, "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["context"]["profile"],
        serde_json::to_value(fallback_profile()).unwrap()
    );
    assert_eq!(
        body["context"]["repositories"],
        serde_json::to_value(&fallback_repositories()[..4]).unwrap()
    );
}

#[actix_rt::test]
async fn health_reports_in_memory_store_as_reachable() {
    let app = TestApp::new();

    let (status, body) = get_page(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "OK");
}
