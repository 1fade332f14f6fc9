//! End-to-end tests: router, services, and the real HTTP client against
//! wiremock servers standing in for the provider and the contact endpoint.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use folio_client::{Endpoints, FolioClient};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::test_support::{get, send};
use crate::state::AppState;

fn state_for(provider: &MockServer, contact: &MockServer) -> AppState {
    let client = Arc::new(
        FolioClient::new(Endpoints {
            github_api_url: provider.uri(),
            github_user: "octocat".to_string(),
            contact_endpoint: format!("{}/contact", contact.uri()),
        })
        .unwrap(),
    );
    AppState::new("Octo", client.clone(), client)
}

#[tokio::test]
async fn projects_page_renders_provider_record() {
    let provider = MockServer::start().await;
    let contact = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "id": 1,
            "name": "foo",
            "description": null,
            "language": "Cpp",
            "stargazers_count": 3,
            "forks_count": 1,
            "html_url": "https://x/foo"
        }])))
        .expect(1)
        .mount(&provider)
        .await;

    let (status, body) = send(state_for(&provider, &contact), get("/projects")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"project-card\"").count(), 1);
    assert!(body.contains("<h3>foo</h3>"));
    assert!(body.contains(">C++</span>"));
    assert!(body.contains("3 ⭐"));
    assert!(body.contains("1 🍴"));
    assert!(body.contains("No description available"));
}

#[tokio::test]
async fn projects_page_is_empty_when_provider_fails() {
    let provider = MockServer::start().await;
    let contact = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&provider)
        .await;

    let (status, body) = send(state_for(&provider, &contact), get("/projects")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("project-card"));
    assert!(body.contains("My Projects"));
}

#[tokio::test]
async fn projects_page_is_empty_on_malformed_body() {
    let provider = MockServer::start().await;
    let contact = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&provider)
        .await;

    let (status, body) = send(state_for(&provider, &contact), get("/projects")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("project-card"));
}

#[tokio::test]
async fn invalid_email_makes_no_outbound_call() {
    let provider = MockServer::start().await;
    let contact = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&contact)
        .await;

    let req = Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=A&email=bad&message=hi"))
        .unwrap();

    let (status, body) = send(state_for(&provider, &contact), req).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Invalid email format"));
}

#[tokio::test]
async fn valid_submission_posts_once() {
    let provider = MockServer::start().await;
    let contact = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contact"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&contact)
        .await;

    let req = Request::builder()
        .method("POST")
        .uri("/contact")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("name=A&email=a%40b.co&message=hi"))
        .unwrap();

    let (_, body) = send(state_for(&provider, &contact), req).await;

    assert!(body.contains("Message sent successfully!"));
}
