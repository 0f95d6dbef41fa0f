//! Integration tests for the native course client using wiremock mock server
#![cfg(feature = "no-wasm")]

use course_form_core::app::request::{add_course, delete_course};
use course_form_core::client::request::NoWasmClient;
use course_form_core::config::{ClientConfig, FormFields};
use course_form_core::error::ErrorKind;
use course_form_core::interface::{CourseApi, HttpClient};
use course_form_core::model::dtos::CourseKey;
use course_form_core::model::structs::CourseForm;

use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn client_for(server: &MockServer) -> NoWasmClient {
    let config = ClientConfig {
        api_url: server.uri(),
        teacher_id: 1,
        ..Default::default()
    };
    NoWasmClient::new(config).await.unwrap()
}

fn course_list() -> serde_json::Value {
    json!([
        {
            "teacher_id": 1,
            "id": 1,
            "name": "Algebra",
            "time": "2024-03-05T10:20:30",
            "description": "Intro to algebra",
            "format": null,
            "structure": null,
            "duration": null,
            "price": null,
            "language": "English",
            "level": "Beginner"
        }
    ])
}

#[tokio::test]
async fn test_add_course_posts_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/courses/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "teacher_id": 1,
            "name": "Algebra",
            "description": "Intro to algebra"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9, "name": "Algebra"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let payload = client.add_course("Algebra", "Intro to algebra").await.unwrap();

    assert_eq!(payload["id"], 9);
}

#[tokio::test]
async fn test_add_course_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/courses/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.add_course("Algebra", "").await.unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::CourseError(msg) if msg.contains("database down")));
}

#[tokio::test]
async fn test_error_field_in_body_is_a_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/courses/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": "duplicate"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.add_course("Algebra", "").await.unwrap_err();

    assert!(err.to_string().contains("duplicate"));
}

#[tokio::test]
async fn test_get_courses_for_teacher() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/courses/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(course_list()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let courses = client.get_courses_for_teacher(1).await.unwrap();

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].name, "Algebra");
    assert_eq!(courses[0].date_label(), "2024-03-05");
    assert_eq!(courses[0].language.as_deref(), Some("English"));
}

#[tokio::test]
async fn test_delete_course_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/courses/1/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("Deleted 1 record")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let key = CourseKey {
        teacher_id: 1,
        course_id: 7,
    };
    client.delete_course(key).await.unwrap();
}

#[tokio::test]
async fn test_form_submit_reloads_course_list_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/courses/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/courses/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(course_list()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let form = CourseForm {
        name: "Algebra".to_string(),
        description: "Intro to algebra".to_string(),
    };

    add_course(client, FormFields::default(), form).await.unwrap();
}

#[tokio::test]
async fn test_form_submit_failure_skips_reload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/courses/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/courses/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(course_list()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let form = CourseForm {
        name: "Algebra".to_string(),
        description: String::new(),
    };

    assert!(add_course(client, FormFields::default(), form).await.is_err());
}

#[tokio::test]
async fn test_confirmed_delete_reloads() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/courses/1/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("Deleted 1 record")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/courses/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;

    assert!(delete_course(client, 1, true).await.unwrap());
}
