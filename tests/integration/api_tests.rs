//! API tests against a running server

use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:8080/api/v1";

fn new_book(reg_num: &str) -> Value {
    json!({
        "title": "Abc",
        "author": "X",
        "summary": "Lorem Ipsum",
        "genre": "Action",
        "year": 2019,
        "reg_num": reg_num,
        "publisher": "saiudhiau",
        "language": "Hebrew",
        "image_uri": "jncj.ajcbiauadnc.com"
    })
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_list_books() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books?genre=Action&offset=0&size=10", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_create_duplicate_and_delete_book() {
    let client = Client::new();
    let reg_num = format!("ISB{}", &Uuid::new_v4().simple().to_string()[..8]);

    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&new_book(&reg_num))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let book_id = body["id"].as_str().expect("No book ID").to_string();

    // Same registration number again
    let response = client
        .post(format!("{}/books", BASE_URL))
        .json(&new_book(&reg_num))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    let response = client
        .delete(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_get_filters() {
    let client = Client::new();

    let response = client
        .get(format!("{}/books/filters/genre", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let response = client
        .get(format!("{}/books/filters/reg_num", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_unknown_user() {
    let client = Client::new();

    let response = client
        .get(format!("{}/users/{}@example.com", BASE_URL, Uuid::new_v4().simple()))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
