//! Tests for the remote read-only backend.
//!
//! Each test serves a fixed JSON document from a local Axum server bound
//! to an ephemeral port, so no external service is needed.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use phonebook_db::{PersonStore, RemoteConfig, RemoteStore, StoreError};
use phonebook_types::{Person, PersonId};
use serde_json::{Value, json};
use tokio::net::TcpListener;

fn people_fixture() -> Value {
    json!([
        {
            "id": "3d594650-3436-11e9-bc57-8b80ba54c431",
            "name": "Jorge",
            "phone": "342-4388-3989",
            "street": "False 123",
            "city": "Vera"
        },
        {
            "id": "3d599470-3436-11e9-bc57-8b80ba54c431",
            "name": "Youseff",
            "phone": "044-123456",
            "street": "Avenida Libertad 1",
            "city": "Barcelona"
        },
        {
            "id": 3,
            "name": "Itzi Mendez",
            "street": "Calle Frontend 9",
            "city": "Ibiza"
        }
    ])
}

/// Serve `router` on `127.0.0.1:0` and return its base address.
async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn store_with_fixture() -> RemoteStore {
    let body = people_fixture();
    let router = Router::new().route(
        "/persons",
        get(move || {
            let body = body.clone();
            async move { axum::Json(body) }
        }),
    );
    let base = spawn(router).await;
    RemoteStore::new(&RemoteConfig::new(&format!("{base}/persons"))).unwrap()
}

#[tokio::test]
async fn lists_and_counts_remote_people() {
    let store = store_with_fixture().await;

    let people = store.list_all().await.unwrap();
    assert_eq!(people.len(), 3);
    assert_eq!(store.count_all().await.unwrap(), 3);

    let itzi = people.iter().find(|p| p.name == "Itzi Mendez").unwrap();
    assert_eq!(itzi.id.as_str(), "3");
    assert!(itzi.phone.is_none());
}

#[tokio::test]
async fn finds_by_exact_name() {
    let store = store_with_fixture().await;

    let jorge: Option<Person> = store.find_by_name("Jorge").await.unwrap();
    assert_eq!(jorge.map(|p| p.city), Some("Vera".to_owned()));

    assert!(store.find_by_name("jorge").await.unwrap().is_none());
    assert!(store.find_by_name("Nobody Here").await.unwrap().is_none());
}

#[tokio::test]
async fn writes_and_id_lookups_are_unsupported() {
    let store = store_with_fixture().await;
    let id = PersonId::from("3d594650-3436-11e9-bc57-8b80ba54c431");

    let result = store.find_by_id(&id).await;
    assert!(matches!(result, Err(StoreError::Unsupported { operation: "find_by_id", .. })));

    let result = store.update_phone(&id, "000-0000-0000").await;
    assert!(matches!(result, Err(StoreError::Unsupported { operation: "update_phone", .. })));

    let person = Person {
        id: PersonId::generate(),
        name: "Someone New".to_owned(),
        phone: None,
        street: "Some Street 1".to_owned(),
        city: "Somewhere".to_owned(),
    };
    let result = store.insert(person).await;
    assert!(matches!(result, Err(StoreError::Unsupported { operation: "insert", .. })));

    // Reads still work after the rejected writes.
    assert_eq!(store.count_all().await.unwrap(), 3);
}

#[tokio::test]
async fn error_status_is_reported() {
    let router = Router::new().route(
        "/persons",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base = spawn(router).await;
    let store = RemoteStore::new(&RemoteConfig::new(&format!("{base}/persons"))).unwrap();

    let result = store.list_all().await;
    assert!(matches!(result, Err(StoreError::Remote(ref msg)) if msg.contains("500")));
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let router = Router::new().route("/persons", get(|| async { axum::Json(json!({"not": "a list"})) }));
    let base = spawn(router).await;
    let store = RemoteStore::new(&RemoteConfig::new(&format!("{base}/persons"))).unwrap();

    assert!(matches!(store.count_all().await, Err(StoreError::Http(_))));
}

#[tokio::test]
async fn unreachable_source_is_reported() {
    // Bind and immediately release a port so nothing is listening on it.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = RemoteConfig::new(&format!("http://{addr}/persons"))
        .with_timeout(Duration::from_millis(500));
    let store = RemoteStore::new(&config).unwrap();

    assert!(matches!(store.list_all().await, Err(StoreError::Http(_))));
}
