//! Resource CRUD and push registration against a mock backend.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use soj_client::{ApiClient, ApiError, ListQuery};
use soj_core::ResourceKind;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(2);

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), TIMEOUT).expect("client")
}

#[tokio::test]
async fn list_condos_parses_typed_entities() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/condos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "c_1",
                "title": "Studio downtown",
                "monthly_rent": 900,
                "image_urls": []
            },
            {
                "id": "c_2",
                "title": "Family condo",
                "bedrooms": 3,
                "image_urls": ["https://img.example/c2.jpg"]
            }
        ])))
        .mount(&server)
        .await;

    let condos = client(&server)
        .condos()
        .list(&ListQuery::default())
        .await
        .expect("list");
    assert_eq!(condos.len(), 2);
    assert_eq!(condos[0].id, "c_1");
    assert_eq!(condos[0].monthly_rent, Some(900));
    assert_eq!(condos[1].bedrooms, Some(3));
}

#[tokio::test]
async fn list_sends_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hotels"))
        .and(query_param("limit", "5"))
        .and(query_param("search", "beach front"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let query = ListQuery {
        limit: Some(5),
        search: Some("beach front".into()),
        ..Default::default()
    };
    let hotels = client(&server).hotels().list(&query).await.expect("list");
    assert!(hotels.is_empty());
}

#[tokio::test]
async fn reads_work_without_a_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/docs/d_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "d_1",
            "title": "Visa extension checklist"
        })))
        .mount(&server)
        .await;

    let doc = client(&server).docs().get("d_1").await.expect("get");
    assert_eq!(doc.title, "Visa extension checklist");

    // The anonymous request must not have carried an Authorization header.
    let requests = server.received_requests().await.expect("requests");
    assert!(
        requests
            .iter()
            .all(|r: &Request| !r.headers.contains_key("authorization"))
    );
}

#[tokio::test]
async fn bearer_token_is_attached_when_present() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/general"))
        .and(header("Authorization", "Bearer tok_admin"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "g_9",
            "title": "Power outage notice",
            "image_urls": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server).with_token("tok_admin");
    let created = api
        .general_posts()
        .create(&json!({"title": "Power outage notice"}))
        .await
        .expect("create");
    assert_eq!(created.id, "g_9");
}

#[tokio::test]
async fn update_and_patch_hit_item_urls() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/courses/k_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "k_1",
            "title": "Khmer for beginners",
            "fee": 120
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/courses/k_1"))
        .and(body_json(json!({"fee": 90})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "k_1",
            "title": "Khmer for beginners",
            "fee": 90
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client(&server).with_token("tok_admin");
    let updated = api
        .courses()
        .update("k_1", &json!({"title": "Khmer for beginners", "fee": 120}))
        .await
        .expect("update");
    assert_eq!(updated.fee, Some(120));

    let patched = api.courses().patch("k_1", &json!({"fee": 90})).await.expect("patch");
    assert_eq!(patched.fee, Some(90));
}

#[tokio::test]
async fn delete_succeeds_on_204() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/restaurants/r_3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .with_token("tok_admin")
        .restaurants()
        .delete("r_3")
        .await
        .expect("delete");
}

#[tokio::test]
async fn item_ids_are_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/docs/a%20b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "a b",
            "title": "spaced id"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let doc = client(&server).docs().get("a b").await.expect("get");
    assert_eq!(doc.id, "a b");
}

#[tokio::test]
async fn unauthorized_is_surfaced_distinctly() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/condos/c_1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client(&server)
        .condos()
        .delete("c_1")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
}

#[tokio::test]
async fn validation_failure_carries_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/travel-posts"))
        .respond_with(ResponseTemplate::new(422).set_body_string("title is required"))
        .mount(&server)
        .await;

    let err = client(&server)
        .travel_posts()
        .create(&json!({}))
        .await
        .unwrap_err();
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "title is required");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn schemaless_kind_access_round_trips() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/travel-posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "t_1", "title": "Hanoi weekend", "extra_field": true}
        ])))
        .mount(&server)
        .await;

    let items = client(&server)
        .kind(ResourceKind::TravelPosts)
        .list(&ListQuery::default())
        .await
        .expect("list");
    assert_eq!(items[0]["extra_field"], json!(true));
}

#[tokio::test]
async fn push_register_sends_camel_case_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/noti/push/register"))
        .and(body_json(json!({
            "token": "expo_tok",
            "platform": "android",
            "deviceId": "dev-1"
        })))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .with_token("tok_user")
        .register_push("expo_tok", "android", "dev-1")
        .await
        .expect("register");
}

#[tokio::test]
async fn push_unregister_sends_token_and_device() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/noti/push/unregister"))
        .and(body_json(json!({"token": "expo_tok", "deviceId": "dev-1"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .unregister_push("expo_tok", "dev-1")
        .await
        .expect("unregister");
}
