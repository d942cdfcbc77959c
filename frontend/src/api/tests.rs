use super::*;
use crate::api::test_support::mock::*;
use crate::state::session::Session;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;

fn travel_request_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "_id": id,
        "user_id": { "_id": "u1", "first_name": "Ada", "last_name": "L", "email": "ada@x.com" },
        "destination": "Lisbon",
        "purpose": "Conference",
        "status": status,
        "createdAt": "2025-01-02T10:00:00.000Z",
        "updatedAt": "2025-01-02T10:00:00.000Z"
    })
}

fn approved_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employeeName": "Ada L",
        "employeeEmail": "ada@x.com",
        "destination": "Oslo",
        "purpose": "Workshop",
        "status": "approved",
        "createdAt": "2025-01-02T10:00:00Z",
        "approvedAt": "2025-01-03T10:00:00Z",
        "approvedBy": "boss@x.com"
    })
}

fn signed_in_client(server: &MockServer, token: &str) -> ApiClient {
    let client = ApiClient::new_with_base_url(server.url("/api"));
    client.session_handle().replace(Some(Session {
        user: User {
            id: "u1".into(),
            email: "ada@x.com".into(),
            first_name: "Ada".into(),
            last_name: "L".into(),
            role: Role::Admin,
            team: "R&D".into(),
        },
        token: token.into(),
    }));
    client
}

#[tokio::test]
async fn api_client_travel_request_endpoints_succeed() {
    let server = MockServer::start_async().await;

    server.mock(|when, then| {
        when.method(GET).path("/api/travel-requests/my");
        then.status(200)
            .json_body(json!([travel_request_json("r1", "pending")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/travel-requests/my/r1");
        then.status(200)
            .json_body(travel_request_json("r1", "pending"));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/travel-requests");
        then.status(201)
            .json_body(travel_request_json("r2", "pending"));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/travel-requests");
        then.status(200).json_body(json!([
            travel_request_json("r1", "pending"),
            travel_request_json("r2", "rejected")
        ]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/travel-requests/approved");
        then.status(200).json_body(json!([approved_json("r3")]));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/travel-requests/r1/approve");
        then.status(200).body("");
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/travel-requests/r2");
        then.status(200).json_body(json!({ "message": "deleted" }));
    });

    let client = signed_in_client(&server, "T1");

    let mine = client.my_requests().await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].requester_email().as_deref(), Some("ada@x.com"));

    let detail = client.my_request("r1").await.unwrap();
    assert_eq!(detail.destination, "Lisbon");

    let created = client
        .create_request(&CreateTravelRequest {
            destination: "Lisbon".into(),
            purpose: "Conference".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, "r2");

    let all = client.all_requests().await.unwrap();
    assert_eq!(all[1].status, TravelStatus::Rejected);

    let approved = client.approved_requests().await.unwrap();
    assert_eq!(approved[0].requester_name().as_deref(), Some("Ada L"));
    assert_eq!(approved[0].approved_by.as_deref(), Some("boss@x.com"));

    assert!(client.approve_request("r1").await.unwrap().is_null());
    assert_eq!(
        client.delete_request("r2").await.unwrap()["message"],
        "deleted"
    );

    let received = server.received();
    assert_eq!(received.len(), 7);
    assert!(received
        .iter()
        .all(|r| r.authorization.as_deref() == Some("Bearer T1")));
    let create = received.iter().find(|r| r.method == POST).unwrap();
    assert_eq!(
        create.body.as_ref().unwrap(),
        &json!({ "destination": "Lisbon", "purpose": "Conference" })
    );
    assert_eq!(create.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn api_client_without_token_performs_no_io() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/travel-requests/my");
        then.status(200).json_body(json!([]));
    });
    let client = ApiClient::new_with_base_url(server.url("/api"));

    assert_eq!(
        client.my_requests().await.unwrap_err(),
        ApiError::Unauthenticated
    );
    assert_eq!(
        client.approve_request("r1").await.unwrap_err(),
        ApiError::Unauthenticated
    );
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn api_client_with_unsendable_token_performs_no_io() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/travel-requests/my");
        then.status(200).json_body(json!([]));
    });
    let client = signed_in_client(&server, "T1\r\n");

    assert_eq!(
        client.my_requests().await.unwrap_err(),
        ApiError::Unauthenticated
    );
    assert_eq!(server.hits(), 0);
}

#[tokio::test]
async fn api_client_translates_failure_status_into_server_text() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/api/travel-requests/r1/approve");
        then.status(403).body("Admins only");
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/api/travel-requests/r1");
        then.status(500).body("");
    });
    let client = signed_in_client(&server, "T1");

    let err = client.approve_request("r1").await.unwrap_err();
    assert_eq!(
        err,
        ApiError::RequestFailed {
            status: 403,
            message: "Admins only".into()
        }
    );
    let err = client.delete_request("r1").await.unwrap_err();
    assert_eq!(err.to_string(), "API request failed");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn api_client_call_merges_caller_headers() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/travel-requests/my");
        then.status(200).json_body(json!([]));
    });
    let client = signed_in_client(&server, "T1");

    let options = RequestOptions::get()
        .with_header(AUTHORIZATION, HeaderValue::from_static("Bearer stale"))
        .with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    let value: serde_json::Value = client
        .call("/travel-requests/my", options)
        .await
        .unwrap();
    assert_eq!(value, json!([]));

    let sent = &server.received()[0];
    assert_eq!(sent.authorization.as_deref(), Some("Bearer T1"));
    assert_eq!(sent.content_type.as_deref(), Some("text/plain"));
}

#[tokio::test]
async fn api_client_encodes_identifiers_as_one_segment() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/api/travel-requests/a%2Fb/approve");
        then.status(204).body("");
    });
    let client = signed_in_client(&server, "T1");

    assert!(client.approve_request("a/b").await.unwrap().is_null());
}

#[tokio::test]
async fn api_client_reports_undecodable_success_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/travel-requests/my");
        then.status(200).body("<html>oops</html>");
    });
    let client = signed_in_client(&server, "T1");

    assert!(matches!(
        client.my_requests().await.unwrap_err(),
        ApiError::Parse(_)
    ));
}
