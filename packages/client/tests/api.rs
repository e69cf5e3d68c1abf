//! HTTP-level tests for the Corkboard API client

use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use corkboard_client::{ApiClient, ClientConfig, ClientError, CredentialStore};

async fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig {
        api_url: server.uri(),
    };
    ApiClient::new(config, CredentialStore::in_memory()).unwrap()
}

async fn authenticated_client_for(server: &MockServer, token: &str) -> ApiClient {
    let config = ClientConfig {
        api_url: server.uri(),
    };
    let mut store = CredentialStore::in_memory();
    store.set(token.to_string()).await.unwrap();
    ApiClient::new(config, store).unwrap()
}

#[tokio::test]
async fn login_stores_token_on_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_string_contains("username=kim%40example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token-abc",
            "token_type": "bearer"
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    let login = client.login("kim@example.com", "hunter2").await.unwrap();

    assert_eq!(login.access_token, "token-abc");
    assert!(client.is_authenticated());
    assert_eq!(client.credentials().token(), Some("token-abc"));
}

#[tokio::test]
async fn failed_login_leaves_token_unset() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Incorrect email or password"
        })))
        .mount(&server)
        .await;

    let mut client = client_for(&server).await;
    let err = client.login("kim@example.com", "wrong").await.unwrap_err();

    assert!(err.is_auth_error());
    assert!(err.to_string().contains("Incorrect email or password"));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn authenticated_requests_carry_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header("authorization", "Bearer token-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client_for(&server, "token-abc").await;
    let projects = client.list_projects().await.unwrap();
    assert!(projects.is_empty());
}

#[tokio::test]
async fn unauthenticated_request_surfaces_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "Not authenticated"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ClientError::Authentication(_)));
}

#[tokio::test]
async fn error_detail_is_extracted_from_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/p-missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detail": "Project not found or you don't have access"
        })))
        .mount(&server)
        .await;

    let client = authenticated_client_for(&server, "token-abc").await;
    let err = client.get_project("p-missing").await.unwrap_err();

    match err {
        ClientError::NotFound(detail) => {
            assert_eq!(detail, "Project not found or you don't have access")
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/columns"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = authenticated_client_for(&server, "token-abc").await;
    let err = client
        .create_column(&corkboard_client::ColumnCreate {
            board_id: "b1".to_string(),
            name: "To Do".to_string(),
            position: 0,
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("An error occurred"));
}

#[tokio::test]
async fn create_project_returns_the_new_project() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(body_string_contains("\"name\":\"Launch\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "p1",
            "name": "Launch",
            "description": null,
            "created_at": "2024-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/boards/project/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = authenticated_client_for(&server, "token-abc").await;
    let project = client
        .create_project(&corkboard_client::ProjectInput {
            name: "Launch".to_string(),
            description: None,
        })
        .await
        .unwrap();

    assert_eq!(project.id, "p1");
    assert!(project.description.is_none());

    // A fresh project has no boards yet; bootstrap decides from this
    let boards = client.list_boards(&project.id).await.unwrap();
    assert!(boards.is_empty());
}

#[tokio::test]
async fn comments_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/comments"))
        .and(body_string_contains("\"task_id\":\"t1\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "cm1",
            "task_id": "t1",
            "content": "Looks good",
            "user_id": "u1",
            "created_at": "2024-01-02T08:30:00Z"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/comments/task/t1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": "cm1",
            "task_id": "t1",
            "content": "Looks good",
            "user_id": "u1",
            "created_at": "2024-01-02T08:30:00Z"
        }])))
        .mount(&server)
        .await;

    let client = authenticated_client_for(&server, "token-abc").await;
    let comment = client
        .create_comment(&corkboard_client::CommentCreate {
            task_id: "t1".to_string(),
            content: "Looks good".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(comment.id, "cm1");

    let comments = client.list_comments("t1").await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].content, "Looks good");
}

#[tokio::test]
async fn delete_task_accepts_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/tasks/t1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = authenticated_client_for(&server, "token-abc").await;
    assert!(client.delete_task("t1").await.is_ok());
}

#[tokio::test]
async fn move_task_sends_destination_as_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tasks/t1/move"))
        .and(query_param("new_column_id", "col-b"))
        .and(query_param("new_position", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "t1",
            "column_id": "col-b",
            "title": "Write spec",
            "description": null,
            "position": 1,
            "created_at": "2024-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = authenticated_client_for(&server, "token-abc").await;
    let task = client.move_task("t1", "col-b", 1).await.unwrap();

    assert_eq!(task.column_id, "col-b");
    assert_eq!(task.position, 1);
}

#[tokio::test]
async fn create_task_posts_payload_and_parses_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/tasks"))
        .and(body_string_contains("\"title\":\"Write spec\""))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "t1",
            "column_id": "col-a",
            "title": "Write spec",
            "description": null,
            "position": 0,
            "created_at": "2024-01-01T00:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = authenticated_client_for(&server, "token-abc").await;
    let task = client
        .create_task(&corkboard_client::TaskCreate::new("Write spec", "col-a", 0))
        .await
        .unwrap();

    assert_eq!(task.position, 0);
    assert!(task.priority.is_none());
}
