use quill::client::{AuthService, ClientError, HttpAuthService, LoginRequest, SignupRequest};
use quill::client::dispatch;
use quill::core::action::{Action, Effect, Key, update};
use quill::core::error::ErrorInfo;
use quill::core::state::{App, Page, Viewport};
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn login_request() -> LoginRequest {
    LoginRequest {
        email: "alice@example.com".to_string(),
        password: "test123".to_string(),
    }
}

fn signup_request() -> SignupRequest {
    SignupRequest {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "test123".to_string(),
    }
}

fn session_body() -> serde_json::Value {
    json!({ "id": "u-1", "email": "alice@example.com", "username": "alice" })
}

/// Feeds keystrokes through `update` the way the event loop would.
fn type_keys(mut app: App, keys: impl IntoIterator<Item = Key>) -> (App, Effect) {
    let mut effect = Effect::None;
    for key in keys {
        (app, effect) = update(app, Action::KeyInput(key));
    }
    (app, effect)
}

fn chars(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).collect()
}

// ============================================================================
// HttpAuthService
// ============================================================================

#[tokio::test]
async fn test_login_success_returns_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "email": "alice@example.com", "password": "test123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpAuthService::new(mock_server.uri()).unwrap();
    let session = service.login(&login_request()).await.unwrap();

    assert_eq!(session.id, "u-1");
    assert_eq!(session.username, "alice");
    assert_eq!(session.email, "alice@example.com");
}

#[tokio::test]
async fn test_signup_success_requires_created() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/signup"))
        .and(body_json(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "test123"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(session_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpAuthService::new(mock_server.uri()).unwrap();
    let session = service.signup(&signup_request()).await.unwrap();

    assert_eq!(session.username, "alice");
}

#[tokio::test]
async fn test_login_with_created_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(201).set_body_json(session_body()))
        .mount(&mock_server)
        .await;

    let service = HttpAuthService::new(mock_server.uri()).unwrap();
    let result = service.login(&login_request()).await;

    match result {
        Err(ClientError::Api { status, .. }) => assert_eq!(status, 201),
        other => panic!("Expected Api error, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_signup_with_ok_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
        .mount(&mock_server)
        .await;

    let service = HttpAuthService::new(mock_server.uri()).unwrap();
    let result = service.signup(&signup_request()).await;

    assert!(matches!(result, Err(ClientError::Api { status: 200, .. })));
}

#[tokio::test]
async fn test_unauthorized_carries_status_and_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid credentials\n"))
        .mount(&mock_server)
        .await;

    let service = HttpAuthService::new(mock_server.uri()).unwrap();
    let error = service.login(&login_request()).await.unwrap_err();

    match &error {
        ClientError::Api {
            status,
            status_line,
            message,
        } => {
            assert_eq!(*status, 401);
            assert_eq!(status_line, "401 Unauthorized");
            assert_eq!(message, "Invalid credentials");
        }
        other => panic!("Expected Api error, got: {:?}", other),
    }

    let info = ErrorInfo::from(error);
    assert_eq!(
        info.to_string(),
        "Server returned 401 Unauthorized: Invalid credentials"
    );
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let service = HttpAuthService::new(mock_server.uri()).unwrap();
    let result = service.login(&login_request()).await;

    assert!(matches!(result, Err(ClientError::Parse(_))));
}

#[tokio::test]
async fn test_missing_session_field_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "1" })))
        .mount(&mock_server)
        .await;

    let service = HttpAuthService::new(mock_server.uri()).unwrap();
    let result = service.login(&login_request()).await;

    assert!(matches!(result, Err(ClientError::Parse(_))));
}

#[tokio::test]
async fn test_numeric_user_id_accepted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 42,
            "email": "alice@example.com",
            "username": "alice"
        })))
        .mount(&mock_server)
        .await;

    let service = HttpAuthService::new(mock_server.uri()).unwrap();
    let session = service.login(&login_request()).await.unwrap();

    assert_eq!(session.id, "42");
}

// ============================================================================
// Dispatch + state machine
// ============================================================================

#[tokio::test]
async fn test_dispatch_failure_becomes_request_failed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let service = HttpAuthService::new(mock_server.uri()).unwrap();
    let action = dispatch::execute(
        &service,
        quill::core::command::Command::Login(login_request()),
    )
    .await;

    match action {
        Action::RequestFailed(info) => {
            assert_eq!(info.status(), Some("500 Internal Server Error"));
            assert_eq!(info.to_string(), "Server returned 500 Internal Server Error");
        }
        other => panic!("Expected RequestFailed, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_login_flow_reaches_menu() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "email": "alice@example.com", "password": "test123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = App::new(
        Viewport {
            width: 80,
            height: 24,
        },
        mock_server.uri(),
    );

    let mut keys = chars("alice@example.com");
    keys.push(Key::Tab);
    keys.extend(chars("test123"));
    keys.push(Key::Enter);
    let (app, effect) = type_keys(app, keys);

    let Effect::Dispatch(command) = effect else {
        panic!("Expected Dispatch, got: {:?}", effect);
    };

    // Enter while the request is in flight does nothing
    let (app, again) = update(app, Action::KeyInput(Key::Enter));
    assert_eq!(again, Effect::None);

    let service = HttpAuthService::new(mock_server.uri()).unwrap();
    let action = dispatch::execute(&service, command).await;
    let (app, _) = update(app, action);

    assert_eq!(app.page, Page::Menu);
    assert_eq!(app.session.as_ref().map(|s| s.username.as_str()), Some("alice"));
    assert!(app.pending.is_none());
    assert!(app.last_error.is_none());
}

#[tokio::test]
async fn test_signup_mismatch_never_reaches_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(session_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = App::new(
        Viewport {
            width: 80,
            height: 24,
        },
        mock_server.uri(),
    );

    let mut keys = vec![Key::Ctrl('s')];
    keys.extend(chars("alice"));
    keys.push(Key::Tab);
    keys.extend(chars("alice@example.com"));
    keys.push(Key::Tab);
    keys.extend(chars("test123"));
    keys.push(Key::Tab);
    keys.extend(chars("test124"));
    keys.push(Key::Enter);
    let (app, effect) = type_keys(app, keys);

    assert_eq!(effect, Effect::None);
    assert_eq!(app.page, Page::Signup);
    assert_eq!(
        app.last_error.as_ref().map(|e| e.to_string()),
        Some("Passwords do not match".to_string())
    );
}
