use signup_worker::errors::WorkerError;
use signup_worker::mailchimp::{MailchimpClient, SubscribeOutcome};
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct SubscribeBodyMatcher;

impl wiremock::Match for SubscribeBodyMatcher {
    fn matches(&self, request: &wiremock::Request) -> bool {
        let result: Result<serde_json::Value, _> = serde_json::from_slice(&request.body);

        if let Ok(body) = result {
            body.get("status") == Some(&serde_json::Value::String("subscribed".into()))
                && body.get("email_address").is_some()
        } else {
            false
        }
    }
}

fn client_for(server: &MockServer) -> MailchimpClient {
    MailchimpClient::new(
        server.uri(),
        "list123".to_string(),
        "anyuser".to_string(),
        "api-key".to_string(),
    )
}

#[tokio::test]
async fn subscribe_posts_credentials_and_payload_to_members_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/3.0/lists/list123/members"))
        .and(basic_auth("anyuser", "api-key"))
        .and(SubscribeBodyMatcher)
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .subscribe("jane@example.com")
        .await
        .unwrap();
    assert_eq!(outcome, SubscribeOutcome::Subscribed);
}

#[tokio::test]
async fn member_exists_failure_counts_as_success() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "type": "https://mailchimp.com/developer/marketing/docs/errors/",
        "title": "Member Exists",
        "status": 400,
        "detail": "jane@example.com is already a list member.",
    });
    Mock::given(method("POST"))
        .and(path("/3.0/lists/list123/members"))
        .respond_with(ResponseTemplate::new(400).set_body_json(body))
        .mount(&server)
        .await;

    let outcome = client_for(&server)
        .subscribe("jane@example.com")
        .await
        .unwrap();
    assert_eq!(outcome, SubscribeOutcome::AlreadyMember);
}

#[tokio::test]
async fn other_failures_surface_the_mailchimp_detail() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "title": "Invalid Resource",
        "status": 400,
        "detail": "Please provide a valid email address.",
    });
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(body))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .subscribe("not-an-email")
        .await
        .unwrap_err();
    match err {
        WorkerError::MailchimpError(msg) => {
            assert!(msg.contains("400"));
            assert!(msg.contains("valid email address"));
        }
        other => panic!("Unexpected error type: {other}"),
    }
}

#[tokio::test]
async fn unparseable_failure_body_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .subscribe("jane@example.com")
        .await
        .unwrap_err();
    assert!(matches!(err, WorkerError::MailchimpError(_)));
}
