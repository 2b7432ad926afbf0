use signup_worker::core::models::SignupNotification;
use signup_worker::errors::WorkerError;

#[test]
fn parses_notification_envelope() {
    let body = r#"{
        "Type": "Notification",
        "MessageId": "a1b2c3d4",
        "TopicArn": "arn:aws:sns:us-east-1:123456789012:newsletter-signups",
        "Message": "jane@example.com",
        "Timestamp": "2016-01-12T19:17:44.897Z"
    }"#;

    let notification = SignupNotification::parse(body).unwrap();
    assert_eq!(notification.message, "jane@example.com");
}

#[test]
fn missing_message_field_is_a_parse_error() {
    let err = SignupNotification::parse(r#"{"Type": "Notification"}"#).unwrap_err();
    assert!(matches!(err, WorkerError::ParseError(_)));
}

#[test]
fn non_json_body_is_a_parse_error() {
    let err = SignupNotification::parse("jane@example.com").unwrap_err();
    assert!(matches!(err, WorkerError::ParseError(_)));
}
