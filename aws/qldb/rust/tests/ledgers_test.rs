//! Integration tests for LedgersService and TagsService.

use aws_qldb::services::{LedgersService, TagsService};
use aws_qldb::*;
use aws_runtime::mocks::{mock_service_client, MockResponse, MockTransport, MOCK_ENDPOINT};
use std::collections::HashMap;
use std::sync::Arc;

fn ledgers(transport: Arc<MockTransport>) -> LedgersService {
    LedgersService::new(mock_service_client(METADATA, transport))
}

fn tags(transport: Arc<MockTransport>) -> TagsService {
    TagsService::new(mock_service_client(METADATA, transport))
}

#[tokio::test]
async fn test_create_ledger() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{
            "Name": "books",
            "Arn": "arn:aws:qldb:us-east-1:123456789012:ledger/books",
            "State": "CREATING",
            "CreationDateTime": 1609459200,
            "PermissionsMode": "STANDARD",
            "DeletionProtection": true,
            "KmsKeyArn": "AWS_OWNED_KMS_KEY"
        }"#,
    )]));
    let service = ledgers(transport.clone());

    let output = service
        .create_ledger(
            CreateLedgerRequest::new("books", PermissionsMode::Standard)
                .with_deletion_protection(true),
        )
        .await
        .unwrap();

    assert_eq!(output.state, Some(LedgerState::Creating));
    assert_eq!(output.kms_key_arn.as_deref(), Some("AWS_OWNED_KMS_KEY"));

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.url, format!("{}/ledgers", MOCK_ENDPOINT));
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({
            "Name": "books",
            "PermissionsMode": "STANDARD",
            "DeletionProtection": true
        })
    );
}

#[tokio::test]
async fn test_describe_ledger_encodes_name() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{"Name":"my books","State":"ACTIVE","Unexpected":{"nested":1}}"#,
    )]));
    let service = ledgers(transport.clone());

    let output = service.describe_ledger("my books").await.unwrap();
    assert_eq!(output.state, Some(LedgerState::Active));

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "GET");
    assert_eq!(recorded.url, format!("{}/ledgers/my%20books", MOCK_ENDPOINT));
    assert!(recorded.body.is_none());
}

#[tokio::test]
async fn test_empty_ledger_name_rejected_before_io() {
    let transport = Arc::new(MockTransport::new());
    let service = ledgers(transport.clone());

    let result = service.delete_ledger("").await;
    match result {
        Err(QldbError::Client(aws_runtime::AwsError::Request(_))) => {}
        other => panic!("expected missing path parameter, got {:?}", other),
    }
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_list_ledgers_pagination_query() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{
            "Ledgers": [
                {"Name": "a", "State": "ACTIVE", "CreationDateTime": 1.6e9},
                {"Name": "b", "State": "DELETING"}
            ],
            "NextToken": "next"
        }"#,
    )]));
    let service = ledgers(transport.clone());

    let output = service
        .list_ledgers(ListRequest::new().with_max_results(2).with_next_token("abc"))
        .await
        .unwrap();

    assert_eq!(output.ledgers.len(), 2);
    assert_eq!(output.ledgers[1].state, Some(LedgerState::Deleting));
    assert_eq!(output.next_token.as_deref(), Some("next"));
    assert_eq!(
        transport.last_request().unwrap().url,
        format!("{}/ledgers?max_results=2&next_token=abc", MOCK_ENDPOINT)
    );
}

#[tokio::test]
async fn test_update_ledger_uses_patch() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{"Name":"books","DeletionProtection":false}"#,
    )]));
    let service = ledgers(transport.clone());

    let output = service
        .update_ledger(UpdateLedgerRequest::new("books").with_deletion_protection(false))
        .await
        .unwrap();

    assert_eq!(output.deletion_protection, Some(false));
    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "PATCH");
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "DeletionProtection": false })
    );
}

#[tokio::test]
async fn test_delete_protected_ledger() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        400,
        r#"{
            "__type": "ResourcePreconditionNotMetException",
            "Message": "Deletion protection is enabled",
            "ResourceType": "LEDGER",
            "ResourceName": "books"
        }"#,
    )]));
    let service = ledgers(transport);

    let err = service.delete_ledger("books").await.unwrap_err();
    assert!(matches!(err, QldbError::ResourcePreconditionNotMet(_)));
    assert_eq!(err.resource_type(), Some("LEDGER"));
    assert_eq!(err.resource_name(), Some("books"));
    assert_eq!(err.status_code(), Some(400));
}

#[tokio::test]
async fn test_limit_exceeded() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        400,
        r#"{"__type":"LimitExceededException","Message":"Too many ledgers","ResourceType":"LEDGER"}"#,
    )]));
    let service = ledgers(transport);

    let err = service
        .create_ledger(CreateLedgerRequest::new("c", PermissionsMode::AllowAll))
        .await
        .unwrap_err();
    assert!(matches!(err, QldbError::LimitExceeded(_)));
    assert_eq!(err.resource_type(), Some("LEDGER"));
}

#[tokio::test]
async fn test_tag_and_untag_resource() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::json(200, "{}")));
    let service = tags(transport.clone());
    let arn = "arn:aws:qldb:us-east-1:123456789012:ledger/books";

    let mut tag_map = HashMap::new();
    tag_map.insert("env".to_string(), "prod".to_string());
    service
        .tag_resource(TagResourceRequest::new(arn, tag_map))
        .await
        .unwrap();

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(
        recorded.url,
        format!(
            "{}/tags/arn%3Aaws%3Aqldb%3Aus-east-1%3A123456789012%3Aledger%2Fbooks",
            MOCK_ENDPOINT
        )
    );
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "Tags": { "env": "prod" } })
    );

    service.untag_resource(arn, &["env", "team"]).await.unwrap();
    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "DELETE");
    assert!(recorded.url.ends_with("?tagKeys=env&tagKeys=team"));
}

#[tokio::test]
async fn test_list_tags_for_resource() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{"Tags":{"env":"prod","team":"ledger"}}"#,
    )]));
    let service = tags(transport);

    let output = service
        .list_tags_for_resource("arn:aws:qldb:us-east-1:1:ledger/books")
        .await
        .unwrap();
    assert_eq!(output.tags.len(), 2);
    assert_eq!(output.tags["team"], "ledger");
}
