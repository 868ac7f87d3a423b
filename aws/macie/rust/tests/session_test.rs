//! Integration tests for SessionService, FindingsService and
//! FindingsFiltersService.

use aws_macie::services::{FindingsFiltersService, FindingsService, SessionService};
use aws_macie::*;
use aws_runtime::mocks::{mock_service_client, MockResponse, MockTransport, MOCK_ENDPOINT};
use std::sync::Arc;

fn session(transport: Arc<MockTransport>) -> SessionService {
    SessionService::new(mock_service_client(METADATA, transport))
}

fn findings(transport: Arc<MockTransport>) -> FindingsService {
    FindingsService::new(mock_service_client(METADATA, transport))
}

fn filters(transport: Arc<MockTransport>) -> FindingsFiltersService {
    FindingsFiltersService::new(mock_service_client(METADATA, transport))
}

#[tokio::test]
async fn test_enable_macie_generates_client_token() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(200, "{}")]));
    let service = session(transport.clone());

    service
        .enable_macie(
            EnableMacieRequest::new()
                .with_finding_publishing_frequency(FindingPublishingFrequency::OneHour),
        )
        .await
        .unwrap();

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.url, format!("{}/macie", MOCK_ENDPOINT));

    let body = transport.last_json_body().unwrap();
    assert_eq!(body["findingPublishingFrequency"], "ONE_HOUR");
    let token = body["clientToken"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(token).is_ok());
}

#[tokio::test]
async fn test_get_macie_session() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{
            "createdAt": "2020-05-13T19:52:03.264Z",
            "findingPublishingFrequency": "FIFTEEN_MINUTES",
            "serviceRole": "arn:aws:iam::123456789012:role/aws-service-role/macie.amazonaws.com/AWSServiceRoleForAmazonMacie",
            "status": "ENABLED",
            "updatedAt": "2020-05-14T10:00:00Z"
        }"#,
    )]));
    let service = session(transport.clone());

    let output = service.get_macie_session().await.unwrap();

    assert_eq!(output.status, Some(MacieStatus::Enabled));
    assert_eq!(
        output.finding_publishing_frequency,
        Some(FindingPublishingFrequency::FifteenMinutes)
    );
    assert_eq!(output.created_at.unwrap().timestamp(), 1_589_399_523);
    assert_eq!(transport.last_request().unwrap().method, "GET");
}

#[tokio::test]
async fn test_update_member_session() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(200, "{}")]));
    let service = session(transport.clone());

    service
        .update_member_session("111122223333", MacieStatus::Paused)
        .await
        .unwrap();

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "PATCH");
    assert_eq!(recorded.url, format!("{}/macie/members/111122223333", MOCK_ENDPOINT));
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "status": "PAUSED" })
    );
}

#[tokio::test]
async fn test_put_classification_export_configuration() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{"configuration":{"s3Destination":{"bucketName":"results","kmsKeyArn":"arn:aws:kms:us-east-1:1:key/k"}}}"#,
    )]));
    let service = session(transport.clone());

    let configuration = ClassificationExportConfiguration {
        s3_destination: Some(S3Destination {
            bucket_name: "results".to_string(),
            key_prefix: None,
            kms_key_arn: "arn:aws:kms:us-east-1:1:key/k".to_string(),
        }),
    };
    service
        .put_classification_export_configuration(&configuration)
        .await
        .unwrap();

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "PUT");
    assert_eq!(
        recorded.url,
        format!("{}/classification-export-configuration", MOCK_ENDPOINT)
    );
    assert_eq!(
        transport.last_json_body().unwrap()["configuration"]["s3Destination"]["bucketName"],
        "results"
    );
}

#[tokio::test]
async fn test_list_findings_then_get_findings() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(200, r#"{"findingIds":["f-1","f-2"],"nextToken":"n"}"#),
        MockResponse::json(
            200,
            r#"{
                "findings": [{
                    "id": "f-1",
                    "accountId": "123456789012",
                    "category": "CLASSIFICATION",
                    "type": "SensitiveData:S3Object/Personal",
                    "severity": {"description": "High", "score": 3},
                    "count": 1,
                    "archived": false,
                    "classificationDetails": {"jobId": "j-1"}
                }]
            }"#,
        ),
    ]));
    let service = findings(transport.clone());

    let listed = service
        .list_findings(
            ListFindingsRequest::new()
                .with_criteria(FindingCriteria::new().with_eq("severity.description", ["High"]))
                .with_max_results(2),
        )
        .await
        .unwrap();
    assert_eq!(listed.finding_ids, vec!["f-1", "f-2"]);
    assert_eq!(listed.next_token.as_deref(), Some("n"));

    let body = transport.last_json_body().unwrap();
    assert_eq!(
        body["findingCriteria"]["criterion"]["severity.description"]["eq"],
        serde_json::json!(["High"])
    );

    let described = service.get_findings(&listed.finding_ids, None).await.unwrap();
    let finding = &described.findings[0];
    assert_eq!(finding.finding_type.as_deref(), Some("SensitiveData:S3Object/Personal"));
    assert_eq!(
        finding.severity.as_ref().unwrap().description,
        Some(SeverityDescription::High)
    );

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.url, format!("{}/findings/describe", MOCK_ENDPOINT));
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "findingIds": ["f-1", "f-2"] })
    );
}

#[tokio::test]
async fn test_archive_findings_requires_ids() {
    let transport = Arc::new(MockTransport::new());
    let service = findings(transport.clone());

    let ids: Vec<String> = Vec::new();
    let result = service.archive_findings(&ids).await;

    assert!(matches!(result, Err(MacieError::Client(_))));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_create_findings_filter() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{"arn":"arn:aws:macie2:us-east-1:1:findings-filter/ff-1","id":"ff-1"}"#,
    )]));
    let service = filters(transport.clone());

    let output = service
        .create_findings_filter(
            CreateFindingsFilterRequest::new(
                "suppress-low",
                FindingsFilterAction::Archive,
                FindingCriteria::new().with_eq("severity.description", ["Low"]),
            )
            .with_position(1),
        )
        .await
        .unwrap();
    assert_eq!(output.id.as_deref(), Some("ff-1"));

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.url, format!("{}/findingsfilters", MOCK_ENDPOINT));

    let body = transport.last_json_body().unwrap();
    assert_eq!(body["action"], "ARCHIVE");
    assert_eq!(body["position"], 1);
    assert!(body["clientToken"].is_string());
}

#[tokio::test]
async fn test_findings_filter_lifecycle_paths() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::json(200, "{}")));
    let service = filters(transport.clone());

    service
        .list_findings_filters(ListRequest::new().with_max_results(5))
        .await
        .unwrap();
    service.get_findings_filter("ff-1").await.unwrap();
    service
        .update_findings_filter(
            UpdateFindingsFilterRequest::new("ff-1").with_action(FindingsFilterAction::Noop),
        )
        .await
        .unwrap();
    service.delete_findings_filter("ff-1").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, format!("{}/findingsfilters?maxResults=5", MOCK_ENDPOINT));
    assert_eq!(requests[1].url, format!("{}/findingsfilters/ff-1", MOCK_ENDPOINT));
    assert_eq!(requests[2].method, "PATCH");
    assert_eq!(requests[3].method, "DELETE");

    let update_body: serde_json::Value =
        serde_json::from_slice(requests[2].body.as_ref().unwrap()).unwrap();
    assert_eq!(update_body["action"], "NOOP");
    assert!(update_body["clientToken"].is_string());
    assert!(update_body.get("id").is_none());
}

#[tokio::test]
async fn test_throttling_is_retryable() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::aws_error(
        429,
        "ThrottlingException",
        "Rate exceeded",
    )));
    let service = session(transport.clone());

    let error = service.get_macie_session().await.unwrap_err();

    assert!(matches!(error, MacieError::Throttling(_)));
    assert!(error.is_retryable());
    assert_eq!(error.request_id(), Some("mock-request-id"));
    assert!(transport.request_count() > 1);
}
