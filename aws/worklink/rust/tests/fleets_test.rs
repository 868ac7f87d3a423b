//! Integration tests for FleetsService and ConfigurationService.

use aws_runtime::mocks::{mock_service_client, MockResponse, MockTransport, MOCK_ENDPOINT};
use aws_worklink::*;
use std::sync::Arc;

const FLEET: &str = "arn:aws:worklink::123456789012:fleet/field-staff";

fn create_test_service(transport: Arc<MockTransport>) -> FleetsService {
    FleetsService::new(mock_service_client(METADATA, transport))
}

#[tokio::test]
async fn test_create_fleet() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        &format!(r#"{{"FleetArn":"{}"}}"#, FLEET),
    )]));
    let service = create_test_service(transport.clone());

    let output = service
        .create_fleet(CreateFleetRequest::new("field-staff").with_tag("team", "ops"))
        .await
        .unwrap();
    assert_eq!(output.fleet_arn.as_deref(), Some(FLEET));

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.url, format!("{}/createFleet", MOCK_ENDPOINT));
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "FleetName": "field-staff", "Tags": { "team": "ops" } })
    );
}

#[tokio::test]
async fn test_describe_fleet_metadata() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{
            "CreatedTime": 1570000000,
            "LastUpdatedTime": 1570003600,
            "FleetName": "field-staff",
            "DisplayName": "Field Staff",
            "OptimizeForEndUserLocation": true,
            "CompanyCode": "abc123",
            "FleetStatus": "ACTIVE",
            "Tags": {"team": "ops"}
        }"#,
    )]));
    let service = create_test_service(transport.clone());

    let output = service.describe_fleet_metadata(FLEET).await.unwrap();
    assert_eq!(output.fleet_status, Some(FleetStatus::Active));
    assert_eq!(output.company_code.as_deref(), Some("abc123"));
    assert_eq!(output.created_time.unwrap().timestamp(), 1_570_000_000);

    assert_eq!(
        transport.last_request().unwrap().url,
        format!("{}/describeFleetMetadata", MOCK_ENDPOINT)
    );
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "FleetArn": FLEET })
    );
}

#[tokio::test]
async fn test_empty_fleet_arn_rejected_before_io() {
    let transport = Arc::new(MockTransport::new());
    let service = create_test_service(transport.clone());

    let err = service.delete_fleet("").await.unwrap_err();
    assert!(matches!(err, WorkLinkError::Client(_)));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_list_all_fleets_follows_tokens() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(
            200,
            r#"{"FleetSummaryList":[{"FleetName":"a","FleetStatus":"ACTIVE"}],"NextToken":"t1"}"#,
        ),
        MockResponse::json(
            200,
            r#"{"FleetSummaryList":[{"FleetName":"b","FleetStatus":"FAILED_TO_CREATE"}]}"#,
        ),
    ]));
    let service = create_test_service(transport.clone());

    let fleets = service.list_all_fleets().await.unwrap();
    assert_eq!(fleets.len(), 2);
    assert_eq!(fleets[1].fleet_status, Some(FleetStatus::FailedToCreate));
    assert_eq!(transport.request_count(), 2);
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "NextToken": "t1" })
    );
}

#[tokio::test]
async fn test_update_fleet_metadata() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::json(200, "{}")));
    let service = create_test_service(transport.clone());

    service
        .update_fleet_metadata(
            UpdateFleetMetadataRequest::new(FLEET).with_optimize_for_end_user_location(false),
        )
        .await
        .unwrap();

    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "FleetArn": FLEET, "OptimizeForEndUserLocation": false })
    );
}

#[tokio::test]
async fn test_fleet_not_found() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::aws_error(
        404,
        "ResourceNotFoundException",
        "The requested fleet was not found",
    )]));
    let service = create_test_service(transport);

    let err = service.describe_fleet_metadata(FLEET).await.unwrap_err();
    match err {
        WorkLinkError::ResourceNotFound(ref e) => {
            assert_eq!(e.message, "The requested fleet was not found");
        }
        other => panic!("expected ResourceNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_company_network_configuration() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(200, "{}"),
        MockResponse::json(
            200,
            r#"{"VpcId":"vpc-1","SubnetIds":["subnet-a","subnet-b"],"SecurityGroupIds":["sg-1"]}"#,
        ),
    ]));
    let service = ConfigurationService::new(mock_service_client(METADATA, transport.clone()));

    service
        .update_company_network_configuration(UpdateCompanyNetworkConfigurationRequest {
            fleet_arn: FLEET.to_string(),
            vpc_id: "vpc-1".to_string(),
            subnet_ids: vec!["subnet-a".to_string(), "subnet-b".to_string()],
            security_group_ids: vec!["sg-1".to_string()],
        })
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().unwrap().url,
        format!("{}/updateCompanyNetworkConfiguration", MOCK_ENDPOINT)
    );

    let output = service
        .describe_company_network_configuration(FLEET)
        .await
        .unwrap();
    assert_eq!(output.subnet_ids, vec!["subnet-a", "subnet-b"]);
}

#[tokio::test]
async fn test_company_network_requires_subnets() {
    let transport = Arc::new(MockTransport::new());
    let service = ConfigurationService::new(mock_service_client(METADATA, transport.clone()));

    let result = service
        .update_company_network_configuration(UpdateCompanyNetworkConfigurationRequest {
            fleet_arn: FLEET.to_string(),
            vpc_id: "vpc-1".to_string(),
            subnet_ids: vec![],
            security_group_ids: vec!["sg-1".to_string()],
        })
        .await;
    assert!(result.is_err());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_identity_provider_configuration() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(200, "{}"),
        MockResponse::json(
            200,
            r#"{"IdentityProviderType":"SAML","ServiceProviderSamlMetadata":"<sp/>","IdentityProviderSamlMetadata":"<idp/>"}"#,
        ),
    ]));
    let service = ConfigurationService::new(mock_service_client(METADATA, transport.clone()));

    service
        .update_identity_provider_configuration(UpdateIdentityProviderConfigurationRequest::saml(
            FLEET, "<idp/>",
        ))
        .await
        .unwrap();
    assert_eq!(
        transport.last_json_body().unwrap()["IdentityProviderType"],
        "SAML"
    );

    let output = service
        .describe_identity_provider_configuration(FLEET)
        .await
        .unwrap();
    assert_eq!(output.identity_provider_type, Some(IdentityProviderType::Saml));
    assert_eq!(output.service_provider_saml_metadata.as_deref(), Some("<sp/>"));
}

#[tokio::test]
async fn test_throttling_is_retried() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::aws_error(429, "TooManyRequestsException", "slow down"),
        MockResponse::json(200, r#"{"AuditStreamArn":"arn:aws:kinesis:us-east-1:1:stream/audit"}"#),
    ]));
    let service = ConfigurationService::new(mock_service_client(METADATA, transport.clone()));

    let output = service
        .describe_audit_stream_configuration(FLEET)
        .await
        .unwrap();
    assert!(output.audit_stream_arn.is_some());
    assert_eq!(transport.request_count(), 2);
}
