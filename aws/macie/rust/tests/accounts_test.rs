//! Integration tests for AccountsService, OrganizationService,
//! BucketsService, UsageService and TagsService.

use aws_macie::services::{
    AccountsService, BucketsService, OrganizationService, TagsService, UsageService,
};
use aws_macie::*;
use aws_runtime::mocks::{mock_service_client, MockResponse, MockTransport, MOCK_ENDPOINT};
use std::sync::Arc;

fn accounts(transport: Arc<MockTransport>) -> AccountsService {
    AccountsService::new(mock_service_client(METADATA, transport))
}

#[tokio::test]
async fn test_create_member_and_list() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(200, r#"{"arn":"arn:aws:macie2:us-east-1:1:member/111122223333"}"#),
        MockResponse::json(
            200,
            r#"{
                "members": [{
                    "accountId": "111122223333",
                    "email": "security@example.com",
                    "relationshipStatus": "Invited",
                    "invitedAt": "2021-01-01T00:00:00Z"
                }]
            }"#,
        ),
    ]));
    let service = accounts(transport.clone());

    let created = service
        .create_member(CreateMemberRequest::new("111122223333", "security@example.com"))
        .await
        .unwrap();
    assert!(created.arn.unwrap().ends_with("111122223333"));

    let listed = service
        .list_members(ListRequest::new().with_max_results(10), Some(false))
        .await
        .unwrap();
    assert_eq!(
        listed.members[0].relationship_status,
        Some(RelationshipStatus::Invited)
    );

    let requests = transport.requests();
    assert_eq!(requests[0].url, format!("{}/members", MOCK_ENDPOINT));
    let create_body: serde_json::Value =
        serde_json::from_slice(requests[0].body.as_ref().unwrap()).unwrap();
    assert_eq!(create_body["account"]["accountId"], "111122223333");
    assert_eq!(requests[1].method, "GET");
    assert_eq!(
        requests[1].url,
        format!("{}/members?maxResults=10&onlyAssociated=false", MOCK_ENDPOINT)
    );
}

#[tokio::test]
async fn test_member_paths() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::json(200, "{}")));
    let service = accounts(transport.clone());

    service.get_member("111122223333").await.unwrap();
    service.disassociate_member("111122223333").await.unwrap();
    service.delete_member("111122223333").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].url, format!("{}/members/111122223333", MOCK_ENDPOINT));
    assert_eq!(requests[1].method, "POST");
    assert_eq!(
        requests[1].url,
        format!("{}/members/disassociate/111122223333", MOCK_ENDPOINT)
    );
    assert_eq!(requests[2].method, "DELETE");
}

#[tokio::test]
async fn test_invitations() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(
            200,
            r#"{"unprocessedAccounts":[{"accountId":"444455556666","errorCode":"ClientError","errorMessage":"already a member"}]}"#,
        ),
        MockResponse::json(200, "{}"),
        MockResponse::json(200, r#"{"unprocessedAccounts":[]}"#),
        MockResponse::json(200, r#"{"invitationsCount":3}"#),
    ]));
    let service = accounts(transport.clone());

    let created = service
        .create_invitations(
            CreateInvitationsRequest::new(vec![
                "111122223333".to_string(),
                "444455556666".to_string(),
            ])
            .with_message("Join our Macie organization"),
        )
        .await
        .unwrap();
    assert_eq!(created.unprocessed_accounts.len(), 1);
    assert_eq!(
        created.unprocessed_accounts[0].error_code.as_deref(),
        Some("ClientError")
    );

    service
        .accept_invitation(AcceptInvitationRequest {
            invitation_id: "inv-1".to_string(),
            master_account: "999988887777".to_string(),
        })
        .await
        .unwrap();

    service
        .decline_invitations(&["999988887777".to_string()])
        .await
        .unwrap();

    let count = service.get_invitations_count().await.unwrap();
    assert_eq!(count.invitations_count, Some(3));

    let requests = transport.requests();
    assert_eq!(requests[0].url, format!("{}/invitations", MOCK_ENDPOINT));
    assert_eq!(requests[1].url, format!("{}/invitations/accept", MOCK_ENDPOINT));
    assert_eq!(requests[2].url, format!("{}/invitations/decline", MOCK_ENDPOINT));
    assert_eq!(requests[3].url, format!("{}/invitations/count", MOCK_ENDPOINT));

    let decline_body: serde_json::Value =
        serde_json::from_slice(requests[2].body.as_ref().unwrap()).unwrap();
    assert_eq!(decline_body, serde_json::json!({ "accountIds": ["999988887777"] }));
}

#[tokio::test]
async fn test_get_master_account() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{"master":{"accountId":"999988887777","invitationId":"inv-1","relationshipStatus":"Enabled"}}"#,
    )]));
    let service = accounts(transport.clone());

    let output = service.get_master_account().await.unwrap();
    let master = output.master.unwrap();

    assert_eq!(master.account_id.as_deref(), Some("999988887777"));
    assert_eq!(master.relationship_status, Some(RelationshipStatus::Enabled));
    assert_eq!(transport.last_request().unwrap().url, format!("{}/master", MOCK_ENDPOINT));
}

#[tokio::test]
async fn test_organization_admin_account() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(200, "{}"),
        MockResponse::json(200, "{}"),
        MockResponse::json(
            200,
            r#"{"adminAccounts":[{"accountId":"123456789012","status":"DISABLING_IN_PROGRESS"}]}"#,
        ),
    ]));
    let service = OrganizationService::new(mock_service_client(METADATA, transport.clone()));

    service
        .enable_organization_admin_account("123456789012", None)
        .await
        .unwrap();
    service
        .disable_organization_admin_account("123456789012")
        .await
        .unwrap();
    let listed = service
        .list_organization_admin_accounts(ListRequest::new())
        .await
        .unwrap();
    assert_eq!(listed.admin_accounts[0].status, Some(AdminStatus::DisablingInProgress));

    let requests = transport.requests();
    let enable_body: serde_json::Value =
        serde_json::from_slice(requests[0].body.as_ref().unwrap()).unwrap();
    assert_eq!(enable_body["adminAccountId"], "123456789012");
    assert!(enable_body["clientToken"].is_string());

    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(
        requests[1].url,
        format!("{}/admin?adminAccountId=123456789012", MOCK_ENDPOINT)
    );
    assert_eq!(requests[2].url, format!("{}/admin", MOCK_ENDPOINT));
}

#[tokio::test]
async fn test_organization_configuration() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(200, r#"{"autoEnable":false,"maxAccountLimitReached":false}"#),
        MockResponse::json(200, "{}"),
    ]));
    let service = OrganizationService::new(mock_service_client(METADATA, transport.clone()));

    let current = service.describe_organization_configuration().await.unwrap();
    assert_eq!(current.auto_enable, Some(false));

    service.update_organization_configuration(true).await.unwrap();

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "PATCH");
    assert_eq!(recorded.url, format!("{}/admin/configuration", MOCK_ENDPOINT));
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "autoEnable": true })
    );
}

#[tokio::test]
async fn test_describe_buckets_and_statistics() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(
            200,
            r#"{
                "buckets": [{
                    "accountId": "123456789012",
                    "bucketName": "customer-uploads",
                    "objectCount": 42,
                    "sizeInBytes": 1048576,
                    "publicAccess": {"effectivePermission": "NOT_PUBLIC"}
                }]
            }"#,
        ),
        MockResponse::json(200, r#"{"bucketCount":7,"objectCount":1000}"#),
    ]));
    let service = BucketsService::new(mock_service_client(METADATA, transport.clone()));

    let described = service
        .describe_buckets(DescribeBucketsRequest::new().with_criterion(
            "bucketName",
            BucketCriteriaAdditionalProperties {
                prefix: Some("customer".to_string()),
                ..Default::default()
            },
        ))
        .await
        .unwrap();
    let bucket = &described.buckets[0];
    assert_eq!(bucket.object_count, Some(42));
    assert_eq!(
        bucket.public_access.as_ref().unwrap()["effectivePermission"],
        "NOT_PUBLIC"
    );

    let stats = service.get_bucket_statistics(Some("123456789012")).await.unwrap();
    assert_eq!(stats.bucket_count, Some(7));

    let requests = transport.requests();
    assert_eq!(requests[0].url, format!("{}/datasources/s3", MOCK_ENDPOINT));
    let describe_body: serde_json::Value =
        serde_json::from_slice(requests[0].body.as_ref().unwrap()).unwrap();
    assert_eq!(describe_body["criteria"]["bucketName"]["prefix"], "customer");
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "accountId": "123456789012" })
    );
}

#[tokio::test]
async fn test_usage_totals() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{"usageTotals":[{"currency":"USD","estimatedCost":"12.50","type":"SENSITIVE_DATA_DISCOVERY"}]}"#,
    )]));
    let service = UsageService::new(mock_service_client(METADATA, transport.clone()));

    let output = service.get_usage_totals().await.unwrap();
    let total = &output.usage_totals[0];

    assert_eq!(total.currency, Some(Currency::Usd));
    assert_eq!(total.estimated_cost.as_deref(), Some("12.50"));
    assert_eq!(total.usage_type, Some(UsageType::SensitiveDataDiscovery));
    assert_eq!(transport.last_request().unwrap().method, "GET");
}

#[tokio::test]
async fn test_usage_statistics_filter() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{"records":[{"accountId":"123456789012","usage":[]}]}"#,
    )]));
    let service = UsageService::new(mock_service_client(METADATA, transport.clone()));

    let output = service
        .get_usage_statistics(GetUsageStatisticsRequest {
            filter_by: Some(vec![UsageStatisticsFilter {
                comparator: Some(JobComparator::Eq),
                key: UsageStatisticsFilterKey::AccountId,
                values: vec!["123456789012".to_string()],
            }]),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(output.records.len(), 1);

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.url, format!("{}/usage/statistics", MOCK_ENDPOINT));
    assert_eq!(
        transport.last_json_body().unwrap()["filterBy"][0],
        serde_json::json!({ "comparator": "EQ", "key": "accountId", "values": ["123456789012"] })
    );
}

#[tokio::test]
async fn test_untag_resource() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::no_content()]));
    let service = TagsService::new(mock_service_client(METADATA, transport.clone()));

    service
        .untag_resource(
            "arn:aws:macie2:us-east-1:123456789012:classification-job/j-1",
            &["env"],
        )
        .await
        .unwrap();

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "DELETE");
    assert_eq!(
        recorded.url,
        format!(
            "{}/tags/arn%3Aaws%3Amacie2%3Aus-east-1%3A123456789012%3Aclassification-job%2Fj-1?tagKeys=env",
            MOCK_ENDPOINT
        )
    );
}

#[tokio::test]
async fn test_conflict_maps_to_typed_error() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::aws_error(
        409,
        "ConflictException",
        "Member already exists",
    )]));
    let service = accounts(transport);

    let error = service
        .create_member(CreateMemberRequest::new("111122223333", "security@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(error, MacieError::Conflict(_)));
    assert!(!error.is_retryable());
    assert_eq!(error.status_code(), Some(409));
}
