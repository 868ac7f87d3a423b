//! Integration tests for domains, devices, website access and tagging.

use aws_runtime::mocks::{mock_service_client, MockResponse, MockTransport, MOCK_ENDPOINT};
use aws_worklink::*;
use std::collections::HashMap;
use std::sync::Arc;

const FLEET: &str = "arn:aws:worklink::123456789012:fleet/field-staff";

#[tokio::test]
async fn test_associate_domain() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(200, "{}")]));
    let service = DomainsService::new(mock_service_client(METADATA, transport.clone()));

    service
        .associate_domain(
            AssociateDomainRequest::new(
                FLEET,
                "intranet.example.com",
                "arn:aws:acm:us-east-1:1:certificate/c",
            )
            .with_display_name("Intranet"),
        )
        .await
        .unwrap();

    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.url, format!("{}/associateDomain", MOCK_ENDPOINT));
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({
            "FleetArn": FLEET,
            "DomainName": "intranet.example.com",
            "DisplayName": "Intranet",
            "AcmCertificateArn": "arn:aws:acm:us-east-1:1:certificate/c"
        })
    );
}

#[tokio::test]
async fn test_domain_access_commands() {
    let transport = Arc::new(MockTransport::with_default(MockResponse::json(200, "{}")));
    let service = DomainsService::new(mock_service_client(METADATA, transport.clone()));

    service
        .revoke_domain_access(FLEET, "intranet.example.com")
        .await
        .unwrap();
    service
        .restore_domain_access(FLEET, "intranet.example.com")
        .await
        .unwrap();
    service
        .disassociate_domain(FLEET, "intranet.example.com")
        .await
        .unwrap();

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/revokeDomainAccess", MOCK_ENDPOINT),
            format!("{}/restoreDomainAccess", MOCK_ENDPOINT),
            format!("{}/disassociateDomain", MOCK_ENDPOINT),
        ]
    );
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "FleetArn": FLEET, "DomainName": "intranet.example.com" })
    );
}

#[tokio::test]
async fn test_describe_domain() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        r#"{"DomainName":"intranet.example.com","DomainStatus":"ACTIVE","CreatedTime":1570000000,"AcmCertificateArn":"arn:aws:acm:us-east-1:1:certificate/c"}"#,
    )]));
    let service = DomainsService::new(mock_service_client(METADATA, transport));

    let output = service
        .describe_domain(FLEET, "intranet.example.com")
        .await
        .unwrap();
    assert_eq!(output.domain_status, Some(DomainStatus::Active));
}

#[tokio::test]
async fn test_list_domains_requires_fleet() {
    let transport = Arc::new(MockTransport::new());
    let service = DomainsService::new(mock_service_client(METADATA, transport.clone()));

    assert!(service.list_domains(ListRequest::new()).await.is_err());
    assert!(service.describe_domain(FLEET, "").await.is_err());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_domain_already_exists() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::aws_error(
        400,
        "ResourceAlreadyExistsException",
        "Domain is already associated",
    )]));
    let service = DomainsService::new(mock_service_client(METADATA, transport));

    let err = service
        .associate_domain(AssociateDomainRequest::new(FLEET, "a.example.com", "arn:cert"))
        .await
        .unwrap_err();
    assert!(matches!(err, WorkLinkError::ResourceAlreadyExists(_)));
    assert_eq!(err.request_id(), Some("mock-request-id"));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_devices() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(
            200,
            r#"{"Devices":[{"DeviceId":"d-1","DeviceStatus":"ACTIVE"},{"DeviceId":"d-2","DeviceStatus":"SIGNED_OUT"}]}"#,
        ),
        MockResponse::json(200, "{}"),
    ]));
    let service = DevicesService::new(mock_service_client(METADATA, transport.clone()));

    let output = service
        .list_devices(ListRequest::for_fleet(FLEET).with_max_results(10))
        .await
        .unwrap();
    assert_eq!(output.devices.len(), 2);
    assert_eq!(output.devices[1].device_status, Some(DeviceStatus::SignedOut));

    service.sign_out_user(FLEET, "jdoe").await.unwrap();
    assert_eq!(
        transport.last_request().unwrap().url,
        format!("{}/signOutUser", MOCK_ENDPOINT)
    );
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({ "FleetArn": FLEET, "Username": "jdoe" })
    );
}

#[tokio::test]
async fn test_authorization_providers() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(200, r#"{"AuthorizationProviderId":"p-1"}"#),
        MockResponse::json(200, "{}"),
    ]));
    let service =
        AuthorizationProvidersService::new(mock_service_client(METADATA, transport.clone()));

    let output = service
        .associate_website_authorization_provider(
            AssociateWebsiteAuthorizationProviderRequest::saml(FLEET, "auth.example.com"),
        )
        .await
        .unwrap();
    assert_eq!(output.authorization_provider_id.as_deref(), Some("p-1"));
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({
            "FleetArn": FLEET,
            "AuthorizationProviderType": "SAML",
            "DomainName": "auth.example.com"
        })
    );

    service
        .disassociate_website_authorization_provider(FLEET, "p-1")
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().unwrap().url,
        format!("{}/disassociateWebsiteAuthorizationProvider", MOCK_ENDPOINT)
    );
}

#[tokio::test]
async fn test_certificate_authorities() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(200, r#"{"WebsiteCaId":"ca-1"}"#),
        MockResponse::json(
            200,
            r#"{"WebsiteCertificateAuthorities":[{"WebsiteCaId":"ca-1","DisplayName":"Corp root"}],"NextToken":"n"}"#,
        ),
    ]));
    let service =
        CertificateAuthoritiesService::new(mock_service_client(METADATA, transport.clone()));

    let output = service
        .associate_website_certificate_authority(
            AssociateWebsiteCertificateAuthorityRequest::new(FLEET, "-----BEGIN CERTIFICATE-----")
                .with_display_name("Corp root"),
        )
        .await
        .unwrap();
    assert_eq!(output.website_ca_id.as_deref(), Some("ca-1"));

    let listed = service
        .list_website_certificate_authorities(ListRequest::for_fleet(FLEET))
        .await
        .unwrap();
    assert_eq!(listed.website_certificate_authorities.len(), 1);
    assert_eq!(listed.next_token.as_deref(), Some("n"));
}

#[tokio::test]
async fn test_tags_use_rest_paths() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(200, "{}"),
        MockResponse::json(200, r#"{"Tags":{"env":"prod"}}"#),
        MockResponse::json(200, "{}"),
    ]));
    let service = TagsService::new(mock_service_client(METADATA, transport.clone()));

    let mut tags = HashMap::new();
    tags.insert("env".to_string(), "prod".to_string());
    service
        .tag_resource(TagResourceRequest::new(FLEET, tags))
        .await
        .unwrap();
    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "POST");
    assert_eq!(
        recorded.url,
        format!(
            "{}/tags/arn%3Aaws%3Aworklink%3A%3A123456789012%3Afleet%2Ffield-staff",
            MOCK_ENDPOINT
        )
    );

    let listed = service.list_tags_for_resource(FLEET).await.unwrap();
    assert_eq!(listed.tags["env"], "prod");
    assert_eq!(transport.last_request().unwrap().method, "GET");

    service.untag_resource(FLEET, &["env"]).await.unwrap();
    let recorded = transport.last_request().unwrap();
    assert_eq!(recorded.method, "DELETE");
    assert!(recorded.url.ends_with("?tagKeys=env"));
}
