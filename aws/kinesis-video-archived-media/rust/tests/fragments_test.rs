//! Integration tests for FragmentsService.

use aws_kinesis_video_archived_media::services::FragmentsService;
use aws_kinesis_video_archived_media::*;
use aws_runtime::mocks::{mock_service_client, MockResponse, MockTransport};
use chrono::{TimeZone, Utc};
use std::sync::Arc;

fn create_test_service(transport: Arc<MockTransport>) -> FragmentsService {
    FragmentsService::new(mock_service_client(METADATA, transport))
}

const FRAGMENTS_PAGE: &str = r#"{
    "Fragments": [
        {
            "FragmentNumber": "91343852333181432392682062607743920146264237333",
            "FragmentSizeInBytes": 4012,
            "ProducerTimestamp": 1700000000.123,
            "ServerTimestamp": 1700000000.5,
            "FragmentLengthInMilliseconds": 2002
        }
    ],
    "NextToken": "page-2"
}"#;

#[tokio::test]
async fn test_list_fragments() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::json(
        200,
        FRAGMENTS_PAGE,
    )]));
    let service = create_test_service(transport.clone());

    let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let end = Utc.timestamp_opt(1_700_000_100, 0).unwrap();
    let request = ListFragmentsRequest::for_stream_name("front-door")
        .with_max_results(100)
        .with_fragment_selector(FragmentSelector::producer(TimestampRange::between(start, end)));

    let output = service.list_fragments(request).await.unwrap();
    assert_eq!(output.fragments.len(), 1);
    assert_eq!(output.next_token.as_deref(), Some("page-2"));

    let fragment = &output.fragments[0];
    assert_eq!(fragment.fragment_size_in_bytes, Some(4012));
    assert_eq!(
        fragment.producer_timestamp.unwrap().timestamp_millis(),
        1_700_000_000_123
    );

    let recorded = transport.last_request().unwrap();
    assert!(recorded.url.ends_with("/listFragments"));
    let body = transport.last_json_body().unwrap();
    assert_eq!(body["MaxResults"], 100);
    assert_eq!(body["FragmentSelector"]["FragmentSelectorType"], "PRODUCER_TIMESTAMP");
}

#[tokio::test]
async fn test_list_all_fragments_follows_tokens() {
    let transport = Arc::new(MockTransport::with_responses(vec![
        MockResponse::json(200, FRAGMENTS_PAGE),
        MockResponse::json(
            200,
            r#"{"Fragments":[{"FragmentNumber":"2"},{"FragmentNumber":"3"}]}"#,
        ),
    ]));
    let service = create_test_service(transport.clone());

    let fragments = service
        .list_all_fragments(ListFragmentsRequest::for_stream_name("front-door"))
        .await
        .unwrap();

    assert_eq!(fragments.len(), 3);
    assert_eq!(transport.request_count(), 2);
    assert_eq!(transport.last_json_body().unwrap()["NextToken"], "page-2");
}

#[tokio::test]
async fn test_get_media_for_fragment_list() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::ok_with_body(
        vec![0x1a, 0x45, 0xdf, 0xa3],
    )
    .with_header("Content-Type", "video/webm")]));
    let service = create_test_service(transport.clone());

    let output = service
        .get_media_for_fragment_list(GetMediaForFragmentListRequest::for_stream_name(
            "front-door",
            ["91343852333181432392682062607743920146264237333"],
        ))
        .await
        .unwrap();

    assert_eq!(output.content_type.as_deref(), Some("video/webm"));
    assert_eq!(&output.payload[..], &[0x1a, 0x45, 0xdf, 0xa3]);
    assert_eq!(
        transport.last_json_body().unwrap(),
        serde_json::json!({
            "StreamName": "front-door",
            "Fragments": ["91343852333181432392682062607743920146264237333"]
        })
    );
}

#[tokio::test]
async fn test_resource_not_found() {
    let transport = Arc::new(MockTransport::with_responses(vec![MockResponse::aws_error(
        404,
        "ResourceNotFoundException",
        "Stream not found",
    )]));
    let service = create_test_service(transport);

    let result = service
        .list_fragments(ListFragmentsRequest::for_stream_name("missing"))
        .await;

    match result {
        Err(KinesisVideoArchivedMediaError::ResourceNotFound(e)) => {
            assert_eq!(e.status, 404);
        }
        other => panic!("expected ResourceNotFound, got {:?}", other),
    }
}
