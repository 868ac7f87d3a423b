//! Request types for archived media operations.
//!
//! Every request identifies its stream by exactly one of `StreamName` or
//! `StreamARN`; [`validate`](GetClipRequest::validate) methods enforce this and
//! the numeric limits before anything is sent.

use super::common::*;
use aws_runtime::AwsError;
use serde::Serialize;

/// Minimum session URL lifetime in seconds.
pub const MIN_EXPIRES: i32 = 300;
/// Maximum session URL lifetime in seconds (12 hours).
pub const MAX_EXPIRES: i32 = 43_200;
/// Upper bound for HLS `MaxMediaPlaylistFragmentResults`.
pub const MAX_PLAYLIST_FRAGMENTS: i64 = 1_000;
/// Upper bound for DASH `MaxManifestFragmentResults`.
pub const MAX_MANIFEST_FRAGMENTS: i64 = 5_000;
/// Upper bound for `ListFragments` page size.
pub const MAX_LIST_FRAGMENTS: i64 = 1_000;
/// Upper bound for fragments requested in one media call.
pub const MAX_MEDIA_FRAGMENTS: usize = 1_000;

fn validate_stream(stream_name: Option<&str>, stream_arn: Option<&str>) -> Result<(), AwsError> {
    match (stream_name, stream_arn) {
        (Some(name), None) if !name.is_empty() => Ok(()),
        (None, Some(arn)) if !arn.is_empty() => Ok(()),
        (Some(_), Some(_)) => Err(AwsError::validation(
            "specify either StreamName or StreamARN, not both",
        )),
        _ => Err(AwsError::validation("StreamName or StreamARN is required")),
    }
}

fn validate_range<T: PartialOrd + std::fmt::Display>(
    field: &str,
    value: Option<T>,
    min: T,
    max: T,
) -> Result<(), AwsError> {
    match value {
        Some(v) if v < min || v > max => Err(AwsError::validation(format!(
            "{} must be between {} and {}, got {}",
            field, min, max, v
        ))),
        _ => Ok(()),
    }
}

/// Input for `GetHLSStreamingSessionURL`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetHlsStreamingSessionUrlRequest {
    /// Stream name.
    #[serde(rename = "StreamName", skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// Stream ARN.
    #[serde(rename = "StreamARN", skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
    /// Live, live replay or on demand.
    #[serde(rename = "PlaybackMode", skip_serializing_if = "Option::is_none")]
    pub playback_mode: Option<PlaybackMode>,
    /// Which fragments the playlist covers.
    #[serde(rename = "HLSFragmentSelector", skip_serializing_if = "Option::is_none")]
    pub hls_fragment_selector: Option<HlsFragmentSelector>,
    /// Segment container format.
    #[serde(rename = "ContainerFormat", skip_serializing_if = "Option::is_none")]
    pub container_format: Option<ContainerFormat>,
    /// Discontinuity tag placement.
    #[serde(rename = "DiscontinuityMode", skip_serializing_if = "Option::is_none")]
    pub discontinuity_mode: Option<DiscontinuityMode>,
    /// Whether to include program date-time tags.
    #[serde(rename = "DisplayFragmentTimestamp", skip_serializing_if = "Option::is_none")]
    pub display_fragment_timestamp: Option<DisplayFragmentTimestamp>,
    /// Session lifetime in seconds.
    #[serde(rename = "Expires", skip_serializing_if = "Option::is_none")]
    pub expires: Option<i32>,
    /// Maximum fragments in the media playlist.
    #[serde(
        rename = "MaxMediaPlaylistFragmentResults",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_media_playlist_fragment_results: Option<i64>,
}

impl GetHlsStreamingSessionUrlRequest {
    /// Request a session for a stream name.
    pub fn for_stream_name(stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: Some(stream_name.into()),
            ..Default::default()
        }
    }

    /// Request a session for a stream ARN.
    pub fn for_stream_arn(stream_arn: impl Into<String>) -> Self {
        Self {
            stream_arn: Some(stream_arn.into()),
            ..Default::default()
        }
    }

    /// Set the playback mode.
    pub fn with_playback_mode(mut self, mode: PlaybackMode) -> Self {
        self.playback_mode = Some(mode);
        self
    }

    /// Set the fragment selector.
    pub fn with_fragment_selector(mut self, selector: HlsFragmentSelector) -> Self {
        self.hls_fragment_selector = Some(selector);
        self
    }

    /// Set the container format.
    pub fn with_container_format(mut self, format: ContainerFormat) -> Self {
        self.container_format = Some(format);
        self
    }

    /// Set the session lifetime.
    pub fn with_expires(mut self, seconds: i32) -> Self {
        self.expires = Some(seconds);
        self
    }

    /// Set the playlist size.
    pub fn with_max_media_playlist_fragment_results(mut self, max: i64) -> Self {
        self.max_media_playlist_fragment_results = Some(max);
        self
    }

    /// Validate stream identity and limits.
    pub fn validate(&self) -> Result<(), AwsError> {
        validate_stream(self.stream_name.as_deref(), self.stream_arn.as_deref())?;
        validate_range("Expires", self.expires, MIN_EXPIRES, MAX_EXPIRES)?;
        validate_range(
            "MaxMediaPlaylistFragmentResults",
            self.max_media_playlist_fragment_results,
            1,
            MAX_PLAYLIST_FRAGMENTS,
        )
    }
}

/// Input for `GetDASHStreamingSessionURL`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetDashStreamingSessionUrlRequest {
    /// Stream name.
    #[serde(rename = "StreamName", skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// Stream ARN.
    #[serde(rename = "StreamARN", skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
    /// Live, live replay or on demand.
    #[serde(rename = "PlaybackMode", skip_serializing_if = "Option::is_none")]
    pub playback_mode: Option<PlaybackMode>,
    /// Whether to include fragment timestamps.
    #[serde(rename = "DisplayFragmentTimestamp", skip_serializing_if = "Option::is_none")]
    pub display_fragment_timestamp: Option<DisplayFragmentTimestamp>,
    /// Whether to include fragment numbers.
    #[serde(rename = "DisplayFragmentNumber", skip_serializing_if = "Option::is_none")]
    pub display_fragment_number: Option<DisplayFragmentNumber>,
    /// Which fragments the manifest covers.
    #[serde(rename = "DASHFragmentSelector", skip_serializing_if = "Option::is_none")]
    pub dash_fragment_selector: Option<DashFragmentSelector>,
    /// Session lifetime in seconds.
    #[serde(rename = "Expires", skip_serializing_if = "Option::is_none")]
    pub expires: Option<i32>,
    /// Maximum fragments in the manifest.
    #[serde(rename = "MaxManifestFragmentResults", skip_serializing_if = "Option::is_none")]
    pub max_manifest_fragment_results: Option<i64>,
}

impl GetDashStreamingSessionUrlRequest {
    /// Request a session for a stream name.
    pub fn for_stream_name(stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: Some(stream_name.into()),
            ..Default::default()
        }
    }

    /// Request a session for a stream ARN.
    pub fn for_stream_arn(stream_arn: impl Into<String>) -> Self {
        Self {
            stream_arn: Some(stream_arn.into()),
            ..Default::default()
        }
    }

    /// Set the playback mode.
    pub fn with_playback_mode(mut self, mode: PlaybackMode) -> Self {
        self.playback_mode = Some(mode);
        self
    }

    /// Set the fragment selector.
    pub fn with_fragment_selector(mut self, selector: DashFragmentSelector) -> Self {
        self.dash_fragment_selector = Some(selector);
        self
    }

    /// Set the session lifetime.
    pub fn with_expires(mut self, seconds: i32) -> Self {
        self.expires = Some(seconds);
        self
    }

    /// Set the manifest size.
    pub fn with_max_manifest_fragment_results(mut self, max: i64) -> Self {
        self.max_manifest_fragment_results = Some(max);
        self
    }

    /// Validate stream identity and limits.
    pub fn validate(&self) -> Result<(), AwsError> {
        validate_stream(self.stream_name.as_deref(), self.stream_arn.as_deref())?;
        validate_range("Expires", self.expires, MIN_EXPIRES, MAX_EXPIRES)?;
        validate_range(
            "MaxManifestFragmentResults",
            self.max_manifest_fragment_results,
            1,
            MAX_MANIFEST_FRAGMENTS,
        )
    }
}

/// Input for `GetClip`.
#[derive(Debug, Clone, Serialize)]
pub struct GetClipRequest {
    /// Stream name.
    #[serde(rename = "StreamName", skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// Stream ARN.
    #[serde(rename = "StreamARN", skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
    /// Time range of the clip.
    #[serde(rename = "ClipFragmentSelector")]
    pub clip_fragment_selector: ClipFragmentSelector,
}

impl GetClipRequest {
    /// Clip a stream identified by name.
    pub fn for_stream_name(stream_name: impl Into<String>, selector: ClipFragmentSelector) -> Self {
        Self {
            stream_name: Some(stream_name.into()),
            stream_arn: None,
            clip_fragment_selector: selector,
        }
    }

    /// Clip a stream identified by ARN.
    pub fn for_stream_arn(stream_arn: impl Into<String>, selector: ClipFragmentSelector) -> Self {
        Self {
            stream_name: None,
            stream_arn: Some(stream_arn.into()),
            clip_fragment_selector: selector,
        }
    }

    /// Validate stream identity and the clip range.
    pub fn validate(&self) -> Result<(), AwsError> {
        validate_stream(self.stream_name.as_deref(), self.stream_arn.as_deref())?;
        if !self.clip_fragment_selector.timestamp_range.is_closed() {
            return Err(AwsError::validation(
                "clip TimestampRange needs a start no later than its end",
            ));
        }
        Ok(())
    }
}

/// Input for `GetMediaForFragmentList`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMediaForFragmentListRequest {
    /// Stream name.
    #[serde(rename = "StreamName", skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// Stream ARN.
    #[serde(rename = "StreamARN", skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
    /// Fragment numbers to fetch.
    #[serde(rename = "Fragments")]
    pub fragments: Vec<String>,
}

impl GetMediaForFragmentListRequest {
    /// Fetch fragments of a stream identified by name.
    pub fn for_stream_name(
        stream_name: impl Into<String>,
        fragments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            stream_name: Some(stream_name.into()),
            stream_arn: None,
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// Fetch fragments of a stream identified by ARN.
    pub fn for_stream_arn(
        stream_arn: impl Into<String>,
        fragments: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            stream_name: None,
            stream_arn: Some(stream_arn.into()),
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// Validate stream identity and the fragment list.
    pub fn validate(&self) -> Result<(), AwsError> {
        validate_stream(self.stream_name.as_deref(), self.stream_arn.as_deref())?;
        if self.fragments.is_empty() || self.fragments.len() > MAX_MEDIA_FRAGMENTS {
            return Err(AwsError::validation(format!(
                "Fragments must contain between 1 and {} entries",
                MAX_MEDIA_FRAGMENTS
            )));
        }
        Ok(())
    }
}

/// Input for `ListFragments`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListFragmentsRequest {
    /// Stream name.
    #[serde(rename = "StreamName", skip_serializing_if = "Option::is_none")]
    pub stream_name: Option<String>,
    /// Stream ARN.
    #[serde(rename = "StreamARN", skip_serializing_if = "Option::is_none")]
    pub stream_arn: Option<String>,
    /// Page size.
    #[serde(rename = "MaxResults", skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i64>,
    /// Continuation token.
    #[serde(rename = "NextToken", skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Timestamp filter.
    #[serde(rename = "FragmentSelector", skip_serializing_if = "Option::is_none")]
    pub fragment_selector: Option<FragmentSelector>,
}

impl ListFragmentsRequest {
    /// List fragments of a stream identified by name.
    pub fn for_stream_name(stream_name: impl Into<String>) -> Self {
        Self {
            stream_name: Some(stream_name.into()),
            ..Default::default()
        }
    }

    /// List fragments of a stream identified by ARN.
    pub fn for_stream_arn(stream_arn: impl Into<String>) -> Self {
        Self {
            stream_arn: Some(stream_arn.into()),
            ..Default::default()
        }
    }

    /// Set the timestamp filter.
    pub fn with_fragment_selector(mut self, selector: FragmentSelector) -> Self {
        self.fragment_selector = Some(selector);
        self
    }

    /// Set the page size.
    pub fn with_max_results(mut self, max: i64) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Continue from a previous page.
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    /// Validate stream identity and page size.
    pub fn validate(&self) -> Result<(), AwsError> {
        validate_stream(self.stream_name.as_deref(), self.stream_arn.as_deref())?;
        validate_range("MaxResults", self.max_results, 1, MAX_LIST_FRAGMENTS)
    }
}
