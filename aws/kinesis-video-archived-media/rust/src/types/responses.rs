//! Response types for archived media operations.

use super::common::Fragment;
use aws_runtime::Payload;
use bytes::Bytes;
use serde::Deserialize;

/// Output of `GetHLSStreamingSessionURL`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetHlsStreamingSessionUrlOutput {
    /// URL of the HLS master playlist.
    #[serde(rename = "HLSStreamingSessionURL", default)]
    pub hls_streaming_session_url: Option<String>,
}

/// Output of `GetDASHStreamingSessionURL`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetDashStreamingSessionUrlOutput {
    /// URL of the DASH manifest.
    #[serde(rename = "DASHStreamingSessionURL", default)]
    pub dash_streaming_session_url: Option<String>,
}

/// Media bytes returned by `GetClip` and `GetMediaForFragmentList`.
#[derive(Debug, Clone, Default)]
pub struct MediaOutput {
    /// Media type of the payload, e.g. `video/mp4`.
    pub content_type: Option<String>,
    /// Media bytes.
    pub payload: Bytes,
}

impl From<Payload> for MediaOutput {
    fn from(payload: Payload) -> Self {
        Self {
            content_type: payload.content_type,
            payload: payload.body,
        }
    }
}

/// Output of `GetClip`: an MP4 file.
pub type GetClipOutput = MediaOutput;

/// Output of `GetMediaForFragmentList`: a Matroska stream.
pub type GetMediaForFragmentListOutput = MediaOutput;

/// Output of `ListFragments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFragmentsOutput {
    /// Fragments in the page.
    #[serde(rename = "Fragments", default)]
    pub fragments: Vec<Fragment>,
    /// Token for the next page.
    #[serde(rename = "NextToken", default)]
    pub next_token: Option<String>,
}
