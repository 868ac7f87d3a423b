//! Shared types for archived media requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a session plays live media, a live window, or archived media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackMode {
    /// Continuously updated playlist of the latest fragments.
    #[serde(rename = "LIVE")]
    Live,
    /// Live playback starting from a point in the past.
    #[serde(rename = "LIVE_REPLAY")]
    LiveReplay,
    /// Fixed playlist over a closed timestamp range.
    #[serde(rename = "ON_DEMAND")]
    OnDemand,
}

/// HLS segment container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerFormat {
    /// Fragmented MP4 (the service default).
    #[serde(rename = "FRAGMENTED_MP4")]
    FragmentedMp4,
    /// MPEG transport stream.
    #[serde(rename = "MPEG_TS")]
    MpegTs,
}

/// When HLS playlists insert discontinuity tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscontinuityMode {
    /// Between every fragment.
    #[serde(rename = "ALWAYS")]
    Always,
    /// Never.
    #[serde(rename = "NEVER")]
    Never,
    /// Only where fragments have a gap or overlap.
    #[serde(rename = "ON_DISCONTINUITY")]
    OnDiscontinuity,
}

/// Whether fragment start timestamps are included in playlists or manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayFragmentTimestamp {
    /// Always include.
    #[serde(rename = "ALWAYS")]
    Always,
    /// Never include.
    #[serde(rename = "NEVER")]
    Never,
}

/// Whether fragment numbers are included in DASH manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayFragmentNumber {
    /// Always include.
    #[serde(rename = "ALWAYS")]
    Always,
    /// Never include.
    #[serde(rename = "NEVER")]
    Never,
}

/// Source of the timestamps a fragment selector filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragmentSelectorType {
    /// Timestamps stamped by the producer.
    #[serde(rename = "PRODUCER_TIMESTAMP")]
    ProducerTimestamp,
    /// Timestamps assigned on ingestion.
    #[serde(rename = "SERVER_TIMESTAMP")]
    ServerTimestamp,
}

/// Range of fragment timestamps.
///
/// Both ends are required for clips and fragment listings. Live replay
/// sessions may leave the end open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimestampRange {
    /// Inclusive start.
    #[serde(
        rename = "StartTimestamp",
        with = "aws_runtime::codec::epoch_seconds::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub start_timestamp: Option<DateTime<Utc>>,
    /// End of the range.
    #[serde(
        rename = "EndTimestamp",
        with = "aws_runtime::codec::epoch_seconds::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub end_timestamp: Option<DateTime<Utc>>,
}

impl TimestampRange {
    /// Closed range between two timestamps.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start_timestamp: Some(start),
            end_timestamp: Some(end),
        }
    }

    /// Range with only a start.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start_timestamp: Some(start),
            end_timestamp: None,
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        matches!(
            (self.start_timestamp, self.end_timestamp),
            (Some(start), Some(end)) if start <= end
        )
    }
}

/// Fragment selection for streaming sessions.
///
/// Both members are optional; the service picks server timestamps and the
/// live edge when they are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackFragmentSelector {
    /// Timestamp source.
    #[serde(rename = "FragmentSelectorType", skip_serializing_if = "Option::is_none")]
    pub fragment_selector_type: Option<FragmentSelectorType>,
    /// Timestamp range.
    #[serde(rename = "TimestampRange", skip_serializing_if = "Option::is_none")]
    pub timestamp_range: Option<TimestampRange>,
}

/// Fragment selection for HLS sessions.
pub type HlsFragmentSelector = PlaybackFragmentSelector;

/// Fragment selection for DASH sessions.
pub type DashFragmentSelector = PlaybackFragmentSelector;

/// Fragment selection for clips and fragment listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentSelector {
    /// Timestamp source.
    #[serde(rename = "FragmentSelectorType")]
    pub fragment_selector_type: FragmentSelectorType,
    /// Timestamp range.
    #[serde(rename = "TimestampRange")]
    pub timestamp_range: TimestampRange,
}

/// Fragment selection for clips.
pub type ClipFragmentSelector = FragmentSelector;

impl FragmentSelector {
    /// Select by producer timestamps.
    pub fn producer(range: TimestampRange) -> Self {
        Self {
            fragment_selector_type: FragmentSelectorType::ProducerTimestamp,
            timestamp_range: range,
        }
    }

    /// Select by server timestamps.
    pub fn server(range: TimestampRange) -> Self {
        Self {
            fragment_selector_type: FragmentSelectorType::ServerTimestamp,
            timestamp_range: range,
        }
    }
}

/// A fragment of archived media.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Fragment {
    /// Identifier of the fragment.
    #[serde(rename = "FragmentNumber", default)]
    pub fragment_number: Option<String>,
    /// Size including metadata.
    #[serde(rename = "FragmentSizeInBytes", default)]
    pub fragment_size_in_bytes: Option<i64>,
    /// Producer timestamp.
    #[serde(
        rename = "ProducerTimestamp",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub producer_timestamp: Option<DateTime<Utc>>,
    /// Ingestion timestamp.
    #[serde(
        rename = "ServerTimestamp",
        with = "aws_runtime::codec::epoch_seconds::option",
        default
    )]
    pub server_timestamp: Option<DateTime<Utc>>,
    /// Playback duration.
    #[serde(rename = "FragmentLengthInMilliseconds", default)]
    pub fragment_length_in_milliseconds: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_selector_wire_format() {
        let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let end = Utc.timestamp_millis_opt(1_700_000_060_500).unwrap();
        let selector = FragmentSelector::server(TimestampRange::between(start, end));

        let json = serde_json::to_value(&selector).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "FragmentSelectorType": "SERVER_TIMESTAMP",
                "TimestampRange": {
                    "StartTimestamp": 1_700_000_000,
                    "EndTimestamp": 1_700_000_060.5
                }
            })
        );
    }

    #[test]
    fn test_open_range_omits_end() {
        let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let selector = PlaybackFragmentSelector {
            fragment_selector_type: Some(FragmentSelectorType::ProducerTimestamp),
            timestamp_range: Some(TimestampRange::starting_at(start)),
        };

        let json = serde_json::to_value(&selector).unwrap();
        assert!(json["TimestampRange"].get("EndTimestamp").is_none());
    }

    #[test]
    fn test_fragment_decodes_and_ignores_unknown() {
        let fragment: Fragment = serde_json::from_str(
            r#"{
                "FragmentNumber": "91343852333181432392682062607743920146264237331",
                "FragmentSizeInBytes": 3920,
                "ProducerTimestamp": 1.5e9,
                "ServerTimestamp": 1500000000.25,
                "FragmentLengthInMilliseconds": 2000,
                "SomethingNew": true
            }"#,
        )
        .unwrap();

        assert_eq!(fragment.fragment_size_in_bytes, Some(3920));
        assert_eq!(fragment.fragment_length_in_milliseconds, Some(2000));
        assert_eq!(
            fragment.server_timestamp.unwrap().timestamp_millis(),
            1_500_000_000_250
        );
    }

    #[test]
    fn test_closed_range() {
        let t0 = Utc.timestamp_opt(10, 0).unwrap();
        let t1 = Utc.timestamp_opt(20, 0).unwrap();
        assert!(TimestampRange::between(t0, t1).is_closed());
        assert!(!TimestampRange::between(t1, t0).is_closed());
        assert!(!TimestampRange::starting_at(t0).is_closed());
    }
}
