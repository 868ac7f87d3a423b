//! AWS error code to typed error mapping.

use super::KinesisVideoArchivedMediaError;
use aws_runtime::ServiceError;

/// Map a parsed service error to its typed variant.
pub fn map_kinesis_video_archived_media_error(error: ServiceError) -> KinesisVideoArchivedMediaError {
    use KinesisVideoArchivedMediaError::*;

    match error.code.as_str() {
        "ClientLimitExceededException" => ClientLimitExceeded(error),
        "InvalidArgumentException" => InvalidArgument(error),
        "InvalidCodecPrivateDataException" => InvalidCodecPrivateData(error),
        "InvalidMediaFrameException" => InvalidMediaFrame(error),
        "MissingCodecPrivateDataException" => MissingCodecPrivateData(error),
        "NoDataRetentionException" => NoDataRetention(error),
        "NotAuthorizedException" => NotAuthorized(error),
        "ResourceNotFoundException" => ResourceNotFound(error),
        "UnsupportedStreamMediaTypeException" => UnsupportedStreamMediaType(error),
        _ => Service(error),
    }
}
