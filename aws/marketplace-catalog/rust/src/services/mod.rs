//! Service implementations for Marketplace Catalog operations.

mod change_sets;
mod entities;

pub use change_sets::ChangeSetsService;
pub use entities::EntitiesService;

use aws_runtime::AwsError;

/// Reject an empty required member before any I/O.
pub(crate) fn require(member: &str, value: &str) -> Result<(), AwsError> {
    if value.is_empty() {
        return Err(AwsError::validation(format!("{} must not be empty", member)));
    }
    Ok(())
}
