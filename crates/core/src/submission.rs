//! Submission lifecycle constants and transition rules.

use crate::error::CoreError;

/// Created but no report persisted yet.
pub const STATUS_PENDING: &str = "pending";

/// A report has been generated and saved; eligible for matching.
pub const STATUS_ANALYZED: &str = "analyzed";

/// Grouped into a review pod.
pub const STATUS_MATCHED: &str = "matched";

/// Received the required number of peer reviews.
pub const STATUS_REVIEWED: &str = "reviewed";

/// All valid submission status values, in lifecycle order.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_ANALYZED,
    STATUS_MATCHED,
    STATUS_REVIEWED,
];

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid submission status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Whether a submission may move from `from` to `to`.
///
/// The lifecycle is strictly forward: pending -> analyzed -> matched ->
/// reviewed. There is no terminal-state cleanup or expiry.
pub fn can_transition(from: &str, to: &str) -> bool {
    matches!(
        (from, to),
        (STATUS_PENDING, STATUS_ANALYZED)
            | (STATUS_ANALYZED, STATUS_MATCHED)
            | (STATUS_MATCHED, STATUS_REVIEWED)
    )
}
