//! Execution-task progress constants and validation.

use crate::error::CoreError;

/// The founder completed the task.
pub const PROGRESS_DONE: &str = "done";

/// The founder chose to skip the task.
pub const PROGRESS_SKIPPED: &str = "skipped";

/// All valid task-progress status values.
pub const VALID_PROGRESS_STATUSES: &[&str] = &[PROGRESS_DONE, PROGRESS_SKIPPED];

/// Validate that a task-progress status is one of the accepted values.
pub fn validate_progress_status(status: &str) -> Result<(), CoreError> {
    if VALID_PROGRESS_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid task status '{status}'. Must be one of: {}",
            VALID_PROGRESS_STATUSES.join(", ")
        )))
    }
}
