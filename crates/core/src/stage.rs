//! Product-stage constants and validation.
//!
//! Two generations of stage values coexist: the current four-value set and
//! the legacy values still present on older submissions. Matching compares
//! stages by exact value, so both sets stay valid at the intake boundary.

use crate::error::CoreError;

/// No revenue yet, possibly pre-launch.
pub const STAGE_PRE_REVENUE: &str = "pre-revenue";

/// First paying customers.
pub const STAGE_EARLY_MRR: &str = "early-mrr";

/// Repeatable growth.
pub const STAGE_SCALING: &str = "scaling";

/// Established business.
pub const STAGE_ESTABLISHED: &str = "established";

/// Current stage values offered by the intake form.
pub const VALID_STAGES: &[&str] = &[
    STAGE_PRE_REVENUE,
    STAGE_EARLY_MRR,
    STAGE_SCALING,
    STAGE_ESTABLISHED,
];

/// Stage values from earlier intake forms, still accepted and matchable.
pub const LEGACY_STAGES: &[&str] = &[
    "just-an-idea",
    "idea",
    "mvp",
    "launched",
    "some-users",
    "revenue",
];

/// Validate that a stage string is a current or legacy value.
pub fn validate_stage(stage: &str) -> Result<(), CoreError> {
    if VALID_STAGES.contains(&stage) || LEGACY_STAGES.contains(&stage) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid stage '{stage}'. Must be one of: {}",
            VALID_STAGES.join(", ")
        )))
    }
}
