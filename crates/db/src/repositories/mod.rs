//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-step write sequences
//! (submission + report, match-and-create, review + counter) run inside a
//! single transaction owned by the repository method.

pub mod analysis_repo;
pub mod founder_report_repo;
pub mod matching_repo;
pub mod pod_repo;
pub mod profile_repo;
pub mod review_repo;
pub mod submission_repo;
pub mod task_progress_repo;

pub use analysis_repo::AnalysisRepo;
pub use founder_report_repo::FounderReportRepo;
pub use matching_repo::{MatchOutcome, MatchingRepo};
pub use pod_repo::PodRepo;
pub use profile_repo::ProfileRepo;
pub use review_repo::ReviewRepo;
pub use submission_repo::SubmissionRepo;
pub use task_progress_repo::TaskProgressRepo;
