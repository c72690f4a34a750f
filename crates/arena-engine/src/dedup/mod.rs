//! Round-global deduplication.
//!
//! Uniqueness is decided over the complete set of a round's submissions from
//! all teams, before any finding is scored. Order is receipt sequence, then
//! ascending team id, then position within the team's batch.

pub mod deduplicator;
pub mod signature;
pub mod submissions;

pub use deduplicator::{DedupOutcome, DuplicateGroup, MarkedFinding, RoundDeduplicator};
pub use signature::DuplicateSignature;
pub use submissions::{Submission, SubmissionLog};
