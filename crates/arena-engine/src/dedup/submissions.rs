//! Ordered collection of a round's submissions.

use std::cmp::Ordering;

use arena_core::{Finding, TeamId};

/// A finding plus its receipt coordinates.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Receipt sequence. Findings of one concurrent wave share a sequence.
    pub sequence: u64,
    /// Position within the submitting team's batch (0 for single records).
    pub position: usize,
    pub finding: Finding,
}

impl Submission {
    pub fn team_id(&self) -> &TeamId {
        self.finding.team_id()
    }

    /// Processing order: sequence, then team id, then batch position.
    pub fn processing_order(&self, other: &Self) -> Ordering {
        self.sequence
            .cmp(&other.sequence)
            .then_with(|| self.team_id().cmp(other.team_id()))
            .then_with(|| self.position.cmp(&other.position))
    }
}

/// Collects every team's findings for one round, in receipt order.
///
/// Producers may run concurrently; their output must funnel through one
/// log (or a mutex around it) before deduplication.
#[derive(Debug, Default)]
pub struct SubmissionLog {
    next_sequence: u64,
    entries: Vec<Submission>,
}

impl SubmissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finding as received. Returns its sequence number.
    pub fn record(&mut self, finding: Finding) -> u64 {
        let sequence = self.bump();
        self.entries.push(Submission {
            sequence,
            position: 0,
            finding,
        });
        sequence
    }

    /// Record several batches that arrived together. All findings share one
    /// sequence number, so ties between teams fall to ascending team id.
    pub fn record_concurrent<I>(&mut self, batches: I) -> u64
    where
        I: IntoIterator<Item = Vec<Finding>>,
    {
        let sequence = self.bump();
        for batch in batches {
            for (position, finding) in batch.into_iter().enumerate() {
                self.entries.push(Submission {
                    sequence,
                    position,
                    finding,
                });
            }
        }
        sequence
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Submission> + '_ {
        self.entries.iter()
    }

    /// Consume the log, returning submissions in processing order.
    pub fn into_ordered(self) -> Vec<Submission> {
        let mut entries = self.entries;
        // Stable sort: equal keys (same team, same wave, same position) keep receipt order.
        entries.sort_by(Submission::processing_order);
        entries
    }

    fn bump(&mut self) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        sequence
    }
}
