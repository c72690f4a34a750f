//! RoundDeduplicator: marks the first submission per signature as unique.

use std::collections::hash_map::Entry;

use arena_core::{Finding, TeamId};
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;

use super::signature::DuplicateSignature;
use super::submissions::SubmissionLog;

/// A finding with its round-global uniqueness decision.
#[derive(Debug, Clone)]
pub struct MarkedFinding {
    pub finding: Finding,
    pub is_unique: bool,
    /// Index in processing order.
    pub order: usize,
}

/// A signature reported more than once in the round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateGroup {
    pub signature: DuplicateSignature,
    pub digest: String,
    /// Team credited with the unique discovery.
    pub first_team: TeamId,
    /// Number of submissions sharing the signature (always > 1).
    pub size: usize,
}

#[derive(Debug, Clone, Default)]
pub struct DedupOutcome {
    /// Every submission, in processing order.
    pub findings: Vec<MarkedFinding>,
    /// Duplicate groups, sorted by signature.
    pub groups: Vec<DuplicateGroup>,
}

impl DedupOutcome {
    pub fn unique_count(&self) -> usize {
        self.findings.iter().filter(|f| f.is_unique).count()
    }
}

/// Stateless: every round gets a fresh signature set.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoundDeduplicator;

impl RoundDeduplicator {
    pub fn new() -> Self {
        Self
    }

    /// Decide uniqueness over the complete round. Takes the whole log by
    /// value so no decision is made on a partial set.
    pub fn mark(&self, log: SubmissionLog) -> DedupOutcome {
        let ordered = log.into_ordered();
        let mut seen: FxHashMap<DuplicateSignature, (TeamId, usize)> = FxHashMap::default();
        let mut findings = Vec::with_capacity(ordered.len());

        for (order, submission) in ordered.into_iter().enumerate() {
            let signature = DuplicateSignature::of(&submission.finding);
            let is_unique = match seen.entry(signature) {
                Entry::Occupied(mut entry) => {
                    entry.get_mut().1 += 1;
                    false
                }
                Entry::Vacant(entry) => {
                    entry.insert((submission.finding.team_id().clone(), 1));
                    true
                }
            };
            findings.push(MarkedFinding {
                finding: submission.finding,
                is_unique,
                order,
            });
        }

        let mut groups: Vec<DuplicateGroup> = seen
            .into_iter()
            .filter(|(_, (_, size))| *size > 1)
            .map(|(signature, (first_team, size))| DuplicateGroup {
                digest: signature.digest(),
                signature,
                first_team,
                size,
            })
            .collect();
        groups.sort_by(|a, b| a.signature.cmp(&b.signature));

        debug!(
            submissions = findings.len(),
            duplicate_groups = groups.len(),
            "Round deduplicated"
        );

        DedupOutcome { findings, groups }
    }
}
