use crate::config::MatchingSettings;
use crate::core::{
    distance::distance_if_known,
    filters::is_eligible,
    scoring::{compatibility_score, interest_overlap},
};
use crate::models::{RankedMatch, UserProfile};
use chrono::{DateTime, Utc};

/// Result of ranking a candidate pool
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Feed-ranking orchestrator
///
/// # Pipeline Stages
/// 1. Drop the viewer's own profile
/// 2. Eligibility filter (hard exclusions)
/// 3. Compatibility scoring
/// 4. Ranking and truncation
///
/// Pure: the candidate pool is passed in, the ranked list is returned, and
/// the evaluation instant is an explicit argument.
#[derive(Debug, Clone)]
pub struct Matcher {
    matching: MatchingSettings,
}

impl Matcher {
    pub fn new(matching: MatchingSettings) -> Self {
        Self { matching }
    }

    pub fn with_defaults() -> Self {
        Self {
            matching: MatchingSettings::default(),
        }
    }

    /// Rank a pool of candidates for a viewer.
    ///
    /// Ineligible candidates are dropped; everyone else is scored and kept,
    /// including candidates outside the viewer's radius (they simply earn no
    /// distance points). Results are sorted by score descending, ties broken
    /// by distance ascending with unknown distances last.
    ///
    /// # Arguments
    /// * `viewer` - The profile the feed is being built for
    /// * `candidates` - Potential candidates from the profile store
    /// * `limit` - Requested result cap; falls back to the configured default
    ///   and is clamped to the configured maximum
    /// * `now` - Evaluation instant for activity recency
    pub fn rank(
        &self,
        viewer: &UserProfile,
        candidates: Vec<UserProfile>,
        limit: Option<usize>,
        now: DateTime<Utc>,
    ) -> MatchResult {
        let total_candidates = candidates.len();
        let limit = limit
            .unwrap_or(self.matching.default_limit)
            .min(self.matching.max_limit);

        let subject = viewer.filter_subject();
        let viewer_snapshot = viewer.snapshot();

        let mut matches: Vec<RankedMatch> = candidates
            .into_iter()
            .filter(|candidate| candidate.user_id != viewer.user_id)
            .filter(|candidate| is_eligible(&subject, &candidate.filter_candidate()))
            .map(|candidate| {
                let distance_km =
                    distance_if_known(viewer.location.as_ref(), candidate.location.as_ref());
                let snapshot = candidate.snapshot();
                let score = compatibility_score(&viewer_snapshot, &snapshot, distance_km, now);
                let (_, shared_interests) =
                    interest_overlap(&viewer_snapshot.interests, &snapshot.interests);

                RankedMatch {
                    user_id: candidate.user_id,
                    name: candidate.name,
                    score,
                    distance_km,
                    shared_interests,
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score.cmp(&a.score).then_with(|| {
                let a_distance = a.distance_km.unwrap_or(f64::INFINITY);
                let b_distance = b.distance_km.unwrap_or(f64::INFINITY);
                a_distance
                    .partial_cmp(&b_distance)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
        });

        tracing::debug!(
            total_candidates,
            eligible = matches.len(),
            limit,
            "ranked candidate pool"
        );

        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
