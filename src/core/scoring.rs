use crate::core::intent::intent_tier;
use crate::models::{ProfileSnapshot, RelationshipIntent};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

/// Maximum points from the distance sub-score.
const DISTANCE_CAP: f64 = 30.0;
/// Maximum points from the interest overlap sub-score.
const INTEREST_CAP: f64 = 30.0;
/// Upper bound of the combined score.
const MAX_SCORE: u16 = 100;

/// Calculate a compatibility score (0-100) for a candidate as seen by a viewer
///
/// Scoring formula, four independently bounded sub-scores summed and clamped:
///     distance score (0-30)   # linear falloff within the viewer's radius
///     intent score (0-30)     # tiered lookup over the intent vocabulary
///     interest score (0-30)   # overlap relative to the smaller tag set
///     activity score (0-10)   # bucketed recency of the candidate's activity
///
/// `distance_km` is supplied by the caller (`None` when either side has not
/// shared a location); `now` is the evaluation instant, passed in so the
/// result is a pure function of its arguments.
pub fn compatibility_score(
    viewer: &ProfileSnapshot,
    candidate: &ProfileSnapshot,
    distance_km: Option<f64>,
    now: DateTime<Utc>,
) -> u8 {
    let distance = distance_subscore(distance_km, viewer.match_radius_km);
    let intent = intent_subscore(viewer.relationship_intent, candidate.relationship_intent);
    let (interests, _) = interest_overlap(&viewer.interests, &candidate.interests);
    let activity = activity_subscore(candidate.last_active_at, now);

    let total = distance as u16 + intent as u16 + interests as u16 + activity as u16;
    total.min(MAX_SCORE) as u8
}

/// Distance sub-score (0-30)
///
/// Linear falloff from 30 at distance zero to 0 at the radius boundary.
/// Unknown distance scores 0, and the unused points are not redistributed:
/// "no location data" must not look like "close by".
#[inline]
fn distance_subscore(distance_km: Option<f64>, radius_km: f64) -> u8 {
    let Some(distance) = distance_km else {
        return 0;
    };
    if distance >= radius_km {
        return 0;
    }

    (DISTANCE_CAP * (1.0 - distance / radius_km)).round() as u8
}

/// Intent sub-score (0-30)
///
/// Absent intent on either side yields 0; otherwise the symmetric tier table
/// decides.
#[inline]
fn intent_subscore(
    viewer: Option<RelationshipIntent>,
    candidate: Option<RelationshipIntent>,
) -> u8 {
    match (viewer, candidate) {
        (Some(a), Some(b)) => intent_tier(a, b).points(),
        _ => 0,
    }
}

/// Interest overlap sub-score (0-30) plus the shared tags themselves.
///
/// Overlap is normalized by the smaller of the two deduplicated tag sets, so
/// a candidate whose entire small set is contained in the viewer's larger
/// set earns the full 30. Shared tags come back sorted.
pub fn interest_overlap(viewer: &[String], candidate: &[String]) -> (u8, Vec<String>) {
    if viewer.is_empty() || candidate.is_empty() {
        return (0, Vec::new());
    }

    let viewer_set: HashSet<&str> = viewer.iter().map(String::as_str).collect();
    let candidate_set: HashSet<&str> = candidate.iter().map(String::as_str).collect();

    let mut shared: Vec<String> = viewer_set
        .intersection(&candidate_set)
        .map(|tag| tag.to_string())
        .collect();
    shared.sort();

    let min_size = viewer_set.len().min(candidate_set.len());
    let score = (INTEREST_CAP * shared.len() as f64 / min_size as f64).round() as u8;

    (score, shared)
}

/// Activity-recency sub-score (0-10)
///
/// Bucketed on elapsed time since the candidate was last active; no
/// interpolation between buckets. Absent timestamp scores 0.
#[inline]
fn activity_subscore(last_active_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u8 {
    let Some(last_active) = last_active_at else {
        return 0;
    };

    let elapsed = now.signed_duration_since(last_active);
    if elapsed < Duration::hours(1) {
        10
    } else if elapsed < Duration::hours(24) {
        6
    } else if elapsed < Duration::hours(72) {
        3
    } else {
        0
    }
}
