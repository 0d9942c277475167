//! Ember Match - compatibility engine for the Ember dating app
//!
//! This library provides the match compatibility engine used by the Ember
//! dating app: hard eligibility filtering, a four-component compatibility
//! score, profile completeness, and a pure feed-ranking pipeline on top of
//! them. It performs no I/O; callers hand in profile snapshots and get plain
//! values back.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use config::{MatchingSettings, Settings};
pub use core::{
    compatibility_score, haversine_distance, intent_tier, is_eligible, missing_fields,
    profile_completeness, IntentTier, MatchResult, Matcher,
};
pub use models::{
    FilterCandidate, FilterSubject, GeoPoint, ProfileSnapshot, RankedMatch, RelationshipIntent,
    UserProfile,
};
