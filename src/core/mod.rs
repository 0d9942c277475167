// Core algorithm exports
pub mod completeness;
pub mod distance;
pub mod filters;
pub mod intent;
pub mod matcher;
pub mod scoring;

pub use completeness::{missing_fields, profile_completeness};
pub use distance::{distance_between, distance_if_known, haversine_distance};
pub use filters::is_eligible;
pub use intent::{intent_tier, is_hard_incompatible, IntentTier};
pub use matcher::{MatchResult, Matcher};
pub use scoring::{compatibility_score, interest_overlap};
