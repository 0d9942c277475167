// Model exports
pub mod domain;

pub use domain::{
    FilterCandidate, FilterSubject, GeoPoint, ParseIntentError, ProfileSnapshot, RankedMatch,
    RelationshipIntent, UserProfile,
};
