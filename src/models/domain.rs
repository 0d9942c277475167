use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A user's stated dating goal, from the fixed 5-value vocabulary.
///
/// The derived ordering is what canonicalizes unordered intent pairs in the
/// compatibility tier table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipIntent {
    LongTerm,
    Casual,
    Hookups,
    Friendship,
    Unsure,
}

impl RelationshipIntent {
    /// All recognized values, in canonical order.
    pub const ALL: [RelationshipIntent; 5] = [
        RelationshipIntent::LongTerm,
        RelationshipIntent::Casual,
        RelationshipIntent::Hookups,
        RelationshipIntent::Friendship,
        RelationshipIntent::Unsure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipIntent::LongTerm => "long_term",
            RelationshipIntent::Casual => "casual",
            RelationshipIntent::Hookups => "hookups",
            RelationshipIntent::Friendship => "friendship",
            RelationshipIntent::Unsure => "unsure",
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("unrecognized relationship intent: {0}")]
pub struct ParseIntentError(String);

impl FromStr for RelationshipIntent {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long_term" => Ok(RelationshipIntent::LongTerm),
            "casual" => Ok(RelationshipIntent::Casual),
            "hookups" => Ok(RelationshipIntent::Hookups),
            "friendship" => Ok(RelationshipIntent::Friendship),
            "unsure" => Ok(RelationshipIntent::Unsure),
            other => Err(ParseIntentError(other.to_string())),
        }
    }
}

/// Deserialize an intent leniently: unrecognized or missing values become
/// `None` instead of failing the whole profile record.
fn intent_or_none<'de, D>(deserializer: D) -> Result<Option<RelationshipIntent>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Full profile record as stored upstream. The engine never mutates these;
/// scoring and filtering views are built fresh per evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "photoIds", default)]
    pub photo_ids: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "interestedIn", default)]
    pub interested_in: Vec<String>,
    #[serde(
        rename = "relationshipIntent",
        default,
        deserialize_with = "intent_or_none"
    )]
    pub relationship_intent: Option<RelationshipIntent>,
    #[serde(rename = "matchRadiusKm", default = "default_match_radius")]
    pub match_radius_km: f64,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(rename = "lastActiveAt", default)]
    pub last_active_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_match_radius() -> f64 {
    50.0
}

impl UserProfile {
    /// Scoring-facing view of this profile.
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            location: self.location,
            match_radius_km: self.match_radius_km,
            relationship_intent: self.relationship_intent,
            interests: self.interests.clone(),
            last_active_at: self.last_active_at,
        }
    }

    /// Viewer-side view for the eligibility filter.
    pub fn filter_subject(&self) -> FilterSubject {
        FilterSubject {
            interested_in: self.interested_in.clone(),
            relationship_intent: self.relationship_intent,
        }
    }

    /// Candidate-side view for the eligibility filter.
    pub fn filter_candidate(&self) -> FilterCandidate {
        FilterCandidate {
            gender: self.gender.clone().unwrap_or_default(),
            relationship_intent: self.relationship_intent,
        }
    }

    /// Whether the profile carries a usable location. The upstream store
    /// writes zero coordinates for "unset", so those count as missing.
    pub fn has_valid_location(&self) -> bool {
        matches!(self.location, Some(point) if point.latitude != 0.0 && point.longitude != 0.0)
    }
}

/// Immutable scoring inputs for one side of an evaluation.
///
/// `match_radius_km` is only read on the viewer side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(rename = "matchRadiusKm", default = "default_match_radius")]
    pub match_radius_km: f64,
    #[serde(
        rename = "relationshipIntent",
        default,
        deserialize_with = "intent_or_none"
    )]
    pub relationship_intent: Option<RelationshipIntent>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "lastActiveAt", default)]
    pub last_active_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Viewer side of the eligibility check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSubject {
    #[serde(rename = "interestedIn", default)]
    pub interested_in: Vec<String>,
    #[serde(
        rename = "relationshipIntent",
        default,
        deserialize_with = "intent_or_none"
    )]
    pub relationship_intent: Option<RelationshipIntent>,
}

/// Candidate side of the eligibility check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterCandidate {
    #[serde(default)]
    pub gender: String,
    #[serde(
        rename = "relationshipIntent",
        default,
        deserialize_with = "intent_or_none"
    )]
    pub relationship_intent: Option<RelationshipIntent>,
}

/// Scored candidate surfaced by the ranking pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(rename = "matchScore")]
    pub score: u8,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    #[serde(rename = "sharedInterests")]
    pub shared_interests: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_parses_fixed_vocabulary() {
        for intent in RelationshipIntent::ALL {
            assert_eq!(intent.as_str().parse::<RelationshipIntent>().unwrap(), intent);
        }
    }

    #[test]
    fn test_intent_rejects_unknown_value() {
        let err = "polyfidelity".parse::<RelationshipIntent>().unwrap_err();
        assert!(err.to_string().contains("polyfidelity"));
    }

    #[test]
    fn test_unknown_intent_deserializes_as_absent() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"userId": "u1", "relationshipIntent": "mystery"}"#,
        )
        .unwrap();
        assert_eq!(profile.relationship_intent, None);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let profile: UserProfile = serde_json::from_str(r#"{"userId": "u1"}"#).unwrap();
        assert_eq!(profile.match_radius_km, 50.0);
        assert!(profile.interests.is_empty());
        assert!(profile.location.is_none());
        assert!(profile.last_active_at.is_none());
    }

    #[test]
    fn test_zero_coordinates_are_not_a_valid_location() {
        let mut profile: UserProfile = serde_json::from_str(r#"{"userId": "u1"}"#).unwrap();
        profile.location = Some(GeoPoint { latitude: 0.0, longitude: 0.0 });
        assert!(!profile.has_valid_location());

        profile.location = Some(GeoPoint { latitude: 40.7128, longitude: -74.0060 });
        assert!(profile.has_valid_location());
    }
}
