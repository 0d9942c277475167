use crate::models::UserProfile;

// Section weights; they total exactly 100.
const IDENTITY_WEIGHT: u8 = 30;
const BIO_WEIGHT: u8 = 10;
const INTERESTS_WEIGHT: u8 = 15;
const INTENT_WEIGHT: u8 = 10;
const GENDER_PREFERENCE_WEIGHT: u8 = 10;
const LOCATION_WEIGHT: u8 = 25;

/// Minimum photo count for the identity section.
const REQUIRED_PHOTOS: usize = 4;
/// Minimum trimmed bio length to count as written.
const MIN_BIO_CHARS: usize = 20;

/// Profile completeness percentage (0-100), shown as a trust signal in the UI
///
/// Each section is binary: fully earned or fully withheld. The identity
/// section stands in for signup verification; name, age, gender and four
/// photos present is taken to mean onboarding finished.
pub fn profile_completeness(profile: &UserProfile) -> u8 {
    let mut score = 0;

    if has_identity_section(profile) {
        score += IDENTITY_WEIGHT;
    }
    if has_bio(profile) {
        score += BIO_WEIGHT;
    }
    if !profile.interests.is_empty() {
        score += INTERESTS_WEIGHT;
    }
    if profile.relationship_intent.is_some() {
        score += INTENT_WEIGHT;
    }
    if !profile.interested_in.is_empty() {
        score += GENDER_PREFERENCE_WEIGHT;
    }
    if profile.has_valid_location() {
        score += LOCATION_WEIGHT;
    }

    score
}

/// Human-readable names of the unmet optional sections.
///
/// The identity section is never reported; its fields are enforced at
/// signup, so a hole there is not actionable from the edit-profile screen.
pub fn missing_fields(profile: &UserProfile) -> Vec<&'static str> {
    let mut missing = Vec::new();

    if !has_bio(profile) {
        missing.push("bio");
    }
    if profile.interests.is_empty() {
        missing.push("interests");
    }
    if profile.relationship_intent.is_none() {
        missing.push("relationship intent");
    }
    if profile.interested_in.is_empty() {
        missing.push("gender preference");
    }
    if !profile.has_valid_location() {
        missing.push("location");
    }

    missing
}

#[inline]
fn has_identity_section(profile: &UserProfile) -> bool {
    !profile.name.trim().is_empty()
        && profile.age.map_or(false, |age| age > 0)
        && profile.gender.as_deref().map_or(false, |g| !g.is_empty())
        && profile.photo_ids.len() >= REQUIRED_PHOTOS
}

#[inline]
fn has_bio(profile: &UserProfile) -> bool {
    profile
        .bio
        .as_deref()
        .map_or(false, |bio| bio.trim().chars().count() >= MIN_BIO_CHARS)
}
