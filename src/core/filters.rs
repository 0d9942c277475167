use crate::core::intent::is_hard_incompatible;
use crate::models::{FilterCandidate, FilterSubject};

/// Decide whether a candidate may ever be shown to the viewer.
///
/// Hard exclusion only: rules are checked in order and the first failure
/// rejects. Distance and radius are not checked here; an out-of-radius
/// candidate still surfaces, it just earns no distance points.
#[inline]
pub fn is_eligible(viewer: &FilterSubject, candidate: &FilterCandidate) -> bool {
    // Gender preference. An empty list means no preference was set, so the
    // rule is skipped rather than rejecting everyone.
    if !viewer.interested_in.is_empty() && !viewer.interested_in.contains(&candidate.gender) {
        return false;
    }

    // Intent pairs that can never work are rejected outright. An absent
    // intent on either side passes.
    if let (Some(a), Some(b)) = (viewer.relationship_intent, candidate.relationship_intent) {
        if is_hard_incompatible(a, b) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RelationshipIntent;

    fn subject(interested_in: &[&str], intent: Option<RelationshipIntent>) -> FilterSubject {
        FilterSubject {
            interested_in: interested_in.iter().map(|s| s.to_string()).collect(),
            relationship_intent: intent,
        }
    }

    fn candidate(gender: &str, intent: Option<RelationshipIntent>) -> FilterCandidate {
        FilterCandidate {
            gender: gender.to_string(),
            relationship_intent: intent,
        }
    }

    #[test]
    fn test_gender_match_passes() {
        let viewer = subject(&["female", "nonbinary"], None);
        assert!(is_eligible(&viewer, &candidate("female", None)));
        assert!(is_eligible(&viewer, &candidate("nonbinary", None)));
    }

    #[test]
    fn test_gender_mismatch_rejects() {
        let viewer = subject(&["female"], None);
        assert!(!is_eligible(&viewer, &candidate("male", None)));
    }

    #[test]
    fn test_empty_preference_passes_any_gender() {
        let viewer = subject(&[], None);
        assert!(is_eligible(&viewer, &candidate("male", None)));
        assert!(is_eligible(&viewer, &candidate("female", None)));
        assert!(is_eligible(&viewer, &candidate("", None)));
    }

    #[test]
    fn test_gender_rejection_ignores_other_fields() {
        // A perfect intent pairing does not rescue a gender mismatch.
        let viewer = subject(&["female"], Some(RelationshipIntent::LongTerm));
        let c = candidate("male", Some(RelationshipIntent::LongTerm));
        assert!(!is_eligible(&viewer, &c));
    }

    #[test]
    fn test_hard_incompatible_intents_reject_both_orders() {
        let viewer = subject(&[], Some(RelationshipIntent::Hookups));
        assert!(!is_eligible(&viewer, &candidate("female", Some(RelationshipIntent::LongTerm))));

        let viewer = subject(&[], Some(RelationshipIntent::LongTerm));
        assert!(!is_eligible(&viewer, &candidate("female", Some(RelationshipIntent::Hookups))));

        let viewer = subject(&[], Some(RelationshipIntent::Friendship));
        assert!(!is_eligible(&viewer, &candidate("female", Some(RelationshipIntent::Hookups))));
    }

    #[test]
    fn test_compatible_intents_pass() {
        let viewer = subject(&[], Some(RelationshipIntent::Hookups));
        assert!(is_eligible(&viewer, &candidate("female", Some(RelationshipIntent::Unsure))));
        assert!(is_eligible(&viewer, &candidate("female", Some(RelationshipIntent::Casual))));
    }

    #[test]
    fn test_absent_intent_passes() {
        let viewer = subject(&[], Some(RelationshipIntent::Hookups));
        assert!(is_eligible(&viewer, &candidate("female", None)));

        let viewer = subject(&[], None);
        assert!(is_eligible(&viewer, &candidate("female", Some(RelationshipIntent::LongTerm))));
    }
}
