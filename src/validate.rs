//! Validation rules for student names and score lists.
//!
//! Rule failures carry the specific rule violated so callers can surface
//! it verbatim.

use crate::error::StoreError;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const MAX_SCORES: usize = 20;
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Check a raw name against the naming rules, returning the trimmed name
/// the store should keep.
pub fn validate_name(name: &str) -> Result<String, StoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidName("name is required".into()));
    }
    let length = trimmed.chars().count();
    if length < NAME_MIN_LEN {
        return Err(StoreError::InvalidName(format!(
            "name must be at least {} characters long",
            NAME_MIN_LEN
        )));
    }
    if length > NAME_MAX_LEN {
        return Err(StoreError::InvalidName(format!(
            "name must not exceed {} characters",
            NAME_MAX_LEN
        )));
    }
    let allowed =
        |c: char| c.is_ascii_alphabetic() || c.is_whitespace() || c == '-' || c == '\'';
    if !trimmed.chars().all(allowed) {
        return Err(StoreError::InvalidName(
            "name can only contain letters, spaces, hyphens, and apostrophes".into(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Check a score list: 1 to [`MAX_SCORES`] entries, each a finite number
/// within `[SCORE_MIN, SCORE_MAX]`.
pub fn validate_scores(scores: &[f64]) -> Result<(), StoreError> {
    if scores.is_empty() {
        return Err(StoreError::InvalidScores(
            "at least one score is required".into(),
        ));
    }
    if scores.len() > MAX_SCORES {
        return Err(StoreError::InvalidScores(format!(
            "maximum {} scores allowed",
            MAX_SCORES
        )));
    }
    for (position, score) in scores.iter().enumerate() {
        if !score.is_finite() {
            return Err(StoreError::InvalidScores(format!(
                "score at position {} must be a valid number",
                position + 1
            )));
        }
        if *score < SCORE_MIN || *score > SCORE_MAX {
            return Err(StoreError::InvalidScores(format!(
                "score at position {} must be between 0 and 100",
                position + 1
            )));
        }
    }
    Ok(())
}

/// Case-insensitive normalization used for uniqueness checks and lookup.
pub(crate) fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_trimmed() {
        assert_eq!(validate_name("  Ann Lee  ").unwrap(), "Ann Lee");
    }

    #[test]
    fn name_rules() {
        assert!(matches!(validate_name(""), Err(StoreError::InvalidName(_))));
        assert!(matches!(
            validate_name("   "),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            validate_name("A"),
            Err(StoreError::InvalidName(_))
        ));
        let long = "a".repeat(NAME_MAX_LEN + 1);
        assert!(matches!(
            validate_name(&long),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            validate_name("Ann3 Lee"),
            Err(StoreError::InvalidName(_))
        ));
        assert!(matches!(
            validate_name("Ann_Lee"),
            Err(StoreError::InvalidName(_))
        ));
    }

    #[test]
    fn hyphens_and_apostrophes_are_allowed() {
        assert!(validate_name("Mary-Jane O'Brien").is_ok());
    }

    #[test]
    fn fifty_characters_is_the_upper_bound() {
        let exact = "a".repeat(NAME_MAX_LEN);
        assert!(validate_name(&exact).is_ok());
    }

    #[test]
    fn score_rules() {
        assert!(matches!(
            validate_scores(&[]),
            Err(StoreError::InvalidScores(_))
        ));
        let too_many = vec![50.0; MAX_SCORES + 1];
        assert!(matches!(
            validate_scores(&too_many),
            Err(StoreError::InvalidScores(_))
        ));
        assert!(matches!(
            validate_scores(&[f64::NAN]),
            Err(StoreError::InvalidScores(_))
        ));
        assert!(matches!(
            validate_scores(&[f64::INFINITY]),
            Err(StoreError::InvalidScores(_))
        ));
        assert!(matches!(
            validate_scores(&[-0.01]),
            Err(StoreError::InvalidScores(_))
        ));
        assert!(matches!(
            validate_scores(&[100.01]),
            Err(StoreError::InvalidScores(_))
        ));
    }

    #[test]
    fn score_bounds_are_inclusive() {
        assert!(validate_scores(&[0.0, 100.0]).is_ok());
        assert!(validate_scores(&vec![75.0; MAX_SCORES]).is_ok());
    }

    #[test]
    fn score_errors_name_the_position() {
        let err = validate_scores(&[50.0, 101.0]).unwrap_err();
        assert_eq!(
            err,
            StoreError::InvalidScores("score at position 2 must be between 0 and 100".into())
        );
    }
}
