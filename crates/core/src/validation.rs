//! Field validation for Project and Document input.
//!
//! Every store implementation runs these checks before persisting, so the
//! rules hold regardless of which boundary the input came through.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a project name, in characters.
pub const MAX_PROJECT_NAME_LEN: usize = 200;

/// Maximum length of a project description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 4000;

/// Maximum length of a document file name, in characters.
pub const MAX_FILE_NAME_LEN: usize = 255;

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

/// A project name must contain at least one non-whitespace character.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }
    if name.chars().count() > MAX_PROJECT_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "name must be at most {MAX_PROJECT_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Descriptions may be empty but are bounded in length.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// A document file name is a bare name: non-empty, bounded, no path separators.
pub fn validate_file_name(file_name: &str) -> Result<(), CoreError> {
    if file_name.trim().is_empty() {
        return Err(CoreError::Validation("fileName must not be empty".into()));
    }
    if file_name.chars().count() > MAX_FILE_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "fileName must be at most {MAX_FILE_NAME_LEN} characters"
        )));
    }
    if file_name.contains(['/', '\\']) {
        return Err(CoreError::Validation(
            "fileName must not contain path separators".into(),
        ));
    }
    Ok(())
}

/// Validate the mutable fields of a project in one call.
pub fn validate_project_fields(name: &str, description: &str) -> Result<(), CoreError> {
    validate_project_name(name)?;
    validate_description(description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn accepts_plain_name() {
        assert!(validate_project_name("Alpha").is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        assert_matches!(validate_project_name(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn rejects_whitespace_only_name() {
        assert_matches!(validate_project_name("   \t"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        let name: String = "é".repeat(MAX_PROJECT_NAME_LEN);
        assert!(validate_project_name(&name).is_ok());

        let too_long: String = "é".repeat(MAX_PROJECT_NAME_LEN + 1);
        assert_matches!(validate_project_name(&too_long), Err(CoreError::Validation(_)));
    }

    #[test]
    fn empty_description_is_allowed() {
        assert!(validate_description("").is_ok());
    }

    #[test]
    fn oversized_description_is_rejected() {
        let text = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert_matches!(validate_description(&text), Err(CoreError::Validation(_)));
    }

    #[test]
    fn file_name_rules() {
        assert!(validate_file_name("Sample.pdf").is_ok());
        assert_matches!(validate_file_name(" "), Err(CoreError::Validation(_)));
        assert_matches!(validate_file_name("dir/Sample.pdf"), Err(CoreError::Validation(_)));
        assert_matches!(validate_file_name("dir\\Sample.pdf"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn project_fields_check_name_first() {
        let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert_matches!(
            validate_project_fields("", &long),
            Err(CoreError::Validation(msg)) if msg.contains("name")
        );
    }
}
