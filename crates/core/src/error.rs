use crate::types::EntityId;

/// Domain-level error taxonomy shared by every store implementation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Reserved for optimistic concurrency. Updates are currently
    /// last-writer-wins, so no store produces this variant.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing project.
    pub fn project_not_found(id: EntityId) -> Self {
        Self::NotFound {
            entity: "Project",
            id,
        }
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn project_not_found_names_the_entity() {
        let id = crate::types::new_entity_id();
        let err = CoreError::project_not_found(id);
        assert_matches!(err, CoreError::NotFound { entity: "Project", id: got } if got == id);
    }

    #[test]
    fn validation_errors_convert_to_validation_variant() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("name", validator::ValidationError::new("length"));

        let err = CoreError::from(errors);
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("name"));
    }
}
