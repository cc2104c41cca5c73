use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("resource \"{resource}\" not found, {id}")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid {resource}: {reason}")]
    Invalid { resource: &'static str, reason: String },

    #[error("{context}: {source}")]
    Database {
        context: String,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Wraps a driver error with what the store was doing when it failed.
    pub fn database(context: impl Into<String>, source: sqlx::Error) -> Self {
        let context = context.into();
        tracing::error!("{}: {:?}", context, source);
        Self::Database { context, source }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("UserTermsOfService", "userId=abc");
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "resource \"UserTermsOfService\" not found, userId=abc"
        );
    }

    #[test]
    fn test_database_error_keeps_source() {
        let err = StoreError::database("failed to get UserTermsOfService", sqlx::Error::PoolTimedOut);
        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("failed to get UserTermsOfService: "));
        assert!(err.source().is_some());
    }
}
