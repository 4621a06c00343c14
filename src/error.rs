use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Email already taken: {0}")]
    DuplicateEmail(String),

    #[error("Author does not exist: {0}")]
    AuthorNotFound(String),

    #[error("{entity} does not exist: {id}")]
    ReferenceNotFound { entity: &'static str, id: String },

    #[error("No free id left with prefix '{0}'")]
    IdsExhausted(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML render error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Already initialized at {0}")]
    AlreadyInitialized(String),
}

impl BlogError {
    /// Machine-readable code reported in `extensions.code` of GraphQL errors.
    pub fn code(&self) -> &'static str {
        match self {
            BlogError::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            BlogError::AuthorNotFound(_) => "AUTHOR_NOT_FOUND",
            BlogError::ReferenceNotFound { .. } => "REFERENCE_NOT_FOUND",
            BlogError::IdsExhausted(_) => "IDS_EXHAUSTED",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for BlogError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            if let BlogError::ReferenceNotFound { entity, id } = self {
                e.set("entity", *entity);
                e.set("id", id.as_str());
            }
        })
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_for_client_errors() {
        assert_eq!(
            BlogError::DuplicateEmail("a@a.com".into()).code(),
            "DUPLICATE_EMAIL"
        );
        assert_eq!(BlogError::AuthorNotFound("9".into()).code(), "AUTHOR_NOT_FOUND");
        assert_eq!(
            BlogError::ReferenceNotFound {
                entity: "Post",
                id: "99".into()
            }
            .code(),
            "REFERENCE_NOT_FOUND"
        );
        assert_eq!(BlogError::IdsExhausted("u-".into()).code(), "IDS_EXHAUSTED");
        assert_eq!(BlogError::Config("bad".into()).code(), "INTERNAL");
    }

    #[test]
    fn test_extend_carries_message() {
        let err = BlogError::ReferenceNotFound {
            entity: "User",
            id: "42".into(),
        }
        .extend();
        assert_eq!(err.message, "User does not exist: 42");
        assert!(err.extensions.is_some());
    }
}
