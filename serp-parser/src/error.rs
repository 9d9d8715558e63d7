use thiserror::Error;

/// Failure to extract a single field from a result node.
///
/// These never leave an extractor: item builders turn them into an omitted
/// or defaulted field and carry on with the next field.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no node found for field `{field}`")]
    MissingNode { field: &'static str },

    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("could not parse number from '{value}'")]
    InvalidNumber { value: String },
}

impl ExtractError {
    pub fn missing(field: &'static str) -> Self {
        ExtractError::MissingNode { field }
    }

    pub fn number(value: impl Into<String>) -> Self {
        ExtractError::InvalidNumber { value: value.into() }
    }
}

pub type FieldResult<T> = Result<T, ExtractError>;
