use thiserror::Error;

/// Canonical result for seqkit.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A caller-supplied argument can never produce a valid sequence.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Lock-step consumption found one input shorter than the others.
    /// `index` is the zero-based position of the short input.
    #[error("sequence #{index} ended after {len} elements while other sequences continued")]
    SequenceTooShort { index: usize, len: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_renders() {
        let errors = [
            Error::invalid_argument("size", "must fit the source"),
            Error::SequenceTooShort { index: 1, len: 3 },
            Error::Config("merge_strategy".into()),
        ];
        for err in &errors {
            // Exhaustive over the variants.
            let expected = match err {
                Error::InvalidArgument { .. } => "invalid argument `size`: must fit the source",
                Error::SequenceTooShort { .. } => {
                    "sequence #1 ended after 3 elements while other sequences continued"
                }
                Error::Config(_) => "invalid configuration: merge_strategy",
            };
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_json_error_converts_to_config() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
