//! Formatter error types.

use tern_doc::DocError;

/// An option name or value the formatter does not understand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option `{option}`")]
    UnknownOption { option: String },

    #[error("invalid value `{value}` for option `{option}` (expected {expected})")]
    UnknownValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("option `{option}` must be greater than zero")]
    ZeroWidth { option: &'static str },
}

/// Failure to format a tree.
///
/// Formatting either succeeds completely or returns one of these; no partial
/// output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A node lacks the source lines a layout decision depends on.
    #[error("{construct} has no source location, which {purpose} requires")]
    MissingLocation {
        construct: &'static str,
        purpose: &'static str,
    },

    /// A node appears where the grammar does not allow it.
    #[error("{construct} cannot be used as {role}")]
    UnexpectedNode {
        construct: &'static str,
        role: &'static str,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Doc(#[from] DocError),
}

impl FormatError {
    pub(crate) fn missing_location(construct: &'static str, purpose: &'static str) -> Self {
        FormatError::MissingLocation { construct, purpose }
    }
}
