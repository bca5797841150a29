//! Expansion errors.

use std::fmt;

/// Expansion result.
pub type Result<T> = std::result::Result<T, Error>;

/// Error code for the expansion engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A CURIE's prefix is not bound in the active context and no other
    /// classification applies.
    UnboundPrefix,
    /// A wrapped relative reference appears with no `#base` in scope.
    MissingBase,
    /// A bare term key cannot be resolved and no `#vocab` is present.
    MissingVocab,
    /// A term matches no classification and no context lookup succeeds.
    UnresolvableTerm,
    /// A JSON value has no classification (should not occur with standard JSON).
    UnknownLiteralType,
    /// The surrounding JSON parser reported a syntax error, surfaced verbatim.
    MalformedInput,
}

impl ErrorCode {
    /// Returns a short diagnostic message for the error code.
    pub fn message(self) -> &'static str {
        match self {
            Self::UnboundPrefix => "unbound CURIE prefix",
            Self::MissingBase => "wrapped relative reference with no #base in scope",
            Self::MissingVocab => "unresolvable bare term with no #vocab in scope",
            Self::UnresolvableTerm => "term matches no classification",
            Self::UnknownLiteralType => "JSON value has no literal classification",
            Self::MalformedInput => "surrounding JSON parser reported a syntax error",
        }
    }

    /// Creates an `Error` from the error code and the offending term.
    pub(crate) fn at(self, term: impl Into<String>) -> Error {
        Error {
            code: self,
            term: Some(term.into()),
            source: None,
        }
    }

    /// Creates an `Error` from the error code and the given source error.
    pub(crate) fn and_source<E>(self, source: E) -> Error
    where
        E: Into<anyhow::Error>,
    {
        Error {
            code: self,
            term: None,
            source: Some(source.into()),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ErrorCode {}

/// An expansion failure.
///
/// Carries the offending term string and a short diagnostic; it does not
/// carry the parsed subtree.
#[derive(Debug, thiserror::Error)]
pub struct Error {
    /// Error code.
    code: ErrorCode,
    /// The offending term or key, if known.
    term: Option<String>,
    /// Additional context (if available).
    #[source]
    source: Option<anyhow::Error>,
}

impl Error {
    /// Returns the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the offending term or key, if known.
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// Wraps the error with the additional context.
    pub(crate) fn context<C>(self, context: C) -> Self
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        let source = match self.source {
            Some(source) => source.context(context),
            None => anyhow::anyhow!("{}", context),
        };

        Self {
            code: self.code,
            term: self.term,
            source: Some(source),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code.message())?;
        if let Some(term) = self.term.as_ref() {
            write!(f, " (term: {:?})", term)?;
        }
        if let Some(source) = self.source.as_ref() {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl From<ErrorCode> for Error {
    fn from(code: ErrorCode) -> Self {
        Self {
            code,
            term: None,
            source: None,
        }
    }
}

impl From<serde_json::Error> for Error {
    /// Surfaces a syntax error from the surrounding JSON parser verbatim.
    fn from(err: serde_json::Error) -> Self {
        ErrorCode::MalformedInput.and_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_term_and_source() {
        let err = ErrorCode::UnboundPrefix
            .at("nope:thing")
            .context("while resolving a CURIE");
        let rendered = err.to_string();
        assert!(rendered.contains("unbound CURIE prefix"));
        assert!(rendered.contains("nope:thing"));
        assert!(rendered.contains("while resolving a CURIE"));
    }

    #[test]
    fn code_and_term_accessors() {
        let err = ErrorCode::MissingVocab.at("credits");
        assert_eq!(err.code(), ErrorCode::MissingVocab);
        assert_eq!(err.term(), Some("credits"));
    }

    #[test]
    fn from_error_code_carries_no_term() {
        let err: Error = ErrorCode::MalformedInput.into();
        assert_eq!(err.term(), None);
    }

    #[test]
    fn from_serde_json_error_maps_to_malformed_input() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err: Error = parse_err.into();
        assert_eq!(err.code(), ErrorCode::MalformedInput);
    }
}
