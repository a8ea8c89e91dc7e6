use thiserror::Error;

/// An extractor could not turn its input stream into findings.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to read {tool} output")]
    Read {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {tool} output")]
    Malformed {
        tool: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Two summaries cannot be diffed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("cannot compare summaries from different tools: `{before}` vs `{after}`")]
    ToolMismatch { before: String, after: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("findings from `{found}` mixed into a `{expected}` summary")]
    MixedTools { expected: String, found: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("parser {0} already registered")]
    AlreadyRegistered(String),

    #[error("parser {0} not found")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_tool_mismatch_display() {
        let err = CompareError::ToolMismatch {
            before: "eslint".to_string(),
            after: "tsc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot compare summaries from different tools: `eslint` vs `tsc`"
        );
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let err = DecodeError::Read {
            tool: "tsc",
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8"),
        };
        assert_eq!(err.to_string(), "failed to read tsc output");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_registry_error_display() {
        assert_eq!(
            RegistryError::NotFound("pylint".to_string()).to_string(),
            "parser pylint not found"
        );
        assert_eq!(
            RegistryError::AlreadyRegistered("tsc".to_string()).to_string(),
            "parser tsc already registered"
        );
    }
}
