//! Error types for emmet-cli

use emmet::abbrev::formats::FormatError;
use emmet::ParseError;
use emmet_config::ConfigError;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The abbreviation did not parse; keeps the input for the diagnostic
    #[error("{source}")]
    Parse {
        source: ParseError,
        abbreviation: String,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

impl CliError {
    pub fn parse(source: ParseError, abbreviation: impl Into<String>) -> Self {
        Self::Parse {
            source,
            abbreviation: abbreviation.into(),
        }
    }

    /// Input line with a caret under the offending offset, for parse errors that
    /// carry one
    pub fn diagnostic(&self) -> Option<String> {
        let CliError::Parse {
            source,
            abbreviation,
        } = self
        else {
            return None;
        };
        let offset = source.offset()?;
        let column = abbreviation.get(..offset)?.chars().count();
        Some(format!("  {}\n  {}^", abbreviation, " ".repeat(column)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_points_at_offset() {
        let err = CliError::parse(
            ParseError::DanglingOperator {
                operator: ">",
                offset: 3,
            },
            "div>",
        );
        assert_eq!(err.diagnostic().unwrap(), "  div>\n     ^");
        assert_eq!(err.to_string(), "operator '>' at offset 3 has no operand");
    }

    #[test]
    fn caret_counts_characters_not_bytes() {
        let err = CliError::parse(
            ParseError::UnknownToken {
                token: "\u{1b}".to_string(),
                offset: 3,
            },
            "äb\u{1b}",
        );
        assert_eq!(err.diagnostic().unwrap(), "  äb\u{1b}\n    ^");
    }

    #[test]
    fn no_diagnostic_without_offset() {
        let err = CliError::parse(ParseError::EmptyAbbreviation, "");
        assert!(err.diagnostic().is_none());
    }
}
