//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::ConvertError;

/// A diagnostic wrapper for conversion errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ConvertDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

impl From<ConvertError> for ConvertDiagnostic {
    fn from(e: ConvertError) -> Self {
        let message = e.to_string();
        let help = match &e {
            ConvertError::MissingResolver => {
                Some("supply a LocationResolver when constructing the converter".into())
            }
            ConvertError::Resolve(_) => Some("check the location syntax and scheme".into()),
            ConvertError::Decode { .. } => {
                Some("check that the resource exists and is readable".into())
            }
            ConvertError::UnknownEncoding { .. } => {
                Some("use a WHATWG encoding label such as `utf-8` or `windows-1252`".into())
            }
        };
        let source: Option<Box<dyn std::error::Error + Send + Sync>> = match e {
            ConvertError::Decode { source, .. } => Some(Box::new(source)),
            ConvertError::Resolve(inner) => Some(Box::new(inner)),
            _ => None,
        };
        ConvertDiagnostic {
            message,
            source,
            help,
            severity: Severity::Error,
        }
    }
}

impl From<ConvertError> for miette::Report {
    fn from(e: ConvertError) -> Self {
        miette::Report::new(ConvertDiagnostic::from(e))
    }
}
