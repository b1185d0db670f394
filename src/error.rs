//! Error types for loading scene files

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scene file: {message}")]
    Parse { span: Option<Span>, message: String },
}

impl From<toml::de::Error> for DocumentError {
    fn from(err: toml::de::Error) -> Self {
        DocumentError::Parse {
            span: err.span(),
            message: err.message().to_string(),
        }
    }
}

impl DocumentError {
    /// Source span of a parse error, when the parser reported one
    pub fn span(&self) -> Option<&Span> {
        match self {
            DocumentError::Parse { span, .. } => span.as_ref(),
            DocumentError::Io(_) => None,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let (span, message) = match self {
            DocumentError::Parse {
                span: Some(span),
                message,
            } => (span, message),
            _ => return self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(message)
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}
