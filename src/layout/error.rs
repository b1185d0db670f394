//! Error types for scenes and layout passes

use thiserror::Error;

use super::solver::SolverError;

/// Errors that can occur while building or solving a scene
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Reference to a view name the scene does not know
    #[error("unknown view '{name}'")]
    UnknownView {
        name: String,
        suggestions: Vec<String>,
    },

    /// A view name used twice
    #[error("view '{name}' is already defined")]
    DuplicateView { name: String },

    /// A rule relative to the container on a view that has none
    #[error("view '{view}' has no container and the rule names no target")]
    NoContainer { view: String },

    /// A rule that cannot be turned into relations
    #[error("invalid rule for view '{view}': {reason}")]
    InvalidRule { view: String, reason: String },

    /// Constraint solver error
    #[error("constraint solver error: {0}")]
    SolverError(#[from] SolverError),
}

impl LayoutError {
    /// Create an unknown view error with suggestions
    pub fn unknown(name: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownView {
            name: name.into(),
            suggestions,
        }
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateView { name: name.into() }
    }

    pub fn no_container(view: impl Into<String>) -> Self {
        Self::NoContainer { view: view.into() }
    }

    /// Create an invalid rule error
    pub fn invalid_rule(view: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRule {
            view: view.into(),
            reason: reason.into(),
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownView { suggestions, .. } => Some(suggestions),
            _ => None,
        }
    }
}
