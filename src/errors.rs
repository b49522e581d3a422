//! Unified error type for every failure mode in the stringchain pipeline.
//!
//! All failures are validation failures: raised eagerly, never retried, never
//! partially recovered. A failing parse or build produces no usable graph,
//! artifact, or string. Parse-side variants carry an optional source span so
//! the CLI can render a labeled miette report against the grammar text.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ChainError {
    #[error("token `{token}` matches the variable mark on the left but not right or vice versa")]
    #[diagnostic(code(stringchain::parse::asymmetric_marker))]
    AsymmetricMarker {
        token: String,
        #[label("one-sided variable mark")]
        span: Option<SourceSpan>,
    },

    #[error("starting node `{token}` is a root, cannot be a variable")]
    #[diagnostic(code(stringchain::parse::root_is_variable))]
    RootIsVariable {
        token: String,
        #[label("variable at the start of a chain")]
        span: Option<SourceSpan>,
    },

    #[error("parent node `{parent}` not found in graph")]
    #[diagnostic(code(stringchain::graph::parent_not_found))]
    ParentNotFound { parent: String },

    #[error("child node `{child}` already exists with contradicting variable status {existing}")]
    #[diagnostic(code(stringchain::graph::conflicting_variable_status))]
    ConflictingVariableStatus {
        child: String,
        existing: bool,
        #[label("redeclared here")]
        span: Option<SourceSpan>,
    },

    #[error("`{name}` already defined as a variable, cannot be used as a root")]
    #[diagnostic(code(stringchain::graph::root_redeclared_as_variable))]
    RootRedeclaredAsVariable {
        name: String,
        #[label("used as a root here")]
        span: Option<SourceSpan>,
    },

    #[error("node `{name}` not found in graph")]
    #[diagnostic(code(stringchain::graph::unknown_node))]
    UnknownNode { name: String },

    #[error("variable `{name}` not present in string chain `{chain}`")]
    #[diagnostic(code(stringchain::build::variable_not_present))]
    VariableNotPresent { name: String, chain: String },

    #[error("unassigned variables: {names}")]
    #[diagnostic(
        code(stringchain::build::unassigned_variables),
        help("pass a substitution for each variable before building")
    )]
    UnassignedVariables { names: String },

    #[error("variable marks cannot be empty")]
    #[diagnostic(code(stringchain::config::empty_marker))]
    EmptyMarker,

    #[error("delimiter cannot be empty")]
    #[diagnostic(code(stringchain::config::empty_delimiter))]
    EmptyDelimiter,

    #[error("i/o error: {0}")]
    #[diagnostic(code(stringchain::io))]
    Io(#[from] std::io::Error),
}

impl ChainError {
    /// Attaches a source span to span-carrying variants that lack one.
    ///
    /// The graph raises declaration conflicts without any notion of source
    /// position; the parser knows where the offending token sits and patches
    /// the span in on the way out.
    pub fn with_span(self, span: SourceSpan) -> Self {
        match self {
            ChainError::AsymmetricMarker { token, span: None } => {
                ChainError::AsymmetricMarker { token, span: Some(span) }
            }
            ChainError::RootIsVariable { token, span: None } => {
                ChainError::RootIsVariable { token, span: Some(span) }
            }
            ChainError::ConflictingVariableStatus { child, existing, span: None } => {
                ChainError::ConflictingVariableStatus { child, existing, span: Some(span) }
            }
            ChainError::RootRedeclaredAsVariable { name, span: None } => {
                ChainError::RootRedeclaredAsVariable { name, span: Some(span) }
            }
            other => other,
        }
    }
}
