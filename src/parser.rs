//! Grammar parser: sample chain text in, [`StringGraph`] out.
//!
//! The grammar format is deliberately small. Each non-blank line is one
//! sample chain: tokens separated by a delimiter (default `.`), each token
//! trimmed, empty tokens dropped. A token wrapped in the variable mark pair
//! (default `{`/`}`) is a substitutable placeholder. The first token of a
//! line is a root; every following token becomes a child of the one before
//! it, so a line is a path chain through the graph. Nodes and edges
//! accumulate across all lines.
//!
//! Known limitation: a token that itself contains the delimiter or the mark
//! characters is undefined input. No escaping semantics exist.

use miette::SourceSpan;

use crate::graph::StringGraph;
use crate::ChainError;

pub const DEFAULT_DELIMITER: &str = ".";
pub const DEFAULT_MARK_LEFT: &str = "{";
pub const DEFAULT_MARK_RIGHT: &str = "}";

/// A token with its byte position in the grammar source, kept so every parse
/// error can point at the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    text: String,
    offset: usize,
}

impl Token {
    fn span(&self) -> SourceSpan {
        (self.offset, self.text.len()).into()
    }
}

/// Converts raw grammar text into [`StringGraph`] instances.
///
/// Fails on the first structural violation; no partial graph is returned.
#[derive(Debug, Clone)]
pub struct GrammarParser {
    delimiter: String,
    mark_left: String,
    mark_right: String,
}

impl Default for GrammarParser {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            mark_left: DEFAULT_MARK_LEFT.to_string(),
            mark_right: DEFAULT_MARK_RIGHT.to_string(),
        }
    }
}

impl GrammarParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a parser with a custom delimiter and variable mark pair.
    /// An empty delimiter or an empty mark is a configuration error.
    pub fn with_config(
        delimiter: impl Into<String>,
        mark_left: impl Into<String>,
        mark_right: impl Into<String>,
    ) -> Result<Self, ChainError> {
        let parser = Self {
            delimiter: delimiter.into(),
            mark_left: mark_left.into(),
            mark_right: mark_right.into(),
        };
        if parser.delimiter.is_empty() {
            return Err(ChainError::EmptyDelimiter);
        }
        if parser.mark_left.is_empty() || parser.mark_right.is_empty() {
            return Err(ChainError::EmptyMarker);
        }
        Ok(parser)
    }

    pub fn marks(&self) -> (&str, &str) {
        (&self.mark_left, &self.mark_right)
    }

    pub fn parse(&self, input: &str) -> Result<StringGraph, ChainError> {
        let mut graph = StringGraph::new();

        let mut offset = 0;
        for line in input.split('\n') {
            self.parse_line(line, offset, &mut graph)?;
            offset += line.len() + 1;
        }

        Ok(graph)
    }

    fn parse_line(
        &self,
        line: &str,
        line_offset: usize,
        graph: &mut StringGraph,
    ) -> Result<(), ChainError> {
        let mut tokens = self.split(line, line_offset);

        let Some(head) = tokens.next() else {
            return Ok(()); // blank line
        };

        let (variable, root) = self.classify(&head)?;
        if variable {
            return Err(ChainError::RootIsVariable {
                token: head.text.clone(),
                span: Some(head.span()),
            });
        }
        graph
            .add_root(&root)
            .map_err(|e| e.with_span(head.span()))?;

        let mut parent = root;
        for token in tokens {
            let (variable, child) = self.classify(&token)?;
            graph
                .add_child(&parent, &child, variable)
                .map_err(|e| e.with_span(token.span()))?;
            parent = child;
        }

        Ok(())
    }

    /// Splits one line into trimmed, non-empty tokens, tracking the byte
    /// offset of each token within the whole input.
    fn split<'a>(&'a self, line: &'a str, line_offset: usize) -> impl Iterator<Item = Token> + 'a {
        let mut piece_offset = 0;
        let delim_len = self.delimiter.len();
        line.split(self.delimiter.as_str()).filter_map(move |piece| {
            let start = piece_offset;
            piece_offset += piece.len() + delim_len;

            let trimmed = piece.trim();
            if trimmed.is_empty() {
                return None;
            }
            let leading = piece.len() - piece.trim_start().len();
            Some(Token {
                text: trimmed.to_string(),
                offset: line_offset + start + leading,
            })
        })
    }

    /// Strips the variable marks off a token, returning the variable flag and
    /// the bare name. A one-sided mark is a structural error.
    fn classify(&self, token: &Token) -> Result<(bool, String), ChainError> {
        let match_left = token.text.starts_with(&self.mark_left);
        let match_right = token.text.ends_with(&self.mark_right);
        if match_left != match_right {
            return Err(ChainError::AsymmetricMarker {
                token: token.text.clone(),
                span: Some(token.span()),
            });
        }

        let variable = match_left && match_right;
        let name = if variable {
            // The marks may overlap in a short token (e.g. a bare `%` when
            // both marks are `%`); clamp instead of slicing out of range.
            let end = token.text.len().saturating_sub(self.mark_right.len());
            let start = self.mark_left.len().min(end);
            token.text[start..end].to_string()
        } else {
            token.text.clone()
        };
        Ok((variable, name))
    }
}
