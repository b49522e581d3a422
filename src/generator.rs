//! Code-generation visitor: renders a [`StringGraph`] into a Rust source
//! artifact exposing the type-guided builder.
//!
//! The emitted artifact contains one struct per grammar token, a root
//! builder aggregating the chain starts, and nothing else; all behavior
//! lives in the [`crate::runtime`] contract the artifact links against.
//! Navigation is compiled down to one accessor method per declared child,
//! so only chains the grammar allows will ever type-check.

use std::collections::BTreeSet;

use crate::graph::{GraphVisitor, NodeInfo};
use crate::parser::{DEFAULT_MARK_LEFT, DEFAULT_MARK_RIGHT};

/// A stateful visitor accumulating rendered text blocks; [`finish`] returns
/// the full artifact. Blocks arrive in BFS order, so the artifact layout is
/// deterministic for a given graph.
///
/// [`finish`]: BuilderCodegen::finish
#[derive(Debug)]
pub struct BuilderCodegen {
    builder_name: String,
    mark_left: String,
    mark_right: String,
    blocks: Vec<String>,
}

impl BuilderCodegen {
    /// `artifact` names the root builder type (CamelCased).
    pub fn new(artifact: &str) -> Self {
        Self::with_marks(artifact, DEFAULT_MARK_LEFT, DEFAULT_MARK_RIGHT)
    }

    /// Non-default marks are compiled into the artifact as associated-const
    /// overrides on every node type.
    pub fn with_marks(artifact: &str, mark_left: &str, mark_right: &str) -> Self {
        Self {
            builder_name: type_ident(artifact),
            mark_left: mark_left.to_string(),
            mark_right: mark_right.to_string(),
            blocks: Vec::new(),
        }
    }

    /// Finalizes and returns the artifact text.
    pub fn finish(self) -> String {
        let mut out = String::from(
            "//! Generated by stringchain. Do not edit by hand.\n\n\
             #[allow(unused_imports)]\n\
             use stringchain::runtime::ChainNode;\n",
        );
        for block in &self.blocks {
            out.push('\n');
            out.push_str(block);
        }
        out
    }

    fn has_default_marks(&self) -> bool {
        self.mark_left == DEFAULT_MARK_LEFT && self.mark_right == DEFAULT_MARK_RIGHT
    }

    fn accessor(target: &str, child: &str, parent_path: &str) -> String {
        format!(
            "    pub fn {method}(&self) -> {target} {{\n        \
             {target} {{ path_to_parent: {parent_path}, value: String::from({value:?}) }}\n    \
             }}\n",
            method = method_ident(child),
            target = target,
            parent_path = parent_path,
            value = child,
        )
    }
}

impl GraphVisitor for BuilderCodegen {
    fn visit_roots(&mut self, roots: &BTreeSet<String>) {
        let name = self.builder_name.clone();
        let mut block = format!(
            "/// Starting points for every chain in the grammar.\n\
             #[derive(Clone, Copy, Debug, Default)]\n\
             pub struct {name};\n",
        );

        if !roots.is_empty() {
            block.push_str(&format!("\nimpl {name} {{\n"));
            for (i, root) in roots.iter().enumerate() {
                if i > 0 {
                    block.push('\n');
                }
                block.push_str(&Self::accessor(&type_ident(root), root, "Vec::new()"));
            }
            block.push_str("}\n");
        }

        self.blocks.push(block);
    }

    fn visit_node(&mut self, name: &str, info: &NodeInfo) {
        let ty = type_ident(name);

        let mut block = format!(
            "#[derive(Clone, Debug)]\n\
             pub struct {ty} {{\n    \
             path_to_parent: Vec<String>,\n    \
             value: String,\n\
             }}\n\n\
             impl ChainNode for {ty} {{\n    \
             const IS_VARIABLE: bool = {variable};\n",
            variable = info.is_variable,
        );
        if !self.has_default_marks() {
            block.push_str(&format!(
                "    const MARK_LEFT: &'static str = {:?};\n    \
                 const MARK_RIGHT: &'static str = {:?};\n",
                self.mark_left, self.mark_right,
            ));
        }
        block.push_str(
            "\n    fn path_to_parent(&self) -> &[String] {\n        \
             &self.path_to_parent\n    }\n\n    \
             fn value(&self) -> &str {\n        \
             &self.value\n    }\n}\n",
        );

        // Childless tokens stay as bare marker types.
        if !info.adjacent.is_empty() {
            block.push_str(&format!("\nimpl {ty} {{\n"));
            for (i, child) in info.adjacent.iter().enumerate() {
                if i > 0 {
                    block.push('\n');
                }
                block.push_str(&Self::accessor(&type_ident(child), child, "self.path()"));
            }
            block.push_str("}\n");
        }

        self.blocks.push(block);
    }
}

/// Raw-identifier-escapable Rust keywords.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "dyn", "else", "enum", "extern",
    "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
    "pub", "ref", "return", "static", "struct", "trait", "true", "type", "unsafe", "use",
    "where", "while", "abstract", "become", "box", "do", "final", "macro", "override", "priv",
    "try", "typeof", "unsized", "virtual", "yield",
];

/// Maps a token to a method identifier. Tokens are expected to be
/// identifier-safe; anything else is mapped best-effort and may collide.
fn method_ident(token: &str) -> String {
    let mut ident: String = token
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    if ident.chars().next().map_or(true, |c| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    match ident.as_str() {
        // cannot be raw identifiers
        "self" | "super" | "crate" | "_" => format!("{ident}_"),
        _ if KEYWORDS.contains(&ident.as_str()) => format!("r#{ident}"),
        _ => ident,
    }
}

/// Maps a token to a CamelCase type identifier.
fn type_ident(token: &str) -> String {
    let mut out = String::new();
    for segment in token.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
        }
    }

    if out.chars().next().map_or(true, |c| c.is_ascii_digit()) {
        out.insert(0, 'N');
    }
    if out == "Self" {
        out.push_str("Node");
    }
    out
}
