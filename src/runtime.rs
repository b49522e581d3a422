//! Runtime contract for generated builder artifacts.
//!
//! The generator emits one struct per grammar token; each of those structs
//! implements [`ChainNode`]. The trait carries the path-accumulation rule
//! (ancestors plus self, variables wrapped in the mark pair) and [`build`]
//! turns an accumulated path into the final string, applying substitutions
//! and rejecting any variable left unassigned.
//!
//! The conceptual chain root is an empty sentinel that is never rendered;
//! generated root-builder types therefore do not implement [`ChainNode`] at
//! all, and the first real node starts with an empty ancestor path.

use crate::ChainError;

/// A node in a generated string chain.
///
/// `IS_VARIABLE` and the mark pair are static properties of the node's type,
/// fixed at generation time; only the ancestor path and the token value are
/// per-instance state.
pub trait ChainNode {
    const IS_VARIABLE: bool;
    const MARK_LEFT: &'static str = "{";
    const MARK_RIGHT: &'static str = "}";

    /// Ordered ancestor tokens, chain root first, already rendered.
    fn path_to_parent(&self) -> &[String];

    /// This node's own raw token value.
    fn value(&self) -> &str;

    /// Full path from the chain root down to this node. Variable nodes
    /// render wrapped in the mark pair so [`build`] can find them later.
    fn path(&self) -> Vec<String> {
        let rendered = if Self::IS_VARIABLE {
            format!("{}{}{}", Self::MARK_LEFT, self.value(), Self::MARK_RIGHT)
        } else {
            self.value().to_string()
        };

        let mut path = self.path_to_parent().to_vec();
        path.push(rendered);
        path
    }
}

/// Renders a node's accumulated path into its final string.
///
/// Each `(key, value)` substitution must correspond to a marked variable
/// occurrence somewhere in the joined chain; after all substitutions the
/// chain must contain no residual marked span.
pub fn build<N: ChainNode>(
    node: &N,
    delimiter: &str,
    substitutions: &[(&str, &str)],
) -> Result<String, ChainError> {
    let mut chain = node.path().join(delimiter);

    for (key, value) in substitutions {
        let marked = format!("{}{}{}", N::MARK_LEFT, key, N::MARK_RIGHT);
        if !chain.contains(&marked) {
            return Err(ChainError::VariableNotPresent {
                name: key.to_string(),
                chain,
            });
        }
        chain = chain.replace(&marked, value);
    }

    let leftover = marked_spans(&chain, N::MARK_LEFT, N::MARK_RIGHT);
    if !leftover.is_empty() {
        return Err(ChainError::UnassignedVariables {
            names: leftover.join(", "),
        });
    }

    Ok(chain)
}

/// Scans `chain` for spans delimited by the mark pair, left to right.
fn marked_spans(chain: &str, left: &str, right: &str) -> Vec<String> {
    let mut spans = Vec::new();
    let mut rest = chain;
    while let Some(start) = rest.find(left) {
        let after = &rest[start + left.len()..];
        let Some(end) = after.find(right) else {
            break; // one-sided residue, nothing substitutable
        };
        spans.push(after[..end].to_string());
        rest = &after[end + right.len()..];
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Literal {
        path_to_parent: Vec<String>,
        value: String,
    }

    impl ChainNode for Literal {
        const IS_VARIABLE: bool = false;

        fn path_to_parent(&self) -> &[String] {
            &self.path_to_parent
        }

        fn value(&self) -> &str {
            &self.value
        }
    }

    struct Variable {
        path_to_parent: Vec<String>,
        value: String,
    }

    impl ChainNode for Variable {
        const IS_VARIABLE: bool = true;

        fn path_to_parent(&self) -> &[String] {
            &self.path_to_parent
        }

        fn value(&self) -> &str {
            &self.value
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn literal_path_appends_raw_value() {
        let node = Literal {
            path_to_parent: strings(&["foo", "bar"]),
            value: "goo".to_string(),
        };
        assert_eq!(node.path(), strings(&["foo", "bar", "goo"]));
    }

    #[test]
    fn variable_path_wraps_value_in_marks() {
        let node = Variable {
            path_to_parent: strings(&["goo", "one"]),
            value: "two".to_string(),
        };
        assert_eq!(node.path(), strings(&["goo", "one", "{two}"]));
    }

    #[test]
    fn first_node_has_no_ancestors() {
        let node = Literal {
            path_to_parent: Vec::new(),
            value: "foo".to_string(),
        };
        assert_eq!(node.path(), strings(&["foo"]));
        assert_eq!(build(&node, ".", &[]).unwrap(), "foo");
    }

    #[test]
    fn build_joins_with_delimiter() {
        let node = Literal {
            path_to_parent: strings(&["foo", "bar"]),
            value: "goo".to_string(),
        };
        assert_eq!(build(&node, ".", &[]).unwrap(), "foo.bar.goo");
        assert_eq!(build(&node, "/", &[]).unwrap(), "foo/bar/goo");
    }

    #[test]
    fn build_substitutes_every_occurrence() {
        let node = Literal {
            path_to_parent: strings(&["goo", "{two}", "one", "{two}"]),
            value: "bar".to_string(),
        };
        assert_eq!(
            build(&node, ".", &[("two", "123")]).unwrap(),
            "goo.123.one.123.bar"
        );
    }

    #[test]
    fn unassigned_variable_is_cited() {
        let node = Literal {
            path_to_parent: strings(&["goo", "one", "{two}"]),
            value: "bar".to_string(),
        };
        let err = build(&node, ".", &[]).unwrap_err();
        assert!(matches!(
            err,
            ChainError::UnassignedVariables { names } if names == "two"
        ));
    }

    #[test]
    fn multiple_unassigned_variables_are_listed() {
        let node = Literal {
            path_to_parent: strings(&["goo", "{one}", "{two}"]),
            value: "bar".to_string(),
        };
        let err = build(&node, ".", &[]).unwrap_err();
        assert!(matches!(
            err,
            ChainError::UnassignedVariables { names } if names == "one, two"
        ));
    }

    #[test]
    fn substituting_a_literal_key_fails() {
        let node = Literal {
            path_to_parent: strings(&["goo", "one", "{two}"]),
            value: "bar".to_string(),
        };
        let err = build(&node, ".", &[("goo", "123")]).unwrap_err();
        assert!(matches!(
            err,
            ChainError::VariableNotPresent { name, .. } if name == "goo"
        ));
    }
}
