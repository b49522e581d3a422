//! The directed graph of tokens built from sample chains.
//!
//! Cycles, self-loops, and converging edges are all legal; node identity is
//! by name, so one [`NodeInfo`] exists per distinct token regardless of how
//! many chains pass through it. Every node is reachable from at least one
//! root, because the only way to create a node is as a child of an
//! already-rooted node or as a root itself.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::Serialize;

use crate::ChainError;

/// Per-token record: outgoing edges plus whether occurrences of this token
/// are substitutable placeholders rather than fixed literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    pub adjacent: BTreeSet<String>,
    pub is_variable: bool,
}

impl NodeInfo {
    fn new(is_variable: bool) -> Self {
        Self {
            adjacent: BTreeSet::new(),
            is_variable,
        }
    }
}

/// Callbacks dispatched by [`StringGraph::bfs_visit`].
pub trait GraphVisitor {
    /// Called exactly once with the full root set, before any node.
    fn visit_roots(&mut self, roots: &BTreeSet<String>);

    /// Called exactly once per node, in breadth-first discovery order.
    fn visit_node(&mut self, name: &str, info: &NodeInfo);
}

/// The string graph. Built once by the parser, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StringGraph {
    roots: BTreeSet<String>,
    nodes: BTreeMap<String, NodeInfo>,
}

impl StringGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `root` as a legal chain start. Idempotent across lines, but
    /// a name already flagged as a variable can never become a root.
    pub fn add_root(&mut self, root: &str) -> Result<(), ChainError> {
        match self.nodes.get(root) {
            Some(info) if info.is_variable => {
                return Err(ChainError::RootRedeclaredAsVariable {
                    name: root.to_string(),
                    span: None,
                });
            }
            Some(_) => {}
            None => {
                self.nodes.insert(root.to_string(), NodeInfo::new(false));
            }
        }
        self.roots.insert(root.to_string());
        Ok(())
    }

    /// Adds the vertex `child` (if absent) and the directed edge
    /// `parent -> child`. Duplicate edges are no-ops. Re-declaring an
    /// existing child with a different variable flag is a conflict.
    pub fn add_child(&mut self, parent: &str, child: &str, variable: bool) -> Result<(), ChainError> {
        if !self.nodes.contains_key(parent) {
            return Err(ChainError::ParentNotFound {
                parent: parent.to_string(),
            });
        }

        match self.nodes.get(child) {
            Some(info) if info.is_variable != variable => {
                return Err(ChainError::ConflictingVariableStatus {
                    child: child.to_string(),
                    existing: info.is_variable,
                    span: None,
                });
            }
            Some(_) => {}
            None => {
                self.nodes.insert(child.to_string(), NodeInfo::new(variable));
            }
        }

        self.nodes
            .get_mut(parent)
            .expect("parent presence checked above")
            .adjacent
            .insert(child.to_string());
        Ok(())
    }

    pub fn is_variable(&self, node: &str) -> Result<bool, ChainError> {
        self.info(node).map(|info| info.is_variable)
    }

    pub fn children_of(&self, node: &str) -> Result<&BTreeSet<String>, ChainError> {
        self.info(node).map(|info| &info.adjacent)
    }

    pub fn roots(&self) -> &BTreeSet<String> {
        &self.roots
    }

    fn info(&self, node: &str) -> Result<&NodeInfo, ChainError> {
        self.nodes.get(node).ok_or_else(|| ChainError::UnknownNode {
            name: node.to_string(),
        })
    }

    /// Breadth-first traversal with a fixed order: roots lexicographically,
    /// then children lexicographically at each step. The "not yet visited"
    /// set guards against cycles; a back-edge into an already-visited node is
    /// simply never re-enqueued, so every node is visited exactly once.
    pub fn bfs_visit(&self, visitor: &mut dyn GraphVisitor) {
        visitor.visit_roots(&self.roots);

        let mut to_visit: BTreeSet<&str> = self.nodes.keys().map(String::as_str).collect();
        let mut queue: VecDeque<&str> = self.roots.iter().map(String::as_str).collect();

        while let Some(front) = queue.pop_front() {
            if !to_visit.remove(front) {
                continue;
            }
            let info = &self.nodes[front];
            visitor.visit_node(front, info);

            for child in &info.adjacent {
                if to_visit.contains(child.as_str()) {
                    queue.push_back(child.as_str());
                }
            }
        }
    }
}
