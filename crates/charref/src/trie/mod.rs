//! Compact prefix trie over the named character reference table.
//!
//! Layout: a flat arena of fixed-size nodes addressed by `NodeId`. The
//! children of a node occupy one contiguous run of the arena, sorted by their
//! byte label, so a node only stores where its run starts and how long it is.
//! Labels and terminal payloads live in parallel arrays to keep `Node` small.
//!
//! Invariants:
//! - Index 0 is the root; it is never terminal (names are non-empty).
//! - Every node reachable from the root spells a prefix of at least one name.
//! - A node's terminal payload equals the record it was built from.
//! - The structure is immutable after `build` returns.

use crate::record::Codepoints;

mod builder;
#[cfg(test)]
mod tests;

pub use builder::{BuildError, build};

const NO_TERMINAL: u16 = u16::MAX;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Node {
    first_child: u32,
    child_count: u8,
    terminal: u16,
}

impl Node {
    const EMPTY: Node = Node {
        first_child: 0,
        child_count: 0,
        terminal: NO_TERMINAL,
    };
}

/// Arena index of a trie node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Payload of a node that completes a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Terminal {
    pub codepoints: Codepoints,
    pub semicolon_required: bool,
}

impl Terminal {
    pub fn is_legacy(&self) -> bool {
        !self.semicolon_required
    }
}

/// Footprint summary, reported by the memory driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TrieStats {
    pub nodes: usize,
    pub terminals: usize,
    pub legacy_terminals: usize,
    pub max_depth: usize,
    pub heap_bytes: usize,
}

pub struct Trie {
    nodes: Box<[Node]>,
    labels: Box<[u8]>,
    terminals: Box<[Terminal]>,
    max_depth: usize,
}

impl Trie {
    pub const ROOT: NodeId = NodeId(0);

    /// Follow the edge labelled `byte` out of `node`.
    ///
    /// Node IDs are only meaningful for the trie that produced them; an ID
    /// outside this arena has no children.
    #[inline]
    pub fn child(&self, node: NodeId, byte: u8) -> Option<NodeId> {
        let n = *self.nodes.get(node.index())?;
        let start = n.first_child as usize;
        let end = start + n.child_count as usize;
        let run = &self.labels[start..end];
        // Runs hold at most 62 labels (ASCII alphanumerics).
        if run.len() <= 8 {
            run.iter()
                .position(|&label| label == byte)
                .map(|offset| NodeId((start + offset) as u32))
        } else {
            run.binary_search(&byte)
                .ok()
                .map(|offset| NodeId((start + offset) as u32))
        }
    }

    #[inline]
    pub fn terminal(&self, node: NodeId) -> Option<&Terminal> {
        let idx = self.nodes.get(node.index())?.terminal;
        if idx == NO_TERMINAL {
            None
        } else {
            self.terminals.get(idx as usize)
        }
    }

    #[inline]
    pub fn has_children(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.index())
            .is_some_and(|n| n.child_count > 0)
    }

    /// Byte label on the edge into `node`; `None` for the root.
    pub fn label(&self, node: NodeId) -> Option<u8> {
        if node == Self::ROOT {
            return None;
        }
        self.labels.get(node.index()).copied()
    }

    /// Resolve an exact name (without the trailing `;`).
    pub fn lookup(&self, name: &str) -> Option<Terminal> {
        let mut node = Self::ROOT;
        for &byte in name.as_bytes() {
            node = self.child(node, byte)?;
        }
        self.terminal(node).copied()
    }

    /// Length in bytes of the longest name in the trie.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn stats(&self) -> TrieStats {
        TrieStats {
            nodes: self.nodes.len(),
            terminals: self.terminals.len(),
            legacy_terminals: self.terminals.iter().filter(|t| t.is_legacy()).count(),
            max_depth: self.max_depth,
            heap_bytes: self.nodes.len() * std::mem::size_of::<Node>()
                + self.labels.len()
                + self.terminals.len() * std::mem::size_of::<Terminal>(),
        }
    }
}

impl std::fmt::Debug for Trie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("nodes", &self.nodes.len())
            .field("terminals", &self.terminals.len())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
