//! One-shot construction of the compact trie.

use std::collections::VecDeque;

use super::{NO_TERMINAL, Node, Terminal, Trie};
use crate::record::{Codepoints, EntityRecord};

/// Structural defect in the canonical table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    EmptyName { index: usize },
    InvalidNameByte { name: String, byte: u8 },
    CodepointCount { name: String, count: usize },
    InvalidScalar { name: String, value: u32 },
    ConflictingDuplicate { name: String },
    TooManyNodes { nodes: usize },
    TooManyTerminals { terminals: usize },
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::EmptyName { index } => {
                write!(f, "entity record {index} has an empty name")
            }
            BuildError::InvalidNameByte { name, byte } => write!(
                f,
                "entity name '{name}' contains byte 0x{byte:02X}; names must be ASCII alphanumeric"
            ),
            BuildError::CodepointCount { name, count } => write!(
                f,
                "entity '{name}' maps to {count} codepoints; expected 1 or 2"
            ),
            BuildError::InvalidScalar { name, value } => write!(
                f,
                "entity '{name}' maps to 0x{value:X}, which is not a Unicode scalar value"
            ),
            BuildError::ConflictingDuplicate { name } => {
                write!(f, "entity '{name}' is listed twice with different values")
            }
            BuildError::TooManyNodes { nodes } => {
                write!(f, "trie needs {nodes} nodes; node index overflowed")
            }
            BuildError::TooManyTerminals { terminals } => write!(
                f,
                "table has {terminals} distinct names; terminal index overflowed"
            ),
        }
    }
}

impl std::error::Error for BuildError {}

struct Entry<'a> {
    name: &'a [u8],
    terminal: Terminal,
}

/// Work item for the breadth-first layout: `node` owns the sorted entries
/// `start..end`, all of which share the first `depth` bytes.
struct Pending {
    node: usize,
    start: usize,
    end: usize,
    depth: usize,
}

/// Build the trie for `records`.
///
/// Exact duplicate records are merged; a duplicate name with a different
/// payload is rejected. Children are laid out breadth-first so each node's
/// children form one contiguous, label-sorted run.
pub fn build(records: &[EntityRecord]) -> Result<Trie, BuildError> {
    let mut entries = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        entries.push(validate(index, record)?);
    }
    entries.sort_by(|a, b| a.name.cmp(b.name));

    let mut merged: Vec<Entry<'_>> = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(last) = merged.last() {
            if last.name == entry.name {
                if last.terminal != entry.terminal {
                    return Err(BuildError::ConflictingDuplicate {
                        name: String::from_utf8_lossy(entry.name).into_owned(),
                    });
                }
                continue;
            }
        }
        merged.push(entry);
    }
    if merged.len() >= NO_TERMINAL as usize {
        return Err(BuildError::TooManyTerminals {
            terminals: merged.len(),
        });
    }

    let mut nodes = vec![Node::EMPTY];
    let mut labels = vec![0u8];
    let mut terminals = Vec::with_capacity(merged.len());
    let mut max_depth = 0usize;

    let mut queue = VecDeque::new();
    queue.push_back(Pending {
        node: 0,
        start: 0,
        end: merged.len(),
        depth: 0,
    });

    while let Some(pending) = queue.pop_front() {
        let mut i = pending.start;
        // A name equal to the shared prefix sorts first in its group.
        if i < pending.end && merged[i].name.len() == pending.depth {
            nodes[pending.node].terminal = terminals.len() as u16;
            terminals.push(merged[i].terminal);
            max_depth = max_depth.max(pending.depth);
            i += 1;
        }

        let first_child = nodes.len();
        let mut child_count = 0usize;
        while i < pending.end {
            let byte = merged[i].name[pending.depth];
            let mut j = i + 1;
            while j < pending.end && merged[j].name[pending.depth] == byte {
                j += 1;
            }
            queue.push_back(Pending {
                node: nodes.len(),
                start: i,
                end: j,
                depth: pending.depth + 1,
            });
            nodes.push(Node::EMPTY);
            labels.push(byte);
            child_count += 1;
            i = j;
        }

        if nodes.len() > u32::MAX as usize {
            return Err(BuildError::TooManyNodes { nodes: nodes.len() });
        }
        // Labels are ASCII alphanumeric, so a run never exceeds 62 entries.
        debug_assert!(child_count <= u8::MAX as usize);
        let node = &mut nodes[pending.node];
        node.first_child = first_child as u32;
        node.child_count = child_count as u8;
    }

    Ok(Trie {
        nodes: nodes.into_boxed_slice(),
        labels: labels.into_boxed_slice(),
        terminals: terminals.into_boxed_slice(),
        max_depth,
    })
}

fn validate<'a>(index: usize, record: &'a EntityRecord) -> Result<Entry<'a>, BuildError> {
    let name = record.name.as_bytes();
    if name.is_empty() {
        return Err(BuildError::EmptyName { index });
    }
    if let Some(&byte) = name.iter().find(|b| !b.is_ascii_alphanumeric()) {
        return Err(BuildError::InvalidNameByte {
            name: record.name.to_string(),
            byte,
        });
    }

    let scalar = |value: u32| {
        char::from_u32(value).ok_or_else(|| BuildError::InvalidScalar {
            name: record.name.to_string(),
            value,
        })
    };
    let codepoints = match *record.codepoints {
        [a] => Codepoints::one(scalar(a)?),
        [a, b] => Codepoints::two(scalar(a)?, scalar(b)?),
        _ => {
            return Err(BuildError::CodepointCount {
                name: record.name.to_string(),
                count: record.codepoints.len(),
            });
        }
    };

    Ok(Entry {
        name,
        terminal: Terminal {
            codepoints,
            semicolon_required: record.semicolon_required,
        },
    })
}
