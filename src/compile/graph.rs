//! Entry dependency graph built from label/depends metadata.

use std::collections::HashSet;

use super::entry::Entry;
use crate::error::CompileError;

/// An entry annotated with the indices of the entries that depend on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// The entry itself.
    pub entry: Entry,
    /// Indices of entries whose `depends` names this entry's label.
    pub to: Vec<usize>,
}

/// Check that every dependency names a label some entry declares.
///
/// Run on the full entry list before platform filtering, so a label whose
/// entries are all filtered out still counts as declared.
///
/// # Errors
///
/// Returns [`CompileError::DanglingDependency`] for the first reference to
/// an undeclared (or empty) label, in declaration order.
pub fn check_dependencies(entries: &[Entry]) -> Result<(), CompileError> {
    let declared: HashSet<&str> = entries
        .iter()
        .filter(|e| e.is_labeled())
        .map(|e| e.label.as_str())
        .collect();

    for entry in entries {
        if let Some(missing) = entry.depends.iter().find(|d| !declared.contains(d.as_str())) {
            return Err(CompileError::DanglingDependency {
                label: missing.clone(),
                command: entry.command.clone(),
            });
        }
    }
    Ok(())
}

/// Annotate each entry with the indices of its dependents.
///
/// Scans the whole list once per labeled entry. An entry that depends on
/// its own label gets an edge to itself.
#[must_use]
pub fn build(entries: Vec<Entry>) -> Vec<Node> {
    let edges: Vec<Vec<usize>> = entries
        .iter()
        .map(|entry| {
            if !entry.is_labeled() {
                return Vec::new();
            }
            entries
                .iter()
                .enumerate()
                .filter(|(_, other)| other.depends_on(&entry.label))
                .map(|(idx, _)| idx)
                .collect()
        })
        .collect();

    entries
        .into_iter()
        .zip(edges)
        .map(|(entry, to)| Node { entry, to })
        .collect()
}
