//! Core data types for gitinclude

use crate::core::path::{ancestors, normalize_dir_path};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// One parsed line of a rules file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    path: String,
    extensions: Vec<String>,
}

impl Rule {
    /// Create a rule, normalizing the directory path
    pub fn new<I, S>(path: &str, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: normalize_dir_path(path),
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    /// Normalized directory path, always ending in `/`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Extension globs in the order they were written
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}

/// An explicit rule's place in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration {
    /// Index of the declared path in the table
    pub index: usize,
    /// Table length right after the rule was applied
    pub horizon: usize,
}

/// Ordered mapping from directory path to the extensions kept in it
///
/// Iteration follows first insertion. Ancestors are always registered before
/// their descendants; a path first seen as an ancestor placeholder keeps its
/// position when an explicit rule later fills in its extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    entries: IndexMap<String, Option<Vec<String>>>,
    declarations: Vec<Declaration>,
}

impl RuleTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one rule: register missing ancestors, then the path itself
    pub fn insert_rule(&mut self, rule: Rule) {
        let Rule { path, extensions } = rule;

        for ancestor in ancestors(&path) {
            if !self.entries.contains_key(ancestor) {
                trace!(path = ancestor, "registering ancestor placeholder");
                self.entries.insert(ancestor.to_string(), None);
            }
        }

        debug!(path = %path, extensions = extensions.len(), "applying rule");
        let (index, _) = self.entries.insert_full(path, Some(extensions));

        // A repeated declaration replaces the earlier one
        self.declarations.retain(|d| d.index != index);
        self.declarations.push(Declaration {
            index,
            horizon: self.entries.len(),
        });
    }

    /// Number of directory entries, placeholders included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a normalized path has an entry
    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Extensions recorded for a path; `None` for placeholders and unknown paths
    pub fn extensions(&self, path: &str) -> Option<&[String]> {
        self.entries.get(path).and_then(|e| e.as_deref())
    }

    /// Entry at a table position
    pub fn get_index(&self, index: usize) -> Option<(&str, Option<&[String]>)> {
        self.entries
            .get_index(index)
            .map(|(path, exts)| (path.as_str(), exts.as_deref()))
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&[String]>)> {
        self.entries
            .iter()
            .map(|(path, exts)| (path.as_str(), exts.as_deref()))
    }

    /// Directory paths in table order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Explicit rules in the order they took effect
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

impl FromIterator<Rule> for RuleTable {
    fn from_iter<T: IntoIterator<Item = Rule>>(iter: T) -> Self {
        let mut table = Self::new();
        for rule in iter {
            table.insert_rule(rule);
        }
        table
    }
}
