//! Hierarchical node codes: every level contributes exactly two zero-padded digits.

use serde::{Deserialize, Serialize};

/// Width of the per-level suffix. A child's prefix is its parent's full code.
pub const SUFFIX_WIDTH: usize = 2;

/// Largest suffix a level can hold.
pub const MAX_SUFFIX: u8 = 99;

/// Hierarchical code such as `"0102"` (second child of the first root).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeCode(String);

impl NodeCode {
    /// Wrap a code as-is. Seeded data goes through `tree::validate_forest` before use.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code with its last two characters removed: the prefix shared by all siblings.
    pub fn parent_prefix(&self) -> &str {
        match self.0.char_indices().rev().nth(SUFFIX_WIDTH - 1) {
            Some((i, _)) => &self.0[..i],
            None => "",
        }
    }

    /// The leading digits of the last two characters, read as base 10 (`"1A"` is 1, `"A1"` is
    /// nothing). Leading whitespace and a `+` sign are skipped; a negative value counts as nothing.
    pub fn suffix(&self) -> Option<u8> {
        let tail = self.0[self.parent_prefix().len()..].trim_start();
        let tail = tail.strip_prefix('+').unwrap_or(tail);
        let digits = tail.len() - tail.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        tail[..digits].parse().ok()
    }

    /// True when this code is exactly `prefix` followed by two digits.
    pub fn is_well_formed_under(&self, prefix: &str) -> bool {
        self.0.len() == prefix.len() + SUFFIX_WIDTH
            && self.0.starts_with(prefix)
            && self.0[prefix.len()..].chars().all(|c| c.is_ascii_digit())
    }
}

impl std::fmt::Display for NodeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Next code for a new sibling: `prefix` + (max sibling suffix + 1), zero-padded to two digits.
///
/// Suffixes that do not parse count as 0, so irregular sibling codes can yield a code that
/// already exists. Returns `None` once the level has used suffix 99.
pub fn next_sibling_code<'a, I>(prefix: &str, sibling_codes: I) -> Option<NodeCode>
where
    I: IntoIterator<Item = &'a NodeCode>,
{
    let max = sibling_codes
        .into_iter()
        .map(|code| code.suffix().unwrap_or(0))
        .max()
        .unwrap_or(0);

    if max >= MAX_SUFFIX {
        return None;
    }

    Some(NodeCode(format!("{}{:02}", prefix, max + 1)))
}
