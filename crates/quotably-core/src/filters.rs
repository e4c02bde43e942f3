// ── Filter state ──
//
// Active filters are an ordered, duplicate-free sequence of author or
// tag names. Order matters: filters display in the order they were
// applied, so this is deliberately a Vec with set semantics enforced
// by the toggle, not an unordered set type.

use std::slice;

/// Compute the next filter sequence after toggling `value`.
///
/// - absent `filters` → a new single-element sequence of `value`
/// - `value` present → a new sequence with that one occurrence removed,
///   other elements keeping their relative order
/// - `value` missing → a new sequence with `value` appended
///
/// Never mutates its input; toggling the same value twice returns a
/// sequence equal to the original.
pub fn toggle_filter(filters: Option<&[String]>, value: &str) -> Vec<String> {
    let Some(current) = filters else {
        return vec![value.to_owned()];
    };

    let mut next = current.to_vec();
    if let Some(idx) = current.iter().position(|f| f == value) {
        next.remove(idx);
    } else {
        next.push(value.to_owned());
    }
    next
}

/// How multiple filter values combine in a query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterJoin {
    /// Pipe-separated: match any of the values (OR).
    Any,
    /// Comma-separated: match all of the values (AND).
    All,
}

impl FilterJoin {
    fn separator(self) -> &'static str {
        match self {
            Self::Any => "|",
            Self::All => ",",
        }
    }
}

/// The ordered, duplicate-free set of active filter values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet(Vec<String>);

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `value` in or out, returning the next filter set.
    pub fn toggle(&self, value: &str) -> Self {
        Self(toggle_filter(Some(&self.0), value))
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|f| f == value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Join the active values into an API query value, or `None` when
    /// no filters are active.
    pub fn query_value(&self, join: FilterJoin) -> Option<String> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.join(join.separator()))
        }
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
