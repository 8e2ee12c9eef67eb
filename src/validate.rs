//! Field-level predicates: key-name shape and the permission
//! vocabulary.

use std::collections::BTreeSet;

/// Permission that clears every other permission in its list.
pub const NONE_PERMISSION: &str = "none";

/// Permissions recognized by [`Permissions::default`].
pub const DEFAULT_PERMISSIONS: [&str; 5] = [NONE_PERMISSION, "add", "edit", "delete", "read"];

/// Whether `text` is a valid key name: an ASCII letter followed by
/// ASCII letters, digits, or underscores.
#[must_use]
pub fn is_valid_key(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Fixed permission vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permissions {
    known: BTreeSet<String>,
}

impl Permissions {
    /// Build a vocabulary from an explicit list of names.
    ///
    /// `none` is always part of the vocabulary.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut known: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        known.insert(NONE_PERMISSION.to_string());
        Self { known }
    }

    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    /// Known names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.known.iter().map(String::as_str)
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::new(DEFAULT_PERMISSIONS)
    }
}

/// Split a comma-separated permission list, trimming whitespace and
/// dropping empty entries.
///
/// Returns the first unknown entry as the error. A list naming
/// `none` collapses to `["none"]`.
pub(crate) fn split_permissions(list: &str, vocabulary: &Permissions) -> Result<Vec<String>, String> {
    let names: Vec<&str> = list
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();

    if let Some(unknown) = names.iter().find(|name| !vocabulary.is_known(name)) {
        return Err((*unknown).to_string());
    }

    Ok(collapse_none(names.into_iter().map(str::to_string).collect()))
}

/// `["none"]` if the list names `none`, the list unchanged otherwise.
pub(crate) fn collapse_none(permissions: Vec<String>) -> Vec<String> {
    if permissions.iter().any(|p| p == NONE_PERMISSION) {
        vec![NONE_PERMISSION.to_string()]
    } else {
        permissions
    }
}
