//! Ordered literal string replacement.
//!
//! A [`ReplacementMap`] is the only piece of real logic in template
//! customization: every file the tool touches goes through
//! [`ReplacementMap::apply`].
//!
//! ## Semantics
//!
//! Replacements run one after another in insertion order. Each step replaces
//! every non-overlapping occurrence of its key in the text produced by the
//! previous step (the same scan `str::replace` performs). Keys that never
//! occur leave the text untouched.
//!
//! ## Overlap hazard
//!
//! When a replacement *value* contains some replacement *key*, a second pass
//! over already-customized text is not a no-op, and a later key can rewrite
//! text an earlier step just produced. [`ReplacementMap::hazards`] reports
//! those pairs so callers can warn about them.

use serde::Serialize;

use crate::domain::DomainError;

/// One literal-to-literal substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

/// Ordered replacements with distinct, non-empty keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementMap {
    entries: Vec<Replacement>,
}

impl ReplacementMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a replacement.
    ///
    /// # Errors
    ///
    /// - [`DomainError::EmptyReplacementKey`] if `from` is empty.
    /// - [`DomainError::DuplicateReplacementKey`] if `from` is already present.
    pub fn insert(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<(), DomainError> {
        let from = from.into();
        if from.is_empty() {
            return Err(DomainError::EmptyReplacementKey);
        }
        if self.entries.iter().any(|r| r.from == from) {
            return Err(DomainError::DuplicateReplacementKey { key: from });
        }
        self.entries.push(Replacement {
            from,
            to: to.into(),
        });
        Ok(())
    }

    /// Insert or overwrite: an existing key keeps its position and takes the
    /// new value, which is returned in place of the old one.
    ///
    /// # Errors
    ///
    /// [`DomainError::EmptyReplacementKey`] if `from` is empty.
    pub fn set(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Option<String>, DomainError> {
        let from = from.into();
        if from.is_empty() {
            return Err(DomainError::EmptyReplacementKey);
        }
        let to = to.into();
        match self.entries.iter_mut().find(|r| r.from == from) {
            Some(existing) => Ok(Some(std::mem::replace(&mut existing.to, to))),
            None => {
                self.entries.push(Replacement { from, to });
                Ok(None)
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, DomainError> {
        self.insert(from, to)?;
        Ok(self)
    }

    /// Keys in application order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|r| r.from.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every replacement, in order, to `text`.
    pub fn apply(&self, text: &str) -> Substitution {
        let mut current = text.to_owned();
        let mut counts = Vec::with_capacity(self.entries.len());

        for r in &self.entries {
            let hits = current.matches(r.from.as_str()).count();
            if hits > 0 {
                current = current.replace(r.from.as_str(), &r.to);
            }
            counts.push((r.from.clone(), hits));
        }

        Substitution {
            text: current,
            counts,
        }
    }

    /// Every (key, value) pair where a value contains a key.
    ///
    /// A value containing its own key is included: `"lib" -> "mylib"` turns
    /// `"mylib"` into `"mymylib"` on a second pass.
    pub fn hazards(&self) -> Vec<OverlapHazard> {
        let mut found = Vec::new();
        for value_owner in &self.entries {
            for key_owner in &self.entries {
                if value_owner.to.contains(key_owner.from.as_str()) {
                    found.push(OverlapHazard {
                        value_of: value_owner.from.clone(),
                        value: value_owner.to.clone(),
                        contains_key: key_owner.from.clone(),
                    });
                }
            }
        }
        found
    }
}

/// Result of applying a [`ReplacementMap`] to one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    /// Occurrences replaced per key, in application order.
    pub counts: Vec<(String, usize)>,
}

impl Substitution {
    /// Total number of occurrences replaced.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    pub fn changed(&self) -> bool {
        self.total() > 0
    }
}

/// A replacement value that contains a replacement key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverlapHazard {
    /// Key whose value is the offender.
    pub value_of: String,
    pub value: String,
    /// Key found inside `value`.
    pub contains_key: String,
}
