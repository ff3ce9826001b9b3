//! Alias table for grammar tokens.
//!
//! Maps canonical tokens (piece names, file letters, digits, action words) to
//! the surface forms a speech recognizer produces instead of them. A lexicon
//! is built once and handed to the grammar compiler; it is never mutated
//! afterwards.

use std::collections::BTreeMap;

use spokenmove_foundation::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Canonical token → ordered alias list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "BTreeMap<String, Vec<String>>",
        into = "BTreeMap<String, Vec<String>>"
    )
)]
pub struct Lexicon {
    /// Aliases by lowercase canonical token, in declared order
    entries: BTreeMap<String, Vec<String>>,
}

impl Lexicon {
    /// Creates an empty lexicon. Only canonical literals will be accepted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts building a lexicon.
    #[must_use]
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Returns every accepted surface form of a canonical token: the
    /// normalized token itself, then its aliases in declared order.
    ///
    /// ```
    /// use spokenmove_parser::Lexicon;
    ///
    /// let lexicon = Lexicon::builder().alias("knight", "night").build().unwrap();
    /// assert_eq!(lexicon.resolve("Knight"), ["knight", "night"]);
    /// assert_eq!(lexicon.resolve("queen"), ["queen"]);
    /// ```
    #[must_use]
    pub fn resolve(&self, token: &str) -> Vec<String> {
        let canonical = normalize(token);
        let mut forms = vec![canonical.clone()];
        if let Some(aliases) = self.entries.get(&canonical) {
            forms.extend(aliases.iter().cloned());
        }
        forms
    }

    /// Returns only the aliases configured for a canonical token, in declared
    /// order.
    #[must_use]
    pub fn aliases(&self, token: &str) -> &[String] {
        self.entries
            .get(&normalize(token))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if the token has at least one alias.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(&normalize(token))
    }

    /// Returns the canonical tokens that have aliases, sorted.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(token, aliases)` pairs, sorted by token.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(token, aliases)| (token.as_str(), aliases.as_slice()))
    }

    /// Returns the number of tokens with aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no aliases are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a new lexicon with `other`'s aliases appended after this one's.
    #[must_use]
    pub fn merged(&self, other: &Lexicon) -> Lexicon {
        let mut entries = self.entries.clone();
        for (token, aliases) in &other.entries {
            let slot = entries.entry(token.clone()).or_default();
            for alias in aliases {
                if !slot.contains(alias) {
                    slot.push(alias.clone());
                }
            }
        }
        Lexicon { entries }
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for Lexicon {
    type Error = Error;

    fn try_from(map: BTreeMap<String, Vec<String>>) -> Result<Self> {
        map.into_iter()
            .fold(Lexicon::builder(), |builder, (token, aliases)| {
                builder.aliases(token, aliases)
            })
            .build()
    }
}

impl From<Lexicon> for BTreeMap<String, Vec<String>> {
    fn from(lexicon: Lexicon) -> Self {
        lexicon.entries
    }
}

/// Builder for [`Lexicon`].
///
/// Records the first invalid entry and reports it from [`LexiconBuilder::build`].
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    entries: BTreeMap<String, Vec<String>>,
    error: Option<Error>,
}

impl LexiconBuilder {
    /// Adds one alias for a canonical token.
    #[must_use]
    pub fn alias(mut self, token: impl AsRef<str>, alias: impl AsRef<str>) -> Self {
        self.push(token.as_ref(), alias.as_ref());
        self
    }

    /// Adds several aliases for a canonical token, keeping their order.
    #[must_use]
    pub fn aliases<I, S>(mut self, token: impl AsRef<str>, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for alias in aliases {
            self.push(token.as_ref(), alias.as_ref());
        }
        self
    }

    /// Appends every entry of an existing lexicon.
    #[must_use]
    pub fn extend(mut self, lexicon: &Lexicon) -> Self {
        for (token, aliases) in lexicon.iter() {
            for alias in aliases {
                self.push(token, alias);
            }
        }
        self
    }

    /// Finishes the lexicon.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidAlias` error for the first empty token or alias added.
    pub fn build(self) -> Result<Lexicon> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(Lexicon {
                entries: self.entries,
            }),
        }
    }

    fn push(&mut self, token: &str, alias: &str) {
        if self.error.is_some() {
            return;
        }
        let token = normalize(token);
        let alias = normalize(alias);
        if token.is_empty() || alias.is_empty() {
            self.error = Some(Error::invalid_alias(token, alias));
            return;
        }
        let slot = self.entries.entry(token).or_default();
        if !slot.contains(&alias) {
            slot.push(alias);
        }
    }
}

/// Lowercases and trims a token or surface form.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
