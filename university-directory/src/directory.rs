//! Alias-aware lookups over the directory table.

use crate::table::{AliasKey, DirectoryEntry, ALIASES, ENTRIES};

/// Which matching phase produced a [`CountryMatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Key equals the query byte for byte
    Exact,
    /// Key equals the query ignoring case
    CaseInsensitive,
    /// Key contains the query, or the query contains the key (ignoring case)
    Substring,
}

/// Result of resolving a country query against the alias table.
#[derive(Debug, Clone, Copy)]
pub struct CountryMatch {
    /// Alias key that matched
    pub key: &'static str,
    /// Canonical entry behind the key
    pub entry: &'static DirectoryEntry,
    /// Phase that produced the match
    pub phase: MatchPhase,
}

impl CountryMatch {
    /// Canonical country name of the matched entry.
    pub fn country(&self) -> &'static str {
        self.entry.country
    }

    /// Institution names of the matched entry.
    pub fn institutions(&self) -> &'static [&'static str] {
        self.entry.institutions
    }
}

/// An institution found by a name search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMatch {
    /// Institution name as stored
    pub name: &'static str,
    /// Entry the name was found in
    pub country: &'static str,
}

/// Read-only view over a `'static` directory table.
///
/// Lookups are pure functions of the query and the table.
#[derive(Debug, Clone, Copy)]
pub struct StaticDirectory {
    entries: &'static [&'static DirectoryEntry],
    aliases: &'static [AliasKey],
}

impl StaticDirectory {
    /// Directory over an arbitrary table.
    pub const fn new(
        entries: &'static [&'static DirectoryEntry],
        aliases: &'static [AliasKey],
    ) -> Self {
        Self { entries, aliases }
    }

    /// The built-in table.
    pub fn builtin() -> Self {
        Self::new(&ENTRIES, &ALIASES)
    }

    /// Canonical entries in table order.
    pub fn entries(&self) -> &'static [&'static DirectoryEntry] {
        self.entries
    }

    /// Alias keys in registration order.
    pub fn aliases(&self) -> &'static [AliasKey] {
        self.aliases
    }

    /// Resolve a country query to an entry.
    ///
    /// Phases run in order and the first hit wins:
    /// 1. exact key
    /// 2. case-insensitive key
    /// 3. case-insensitive substring in either direction, first registered key
    pub fn match_country(&self, query: &str) -> Option<CountryMatch> {
        if let Some(alias) = self.aliases.iter().find(|a| a.key == query) {
            return Some(Self::hit(alias, MatchPhase::Exact));
        }

        let needle = query.to_lowercase();

        if let Some(alias) = self
            .aliases
            .iter()
            .find(|a| a.key.to_lowercase() == needle)
        {
            return Some(Self::hit(alias, MatchPhase::CaseInsensitive));
        }

        self.aliases
            .iter()
            .find(|a| {
                let key = a.key.to_lowercase();
                key.contains(&needle) || needle.contains(&key)
            })
            .map(|alias| Self::hit(alias, MatchPhase::Substring))
    }

    /// Institutions for a country query; empty when nothing matches.
    pub fn institutions_for(&self, query: &str) -> &'static [&'static str] {
        self.match_country(query)
            .map(|m| m.institutions())
            .unwrap_or(&[])
    }

    /// Case-insensitive substring search over every institution name.
    ///
    /// Walks canonical entries only, so an institution shared by several
    /// alias keys is reported once.
    pub fn search_names(&self, query: &str) -> Vec<NameMatch> {
        let needle = query.to_lowercase();

        self.entries
            .iter()
            .flat_map(|entry| {
                entry.institutions.iter().map(move |&name| NameMatch {
                    name,
                    country: entry.country,
                })
            })
            .filter(|m| m.name.to_lowercase().contains(&needle))
            .collect()
    }

    fn hit(alias: &AliasKey, phase: MatchPhase) -> CountryMatch {
        CountryMatch {
            key: alias.key,
            entry: alias.entry,
            phase,
        }
    }
}

impl Default for StaticDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
