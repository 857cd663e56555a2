//! Built-in directory data.
//!
//! Canonical entries hold the institution lists; alias keys point at them.
//! Alias order matters: substring matching returns the first key that hits.

/// A canonical country and its institutions, in presentation order.
#[derive(Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Canonical country name
    pub country: &'static str,
    /// Institution names (not ranked)
    pub institutions: &'static [&'static str],
}

/// A lookup key resolving to a canonical entry.
#[derive(Debug, Clone, Copy)]
pub struct AliasKey {
    /// Key as registered ("US", "Britain", ...)
    pub key: &'static str,
    /// Entry this key resolves to
    pub entry: &'static DirectoryEntry,
}

impl AliasKey {
    pub const fn new(key: &'static str, entry: &'static DirectoryEntry) -> Self {
        Self { key, entry }
    }
}

pub static USA: DirectoryEntry = DirectoryEntry {
    country: "USA",
    institutions: &[
        "Massachusetts Institute of Technology",
        "Stanford University",
        "Harvard University",
        "California Institute of Technology",
        "University of California Berkeley",
        "Carnegie Mellon University",
        "Georgia Institute of Technology",
        "University of Illinois",
        "University of Michigan",
        "University of Washington",
        "Cornell University",
        "University of Texas at Austin",
        "Princeton University",
        "UCLA",
        "Columbia University",
    ],
};

pub static UK: DirectoryEntry = DirectoryEntry {
    country: "UK",
    institutions: &[
        "University of Cambridge",
        "University of Oxford",
        "Imperial College London",
        "University College London",
        "King's College London",
        "University of Edinburgh",
        "University of Manchester",
        "London School of Economics",
        "University of Warwick",
        "University of Bristol",
        "University of Glasgow",
        "Durham University",
        "University of Sheffield",
        "University of Nottingham",
        "University of Southampton",
    ],
};

pub static GERMANY: DirectoryEntry = DirectoryEntry {
    country: "Germany",
    institutions: &[
        "Technical University of Munich",
        "ETH Zurich",
        "University of Heidelberg",
        "Ludwig Maximilian University",
        "Humboldt University Berlin",
        "RWTH Aachen University",
        "University of Freiburg",
        "University of Göttingen",
        "Technical University of Berlin",
        "University of Hamburg",
        "University of Stuttgart",
        "Karlsruhe Institute of Technology",
        "University of Cologne",
        "University of Münster",
        "University of Würzburg",
    ],
};

pub static INDIA: DirectoryEntry = DirectoryEntry {
    country: "India",
    institutions: &[
        "Indian Institute of Technology Delhi",
        "Indian Institute of Technology Bombay",
        "Indian Institute of Technology Madras",
        "Indian Institute of Technology Kanpur",
        "Indian Institute of Technology Kharagpur",
        "Indian Institute of Science Bangalore",
        "National Institute of Technology Trichy",
        "Delhi Technological University",
        "Birla Institute of Technology",
        "Vellore Institute of Technology",
        "Indian Institute of Technology Roorkee",
        "BITS Pilani",
        "Anna University",
        "Jadavpur University",
        "Indian Institute of Technology Guwahati",
    ],
};

pub static CANADA: DirectoryEntry = DirectoryEntry {
    country: "Canada",
    institutions: &[
        "University of Toronto",
        "University of British Columbia",
        "McGill University",
        "University of Alberta",
        "University of Waterloo",
        "McMaster University",
        "University of Montreal",
        "University of Calgary",
        "Queen's University",
        "Simon Fraser University",
        "University of Ottawa",
        "Western University",
        "University of Victoria",
        "Concordia University",
        "Carleton University",
    ],
};

pub static AUSTRALIA: DirectoryEntry = DirectoryEntry {
    country: "Australia",
    institutions: &[
        "Australian National University",
        "University of Melbourne",
        "University of Sydney",
        "University of Queensland",
        "University of New South Wales",
        "Monash University",
        "University of Western Australia",
        "University of Adelaide",
        "Macquarie University",
        "Queensland University of Technology",
        "University of Technology Sydney",
        "Griffith University",
        "Deakin University",
        "Curtin University",
        "RMIT University",
    ],
};

/// Canonical entries in table order.
pub static ENTRIES: [&DirectoryEntry; 6] = [&USA, &UK, &GERMANY, &INDIA, &CANADA, &AUSTRALIA];

/// Alias keys in registration order.
pub static ALIASES: [AliasKey; 13] = [
    AliasKey::new("United States", &USA),
    AliasKey::new("USA", &USA),
    AliasKey::new("US", &USA),
    AliasKey::new("United Kingdom", &UK),
    AliasKey::new("UK", &UK),
    AliasKey::new("Britain", &UK),
    AliasKey::new("Germany", &GERMANY),
    AliasKey::new("Deutschland", &GERMANY),
    AliasKey::new("India", &INDIA),
    AliasKey::new("Bharat", &INDIA),
    AliasKey::new("Canada", &CANADA),
    AliasKey::new("Australia", &AUSTRALIA),
    AliasKey::new("AUS", &AUSTRALIA),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_entry_has_fifteen_institutions() {
        for entry in ENTRIES {
            assert_eq!(entry.institutions.len(), 15, "{}", entry.country);
        }
    }

    #[test]
    fn test_every_alias_points_at_a_registered_entry() {
        for alias in &ALIASES {
            assert!(
                ENTRIES.iter().any(|e| std::ptr::eq(*e, alias.entry)),
                "alias {} is dangling",
                alias.key
            );
        }
    }

    #[test]
    fn test_every_entry_is_reachable_by_its_own_name() {
        let keys: HashSet<_> = ALIASES.iter().map(|a| a.key).collect();
        for entry in ENTRIES {
            assert!(keys.contains(entry.country), "{}", entry.country);
        }
    }
}
