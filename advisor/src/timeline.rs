//! Suggested preparation timeline per recommended path.

use serde::{Deserialize, Serialize};

use crate::classifier::traits::StudyPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

/// One preparation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Phase {
    pub name: &'static str,
    pub months: u8,
    pub priority: Priority,
}

const fn phase(name: &'static str, months: u8, priority: Priority) -> Phase {
    Phase {
        name,
        months,
        priority,
    }
}

const ABROAD: [Phase; 4] = [
    phase("Exam Prep", 6, Priority::High),
    phase("Applications", 3, Priority::High),
    phase("Interviews", 2, Priority::Medium),
    phase("Visa Process", 2, Priority::High),
];

const DOMESTIC: [Phase; 4] = [
    phase("GATE Prep", 8, Priority::High),
    phase("College Research", 2, Priority::Medium),
    phase("Applications", 1, Priority::High),
    phase("Counseling", 1, Priority::Medium),
];

impl StudyPath {
    /// Phases in order.
    pub fn timeline(&self) -> &'static [Phase] {
        match self {
            Self::StudyAbroad => &ABROAD,
            Self::DomesticMTech => &DOMESTIC,
        }
    }

    /// Total preparation time in months.
    pub fn total_months(&self) -> u32 {
        self.timeline().iter().map(|p| u32::from(p.months)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abroad_timeline() {
        let phases = StudyPath::StudyAbroad.timeline();
        assert_eq!(phases[0].name, "Exam Prep");
        assert_eq!(phases[3].name, "Visa Process");
        assert_eq!(StudyPath::StudyAbroad.total_months(), 13);
    }

    #[test]
    fn test_domestic_timeline() {
        let phases = StudyPath::DomesticMTech.timeline();
        assert_eq!(phases[0], phase("GATE Prep", 8, Priority::High));
        assert_eq!(StudyPath::DomesticMTech.total_months(), 12);
    }
}
