//! Preparation progress: exam readiness and the application checklist.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{AdvisorError, Result};

/// Tracked exams.
pub const EXAMS: [&str; 5] = ["GRE Verbal", "GRE Quant", "TOEFL", "GATE", "IELTS"];

/// Application checklist, in display order.
pub const CHECKLIST_ITEMS: [&str; 6] = [
    "University Research Completed",
    "SOP Draft Ready",
    "LOR Requests Sent",
    "Transcripts Obtained",
    "Financial Documents Prepared",
    "Visa Documentation Started",
];

fn canonical(known: &[&'static str], name: &str) -> Option<&'static str> {
    let name = name.trim();
    known
        .iter()
        .copied()
        .find(|k| k.eq_ignore_ascii_case(name))
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgressTracker {
    exams: BTreeMap<&'static str, u8>,
    completed: BTreeSet<&'static str>,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record exam progress in percent. Names match case-insensitively.
    pub fn set_exam_progress(&mut self, exam: &str, percent: u8) -> Result<()> {
        let exam = canonical(&EXAMS, exam).ok_or_else(|| AdvisorError::UnknownItem(exam.to_string()))?;
        if percent > 100 {
            return Err(AdvisorError::invalid(exam, format!("{} not in 0-100", percent)));
        }
        self.exams.insert(exam, percent);
        Ok(())
    }

    /// Progress for one exam; untouched exams are 0.
    pub fn exam_progress(&self, exam: &str) -> Option<u8> {
        canonical(&EXAMS, exam).map(|e| self.exams.get(e).copied().unwrap_or(0))
    }

    /// All exams with their progress, in `EXAMS` order.
    pub fn exams(&self) -> impl Iterator<Item = (&'static str, u8)> + '_ {
        EXAMS
            .into_iter()
            .map(move |e| (e, self.exams.get(e).copied().unwrap_or(0)))
    }

    pub fn complete(&mut self, item: &str) -> Result<()> {
        let item = canonical(&CHECKLIST_ITEMS, item)
            .ok_or_else(|| AdvisorError::UnknownItem(item.to_string()))?;
        self.completed.insert(item);
        Ok(())
    }

    pub fn is_complete(&self, item: &str) -> bool {
        canonical(&CHECKLIST_ITEMS, item).is_some_and(|i| self.completed.contains(i))
    }

    /// Checklist items with their state, in display order.
    pub fn checklist(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        CHECKLIST_ITEMS
            .into_iter()
            .map(move |i| (i, self.completed.contains(i)))
    }

    /// Completed checklist items as a percentage.
    pub fn completion_rate(&self) -> f64 {
        self.completed.len() as f64 / CHECKLIST_ITEMS.len() as f64 * 100.0
    }

    pub fn is_ready(&self) -> bool {
        self.completed.len() == CHECKLIST_ITEMS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tracker() {
        let tracker = ProgressTracker::new();
        assert_eq!(tracker.completion_rate(), 0.0);
        assert!(!tracker.is_ready());
        assert_eq!(tracker.exam_progress("TOEFL"), Some(0));
        assert_eq!(tracker.exams().count(), 5);
    }

    #[test]
    fn test_checklist_completion() {
        let mut tracker = ProgressTracker::new();
        tracker.complete("SOP Draft Ready").unwrap();
        tracker.complete("lor requests sent").unwrap();
        // Idempotent
        tracker.complete("SOP Draft Ready").unwrap();

        assert!(tracker.is_complete("LOR Requests Sent"));
        assert!((tracker.completion_rate() - 2.0 / 6.0 * 100.0).abs() < 1e-9);

        for item in CHECKLIST_ITEMS {
            tracker.complete(item).unwrap();
        }
        assert!(tracker.is_ready());
        assert_eq!(tracker.completion_rate(), 100.0);
    }

    #[test]
    fn test_unknown_item_rejected() {
        let mut tracker = ProgressTracker::new();
        assert!(matches!(
            tracker.complete("Buy Plane Tickets"),
            Err(AdvisorError::UnknownItem(_))
        ));
        assert!(matches!(
            tracker.set_exam_progress("SAT", 50),
            Err(AdvisorError::UnknownItem(_))
        ));
    }

    #[test]
    fn test_exam_progress() {
        let mut tracker = ProgressTracker::new();
        tracker.set_exam_progress("gre quant", 80).unwrap();

        assert_eq!(tracker.exam_progress("GRE Quant"), Some(80));
        assert_eq!(tracker.exam_progress("SAT"), None);
        assert!(tracker.set_exam_progress("GATE", 101).is_err());
    }
}
