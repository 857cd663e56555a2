//! Plain-text and JSON rendering for command output.

use serde::Serialize;

use advisor::{
    FinancialSummary, FundingOutcome, LineKind, ProgressTracker, Recommendation,
};
use explorer::{InstitutionRecord, LookupKind, LookupResult, Provenance};

/// Severity of the status line printed after a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageBand {
    Success,
    Info,
    Warning,
    Error,
}

impl MessageBand {
    pub fn from_provenance(provenance: Provenance) -> Self {
        match provenance {
            Provenance::Live => Self::Success,
            Provenance::Cached => Self::Info,
            Provenance::None => Self::Warning,
            Provenance::Error => Self::Error,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Success => "[ok]",
            Self::Info => "[info]",
            Self::Warning => "[warn]",
            Self::Error => "[error]",
        }
    }
}

/// A band plus its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub band: MessageBand,
    pub message: String,
}

impl Banner {
    pub fn new(band: MessageBand, message: impl Into<String>) -> Self {
        Self {
            band,
            message: message.into(),
        }
    }

    pub fn render(&self) -> String {
        format!("{} {}", self.band.tag(), self.message)
    }
}

/// Banner for a blank query, which never reaches the resolver.
pub fn empty_query_banner(kind: LookupKind) -> Banner {
    let what = match kind {
        LookupKind::ByCountry => "a country name",
        LookupKind::ByName => "a university name",
    };
    Banner::new(MessageBand::Warning, format!("Please enter {} to search.", what))
}

pub fn lookup_banner(kind: LookupKind, query: &str, result: &LookupResult) -> Banner {
    let band = MessageBand::from_provenance(result.provenance());
    let n = result.len();
    let message = match (kind, result.provenance()) {
        (LookupKind::ByCountry, Provenance::Live) => {
            format!("Found {} universities in {} (live data)", n, query)
        }
        (LookupKind::ByCountry, Provenance::Cached) => {
            format!("Showing cached universities for {} (live service unavailable)", query)
        }
        (LookupKind::ByCountry, Provenance::None) => format!(
            "No universities found for '{}'. Try another country name (e.g. 'United States', 'Canada', 'Germany').",
            query
        ),
        (LookupKind::ByCountry, Provenance::Error) => format!(
            "Failed to fetch universities for '{}' and no cached data is available.",
            query
        ),
        (LookupKind::ByName, Provenance::Live) => {
            format!("Found {} universities matching '{}' (live data)", n, query)
        }
        (LookupKind::ByName, Provenance::Cached) => format!(
            "Found {} universities matching '{}' in cached data (live service unavailable)",
            n, query
        ),
        (LookupKind::ByName, Provenance::None) => format!(
            "No universities found matching '{}'. Try a different search term.",
            query
        ),
        (LookupKind::ByName, Provenance::Error) => format!(
            "Search failed and no cached data found for '{}'. Please try again later.",
            query
        ),
    };
    Banner::new(band, message)
}

fn website(record: &InstitutionRecord) -> &str {
    record.homepage.as_deref().unwrap_or("N/A")
}

/// Country lookup: up to `limit` rows of name and website, then the banner.
pub fn format_country_lookup(query: &str, result: &LookupResult, limit: usize) -> String {
    let mut output = String::new();
    for (i, record) in result.records().iter().take(limit).enumerate() {
        output.push_str(&format!("{:>3}. {}\n", i + 1, record.name));
        output.push_str(&format!("     Website: {}\n", website(record)));
    }
    if result.len() > limit {
        output.push_str(&format!("     ... {} more\n", result.len() - limit));
    }
    output.push_str(&lookup_banner(LookupKind::ByCountry, query, result).render());
    output
}

/// Name lookup: every record with country, region and website, then the banner.
pub fn format_name_lookup(query: &str, result: &LookupResult) -> String {
    let mut output = String::new();
    for record in result.records() {
        output.push_str(&format!("{}\n", record.name));
        output.push_str(&format!("  Country: {}\n", record.country_or_unknown()));
        if let Some(region) = &record.region {
            output.push_str(&format!("  Region:  {}\n", region));
        }
        output.push_str(&format!("  Website: {}\n", website(record)));
    }
    output.push_str(&lookup_banner(LookupKind::ByName, query, result).render());
    output
}

/// JSON shape of a lookup.
#[derive(Debug, Serialize)]
pub struct LookupReport<'a> {
    pub kind: LookupKind,
    pub query: &'a str,
    pub provenance: Provenance,
    pub total: usize,
    pub records: &'a [InstitutionRecord],
    pub banner: Banner,
}

impl<'a> LookupReport<'a> {
    pub fn new(kind: LookupKind, query: &'a str, result: &'a LookupResult, limit: usize) -> Self {
        let records = result.records();
        Self {
            kind,
            query,
            provenance: result.provenance(),
            total: records.len(),
            records: &records[..limit.min(records.len())],
            banner: lookup_banner(kind, query, result),
        }
    }
}

pub fn format_recommendation(rec: &Recommendation) -> String {
    let mut output = String::new();
    output.push_str(&format!("Recommended path: {}\n\n", rec.title));
    output.push_str("Preparation timeline\n");
    output.push_str("====================\n");
    for phase in rec.timeline {
        output.push_str(&format!(
            "  {:<18} {:>2} months  ({} priority)\n",
            phase.name,
            phase.months,
            phase.priority.as_str()
        ));
    }
    output.push_str(&format!("  {:<18} {:>2} months\n", "Total", rec.total_months));
    output
}

pub fn format_finance(summary: &FinancialSummary) -> String {
    let mut output = String::new();
    output.push_str("Financial breakdown (INR Lakhs)\n");
    output.push_str("===============================\n");
    for line in &summary.breakdown {
        let kind = match line.kind {
            LineKind::Expense => "expense",
            LineKind::Savings => "savings",
            LineKind::Support => "support",
            LineKind::Income => "income",
        };
        output.push_str(&format!("  {:<20} {:>8.1}  {}\n", line.category, line.amount, kind));
    }
    output.push('\n');
    output.push_str(&format!("Total Cost:     {:.1}L\n", summary.total_cost));
    output.push_str(&format!("Total Savings:  {:.1}L\n", summary.total_savings));
    match summary.outcome {
        FundingOutcome::LoanNeeded {
            amount,
            share_of_total,
        } => output.push_str(&format!(
            "Loan Needed:    {:.1}L ({:.1}% of total)\n",
            amount, share_of_total
        )),
        FundingOutcome::Surplus { amount } => {
            output.push_str(&format!("Surplus:        {:.1}L (no loan needed)\n", amount))
        }
    }
    output
}

pub fn format_progress(tracker: &ProgressTracker) -> String {
    let mut output = String::new();
    output.push_str("Exam preparation\n");
    output.push_str("================\n");
    for (exam, pct) in tracker.exams() {
        output.push_str(&format!("  {:<12} {:>3}%\n", exam, pct));
    }
    output.push_str("\nApplication checklist\n");
    output.push_str("=====================\n");
    for (item, done) in tracker.checklist() {
        let mark = if done { "x" } else { " " };
        output.push_str(&format!("  [{}] {}\n", mark, item));
    }
    output.push_str(&format!("\nOverall Progress: {:.1}%\n", tracker.completion_rate()));
    if tracker.is_ready() {
        output.push_str(
            &Banner::new(MessageBand::Success, "Congratulations! You're ready to apply!").render(),
        );
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor::FinancialInputs;
    use explorer::{LookupResolver, MockBackend, RemoteInstitution};
    use std::sync::Arc;

    async fn country_lookup(backend: MockBackend, query: &str) -> LookupResult {
        LookupResolver::new(Arc::new(backend))
            .resolve_by_country(query)
            .await
    }

    #[test]
    fn test_band_mapping() {
        assert_eq!(MessageBand::from_provenance(Provenance::Live), MessageBand::Success);
        assert_eq!(MessageBand::from_provenance(Provenance::Cached), MessageBand::Info);
        assert_eq!(MessageBand::from_provenance(Provenance::None), MessageBand::Warning);
        assert_eq!(MessageBand::from_provenance(Provenance::Error), MessageBand::Error);
    }

    #[tokio::test]
    async fn test_country_limit_and_missing_website() {
        let institutions: Vec<_> = (0..25)
            .map(|i| RemoteInstitution::named(format!("Uni {}", i)).with_country("Nowhere"))
            .collect();
        let result = country_lookup(MockBackend::responding(institutions), "Nowhere").await;

        let text = format_country_lookup("Nowhere", &result, 20);
        assert!(text.contains(" 20. Uni 19"));
        assert!(!text.contains("Uni 20\n"));
        assert!(text.contains("Website: N/A"));
        assert!(text.contains("... 5 more"));
        assert!(text.ends_with("[ok] Found 25 universities in Nowhere (live data)"));

        let report = LookupReport::new(LookupKind::ByCountry, "Nowhere", &result, 20);
        assert_eq!(report.total, 25);
        assert_eq!(report.records.len(), 20);
    }

    #[tokio::test]
    async fn test_fallback_and_error_banners() {
        let cached = country_lookup(MockBackend::timing_out(), "UK").await;
        let text = format_country_lookup("UK", &cached, 20);
        assert!(text.contains("Website: https://universityofoxford.edu"));
        assert!(text.ends_with("(live service unavailable)"));
        assert!(text.contains("[info]"));

        let error = country_lookup(MockBackend::timing_out(), "Atlantis").await;
        let banner = lookup_banner(LookupKind::ByCountry, "Atlantis", &error);
        assert_eq!(banner.band, MessageBand::Error);

        let none = country_lookup(MockBackend::empty(), "Atlantis").await;
        let banner = lookup_banner(LookupKind::ByCountry, "Atlantis", &none);
        assert_eq!(banner.band, MessageBand::Warning);
    }

    #[test]
    fn test_empty_query_banner() {
        let banner = empty_query_banner(LookupKind::ByName);
        assert_eq!(banner.band, MessageBand::Warning);
        assert_eq!(banner.render(), "[warn] Please enter a university name to search.");
    }

    #[test]
    fn test_finance_rendering() {
        let summary = FinancialInputs::default().summarize().unwrap();
        let text = format_finance(&summary);

        assert!(text.contains("Total Cost:     75.0L"));
        assert!(text.contains("Loan Needed:    34.0L (45.3% of total)"));
        assert!(text.contains("Scholarship (Saved)"));
    }

    #[test]
    fn test_progress_rendering() {
        let mut tracker = ProgressTracker::new();
        tracker.set_exam_progress("TOEFL", 60).unwrap();
        tracker.complete("SOP Draft Ready").unwrap();

        let text = format_progress(&tracker);
        assert!(text.contains("TOEFL         60%"));
        assert!(text.contains("[x] SOP Draft Ready"));
        assert!(text.contains("[ ] LOR Requests Sent"));
        assert!(text.contains("Overall Progress: 16.7%"));
        assert!(!text.contains("ready to apply"));
    }
}
