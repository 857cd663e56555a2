//! Subcommands and their execution.

use clap::{Args, Subcommand};
use std::sync::Arc;
use tracing::info;

use advisor::{
    Advisor, ApplicantProfile, CareerGoal, FinancialInputs, PreferredCountry, ProgressTracker,
    RemoteClassifier,
};
use explorer::{LookupKind, LookupResolver};

use crate::config::AppConfig;
use crate::render::{self, LookupReport};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up universities
    #[command(subcommand)]
    Universities(UniversityCommands),

    /// Recommend a study path for an applicant profile
    Predict(PredictArgs),

    /// Plan costs and funding
    Finance(FinanceArgs),

    /// Show exam progress and the application checklist
    Progress(ProgressArgs),
}

#[derive(Debug, Subcommand)]
pub enum UniversityCommands {
    /// Universities in a country
    Country {
        /// Country name or alias (e.g. "USA", "Bharat")
        query: String,
        /// Maximum number of universities to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Universities whose name contains the query
    Name {
        /// Name fragment (e.g. "Institute of Technology")
        query: String,
    },
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// CGPA, 0-10
    #[arg(long, default_value = "7.5")]
    pub cgpa: f64,
    /// GRE score, 0 if not taken
    #[arg(long, default_value = "0")]
    pub gre: u16,
    /// TOEFL score, 0 if not taken
    #[arg(long, default_value = "0")]
    pub toefl: u16,
    /// GATE score, 0 if not taken
    #[arg(long, default_value = "0")]
    pub gate: u16,
    /// Statement of purpose strength, 1-5
    #[arg(long, default_value = "3")]
    pub sop: u8,
    /// Letter of recommendation strength, 1-5
    #[arg(long, default_value = "3")]
    pub lor: u8,
    /// Target university rating, 1-5
    #[arg(long, default_value = "3")]
    pub university_rating: u8,
    /// Self-assessed chance of admit, 0-1
    #[arg(long, default_value = "0.5")]
    pub chance_of_admit: f64,
    /// Has research experience
    #[arg(long)]
    pub research: bool,
    /// Academia, Industry, Research or Entrepreneurship
    #[arg(long, default_value = "Industry")]
    pub career_goal: String,
    /// Budget in INR lakhs
    #[arg(long, default_value = "25")]
    pub budget: u32,
    /// USA, UK, Germany, India, Canada, ...
    #[arg(long, default_value = "India")]
    pub country: String,
}

impl PredictArgs {
    pub fn to_profile(&self) -> ApplicantProfile {
        ApplicantProfile {
            cgpa: self.cgpa,
            gre: self.gre,
            toefl: self.toefl,
            sop: self.sop,
            lor: self.lor,
            university_rating: self.university_rating,
            chance_of_admit: self.chance_of_admit,
            research: self.research,
            budget: self.budget,
            career_goal: CareerGoal::from_label(&self.career_goal),
            gate: self.gate,
            preferred_country: PreferredCountry::from_label(&self.country),
        }
    }
}

#[derive(Debug, Args)]
pub struct FinanceArgs {
    /// Tuition fee, INR lakhs
    #[arg(long, default_value = "40")]
    pub tuition: f64,
    /// Living expenses, INR lakhs
    #[arg(long, default_value = "25")]
    pub living: f64,
    /// Other expenses, INR lakhs
    #[arg(long, default_value = "10")]
    pub other: f64,
    /// Expected scholarship, percent of tuition
    #[arg(long, default_value = "20")]
    pub scholarship: f64,
    /// Family support, INR lakhs
    #[arg(long, default_value = "30")]
    pub family_support: f64,
    /// Part-time or other income
    #[arg(long, default_value = "300")]
    pub part_time_income: f64,
}

impl FinanceArgs {
    pub fn to_inputs(&self) -> FinancialInputs {
        FinancialInputs {
            tuition: self.tuition,
            living: self.living,
            other: self.other,
            scholarship_pct: self.scholarship,
            family_support: self.family_support,
            part_time_income: self.part_time_income,
        }
    }
}

#[derive(Debug, Args)]
pub struct ProgressArgs {
    /// Exam progress as NAME=PERCENT (e.g. "GRE Quant=80"); repeatable
    #[arg(long = "exam", value_parser = parse_exam)]
    pub exams: Vec<(String, u8)>,
    /// Completed checklist item; repeatable
    #[arg(long = "done")]
    pub done: Vec<String>,
}

fn parse_exam(s: &str) -> Result<(String, u8), String> {
    let (name, pct) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=PERCENT, got '{}'", s))?;
    let pct = pct
        .trim()
        .parse::<u8>()
        .map_err(|e| format!("invalid percent '{}': {}", pct, e))?;
    Ok((name.trim().to_string(), pct))
}

/// Run a command and return what to print.
pub async fn execute(command: Commands, config: &AppConfig, json: bool) -> anyhow::Result<String> {
    match command {
        Commands::Universities(sub) => universities(sub, config, json).await,
        Commands::Predict(args) => predict(&args, config, json).await,
        Commands::Finance(args) => {
            let summary = args.to_inputs().summarize()?;
            if json {
                Ok(serde_json::to_string_pretty(&summary)?)
            } else {
                Ok(render::format_finance(&summary))
            }
        }
        Commands::Progress(args) => {
            let mut tracker = ProgressTracker::new();
            for (exam, pct) in &args.exams {
                tracker.set_exam_progress(exam, *pct)?;
            }
            for item in &args.done {
                tracker.complete(item)?;
            }
            if json {
                Ok(serde_json::to_string_pretty(&tracker)?)
            } else {
                Ok(render::format_progress(&tracker))
            }
        }
    }
}

async fn universities(
    command: UniversityCommands,
    config: &AppConfig,
    json: bool,
) -> anyhow::Result<String> {
    let (kind, query, limit) = match command {
        UniversityCommands::Country { query, limit } => (LookupKind::ByCountry, query, limit),
        UniversityCommands::Name { query } => (LookupKind::ByName, query, usize::MAX),
    };

    if query.trim().is_empty() {
        let banner = render::empty_query_banner(kind);
        return if json {
            Ok(serde_json::to_string_pretty(&banner)?)
        } else {
            Ok(banner.render())
        };
    }

    let resolver = LookupResolver::from_config(&config.explorer)?;
    let result = match kind {
        LookupKind::ByCountry => resolver.resolve_by_country(&query).await,
        LookupKind::ByName => resolver.resolve_by_name(&query).await,
    };
    info!(?kind, query = %query, provenance = %result.provenance(), count = result.len(), "Lookup complete");

    if json {
        let report = LookupReport::new(kind, &query, &result, limit);
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    Ok(match kind {
        LookupKind::ByCountry => render::format_country_lookup(&query, &result, limit),
        LookupKind::ByName => render::format_name_lookup(&query, &result),
    })
}

async fn predict(args: &PredictArgs, config: &AppConfig, json: bool) -> anyhow::Result<String> {
    let url = config.classifier.url.as_deref().ok_or_else(|| {
        anyhow::anyhow!("No classifier configured; set [classifier] url or GRADGUIDE_CLASSIFIER_URL")
    })?;

    let classifier = RemoteClassifier::new(url, config.classifier.timeout())?;
    let advisor = Advisor::new(Arc::new(classifier));
    let recommendation = advisor.recommend(&args.to_profile()).await?;

    if json {
        Ok(serde_json::to_string_pretty(&recommendation)?)
    } else {
        Ok(render::format_recommendation(&recommendation))
    }
}
