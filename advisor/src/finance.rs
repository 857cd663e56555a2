//! Financial planner. All amounts are INR lakhs.

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// Costs and funding sources for one study plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialInputs {
    /// 1 - 200
    pub tuition: f64,
    /// 1 - 100
    pub living: f64,
    /// 1 - 50
    pub other: f64,
    /// Expected scholarship as percent of tuition, 0 - 100
    pub scholarship_pct: f64,
    /// 0 - 150
    pub family_support: f64,
    /// Part-time income in thousands of rupees, 0 - 100000
    pub part_time_income: f64,
}

impl Default for FinancialInputs {
    fn default() -> Self {
        Self {
            tuition: 40.0,
            living: 25.0,
            other: 10.0,
            scholarship_pct: 20.0,
            family_support: 30.0,
            part_time_income: 300.0,
        }
    }
}

fn check(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(AdvisorError::invalid(field, format!("{} not in {}-{}", value, min, max)))
    }
}

impl FinancialInputs {
    pub fn validate(&self) -> Result<()> {
        check("Tuition", self.tuition, 1.0, 200.0)?;
        check("Living Expenses", self.living, 1.0, 100.0)?;
        check("Other Expenses", self.other, 1.0, 50.0)?;
        check("Scholarship", self.scholarship_pct, 0.0, 100.0)?;
        check("Family Support", self.family_support, 0.0, 150.0)?;
        check("Part-time Income", self.part_time_income, 0.0, 100_000.0)?;
        Ok(())
    }

    /// Validate and compute the summary.
    pub fn summarize(&self) -> Result<FinancialSummary> {
        self.validate()?;

        let total_cost = self.tuition + self.living + self.other;
        let scholarship = self.tuition * self.scholarship_pct / 100.0;
        let part_time = self.part_time_income / 100.0;
        let net_cost = total_cost - scholarship - self.family_support - part_time;

        let outcome = if net_cost > 0.0 {
            FundingOutcome::LoanNeeded {
                amount: net_cost,
                share_of_total: net_cost / total_cost * 100.0,
            }
        } else {
            FundingOutcome::Surplus {
                amount: net_cost.abs(),
            }
        };

        Ok(FinancialSummary {
            total_cost,
            scholarship,
            part_time,
            total_savings: scholarship + self.family_support,
            net_cost,
            outcome,
            breakdown: vec![
                BreakdownLine::new("Tuition", self.tuition, LineKind::Expense),
                BreakdownLine::new("Living", self.living, LineKind::Expense),
                BreakdownLine::new("Others", self.other, LineKind::Expense),
                BreakdownLine::new("Scholarship (Saved)", -scholarship, LineKind::Savings),
                BreakdownLine::new("Family Support", -self.family_support, LineKind::Support),
                BreakdownLine::new("Part-time", -part_time, LineKind::Income),
            ],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Expense,
    Savings,
    Support,
    Income,
}

/// One bar of the waterfall; funding lines are negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownLine {
    pub category: &'static str,
    pub amount: f64,
    pub kind: LineKind,
}

impl BreakdownLine {
    fn new(category: &'static str, amount: f64, kind: LineKind) -> Self {
        Self {
            category,
            amount,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum FundingOutcome {
    /// Net cost is positive
    LoanNeeded { amount: f64, share_of_total: f64 },
    /// Funding covers everything
    Surplus { amount: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub total_cost: f64,
    pub scholarship: f64,
    pub part_time: f64,
    /// Scholarship plus family support
    pub total_savings: f64,
    pub net_cost: f64,
    pub outcome: FundingOutcome,
    pub breakdown: Vec<BreakdownLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_default_plan_needs_a_loan() {
        // 75 total, 8 scholarship, 30 family, 3 part-time => 34 loan
        let summary = FinancialInputs::default().summarize().unwrap();

        assert!(close(summary.total_cost, 75.0));
        assert!(close(summary.scholarship, 8.0));
        assert!(close(summary.part_time, 3.0));
        assert!(close(summary.total_savings, 38.0));
        assert!(close(summary.net_cost, 34.0));

        match summary.outcome {
            FundingOutcome::LoanNeeded {
                amount,
                share_of_total,
            } => {
                assert!(close(amount, 34.0));
                assert!(close(share_of_total, 34.0 / 75.0 * 100.0));
            }
            other => panic!("expected loan, got {:?}", other),
        }
    }

    #[test]
    fn test_surplus_when_fully_funded() {
        let inputs = FinancialInputs {
            tuition: 10.0,
            living: 5.0,
            other: 1.0,
            scholarship_pct: 100.0,
            family_support: 10.0,
            part_time_income: 0.0,
        };

        let summary = inputs.summarize().unwrap();
        assert_eq!(summary.outcome, FundingOutcome::Surplus { amount: 4.0 });
    }

    #[test]
    fn test_break_even_is_surplus() {
        let inputs = FinancialInputs {
            tuition: 10.0,
            living: 5.0,
            other: 5.0,
            scholarship_pct: 0.0,
            family_support: 20.0,
            part_time_income: 0.0,
        };

        let summary = inputs.summarize().unwrap();
        assert_eq!(summary.outcome, FundingOutcome::Surplus { amount: 0.0 });
    }

    #[test]
    fn test_breakdown_signs() {
        let summary = FinancialInputs::default().summarize().unwrap();
        let funding: Vec<_> = summary
            .breakdown
            .iter()
            .filter(|l| l.kind != LineKind::Expense)
            .collect();

        assert_eq!(summary.breakdown.len(), 6);
        assert!(funding.iter().all(|l| l.amount <= 0.0));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let inputs = FinancialInputs {
            scholarship_pct: 120.0,
            ..Default::default()
        };
        assert!(matches!(
            inputs.summarize(),
            Err(AdvisorError::InvalidField { field: "Scholarship", .. })
        ));

        let inputs = FinancialInputs {
            tuition: f64::NAN,
            ..Default::default()
        };
        assert!(inputs.validate().is_err());
    }
}
