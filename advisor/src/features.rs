//! Applicant profile and the feature record the classifier was trained on.

use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, Result};

/// Career goal, encoded as the classifier expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerGoal {
    Academia = 0,
    Industry = 1,
    Research = 2,
}

impl CareerGoal {
    /// Parse a form label. Anything unrecognized ("Entrepreneurship") is Industry.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "academia" => Self::Academia,
            "research" => Self::Research,
            _ => Self::Industry,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl Default for CareerGoal {
    fn default() -> Self {
        Self::Industry
    }
}

/// Preferred study country, encoded as the classifier expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredCountry {
    Usa = 0,
    Uk = 1,
    Germany = 2,
    India = 3,
    Other = 4,
}

impl PreferredCountry {
    /// Parse a form label. Countries the model never saw ("Canada") are Other.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "usa" => Self::Usa,
            "uk" => Self::Uk,
            "germany" => Self::Germany,
            "india" => Self::India,
            _ => Self::Other,
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl Default for PreferredCountry {
    fn default() -> Self {
        Self::India
    }
}

/// Applicant metrics as collected from the user.
///
/// GRE, TOEFL and GATE of 0 mean the exam was not taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    /// 0.0 - 10.0
    pub cgpa: f64,
    /// 0 - 340
    pub gre: u16,
    /// 0 - 120
    pub toefl: u16,
    /// 1 - 5
    pub sop: u8,
    /// 1 - 5
    pub lor: u8,
    /// Target university rating, 1 - 5
    pub university_rating: u8,
    /// Self-assessed admission chance, 0.0 - 1.0
    pub chance_of_admit: f64,
    pub research: bool,
    /// INR lakhs, positive
    pub budget: u32,
    pub career_goal: CareerGoal,
    /// 0 - 1000
    pub gate: u16,
    pub preferred_country: PreferredCountry,
}

impl Default for ApplicantProfile {
    fn default() -> Self {
        Self {
            cgpa: 7.5,
            gre: 0,
            toefl: 0,
            sop: 3,
            lor: 3,
            university_rating: 3,
            chance_of_admit: 0.5,
            research: false,
            budget: 25,
            career_goal: CareerGoal::default(),
            gate: 0,
            preferred_country: PreferredCountry::default(),
        }
    }
}

impl ApplicantProfile {
    /// Check every field against its range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=10.0).contains(&self.cgpa) {
            return Err(AdvisorError::invalid("CGPA", format!("{} not in 0-10", self.cgpa)));
        }
        if self.gre > 340 {
            return Err(AdvisorError::invalid("GRE", format!("{} not in 0-340", self.gre)));
        }
        if self.toefl > 120 {
            return Err(AdvisorError::invalid("TOEFL", format!("{} not in 0-120", self.toefl)));
        }
        for (field, value) in [
            ("SOP", self.sop),
            ("LOR", self.lor),
            ("University Rating", self.university_rating),
        ] {
            if !(1..=5).contains(&value) {
                return Err(AdvisorError::invalid(field, format!("{} not in 1-5", value)));
            }
        }
        if !(0.0..=1.0).contains(&self.chance_of_admit) {
            return Err(AdvisorError::invalid(
                "Chance of Admit",
                format!("{} not in 0-1", self.chance_of_admit),
            ));
        }
        if self.budget == 0 {
            return Err(AdvisorError::invalid("Budget", "must be positive"));
        }
        if self.gate > 1000 {
            return Err(AdvisorError::invalid("GATE", format!("{} not in 0-1000", self.gate)));
        }
        Ok(())
    }

    /// Validate and encode for the classifier.
    pub fn to_features(&self) -> Result<FeatureRecord> {
        self.validate()?;

        Ok(FeatureRecord {
            cgpa: self.cgpa,
            gre_score: self.gre,
            toefl_score: self.toefl,
            sop: self.sop,
            lor: self.lor,
            university_rating: self.university_rating,
            chance_of_admit: self.chance_of_admit,
            research: u8::from(self.research),
            budget: self.budget,
            career_goal: self.career_goal.code(),
            gate_score: self.gate,
            preferred_country: self.preferred_country.code(),
        })
    }
}

/// The 12 columns the classifier was trained on.
///
/// Field order and names (trailing spaces included) are part of the model
/// contract; serialization emits them exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    #[serde(rename = "CGPA")]
    pub cgpa: f64,
    #[serde(rename = "GRE Score")]
    pub gre_score: u16,
    #[serde(rename = "TOEFL Score")]
    pub toefl_score: u16,
    #[serde(rename = "SOP")]
    pub sop: u8,
    #[serde(rename = "LOR ")]
    pub lor: u8,
    #[serde(rename = "University Rating")]
    pub university_rating: u8,
    #[serde(rename = "Chance of Admit ")]
    pub chance_of_admit: f64,
    #[serde(rename = "Research")]
    pub research: u8,
    #[serde(rename = "Budget (INR Lakhs)")]
    pub budget: u32,
    #[serde(rename = "Career Goal")]
    pub career_goal: u8,
    #[serde(rename = "GATE Score")]
    pub gate_score: u16,
    #[serde(rename = "Preferred Country")]
    pub preferred_country: u8,
}

impl FeatureRecord {
    /// Column names in training order.
    pub const COLUMNS: [&'static str; 12] = [
        "CGPA",
        "GRE Score",
        "TOEFL Score",
        "SOP",
        "LOR ",
        "University Rating",
        "Chance of Admit ",
        "Research",
        "Budget (INR Lakhs)",
        "Career Goal",
        "GATE Score",
        "Preferred Country",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_defaults() {
        assert_eq!(CareerGoal::from_label("Academia"), CareerGoal::Academia);
        assert_eq!(CareerGoal::from_label("Entrepreneurship"), CareerGoal::Industry);
        assert_eq!(CareerGoal::from_label("research").code(), 2);

        assert_eq!(PreferredCountry::from_label("Germany"), PreferredCountry::Germany);
        assert_eq!(PreferredCountry::from_label("Canada"), PreferredCountry::Other);
        assert_eq!(PreferredCountry::from_label("India").code(), 3);
    }

    #[test]
    fn test_default_profile_is_valid() {
        assert!(ApplicantProfile::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_fields_rejected() {
        let profile = ApplicantProfile {
            cgpa: 10.5,
            ..Default::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(AdvisorError::InvalidField { field: "CGPA", .. })
        ));

        let profile = ApplicantProfile {
            lor: 0,
            ..Default::default()
        };
        assert!(matches!(
            profile.validate(),
            Err(AdvisorError::InvalidField { field: "LOR", .. })
        ));

        let profile = ApplicantProfile {
            budget: 0,
            ..Default::default()
        };
        assert!(profile.to_features().is_err());
    }

    #[test]
    fn test_feature_columns_in_training_order() {
        let profile = ApplicantProfile {
            cgpa: 8.9,
            gre: 321,
            toefl: 110,
            research: true,
            career_goal: CareerGoal::Research,
            preferred_country: PreferredCountry::Usa,
            ..Default::default()
        };

        let record = profile.to_features().unwrap();
        let json = serde_json::to_string(&record).unwrap();

        let mut last = 0;
        for column in FeatureRecord::COLUMNS {
            let at = json
                .find(&format!("\"{}\":", column))
                .unwrap_or_else(|| panic!("missing column {:?}", column));
            assert!(at >= last, "column {:?} out of order", column);
            last = at;
        }

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["LOR "], 3);
        assert_eq!(value["Chance of Admit "], 0.5);
        assert_eq!(value["Research"], 1);
        assert_eq!(value["Career Goal"], 2);
        assert_eq!(value["Preferred Country"], 0);
        assert_eq!(value.as_object().unwrap().len(), 12);
    }
}
