//! Risk classification, confidence, and assessment value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Fixed guidance shown for low-risk results.
const LOW_RECOMMENDATIONS: &[&str] = &[
    "Continue maintaining healthy habits and monitor your mental health",
    "Keep up regular exercise and a consistent sleep schedule",
    "Stay connected with friends and family",
    "Practice stress management techniques like deep breathing or meditation",
];

/// Fixed guidance shown for medium-risk results.
const MEDIUM_RECOMMENDATIONS: &[&str] = &[
    "Consider speaking with a counselor or therapist",
    "Focus on improving sleep quality, aiming for 7-9 hours per night",
    "Increase physical activity and social engagement",
    "Practice mindfulness or relaxation exercises daily",
    "Limit alcohol and substance use",
];

/// Fixed guidance shown for high-risk results.
const HIGH_RECOMMENDATIONS: &[&str] = &[
    "Strongly consider speaking with a mental health professional",
    "If having thoughts of self-harm, contact a crisis helpline immediately",
    "Reach out to a trusted friend or family member today",
    "Consider a psychiatric evaluation for treatment options",
    "Create a safety plan with professional support",
];

/// Risk classification bucket. Totally ordered: Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskLevel {
    /// Classifies a risk score. Boundaries are inclusive on the lower bucket.
    pub fn from_score(score: f64) -> Self {
        if score <= 30.0 {
            RiskLevel::Low
        } else if score <= 60.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    /// Returns the ordinal position: Low=1, Medium=2, High=3.
    pub fn ordinal(&self) -> u8 {
        match self {
            RiskLevel::Low => 1,
            RiskLevel::Medium => 2,
            RiskLevel::High => 3,
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }

    /// Returns the fixed confidence constant for this bucket.
    ///
    /// These are constants of the rule table, not derived from score
    /// distance to a threshold. High sits below Low on purpose.
    pub fn confidence(&self) -> Confidence {
        let value = match self {
            RiskLevel::Low => 0.85,
            RiskLevel::Medium => 0.78,
            RiskLevel::High => 0.82,
        };
        Confidence(value)
    }

    /// Returns the fixed recommendation set keyed by this bucket.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::Low => LOW_RECOMMENDATIONS,
            RiskLevel::Medium => MEDIUM_RECOMMENDATIONS,
            RiskLevel::High => HIGH_RECOMMENDATIONS,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RiskLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low Risk" => Ok(RiskLevel::Low),
            "Medium Risk" => Ok(RiskLevel::Medium),
            "High Risk" => Ok(RiskLevel::High),
            other => Err(ValidationError::invalid_format(
                "prediction",
                format!("unknown classification '{}'", other),
            )),
        }
    }
}

/// Prediction confidence in the closed interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// Creates a Confidence, returning error if outside [0, 1] or NaN.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("confidence", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Outcome of one assessment. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    risk_level: RiskLevel,
    confidence: Confidence,
    recommendations: Vec<String>,
    created_at: Timestamp,
}

impl RiskAssessment {
    /// Builds the rule-table assessment for a classification bucket.
    pub fn for_level(level: RiskLevel) -> Self {
        Self {
            risk_level: level,
            confidence: level.confidence(),
            recommendations: level
                .recommendations()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            created_at: Timestamp::now(),
        }
    }

    /// Assembles an assessment from its parts, e.g. a remote prediction or
    /// a stored row. The recommendation list must be non-empty.
    pub fn from_parts(
        risk_level: RiskLevel,
        confidence: Confidence,
        recommendations: Vec<String>,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        if recommendations.is_empty() {
            return Err(ValidationError::empty_field("recommendations"));
        }
        Ok(Self {
            risk_level,
            confidence,
            recommendations,
            created_at,
        })
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn recommendations(&self) -> &[String] {
        &self.recommendations
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn risk_level_from_score_uses_inclusive_boundaries() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(30.01), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(60.01), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(150.0), RiskLevel::High);
    }

    #[test]
    fn risk_level_ordering_is_total() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn risk_level_ordinals_are_one_indexed() {
        assert_eq!(RiskLevel::Low.ordinal(), 1);
        assert_eq!(RiskLevel::Medium.ordinal(), 2);
        assert_eq!(RiskLevel::High.ordinal(), 3);
    }

    #[test]
    fn risk_level_confidence_constants_are_fixed() {
        assert_eq!(RiskLevel::Low.confidence().value(), 0.85);
        assert_eq!(RiskLevel::Medium.confidence().value(), 0.78);
        assert_eq!(RiskLevel::High.confidence().value(), 0.82);
    }

    #[test]
    fn high_risk_confidence_stays_below_low_risk() {
        // The rule table fixes High below Low; callers depend on the exact
        // constants.
        assert!(RiskLevel::High.confidence().value() < RiskLevel::Low.confidence().value());
    }

    #[test]
    fn risk_level_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Low).unwrap(),
            "\"Low Risk\""
        );
        assert_eq!(
            serde_json::to_string(&RiskLevel::High).unwrap(),
            "\"High Risk\""
        );
    }

    #[test]
    fn risk_level_parses_from_label() {
        assert_eq!("Low Risk".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert_eq!("Medium Risk".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert_eq!("High Risk".parse::<RiskLevel>().unwrap(), RiskLevel::High);
    }

    #[test]
    fn risk_level_rejects_unknown_label() {
        assert!("Severe Risk".parse::<RiskLevel>().is_err());
        assert!("low risk".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn recommendation_sets_are_non_empty_and_distinct() {
        assert!(!RiskLevel::Low.recommendations().is_empty());
        assert!(!RiskLevel::Medium.recommendations().is_empty());
        assert!(!RiskLevel::High.recommendations().is_empty());
        assert_ne!(RiskLevel::Low.recommendations(), RiskLevel::High.recommendations());
    }

    #[test]
    fn confidence_accepts_unit_interval() {
        assert!(Confidence::try_new(0.0).is_ok());
        assert!(Confidence::try_new(0.5).is_ok());
        assert!(Confidence::try_new(1.0).is_ok());
    }

    #[test]
    fn confidence_rejects_out_of_interval() {
        assert!(Confidence::try_new(-0.1).is_err());
        assert!(Confidence::try_new(1.1).is_err());
        assert!(Confidence::try_new(f64::NAN).is_err());
    }

    #[test]
    fn assessment_for_level_carries_bucket_constants() {
        let assessment = RiskAssessment::for_level(RiskLevel::High);

        assert_eq!(assessment.risk_level(), RiskLevel::High);
        assert_eq!(assessment.confidence().value(), 0.82);
        assert_eq!(
            assessment.recommendations().len(),
            RiskLevel::High.recommendations().len()
        );
    }

    #[test]
    fn assessment_from_parts_rejects_empty_recommendations() {
        let result = RiskAssessment::from_parts(
            RiskLevel::Low,
            Confidence::try_new(0.9).unwrap(),
            vec![],
            Timestamp::now(),
        );
        assert!(result.is_err());
    }
}
