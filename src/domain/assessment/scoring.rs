//! Deterministic scoring engine.
//!
//! A pure, total function over a validated factor vector. The score is a sum
//! of independent weighted contributions with no lower or upper clamp; the
//! classification buckets it with inclusive thresholds at 30 and 60.

use super::factors::FactorVector;
use super::risk::{RiskAssessment, RiskLevel};

/// Computes the weighted-sum risk score for a factor vector.
pub fn risk_score(factors: &FactorVector) -> f64 {
    let mut score = 0.0;

    // Sleep penalty buckets: deprivation weighs heavier than oversleep.
    let sleep = factors.sleep_hours();
    if sleep < 6 {
        score += 15.0;
    } else if sleep < 7 {
        score += 8.0;
    } else if sleep > 9 {
        score += 5.0;
    }

    score += f64::from(factors.anxiety_level() - 1) * 2.0;
    score += f64::from(factors.stress_frequency() - 1) * 2.0;
    score += f64::from(factors.financial_stress() - 1) * 1.5;
    score += f64::from(10 - factors.social_support()) * 2.0;
    score += f64::from(10 - factors.work_life_balance()) * 1.5;
    score += f64::from(10 - factors.physical_activity()) * 1.0;
    score += f64::from(factors.substance_use() - 1) * 3.0;
    score += f64::from(factors.mood_changes() - 1) * 2.0;
    score += f64::from(factors.suicidal_thoughts() - 1) * 5.0;

    score
}

/// Scores a factor vector and produces the full assessment.
pub fn assess(factors: &FactorVector) -> RiskAssessment {
    RiskAssessment::for_level(RiskLevel::from_score(risk_score(factors)))
}
