//! Factor vector value object and questionnaire validation.
//!
//! The questionnaire has a fixed shape: ten named integer fields, each with
//! a closed inclusive range. Validation checks presence and range membership
//! for every field in one pass and reports all violations together, so the
//! caller can fix the whole payload at once. Out-of-range values are
//! rejected, never clamped.

use std::error::Error;
use std::fmt;

use serde::Serialize;

/// Number of questionnaire fields.
pub const FACTOR_COUNT: usize = 10;

/// Declared domain of one questionnaire field.
struct FieldSpec {
    name: &'static str,
    min: i64,
    max: i64,
}

/// Field domains in canonical order. This order is also the wire order for
/// the remote predictor's feature array.
const FIELDS: [FieldSpec; FACTOR_COUNT] = [
    FieldSpec { name: "sleepHours", min: 0, max: 12 },
    FieldSpec { name: "anxietyLevel", min: 1, max: 10 },
    FieldSpec { name: "stressFrequency", min: 1, max: 10 },
    FieldSpec { name: "financialStress", min: 1, max: 10 },
    FieldSpec { name: "socialSupport", min: 1, max: 10 },
    FieldSpec { name: "workLifeBalance", min: 1, max: 10 },
    FieldSpec { name: "physicalActivity", min: 1, max: 10 },
    FieldSpec { name: "substanceUse", min: 1, max: 10 },
    FieldSpec { name: "moodChanges", min: 1, max: 10 },
    FieldSpec { name: "suicidalThoughts", min: 1, max: 10 },
];

/// Candidate factor values prior to validation.
///
/// Every field is optional so a single validation pass can report missing
/// and out-of-range fields together.
#[derive(Debug, Clone, Copy, Default)]
pub struct FactorInput {
    pub sleep_hours: Option<i64>,
    pub anxiety_level: Option<i64>,
    pub stress_frequency: Option<i64>,
    pub financial_stress: Option<i64>,
    pub social_support: Option<i64>,
    pub work_life_balance: Option<i64>,
    pub physical_activity: Option<i64>,
    pub substance_use: Option<i64>,
    pub mood_changes: Option<i64>,
    pub suicidal_thoughts: Option<i64>,
}

impl FactorInput {
    /// Returns the candidate values in canonical field order.
    fn as_array(&self) -> [Option<i64>; FACTOR_COUNT] {
        [
            self.sleep_hours,
            self.anxiety_level,
            self.stress_frequency,
            self.financial_stress,
            self.social_support,
            self.work_life_balance,
            self.physical_activity,
            self.substance_use,
            self.mood_changes,
            self.suicidal_thoughts,
        ]
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Field name as submitted by the caller.
    pub field: String,
    /// Human-readable reason the field was rejected.
    pub reason: String,
}

impl FieldViolation {
    fn missing(field: &str) -> Self {
        Self {
            field: field.to_string(),
            reason: "is required".to_string(),
        }
    }

    fn out_of_range(field: &str, min: i64, max: i64, actual: i64) -> Self {
        Self {
            field: field.to_string(),
            reason: format!("must be between {} and {}, got {}", min, max, actual),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.reason)
    }
}

/// Every violation found in one validation pass, in canonical field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorViolations(Vec<FieldViolation>);

impl FactorViolations {
    fn new(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }

    /// Returns the individual violations.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }
}

impl fmt::Display for FactorViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "factor validation failed: ")?;
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl Error for FactorViolations {}

/// Validated ten-factor questionnaire response.
///
/// Every value is guaranteed to lie within its declared range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FactorVector {
    values: [u8; FACTOR_COUNT],
}

impl FactorVector {
    /// Validates a candidate payload into a factor vector.
    ///
    /// Aggregates all violations in one pass rather than stopping at the
    /// first. No side effects.
    pub fn validate(input: &FactorInput) -> Result<Self, FactorViolations> {
        let mut violations = Vec::new();
        let mut values = [0u8; FACTOR_COUNT];

        for (slot, (spec, candidate)) in values
            .iter_mut()
            .zip(FIELDS.iter().zip(input.as_array()))
        {
            match candidate {
                None => violations.push(FieldViolation::missing(spec.name)),
                Some(v) if v < spec.min || v > spec.max => {
                    violations.push(FieldViolation::out_of_range(spec.name, spec.min, spec.max, v))
                }
                Some(v) => *slot = v as u8,
            }
        }

        if violations.is_empty() {
            Ok(Self { values })
        } else {
            Err(FactorViolations::new(violations))
        }
    }

    /// Rebuilds a factor vector from stored values, re-checking ranges.
    pub fn from_values(values: [i64; FACTOR_COUNT]) -> Result<Self, FactorViolations> {
        let [sleep, anxiety, stress, financial, social, balance, activity, substance, mood, suicidal] =
            values;
        Self::validate(&FactorInput {
            sleep_hours: Some(sleep),
            anxiety_level: Some(anxiety),
            stress_frequency: Some(stress),
            financial_stress: Some(financial),
            social_support: Some(social),
            work_life_balance: Some(balance),
            physical_activity: Some(activity),
            substance_use: Some(substance),
            mood_changes: Some(mood),
            suicidal_thoughts: Some(suicidal),
        })
    }

    /// Returns the values in canonical field order, the predictor wire order.
    pub fn features(&self) -> [u8; FACTOR_COUNT] {
        self.values
    }

    pub fn sleep_hours(&self) -> u8 {
        self.values[0]
    }

    pub fn anxiety_level(&self) -> u8 {
        self.values[1]
    }

    pub fn stress_frequency(&self) -> u8 {
        self.values[2]
    }

    pub fn financial_stress(&self) -> u8 {
        self.values[3]
    }

    pub fn social_support(&self) -> u8 {
        self.values[4]
    }

    pub fn work_life_balance(&self) -> u8 {
        self.values[5]
    }

    pub fn physical_activity(&self) -> u8 {
        self.values[6]
    }

    pub fn substance_use(&self) -> u8 {
        self.values[7]
    }

    pub fn mood_changes(&self) -> u8 {
        self.values[8]
    }

    pub fn suicidal_thoughts(&self) -> u8 {
        self.values[9]
    }
}
