//! Trend derivation over stored classification history.

use std::cmp::Ordering;

use serde::Serialize;

use super::risk::RiskLevel;

/// Direction of change between a user's two most recent classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Worsening,
    Stable,
}

impl Trend {
    /// Returns the lowercase wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Worsening => "worsening",
            Trend::Stable => "stable",
        }
    }
}

/// Derives the trend from a classification history ordered newest first.
///
/// The previous classification's ordinal is compared against the latest:
/// strictly less is improving, strictly greater is worsening, equal is
/// stable. Fewer than two entries yields no trend.
pub fn derive_trend(newest_first: &[RiskLevel]) -> Option<Trend> {
    let latest = newest_first.first()?;
    let previous = newest_first.get(1)?;

    let trend = match previous.ordinal().cmp(&latest.ordinal()) {
        Ordering::Less => Trend::Improving,
        Ordering::Greater => Trend::Worsening,
        Ordering::Equal => Trend::Stable,
    };
    Some(trend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_after_medium_is_worsening() {
        let history = [RiskLevel::Low, RiskLevel::Medium];
        assert_eq!(derive_trend(&history), Some(Trend::Worsening));
    }

    #[test]
    fn high_after_medium_is_improving() {
        let history = [RiskLevel::High, RiskLevel::Medium];
        assert_eq!(derive_trend(&history), Some(Trend::Improving));
    }

    #[test]
    fn repeated_classification_is_stable() {
        let history = [RiskLevel::Medium, RiskLevel::Medium];
        assert_eq!(derive_trend(&history), Some(Trend::Stable));
    }

    #[test]
    fn single_submission_has_no_trend() {
        assert_eq!(derive_trend(&[RiskLevel::High]), None);
    }

    #[test]
    fn empty_history_has_no_trend() {
        assert_eq!(derive_trend(&[]), None);
    }

    #[test]
    fn only_the_two_newest_entries_matter() {
        let history = [
            RiskLevel::Medium,
            RiskLevel::Medium,
            RiskLevel::High,
            RiskLevel::Low,
        ];
        assert_eq!(derive_trend(&history), Some(Trend::Stable));
    }

    #[test]
    fn trend_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Trend::Improving).unwrap(),
            "\"improving\""
        );
        assert_eq!(Trend::Worsening.label(), "worsening");
    }
}
