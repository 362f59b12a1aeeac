//! Risk scoring and classification

use serde::{Deserialize, Serialize};

/// Three-level risk label attached to scores and clause findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

impl RiskLevel {
    /// Classify an overall risk score (0-100) into a level.
    ///
    /// Total function: `>= 70` is high, `40..70` is medium, `< 40` is low.
    pub fn classify(score: u8) -> Self {
        if score >= 70 {
            RiskLevel::High
        } else if score >= 40 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Human-readable label, e.g. `"High Risk"`
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::Low => "Low Risk",
        }
    }

    /// Badge class used by front-end renderers, e.g. `"high-risk"`
    pub fn badge_class(&self) -> &'static str {
        match self {
            RiskLevel::High => "high-risk",
            RiskLevel::Medium => "medium-risk",
            RiskLevel::Low => "low-risk",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::High => write!(f, "high"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::Low => write!(f, "low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(RiskLevel::classify(39), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(40), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::classify(70), RiskLevel::High);
    }

    #[test]
    fn test_classify_extremes() {
        assert_eq!(RiskLevel::classify(0), RiskLevel::Low);
        assert_eq!(RiskLevel::classify(100), RiskLevel::High);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskLevel::classify(65).label(), "Medium Risk");
        assert_eq!(RiskLevel::High.badge_class(), "high-risk");
        assert_eq!(RiskLevel::Low.to_string(), "low");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
        let level: RiskLevel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(level, RiskLevel::High);
    }
}
