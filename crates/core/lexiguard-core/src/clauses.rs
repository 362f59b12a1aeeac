//! Clause findings and the built-in analysis fixture set
//!
//! Real clause extraction is out of scope; every completed analysis reuses
//! the same canned set of findings for a typical Indian real-estate
//! purchase agreement.

use crate::risk::RiskLevel;
use serde::{Deserialize, Serialize};

/// A single analyzed contract clause with its assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseFinding {
    /// Stable identifier within the finding set
    pub id: String,

    /// Short clause title
    pub title: String,

    /// Verbatim clause text
    pub text: String,

    /// Assessed risk level
    pub risk_level: RiskLevel,

    /// Why the clause carries this risk
    pub explanation: String,

    /// Suggested negotiation or verification step
    pub recommendation: String,
}

impl ClauseFinding {
    fn new(
        id: &str,
        title: &str,
        text: &str,
        risk_level: RiskLevel,
        explanation: &str,
        recommendation: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            text: text.to_string(),
            risk_level,
            explanation: explanation.to_string(),
            recommendation: recommendation.to_string(),
        }
    }
}

/// The canned clause findings attached to every completed analysis
pub fn sample_clauses() -> Vec<ClauseFinding> {
    vec![
        ClauseFinding::new(
            "1",
            "Payment Schedule Clause",
            "The buyer shall pay 20% advance, 70% during construction, and 10% on possession.",
            RiskLevel::High,
            "This payment structure heavily favors the developer with 90% payment before \
             possession. This creates significant risk if the project faces delays or \
             cancellation.",
            "Negotiate for a more balanced payment schedule with maximum 80% payment before \
             possession. Include penalty clauses for construction delays.",
        ),
        ClauseFinding::new(
            "2",
            "Possession Clause",
            "Possession shall be given within 36 months from the date of agreement, subject to \
             force majeure conditions.",
            RiskLevel::Medium,
            "The timeline is reasonable, but the force majeure clause is too broad and could be \
             misused to justify delays.",
            "Define specific force majeure events and include compensation for delays beyond \
             the grace period (typically 6 months).",
        ),
        ClauseFinding::new(
            "3",
            "Cancellation Policy",
            "In case of cancellation by buyer, 10% of total amount shall be forfeited as \
             cancellation charges.",
            RiskLevel::Medium,
            "The forfeiture amount is within reasonable limits as per RERA guidelines, but \
             lacks clarity on refund timeline.",
            "Ensure refund timeline is specified (RERA mandates 45 days) and include interest \
             on delayed refunds.",
        ),
        ClauseFinding::new(
            "4",
            "RERA Registration",
            "The project is registered under RERA with registration number \
             PR/GJ/AHMEDABAD/AHMEDABAD CITY/AUDA/RAA08745/020220.",
            RiskLevel::Low,
            "Proper RERA registration provides legal protection and ensures compliance with \
             regulatory requirements.",
            "Verify the RERA registration status online before signing. This is a positive \
             aspect of the agreement.",
        ),
        ClauseFinding::new(
            "5",
            "Quality Standards",
            "Construction shall be as per approved plans and specifications mentioned in \
             Schedule II.",
            RiskLevel::Medium,
            "The clause references external specifications but lacks detail about quality \
             standards and remedies for defects.",
            "Include specific quality standards, defect liability period (minimum 5 years), \
             and clear remedies for construction defects.",
        ),
    ]
}
