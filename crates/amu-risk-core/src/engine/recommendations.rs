//! Advisory messages for an assessed animal.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::compliance::days_until_compliant;
use crate::models::AnimalRecord;

/// Fraction of species optimal weight below which an animal is underweight.
const UNDERWEIGHT_RATIO: f64 = 0.7;

/// One advisory message. Display order is the order of generation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Recommendation {
    CriticalAction,
    WithdrawalRemaining { days: u32 },
    WithdrawalCompleted,
    YoungAnimal,
    Underweight,
    VaccinationDue,
    VeterinaryConsult,
    Stewardship,
    MonitorResistance,
    Satisfactory,
    ContinueMonitoring,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::CriticalAction => f.write_str("CRITICAL ACTION REQUIRED"),
            Recommendation::WithdrawalRemaining { days } => {
                write!(f, "NOT SAFE for slaughter - {} days remaining", days)
            }
            Recommendation::WithdrawalCompleted => f.write_str("Withdrawal period completed"),
            Recommendation::YoungAnimal => {
                f.write_str("Young animal - requires extra care and monitoring")
            }
            Recommendation::Underweight => f.write_str("Underweight - improve nutrition and health"),
            Recommendation::VaccinationDue => f.write_str("Update vaccination schedule immediately"),
            Recommendation::VeterinaryConsult => f.write_str("Veterinary consultation required"),
            Recommendation::Stewardship => {
                f.write_str("Implement antimicrobial stewardship measures")
            }
            Recommendation::MonitorResistance => f.write_str("Monitor closely for AMR development"),
            Recommendation::Satisfactory => f.write_str("Animal health status is satisfactory"),
            Recommendation::ContinueMonitoring => f.write_str("Continue regular monitoring"),
        }
    }
}

/// Build the advisory list for a record and its score.
pub fn recommendations_for(
    record: &AnimalRecord,
    score: u8,
    now: DateTime<Utc>,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if score >= 70 {
        out.push(Recommendation::CriticalAction);
    }

    // An absent or unparseable dose date yields 0 days, so the advice reads
    // "completed" even while the MRL status is PENDING.
    if record.antibiotic_used {
        let days = days_until_compliant(
            record.last_dose_date.as_deref(),
            record.withdrawal_days,
            now,
        );
        out.push(if days > 0 {
            Recommendation::WithdrawalRemaining { days }
        } else {
            Recommendation::WithdrawalCompleted
        });
    }

    if record.age_months < 6.0 {
        out.push(Recommendation::YoungAnimal);
    }

    if record.weight_ratio() < UNDERWEIGHT_RATIO {
        out.push(Recommendation::Underweight);
    }

    if !record.vaccination_status {
        out.push(Recommendation::VaccinationDue);
    }

    if record.health().is_poor() {
        out.push(Recommendation::VeterinaryConsult);
    }

    if score >= 50 {
        out.push(Recommendation::Stewardship);
        out.push(Recommendation::MonitorResistance);
    }

    if out.is_empty() {
        out.push(Recommendation::Satisfactory);
        out.push(Recommendation::ContinueMonitoring);
    }

    out
}
