//! AMU risk scoring and MRL compliance engine.
//!
//! Pure and stateless: every function takes the current time explicitly, so
//! results are fully determined by the record and `now`.
//!
//! Score = `round(base * multiplier)` clamped to 0..=100, where base points and
//! multiplier increments come from independent factor bands:
//!
//! | Factor | Points | Multiplier |
//! |---|---|---|
//! | Antibiotic used | 40 + class (20/10/0) + withdrawal (15/12/8/5) | +0.3/+0.2/+0.1 by dose recency |
//! | Age | 25/20/15/10/5/8 | |
//! | Weight vs. species optimum | 20/16/12/8/10/5 | |
//! | Health | 15/10/5/0, unrecognized 7 | +0.2 if poor |
//! | Not vaccinated | 10 | +0.15 |
//! | Young + underweight + unvaccinated | | +0.3 |
//! | Antibiotic + poor health | | +0.25 |

mod antibiotics;
mod compliance;
mod factors;
mod recommendations;
mod tables;

pub use antibiotics::*;
pub use compliance::*;
pub use factors::*;
pub use recommendations::*;
pub use tables::*;

use chrono::{DateTime, Utc};

use crate::models::{AmuLevel, AnimalRecord, RiskAssessment};

/// AMU risk score (0 - 100) for a record.
pub fn compute_amu_risk(record: &AnimalRecord, now: DateTime<Utc>) -> u8 {
    score_breakdown(record, now).final_score()
}

/// Risk category for a score.
pub fn level_of(score: u8) -> AmuLevel {
    AmuLevel::from_score(score)
}

/// Stateless risk engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEngine;

impl RiskEngine {
    pub fn new() -> Self {
        Self
    }

    /// Assess one record against `now`.
    pub fn assess(&self, record: &AnimalRecord, now: DateTime<Utc>) -> RiskAssessment {
        let breakdown = score_breakdown(record, now);
        let amu_score = breakdown.final_score();
        let amu_level = level_of(amu_score);

        // Dose fields are ignored unless an antibiotic was actually recorded
        let dose_date = record
            .last_dose_date
            .as_deref()
            .filter(|_| record.antibiotic_used);
        let mrl_status = mrl_status(dose_date, record.withdrawal_days, now);
        let days_until_compliant = days_until_compliant(dose_date, record.withdrawal_days, now);

        let recommendations = recommendations_for(record, amu_score, now)
            .iter()
            .map(ToString::to_string)
            .collect();

        tracing::debug!(
            animal_id = %record.id,
            amu_score,
            amu_level = %amu_level,
            mrl_status = %mrl_status,
            "assessed animal"
        );

        RiskAssessment {
            amu_score,
            amu_level,
            mrl_status,
            days_until_compliant,
            recommendations,
            breakdown,
            assessed_at: now,
        }
    }

    /// Assess many records against a single snapshot of `now`.
    pub fn assess_batch(&self, records: &[AnimalRecord], now: DateTime<Utc>) -> Vec<RiskAssessment> {
        records.iter().map(|r| self.assess(r, now)).collect()
    }
}
