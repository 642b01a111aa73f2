//! Farm dashboard report.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::RiskEngine;
use crate::models::{AmuLevel, AnimalRecord, MrlStatus, RiskAssessment};

/// Report type label stored with every farm report.
pub const FARM_REPORT_TYPE: &str = "farm-dashboard";

/// Options stamped into report metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportConfig {
    pub farm_name: Option<String>,
    pub system_id: Option<String>,
}

impl ReportConfig {
    pub fn with_farm_name(mut self, farm_name: impl Into<String>) -> Self {
        self.farm_name = Some(farm_name.into());
        self
    }

    pub fn with_system_id(mut self, system_id: impl Into<String>) -> Self {
        self.system_id = Some(system_id.into());
        self
    }
}

/// Report metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// Report UUID
    pub report_id: String,
    /// Always "farm-dashboard"
    pub report_type: String,
    /// Export format version
    pub format_version: String,
    pub generated_at: DateTime<Utc>,
    pub farm_name: Option<String>,
    /// Exporting system identifier
    pub system_id: Option<String>,
}

/// Aggregate figures for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSummary {
    pub total_animals: usize,
    pub average_score: f64,
    /// Animals per AMU level (every level present, possibly zero)
    pub by_level: BTreeMap<String, usize>,
    /// Animals per MRL status (every status present, possibly zero)
    pub by_mrl_status: BTreeMap<String, usize>,
    /// Animals still inside a withdrawal period
    pub in_withdrawal: usize,
    pub treated_with_antibiotics: usize,
}

/// One animal's row in the report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    pub animal_id: String,
    pub species: String,
    pub breed: String,
    pub amu_score: u8,
    pub amu_level: AmuLevel,
    pub mrl_status: MrlStatus,
    pub days_until_compliant: u32,
}

/// Farm-wide AMU/MRL report built from one batch of assessments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FarmReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub animals: Vec<ReportRow>,
}

impl FarmReport {
    /// Build a report from already-assessed animals.
    pub fn build(
        config: &ReportConfig,
        entries: &[(AnimalRecord, RiskAssessment)],
        now: DateTime<Utc>,
    ) -> Self {
        let mut by_level: BTreeMap<String, usize> =
            [AmuLevel::Low, AmuLevel::Moderate, AmuLevel::High, AmuLevel::Critical]
                .iter()
                .map(|l| (l.as_str().to_string(), 0))
                .collect();
        let mut by_mrl_status: BTreeMap<String, usize> = [
            MrlStatus::Safe,
            MrlStatus::Compliant,
            MrlStatus::NotCompliant,
            MrlStatus::Pending,
        ]
        .iter()
        .map(|s| (s.as_str().to_string(), 0))
        .collect();

        let mut animals = Vec::with_capacity(entries.len());
        let mut score_total = 0u64;
        let mut in_withdrawal = 0;
        let mut treated_with_antibiotics = 0;

        for (record, assessment) in entries {
            *by_level.entry(assessment.amu_level.as_str().to_string()).or_default() += 1;
            *by_mrl_status
                .entry(assessment.mrl_status.as_str().to_string())
                .or_default() += 1;
            score_total += u64::from(assessment.amu_score);
            if assessment.mrl_status == MrlStatus::NotCompliant {
                in_withdrawal += 1;
            }
            if record.antibiotic_used {
                treated_with_antibiotics += 1;
            }

            animals.push(ReportRow {
                animal_id: record.id.clone(),
                species: record.species.clone(),
                breed: record.breed.clone(),
                amu_score: assessment.amu_score,
                amu_level: assessment.amu_level,
                mrl_status: assessment.mrl_status,
                days_until_compliant: assessment.days_until_compliant,
            });
        }

        let average_score = if entries.is_empty() {
            0.0
        } else {
            score_total as f64 / entries.len() as f64
        };

        Self {
            metadata: ReportMetadata {
                report_id: uuid::Uuid::new_v4().to_string(),
                report_type: FARM_REPORT_TYPE.to_string(),
                format_version: "1.0".to_string(),
                generated_at: now,
                farm_name: config.farm_name.clone(),
                system_id: config.system_id.clone(),
            },
            summary: ReportSummary {
                total_animals: entries.len(),
                average_score,
                by_level,
                by_mrl_status,
                in_withdrawal,
                treated_with_antibiotics,
            },
            animals,
        }
    }

    /// Assess every record against one `now` and build the report.
    pub fn assess_and_build(config: &ReportConfig, records: &[AnimalRecord], now: DateTime<Utc>) -> Self {
        let assessments = RiskEngine::new().assess_batch(records, now);
        let entries: Vec<_> = records.iter().cloned().zip(assessments).collect();
        Self::build(config, &entries, now)
    }

    /// Animals at HIGH or CRITICAL level.
    pub fn high_risk(&self) -> impl Iterator<Item = &ReportRow> {
        self.animals.iter().filter(|r| r.amu_level >= AmuLevel::High)
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export rows to CSV format.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();

        csv.push_str("report_id,animal_id,species,breed,amu_score,amu_level,mrl_status,days_until_compliant\n");

        for row in &self.animals {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                escape_csv(&self.metadata.report_id),
                escape_csv(&row.animal_id),
                escape_csv(&row.species),
                escape_csv(&row.breed),
                row.amu_score,
                row.amu_level,
                row.mrl_status,
                row.days_until_compliant,
            ));
        }

        csv
    }
}

/// Escape a value for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
