//! Risk assessment models.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// AMU risk category derived from the score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AmuLevel {
    Low,
    Moderate,
    High,
    Critical,
}

impl AmuLevel {
    /// Classify a score: >=70 critical, >=50 high, >=30 moderate, else low.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            AmuLevel::Critical
        } else if score >= 50 {
            AmuLevel::High
        } else if score >= 30 {
            AmuLevel::Moderate
        } else {
            AmuLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AmuLevel::Low => "LOW",
            AmuLevel::Moderate => "MODERATE",
            AmuLevel::High => "HIGH",
            AmuLevel::Critical => "CRITICAL",
        }
    }

    /// Badge colour for dashboards.
    pub fn color_hex(&self) -> &'static str {
        match self {
            AmuLevel::Critical => "#DC2626",
            AmuLevel::High => "#EA580C",
            AmuLevel::Moderate => "#CA8A04",
            AmuLevel::Low => "#16A34A",
        }
    }

    /// Parse a stored level label.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "LOW" => Some(AmuLevel::Low),
            "MODERATE" => Some(AmuLevel::Moderate),
            "HIGH" => Some(AmuLevel::High),
            "CRITICAL" => Some(AmuLevel::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for AmuLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge colour for a stored level label; grey for anything unknown.
pub fn level_color_hex(label: &str) -> &'static str {
    AmuLevel::parse(label)
        .map(|level| level.color_hex())
        .unwrap_or("#6B7280")
}

/// Maximum-residue-limit compliance state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MrlStatus {
    /// No antibiotic exposure requiring withdrawal
    Safe,
    /// Withdrawal period has elapsed
    Compliant,
    /// Still inside the withdrawal period
    NotCompliant,
    /// Dose date unusable (unparseable or in the future)
    Pending,
}

impl MrlStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MrlStatus::Safe => "SAFE",
            MrlStatus::Compliant => "COMPLIANT",
            MrlStatus::NotCompliant => "NOT_COMPLIANT",
            MrlStatus::Pending => "PENDING",
        }
    }

    /// Parse a stored status label.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SAFE" => Some(MrlStatus::Safe),
            "COMPLIANT" => Some(MrlStatus::Compliant),
            "NOT_COMPLIANT" => Some(MrlStatus::NotCompliant),
            "PENDING" => Some(MrlStatus::Pending),
            _ => None,
        }
    }

    /// Whether products from the animal may enter the food chain.
    pub fn is_clear(&self) -> bool {
        matches!(self, MrlStatus::Safe | MrlStatus::Compliant)
    }
}

impl fmt::Display for MrlStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contribution of one scoring factor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Factor {
    /// Points added to the base score
    pub points: u32,
    /// Amount added to the multiplier (which starts at 1.0)
    pub multiplier: f64,
}

impl Factor {
    pub fn points(points: u32) -> Self {
        Self {
            points,
            multiplier: 0.0,
        }
    }

    pub fn new(points: u32, multiplier: f64) -> Self {
        Self { points, multiplier }
    }
}

/// Breakdown of how a score was computed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    /// Antibiotic usage, drug class, withdrawal length and dose recency
    pub antibiotic: Factor,
    /// Age band
    pub age: Factor,
    /// Weight relative to species baseline
    pub weight: Factor,
    /// Health status band
    pub health: Factor,
    /// Missing vaccination
    pub vaccination: Factor,
    /// Young, underweight and unvaccinated
    pub vulnerable_young: Factor,
    /// Treated with antibiotics while in poor health
    pub treated_while_poor: Factor,
}

impl ScoreBreakdown {
    fn factors(&self) -> [&Factor; 7] {
        [
            &self.antibiotic,
            &self.age,
            &self.weight,
            &self.health,
            &self.vaccination,
            &self.vulnerable_young,
            &self.treated_while_poor,
        ]
    }

    /// Sum of all factor points.
    pub fn base_score(&self) -> u32 {
        self.factors().iter().map(|f| f.points).sum()
    }

    /// 1.0 plus every factor's multiplier increment, accumulated in factor order.
    pub fn multiplier(&self) -> f64 {
        self.factors().iter().fold(1.0, |acc, f| acc + f.multiplier)
    }

    /// `round(base * multiplier)` clamped to 0..=100.
    pub fn final_score(&self) -> u8 {
        let raw = (self.base_score() as f64 * self.multiplier()).round();
        raw.clamp(0.0, 100.0) as u8
    }
}

/// Derived risk assessment for one animal. Always recomputable from the record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    /// Risk score (0 - 100)
    pub amu_score: u8,
    /// Risk category
    pub amu_level: AmuLevel,
    /// Residue compliance state
    pub mrl_status: MrlStatus,
    /// Days left in the withdrawal period (0 when clear)
    pub days_until_compliant: u32,
    /// Advisory messages, in display order
    pub recommendations: Vec<String>,
    /// Per-factor contributions
    pub breakdown: ScoreBreakdown,
    /// The "now" the assessment was computed against
    pub assessed_at: DateTime<Utc>,
}
