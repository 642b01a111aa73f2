//! Per-factor band lookups.
//!
//! Every band is non-cumulative: the first matching threshold wins.

use chrono::{DateTime, Utc};

use super::antibiotics::{classify_antibiotic, DrugClassRisk};
use super::compliance::DoseDate;
use crate::models::{AnimalRecord, Factor, HealthStatus, ScoreBreakdown};

/// Antibiotic usage: base points, drug class, withdrawal length, dose recency.
pub fn antibiotic_factor(record: &AnimalRecord, now: DateTime<Utc>) -> Factor {
    if !record.antibiotic_used {
        return Factor::default();
    }

    let class_points = match classify_antibiotic(record.antibiotic_name.as_deref()) {
        DrugClassRisk::Critical => 20,
        DrugClassRisk::Named => 10,
        DrugClassRisk::Unnamed => 0,
    };

    let multiplier = DoseDate::parse(record.last_dose_date.as_deref())
        .days_since(now)
        .map(recency_multiplier)
        .unwrap_or(0.0);

    Factor::new(40 + class_points + withdrawal_points(record.withdrawal_days), multiplier)
}

/// Longer withdrawal periods indicate more potent drugs.
pub fn withdrawal_points(withdrawal_days: u32) -> u32 {
    match withdrawal_days {
        d if d > 30 => 15,
        d if d > 21 => 12,
        d if d > 14 => 8,
        d if d > 7 => 5,
        _ => 0,
    }
}

/// Multiplier increment for a dose `days_since` days ago.
pub fn recency_multiplier(days_since: i64) -> f64 {
    if days_since < 7 {
        0.3
    } else if days_since < 14 {
        0.2
    } else if days_since < 30 {
        0.1
    } else {
        0.0
    }
}

pub fn age_points(age_months: f64) -> u32 {
    if age_months < 2.0 {
        25
    } else if age_months < 6.0 {
        20
    } else if age_months < 12.0 {
        15
    } else if age_months < 24.0 {
        10
    } else if age_months < 48.0 {
        5
    } else {
        8
    }
}

/// Points for weight relative to the species' optimal weight.
pub fn weight_points(weight_ratio: f64) -> u32 {
    if weight_ratio < 0.3 {
        20
    } else if weight_ratio < 0.5 {
        16
    } else if weight_ratio < 0.7 {
        12
    } else if weight_ratio < 0.85 {
        8
    } else if weight_ratio > 1.5 {
        10
    } else if weight_ratio > 1.3 {
        5
    } else {
        0
    }
}

pub fn health_factor(health: HealthStatus) -> Factor {
    match health {
        HealthStatus::Poor => Factor::new(15, 0.2),
        HealthStatus::Fair => Factor::points(10),
        HealthStatus::Good => Factor::points(5),
        HealthStatus::Excellent => Factor::points(0),
        HealthStatus::Unrecognized => Factor::points(7),
    }
}

pub fn vaccination_factor(vaccinated: bool) -> Factor {
    if vaccinated {
        Factor::default()
    } else {
        Factor::new(10, 0.15)
    }
}

/// Young, underweight and unvaccinated at once.
pub fn vulnerable_young_bonus(record: &AnimalRecord) -> Factor {
    if record.age_months < 6.0 && record.weight_ratio() < 0.7 && !record.vaccination_status {
        Factor::new(0, 0.3)
    } else {
        Factor::default()
    }
}

/// Antibiotic treatment while in poor or critical health.
pub fn treated_while_poor_bonus(record: &AnimalRecord) -> Factor {
    if record.antibiotic_used && record.health().is_poor() {
        Factor::new(0, 0.25)
    } else {
        Factor::default()
    }
}

/// Evaluate every factor for a record.
pub fn score_breakdown(record: &AnimalRecord, now: DateTime<Utc>) -> ScoreBreakdown {
    ScoreBreakdown {
        antibiotic: antibiotic_factor(record, now),
        age: Factor::points(age_points(record.age_months)),
        weight: Factor::points(weight_points(record.weight_ratio())),
        health: health_factor(record.health()),
        vaccination: vaccination_factor(record.vaccination_status),
        vulnerable_young: vulnerable_young_bonus(record),
        treated_while_poor: treated_while_poor_bonus(record),
    }
}
