//! Withdrawal-period (MRL) compliance.
//!
//! Elapsed time is measured in whole days, floored, so a dose later today
//! relative to `now` counts as day -1 rather than day 0.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::MrlStatus;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Interpretation of an optional dose date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoseDate {
    /// Field missing or blank
    Absent,
    /// Present but not a calendar date
    Invalid,
    /// A parsed instant (date-only values are midnight UTC)
    At(DateTime<Utc>),
}

impl DoseDate {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return DoseDate::Absent;
        };

        match parse_instant(raw) {
            Some(at) => DoseDate::At(at),
            None => {
                tracing::warn!(last_dose_date = raw, "unparseable dose date");
                DoseDate::Invalid
            }
        }
    }

    /// Whole days from the dose to `now`; `None` unless the date parsed.
    pub fn days_since(&self, now: DateTime<Utc>) -> Option<i64> {
        match self {
            DoseDate::At(at) => Some(elapsed_days(*at, now)),
            _ => None,
        }
    }
}

fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.and_utc())
}

/// `floor((now - dose) / 1 day)`.
pub fn elapsed_days(dose: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - dose).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// MRL compliance for a dose date and withdrawal period.
///
/// A missing date or a zero-day withdrawal is `Safe`, even when an antibiotic
/// was recorded; unusable dates are `Pending`.
pub fn mrl_status(last_dose_date: Option<&str>, withdrawal_days: u32, now: DateTime<Utc>) -> MrlStatus {
    let dose = DoseDate::parse(last_dose_date);
    if dose == DoseDate::Absent || withdrawal_days == 0 {
        return MrlStatus::Safe;
    }

    match dose.days_since(now) {
        None => MrlStatus::Pending,
        Some(elapsed) if elapsed < 0 => MrlStatus::Pending,
        Some(elapsed) if elapsed >= i64::from(withdrawal_days) => MrlStatus::Compliant,
        Some(_) => MrlStatus::NotCompliant,
    }
}

/// Days left before the withdrawal period ends; 0 when no usable date.
pub fn days_until_compliant(
    last_dose_date: Option<&str>,
    withdrawal_days: u32,
    now: DateTime<Utc>,
) -> u32 {
    DoseDate::parse(last_dose_date)
        .days_since(now)
        .map(|elapsed| (i64::from(withdrawal_days) - elapsed).clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}
