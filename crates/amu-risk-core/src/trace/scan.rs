//! Label scan events and the sink they are written to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TraceRecord, TraceResult};
use crate::models::{AmuLevel, MrlStatus};

/// One scan of a traceability label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanEvent {
    /// Scan UUID
    pub scan_id: String,
    pub animal_id: String,
    pub owner: String,
    pub species: String,
    pub breed: String,
    pub amu_level: AmuLevel,
    pub amu_score: u8,
    pub mrl_status: MrlStatus,
    /// Where the scan happened, if known
    pub location: Option<String>,
    pub scanned_at: DateTime<Utc>,
}

impl ScanEvent {
    pub fn new(trace: &TraceRecord, location: Option<String>, scanned_at: DateTime<Utc>) -> Self {
        Self {
            scan_id: uuid::Uuid::new_v4().to_string(),
            animal_id: trace.id.clone(),
            owner: trace.owner.clone(),
            species: trace.species.clone(),
            breed: trace.breed.clone(),
            amu_level: trace.amu_level,
            amu_score: trace.amu_score,
            mrl_status: trace.mrl_status,
            location,
            scanned_at,
        }
    }
}

/// Destination for scan events, supplied by the caller.
pub trait ScanSink {
    type Error: std::error::Error;

    fn record_scan(&self, event: &ScanEvent) -> Result<(), Self::Error>;
}

/// Record a scan; sink failures are logged and swallowed.
pub fn log_scan<S: ScanSink>(sink: &S, event: &ScanEvent) -> bool {
    match sink.record_scan(event) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(
                scan_id = %event.scan_id,
                animal_id = %event.animal_id,
                error = %e,
                "failed to record scan"
            );
            false
        }
    }
}

/// Decode a scanned label and log the scan.
///
/// Decoding errors propagate; sink errors do not.
pub fn scan_label<S: ScanSink>(
    sink: &S,
    payload: &str,
    location: Option<String>,
    now: DateTime<Utc>,
) -> TraceResult<TraceRecord> {
    let trace = TraceRecord::decode(payload)?;
    let event = ScanEvent::new(&trace, location, now);
    log_scan(sink, &event);
    Ok(trace)
}
