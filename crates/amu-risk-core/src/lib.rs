//! AMU Risk Core Library
//!
//! Antimicrobial-usage (AMU) risk scoring and maximum-residue-limit (MRL)
//! compliance for livestock records.
//!
//! # Architecture
//!
//! ```text
//! AnimalRecord + now
//!        │
//!        ▼
//! ┌───────────────────────────────┐
//! │          RiskEngine           │
//! │  factor bands → score 0..100  │
//! │  level · MRL status · advice  │
//! └───────────────┬───────────────┘
//!                 │ RiskAssessment
//!        ┌────────┴─────────┐
//!        ▼                  ▼
//!   TraceRecord        FarmReport
//!   (QR payload)       (dashboard)
//!        │                  │
//!        ▼                  ▼
//!    ScanSink           ReportSink
//! ```
//!
//! # Core Principle
//!
//! **An assessment is always derivable from its record.** The engine is pure:
//! no I/O, no shared state, and the current time is always passed in.
//!
//! # Modules
//!
//! - [`models`]: Domain types (AnimalRecord, RiskAssessment, AmuLevel, MrlStatus)
//! - [`engine`]: Scoring, leveling, compliance and recommendations
//! - [`trace`]: Traceability label payloads and scan logging
//! - [`export`]: Farm reports
//! - [`db`]: SQLite scan log and report store

pub mod db;
pub mod engine;
pub mod export;
pub mod models;
pub mod trace;

// Re-export commonly used types
pub use db::Database;
pub use engine::{
    compute_amu_risk, days_until_compliant, level_of, mrl_status, recommendations_for,
    Recommendation, RiskEngine,
};
pub use export::{FarmReport, ReportConfig, ReportSink};
pub use models::{AmuLevel, AnimalRecord, MrlStatus, RiskAssessment, ScoreBreakdown};
pub use trace::{ScanEvent, ScanSink, TraceRecord};

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum AmuError {
    #[error("Database error: {0}")]
    Database(#[from] db::DbError),

    #[error("Traceability error: {0}")]
    Trace(#[from] trace::TraceError),

    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),
}

pub type AmuResult<T> = Result<T, AmuError>;
