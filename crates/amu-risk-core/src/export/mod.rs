//! Farm report export.

mod report;

pub use report::*;

use thiserror::Error;

/// Export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Report sink error: {0}")]
    Sink(String),
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Destination for generated reports, supplied by the caller.
pub trait ReportSink {
    type Error: std::error::Error;

    fn store_report(&self, report: &FarmReport) -> Result<(), Self::Error>;
}

/// Hand a report to its sink.
pub fn publish_report<S: ReportSink>(sink: &S, report: &FarmReport) -> ExportResult<()> {
    sink.store_report(report)
        .map_err(|e| ExportError::Sink(e.to_string()))?;
    tracing::info!(
        report_id = %report.metadata.report_id,
        animals = report.summary.total_animals,
        "stored farm report"
    );
    Ok(())
}
