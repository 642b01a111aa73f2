//! Farm report storage.

use rusqlite::{params, OptionalExtension};

use super::{Database, DbError, DbResult};
use crate::export::{FarmReport, ReportSink};

impl Database {
    /// Store a generated report.
    pub fn insert_report(&self, report: &FarmReport) -> DbResult<()> {
        let payload = serde_json::to_string(report)?;
        self.conn.execute(
            r#"
            INSERT INTO farm_reports (
                report_id, report_type, farm_name, system_id,
                total_animals, average_score, payload, generated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                report.metadata.report_id,
                report.metadata.report_type,
                report.metadata.farm_name,
                report.metadata.system_id,
                report.summary.total_animals as i64,
                report.summary.average_score,
                payload,
                report.metadata.generated_at,
            ],
        )?;
        Ok(())
    }

    /// Get a report by ID.
    pub fn get_report(&self, report_id: &str) -> DbResult<FarmReport> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM farm_reports WHERE report_id = ?",
                [report_id],
                |row| row.get(0),
            )
            .optional()?;

        let payload = payload.ok_or_else(|| DbError::NotFound(report_id.to_string()))?;
        Ok(serde_json::from_str(&payload)?)
    }

    /// All stored reports, newest first.
    pub fn list_reports(&self) -> DbResult<Vec<FarmReport>> {
        let mut stmt = self
            .conn
            .prepare("SELECT payload FROM farm_reports ORDER BY generated_at DESC, rowid DESC")?;
        let payloads = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        payloads
            .iter()
            .map(|p| serde_json::from_str(p).map_err(DbError::from))
            .collect()
    }
}

impl ReportSink for Database {
    type Error = DbError;

    fn store_report(&self, report: &FarmReport) -> Result<(), Self::Error> {
        self.insert_report(report)
    }
}
