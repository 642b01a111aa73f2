//! Scan log operations.

use rusqlite::{params, Row};

use super::{Database, DbError, DbResult};
use crate::trace::{ScanEvent, ScanSink};

const SCAN_COLUMNS: &str = "scan_id, animal_id, owner, species, breed, amu_level, amu_score, \
                            mrl_status, location, scanned_at";

impl Database {
    /// Append a scan event.
    pub fn insert_scan(&self, event: &ScanEvent) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO qr_scans (
                scan_id, animal_id, owner, species, breed, amu_level, amu_score,
                mrl_status, location, scanned_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                event.scan_id,
                event.animal_id,
                event.owner,
                event.species,
                event.breed,
                event.amu_level,
                event.amu_score,
                event.mrl_status,
                event.location,
                event.scanned_at,
            ],
        )?;
        Ok(())
    }

    /// Most recent scans, newest first.
    pub fn recent_scans(&self, limit: usize) -> DbResult<Vec<ScanEvent>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM qr_scans ORDER BY scanned_at DESC, rowid DESC LIMIT ?",
            SCAN_COLUMNS
        ))?;
        let scans = stmt
            .query_map([limit as i64], row_to_scan)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(scans)
    }

    /// All scans of one animal, oldest first.
    pub fn scans_for_animal(&self, animal_id: &str) -> DbResult<Vec<ScanEvent>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM qr_scans WHERE animal_id = ? ORDER BY scanned_at, rowid",
            SCAN_COLUMNS
        ))?;
        let scans = stmt
            .query_map([animal_id], row_to_scan)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(scans)
    }
}

fn row_to_scan(row: &Row<'_>) -> rusqlite::Result<ScanEvent> {
    Ok(ScanEvent {
        scan_id: row.get(0)?,
        animal_id: row.get(1)?,
        owner: row.get(2)?,
        species: row.get(3)?,
        breed: row.get(4)?,
        amu_level: row.get(5)?,
        amu_score: row.get(6)?,
        mrl_status: row.get(7)?,
        location: row.get(8)?,
        scanned_at: row.get(9)?,
    })
}

impl ScanSink for Database {
    type Error = DbError;

    fn record_scan(&self, event: &ScanEvent) -> Result<(), Self::Error> {
        self.insert_scan(event)
    }
}
