//! SQLite schema definition.

/// Complete database schema for the scan log and report store.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Traceability Scans (Append-Only)
-- ============================================================================

CREATE TABLE IF NOT EXISTS qr_scans (
    scan_id TEXT PRIMARY KEY,
    animal_id TEXT NOT NULL,
    owner TEXT NOT NULL DEFAULT '',
    species TEXT NOT NULL DEFAULT '',
    breed TEXT NOT NULL DEFAULT '',
    amu_level TEXT NOT NULL CHECK (amu_level IN ('LOW', 'MODERATE', 'HIGH', 'CRITICAL')),
    amu_score INTEGER NOT NULL CHECK (amu_score BETWEEN 0 AND 100),
    mrl_status TEXT NOT NULL CHECK (mrl_status IN ('SAFE', 'COMPLIANT', 'NOT_COMPLIANT', 'PENDING')),
    location TEXT,
    scanned_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_scans_animal ON qr_scans(animal_id);
CREATE INDEX IF NOT EXISTS idx_scans_scanned_at ON qr_scans(scanned_at);

-- ============================================================================
-- Farm Reports
-- ============================================================================

CREATE TABLE IF NOT EXISTS farm_reports (
    report_id TEXT PRIMARY KEY,
    report_type TEXT NOT NULL,
    farm_name TEXT,
    system_id TEXT,
    total_animals INTEGER NOT NULL,
    average_score REAL NOT NULL,
    payload TEXT NOT NULL,                       -- JSON FarmReport
    generated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_reports_generated_at ON farm_reports(generated_at);
"#;
