//! Traceability label payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{TraceError, TraceResult};
use crate::models::{AmuLevel, AnimalRecord, MrlStatus, RiskAssessment};

/// Flat projection of an assessed animal carried by a QR label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TraceRecord {
    /// Animal ID
    pub id: String,
    /// Owner/farm identifier
    pub owner: String,
    /// Species as entered
    pub species: String,
    /// Breed as entered
    pub breed: String,
    pub amu_level: AmuLevel,
    pub amu_score: u8,
    pub mrl_status: MrlStatus,
    /// When the label payload was generated
    pub generated_at: DateTime<Utc>,
    /// SHA-256 over the payload without this field; absent on unsigned labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

impl TraceRecord {
    /// Project a record and its assessment into a signed label payload.
    pub fn from_assessment(
        record: &AnimalRecord,
        assessment: &RiskAssessment,
        now: DateTime<Utc>,
    ) -> TraceResult<Self> {
        let mut trace = Self {
            id: record.id.clone(),
            owner: record.owner.clone(),
            species: record.species.clone(),
            breed: record.breed.clone(),
            amu_level: assessment.amu_level,
            amu_score: assessment.amu_score,
            mrl_status: assessment.mrl_status,
            generated_at: now,
            checksum: None,
        };
        trace.checksum = Some(trace.content_hash()?);
        Ok(trace)
    }

    /// Hash of the payload with the checksum removed.
    pub fn content_hash(&self) -> Result<String, serde_json::Error> {
        let unsigned = Self {
            checksum: None,
            ..self.clone()
        };
        let json = serde_json::to_string(&unsigned)?;
        Ok(hash_data(json.as_bytes()))
    }

    /// Encode to the string stored in the QR code.
    pub fn encode(&self) -> TraceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a scanned label, rejecting altered signed payloads.
    pub fn decode(payload: &str) -> TraceResult<Self> {
        let trace: Self = serde_json::from_str(payload.trim())?;
        if let Some(expected) = &trace.checksum {
            let actual = trace.content_hash()?;
            if *expected != actual {
                return Err(TraceError::ChecksumMismatch {
                    expected: expected.clone(),
                    actual,
                });
            }
        }
        Ok(trace)
    }

    /// Whether the payload carries a checksum.
    pub fn is_signed(&self) -> bool {
        self.checksum.is_some()
    }
}

/// SHA-256 hash, hex encoded.
pub fn hash_data(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RiskEngine;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn make_trace() -> TraceRecord {
        let record = AnimalRecord::new("Buffalo", 36.0, 340.0)
            .with_identity("farm-7", "Murrah")
            .with_antibiotic(Some("Oxytetracycline"), Some("2024-06-10"), 28);
        let assessment = RiskEngine::new().assess(&record, now());
        TraceRecord::from_assessment(&record, &assessment, now()).unwrap()
    }

    #[test]
    fn test_projection_fields() {
        let trace = make_trace();
        assert_eq!(trace.owner, "farm-7");
        assert_eq!(trace.breed, "Murrah");
        assert_eq!(trace.mrl_status, MrlStatus::NotCompliant);
        assert!(trace.is_signed());
        assert_eq!(trace.checksum.as_ref().unwrap().len(), 64);
    }

    #[test]
    fn test_decode_encoded_label() {
        let trace = make_trace();
        let payload = trace.encode().unwrap();
        assert!(payload.contains("\"mrl_status\":\"NOT_COMPLIANT\""));
        assert_eq!(TraceRecord::decode(&payload).unwrap(), trace);
    }

    #[test]
    fn test_tampered_label_rejected() {
        let payload = make_trace().encode().unwrap();
        let tampered = payload.replace("NOT_COMPLIANT", "COMPLIANT");
        assert!(matches!(
            TraceRecord::decode(&tampered),
            Err(TraceError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_unsigned_label_accepted() {
        let payload = r#"{"id":"a1","owner":"o","species":"Goat","breed":"Boer",
            "amu_level":"LOW","amu_score":12,"mrl_status":"SAFE",
            "generated_at":"2024-06-15T12:00:00Z"}"#;
        let trace = TraceRecord::decode(payload).unwrap();
        assert!(!trace.is_signed());
        assert_eq!(trace.amu_level, AmuLevel::Low);
    }

    #[test]
    fn test_malformed_label() {
        assert!(matches!(
            TraceRecord::decode("not json"),
            Err(TraceError::Malformed(_))
        ));
    }
}
