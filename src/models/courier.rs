// src/models/courier.rs

//! Courier reference data.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::utils::is_blank;

/// One shipping carrier, including its airway bill numbering pattern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourierRecord {
    /// Stable identifier
    pub id: String,

    /// Display name (e.g., "JNE", "J&T")
    pub name: String,

    /// Short code, often equal to or abbreviating the name
    pub code: String,

    /// Regular expression matched against the uppercased, trimmed AWB
    #[serde(rename = "awbPattern")]
    pub awb_pattern: String,

    /// Customer service phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Customer service email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Brand color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Logo image path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    /// Full-size logo image path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullimg: Option<String>,

    /// Courier website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl CourierRecord {
    /// Create a record with only the fields needed for resolution.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        code: impl Into<String>,
        awb_pattern: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            awb_pattern: awb_pattern.into(),
            phone: None,
            email: None,
            color: None,
            src: None,
            fullimg: None,
            link: None,
        }
    }

    /// Load an ordered courier table from a JSON file and validate it.
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let content = fs::read_to_string(path)?;
        let records: Vec<Self> = serde_json::from_str(&content)?;
        Self::validate_table(&records)?;
        Ok(records)
    }

    /// Validate a single record's required fields.
    ///
    /// The AWB pattern is not checked here; a pattern that fails to compile
    /// only disables the pattern phase for this record.
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.id) {
            return Err(AppError::validation(format!(
                "courier '{}' has an empty id",
                self.name
            )));
        }
        if is_blank(&self.name) {
            return Err(AppError::validation(format!(
                "courier '{}' has an empty name",
                self.id
            )));
        }
        if is_blank(&self.code) {
            return Err(AppError::validation(format!(
                "courier '{}' has an empty code",
                self.id
            )));
        }
        if let Some(link) = &self.link {
            Url::parse(link).map_err(|e| {
                AppError::validation(format!("courier '{}' has invalid link '{link}': {e}", self.id))
            })?;
        }
        Ok(())
    }

    /// Validate every record and reject duplicate ids.
    pub fn validate_table(records: &[Self]) -> Result<()> {
        let mut seen = HashSet::new();
        for record in records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(AppError::validation(format!(
                    "duplicate courier id '{}'",
                    record.id
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FIXTURE: &str = r##"[
        {
            "id": "1",
            "name": "JNE",
            "code": "JNE",
            "awbPattern": "^JNE\\d+$",
            "color": "#1e3a8a",
            "phone": "021-2927-8888",
            "email": "customercare@jne.co.id",
            "link": "https://www.jne.co.id"
        },
        {
            "id": "2",
            "name": "J&T",
            "code": "JNT",
            "awbPattern": "^JNT\\d+$"
        }
    ]"##;

    #[test]
    fn test_parse_fixture() {
        let records: Vec<CourierRecord> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].awb_pattern, r"^JNE\d+$");
        assert_eq!(records[0].phone.as_deref(), Some("021-2927-8888"));
        assert_eq!(records[0].color.as_deref(), Some("#1e3a8a"));
        assert_eq!(records[1].email, None);
        assert!(CourierRecord::validate_table(&records).is_ok());
    }

    #[test]
    fn test_serialize_skips_missing_contact() {
        let record = CourierRecord::new("2", "J&T", "JNT", r"^JNT\d+$");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"awbPattern\""));
        assert!(!json.contains("phone"));
    }

    #[test]
    fn test_load_all_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();

        let records = CourierRecord::load_all(file.path()).unwrap();
        assert_eq!(records[1].name, "J&T");
    }

    #[test]
    fn test_load_all_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CourierRecord::load_all(dir.path().join("couriers.json"));
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_validate_rejects_blank_code() {
        let record = CourierRecord::new("3", "SiCepat", " ", r"^\d{12}$");
        assert!(matches!(record.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_bad_link() {
        let mut record = CourierRecord::new("3", "SiCepat", "SICEPAT", r"^\d{12}$");
        record.link = Some("not a url".to_string());
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_validate_table_rejects_duplicate_ids() {
        let records = vec![
            CourierRecord::new("1", "JNE", "JNE", r"^JNE\d+$"),
            CourierRecord::new("1", "J&T", "JNT", r"^JNT\d+$"),
        ];
        assert!(CourierRecord::validate_table(&records).is_err());
    }

    #[test]
    fn test_malformed_pattern_is_not_a_validation_error() {
        let record = CourierRecord::new("9", "Broken", "BRK", "^BRK(");
        assert!(record.validate().is_ok());
    }
}
