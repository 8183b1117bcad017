// src/models/tracking.rs

//! Mocked tracking records keyed by airway bill.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Timestamp layouts accepted in history entries.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// A single checkpoint in a shipment's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingHistoryItem {
    /// Free-text date as it appears in the fixture
    pub date: String,

    /// Checkpoint location
    pub location: String,

    /// Status description at this checkpoint
    pub status: String,

    /// Icon name used by the front end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TrackingHistoryItem {
    /// Parse the entry date, if it is in a recognized layout.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let date = self.date.trim();
        DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(date, fmt).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(date, "%Y-%m-%d")
                    .ok()
                    .and_then(|d| d.and_hms_opt(0, 0, 0))
            })
    }
}

/// Tracking data for one shipment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrackingData {
    /// Courier name as declared by the tracking record
    pub courier: String,

    /// Current shipment status
    pub status: String,

    /// Service level (e.g., "REG", "YES")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    /// Estimated delivery date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,

    /// Destination city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    /// Checkpoints in chronological order
    #[serde(default)]
    pub history: Vec<TrackingHistoryItem>,
}

impl TrackingData {
    /// The most recent checkpoint.
    pub fn latest_event(&self) -> Option<&TrackingHistoryItem> {
        self.history.last()
    }

    /// Whether the shipment status reads as delivered.
    pub fn is_delivered(&self) -> bool {
        let status = self.status.to_lowercase();
        status.contains("delivered") || status.contains("terkirim")
    }
}

/// Static tracking database keyed by AWB.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingDatabase {
    entries: HashMap<String, TrackingData>,
}

impl TrackingDatabase {
    /// Load the tracking database from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Look up a shipment by its AWB exactly as given.
    pub fn get(&self, awb: &str) -> Option<&TrackingData> {
        self.entries.get(awb)
    }

    /// Number of shipments in the database.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the database holds no shipments.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, TrackingData)> for TrackingDatabase {
    fn from_iter<I: IntoIterator<Item = (String, TrackingData)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
