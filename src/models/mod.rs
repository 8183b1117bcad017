// src/models/mod.rs

//! Domain models for courier resolution and tracking.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod courier;
mod locale;
mod tracking;

// Re-export all public types
pub use config::{Config, LoggingConfig, PathsConfig};
pub use courier::CourierRecord;
pub use locale::{Language, Messages, render};
pub use tracking::{TrackingData, TrackingDatabase, TrackingHistoryItem};
