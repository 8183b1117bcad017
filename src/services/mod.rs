//! Service layer for courier resolution and tracking.
//!
//! This module contains the business logic for:
//! - Courier identification from AWB numbers (`CourierResolver`)
//! - Tracking lookups against static data (`TrackingService`)

mod resolver;
mod tracking;

pub use resolver::CourierResolver;
pub use tracking::{TrackingOutcome, TrackingResult, TrackingService};
