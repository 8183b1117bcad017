//! Tracking lookup service.
//!
//! Looks an airway bill up in the static tracking database and annotates the
//! result with the courier identified by [`CourierResolver`]. A missing
//! courier never fails the lookup; the result simply carries no branding.

use crate::error::{AppError, Result};
use crate::models::{
    CourierRecord, Language, TrackingData, TrackingDatabase, TrackingHistoryItem, render,
};
use crate::services::CourierResolver;
use crate::utils::is_blank;

/// Tracking data found for an AWB, with the courier it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingResult {
    pub awb: String,
    pub data: TrackingData,
    pub courier: Option<CourierRecord>,
}

impl TrackingResult {
    /// Courier name for display: the resolved courier, else the declared one.
    pub fn courier_name(&self) -> &str {
        self.courier
            .as_ref()
            .map_or(self.data.courier.as_str(), |c| c.name.as_str())
    }

    /// The most recent checkpoint.
    pub fn latest_event(&self) -> Option<&TrackingHistoryItem> {
        self.data.latest_event()
    }

    /// Phone and email of the resolved courier.
    pub fn contact(&self) -> (Option<&str>, Option<&str>) {
        match &self.courier {
            Some(c) => (c.phone.as_deref(), c.email.as_deref()),
            None => (None, None),
        }
    }
}

/// Outcome of a tracking lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingOutcome {
    /// The AWB has tracking data
    Found(TrackingResult),
    /// No tracking data; the courier may still be recognizable from the AWB
    NotFound {
        awb: String,
        courier: Option<CourierRecord>,
    },
}

/// Service answering tracking lookups against static reference data.
pub struct TrackingService {
    resolver: CourierResolver,
    database: TrackingDatabase,
    language: Language,
}

impl TrackingService {
    /// Create a new tracking service.
    pub fn new(resolver: CourierResolver, database: TrackingDatabase, language: Language) -> Self {
        Self {
            resolver,
            database,
            language,
        }
    }

    /// The courier resolver backing this service.
    pub fn resolver(&self) -> &CourierResolver {
        &self.resolver
    }

    /// Label language used for messages.
    pub fn language(&self) -> Language {
        self.language
    }

    /// Look up an AWB.
    ///
    /// Returns [`AppError::EmptyAwb`] for blank input. Found records are
    /// annotated by pattern first and then by the record's declared courier
    /// name; unknown AWBs are annotated by pattern only.
    pub fn lookup(&self, awb: &str) -> Result<TrackingOutcome> {
        if is_blank(awb) {
            return Err(AppError::EmptyAwb);
        }
        let awb = awb.trim();

        let outcome = match self.database.get(awb) {
            Some(data) => {
                let courier = self.resolver.resolve(awb, Some(&data.courier)).cloned();
                log::debug!(
                    "AWB '{}' found, courier: {}",
                    awb,
                    courier.as_ref().map_or("unidentified", |c| c.name.as_str())
                );
                TrackingOutcome::Found(TrackingResult {
                    awb: awb.to_string(),
                    data: data.clone(),
                    courier,
                })
            }
            None => {
                let courier = self.resolver.resolve_by_pattern(awb).cloned();
                log::debug!("AWB '{}' has no tracking data", awb);
                TrackingOutcome::NotFound {
                    awb: awb.to_string(),
                    courier,
                }
            }
        };

        Ok(outcome)
    }

    /// Localized message for outcomes that need one.
    pub fn message(&self, outcome: &TrackingOutcome) -> Option<String> {
        let messages = self.language.messages();
        match outcome {
            TrackingOutcome::Found(_) => None,
            TrackingOutcome::NotFound {
                awb,
                courier: Some(courier),
            } => Some(render(messages.not_found_detected, awb, &courier.name)),
            TrackingOutcome::NotFound { awb, courier: None } => {
                Some(render(messages.not_found, awb, ""))
            }
        }
    }

    /// Localized message for an error raised by [`TrackingService::lookup`].
    pub fn error_message(&self, error: &AppError) -> String {
        match error {
            AppError::EmptyAwb => self.language.messages().empty_awb.to_string(),
            other => other.to_string(),
        }
    }
}
