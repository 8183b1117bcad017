//! Courier identification service.
//!
//! Identifies the courier that issued an airway bill, first by matching the
//! AWB against each courier's numbering pattern and then, failing that, by
//! comparing a free-text courier name hint against courier names and codes.

use std::path::Path;

use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::models::CourierRecord;
use crate::utils::{fold_name, is_blank, normalize_awb};

/// Compile an AWB pattern with ASCII-only `\d`, `\w` and `\s`.
///
/// Patterns that need Unicode mode (e.g. `.` against a `&str` haystack)
/// are retried with it enabled.
fn compile_pattern(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .unicode(false)
        .build()
        .or_else(|_| Regex::new(pattern))
}

/// A courier record paired with its precompiled AWB pattern.
#[derive(Debug, Clone)]
struct CompiledCourier {
    record: CourierRecord,
    /// `None` when the pattern failed to compile
    pattern: Option<Regex>,
}

/// Service for resolving couriers from airway bill numbers.
///
/// Table order is authoritative: every lookup returns the first matching
/// record, even when a later record would also match.
#[derive(Debug, Clone, Default)]
pub struct CourierResolver {
    couriers: Vec<CompiledCourier>,
}

impl CourierResolver {
    /// Create a resolver over an ordered courier table.
    ///
    /// Patterns that fail to compile are reported once here and the record
    /// is skipped by the pattern phase.
    pub fn new(records: Vec<CourierRecord>) -> Self {
        let couriers = records
            .into_iter()
            .map(|record| {
                let pattern = match compile_pattern(&record.awb_pattern) {
                    Ok(regex) => Some(regex),
                    Err(e) => {
                        log::warn!(
                            "Invalid AWB pattern for courier '{}' ({}): {}",
                            record.name,
                            record.awb_pattern,
                            e
                        );
                        None
                    }
                };
                CompiledCourier { record, pattern }
            })
            .collect();

        Self { couriers }
    }

    /// Load and validate a courier table from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let records = CourierRecord::load_all(path)?;
        Ok(Self::new(records))
    }

    /// All courier records in table order.
    pub fn couriers(&self) -> impl Iterator<Item = &CourierRecord> {
        self.couriers.iter().map(|c| &c.record)
    }

    /// Courier records whose AWB pattern failed to compile.
    pub fn invalid_patterns(&self) -> impl Iterator<Item = &CourierRecord> {
        self.couriers
            .iter()
            .filter(|c| c.pattern.is_none())
            .map(|c| &c.record)
    }

    /// Number of couriers in the table.
    pub fn len(&self) -> usize {
        self.couriers.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.couriers.is_empty()
    }

    /// Find the first courier whose AWB pattern matches the normalized AWB.
    pub fn resolve_by_pattern(&self, awb: &str) -> Option<&CourierRecord> {
        let awb = normalize_awb(awb);

        self.couriers.iter().find_map(|courier| {
            let regex = courier.pattern.as_ref()?;
            if regex.is_match(&awb) {
                log::debug!("AWB '{}' matched pattern of '{}'", awb, courier.record.name);
                Some(&courier.record)
            } else {
                None
            }
        })
    }

    /// Find the first courier whose name or code overlaps the hint.
    ///
    /// A record matches when its name contains the hint, its code equals the
    /// hint, or the hint contains its name or code. Comparison ignores case.
    /// A missing or blank hint matches nothing.
    pub fn resolve_by_name_hint(&self, hint: Option<&str>) -> Option<&CourierRecord> {
        let hint = hint.filter(|h| !is_blank(h)).map(fold_name)?;

        self.couriers
            .iter()
            .map(|c| &c.record)
            .find(|record| Self::matches_hint(record, &hint))
            .inspect(|record| log::debug!("Hint '{}' matched courier '{}'", hint, record.name))
    }

    /// Resolve by pattern, falling back to the name hint.
    pub fn resolve(&self, awb: &str, hint: Option<&str>) -> Option<&CourierRecord> {
        self.resolve_by_pattern(awb)
            .or_else(|| self.resolve_by_name_hint(hint))
    }

    fn matches_hint(record: &CourierRecord, hint: &str) -> bool {
        let name = fold_name(&record.name);
        let code = fold_name(&record.code);

        name.contains(hint) || code == hint || hint.contains(&name) || hint.contains(&code)
    }
}
