// src/models/locale.rs

//! Label toggle between English and Indonesian messages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Display language for user-facing messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    En,
    Id,
}

impl Language {
    /// Message templates for this language.
    pub fn messages(self) -> Messages {
        match self {
            Language::En => Messages::english(),
            Language::Id => Messages::indonesian(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("EN"),
            Language::Id => f.write_str("ID"),
        }
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EN" => Ok(Language::En),
            "ID" => Ok(Language::Id),
            other => Err(AppError::config(format!(
                "unsupported language '{other}', expected EN or ID"
            ))),
        }
    }
}

/// Message templates for the tracking flow.
///
/// Supported placeholders: `{awb}`, `{courier}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub empty_awb: &'static str,
    pub not_found: &'static str,
    pub not_found_detected: &'static str,
    pub unidentified_courier: &'static str,
}

impl Messages {
    fn english() -> Self {
        Self {
            empty_awb: "Please enter an AWB number",
            not_found: "AWB number \"{awb}\" not found. Please check your AWB number and try again.",
            not_found_detected: "This appears to be a {courier} shipment, but no tracking data is available for AWB: {awb}",
            unidentified_courier: "Unidentified courier",
        }
    }

    fn indonesian() -> Self {
        Self {
            empty_awb: "Silakan masukkan nomor AWB",
            not_found: "Nomor AWB \"{awb}\" tidak ditemukan. Silakan periksa nomor AWB Anda dan coba lagi.",
            not_found_detected: "Ini tampaknya kiriman {courier}, tetapi data pelacakan untuk AWB: {awb} tidak tersedia",
            unidentified_courier: "Kurir tidak dikenali",
        }
    }
}

/// Fill `{awb}` and `{courier}` placeholders in a template.
///
/// Substitution is a single pass over the template; inserted values are
/// never rescanned for placeholders.
pub fn render(template: &str, awb: &str, courier: &str) -> String {
    let mut out = String::with_capacity(template.len() + awb.len() + courier.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{awb}") {
            out.push_str(awb);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{courier}") {
            out.push_str(courier);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" ID ".parse::<Language>().unwrap(), Language::Id);
        assert!("FR".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde() {
        assert_eq!(serde_json::to_string(&Language::Id).unwrap(), "\"ID\"");
        let lang: Language = serde_json::from_str("\"EN\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_render() {
        let messages = Language::En.messages();
        assert_eq!(
            render(messages.not_found_detected, "JNE999", "JNE"),
            "This appears to be a JNE shipment, but no tracking data is available for AWB: JNE999"
        );
    }

    #[test]
    fn test_render_keeps_braces_in_values() {
        let messages = Language::En.messages();
        assert_eq!(
            render(messages.not_found, "Q{courier}Q", ""),
            "AWB number \"Q{courier}Q\" not found. Please check your AWB number and try again."
        );
        assert_eq!(
            render(messages.not_found_detected, "JNT{courier}", "J&T"),
            "This appears to be a J&T shipment, but no tracking data is available for AWB: JNT{courier}"
        );
        assert_eq!(render("{x} {awb} {", "{awb}", "c"), "{x} {awb} {");
    }
}
