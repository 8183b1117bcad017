//! Text normalization helpers shared by the resolver and the tracking flow.

/// Normalize an airway bill for pattern matching: trimmed and uppercased.
pub fn normalize_awb(awb: &str) -> String {
    awb.trim().to_uppercase()
}

/// Case-fold a courier name, code or hint for containment checks.
pub fn fold_name(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Returns true when the string is empty or only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_awb() {
        assert_eq!(normalize_awb("  jne1234567890 \t"), "JNE1234567890");
        assert_eq!(normalize_awb("JNE1234567890"), "JNE1234567890");
        assert_eq!(normalize_awb("   "), "");
    }

    #[test]
    fn test_fold_name() {
        assert_eq!(fold_name(" J&T Express "), "j&t express");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \n"));
        assert!(!is_blank(" x "));
    }
}
