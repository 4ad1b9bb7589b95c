//! The one field-completion predicate.

use vidtrack_core::TitleVariant;

/// Placeholder used in records for "intentionally left blank".
pub const PLACEHOLDER: &str = "-";

/// A field value as seen by the completion predicate.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    /// Free text
    Text(&'a str),
    /// Checkbox
    Flag(bool),
    /// Title candidates
    Titles(&'a [TitleVariant]),
}

/// Whether a field holds a "done" value.
///
/// Text is done when it is neither blank nor the `-` placeholder once trimmed.
/// A flag is done when set. A title list is done when at least one candidate
/// has text that would count as done on its own.
pub fn is_field_complete(value: FieldValue<'_>) -> bool {
    match value {
        FieldValue::Text(s) => is_text_complete(s),
        FieldValue::Flag(b) => b,
        FieldValue::Titles(titles) => titles.iter().any(|t| is_text_complete(&t.text)),
    }
}

fn is_text_complete(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s != PLACEHOLDER
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(text: &str) -> TitleVariant {
        TitleVariant { index: 1, text: text.to_string(), share: 0.0 }
    }

    #[test]
    fn test_text() {
        assert!(is_field_complete(FieldValue::Text("done")));
        assert!(is_field_complete(FieldValue::Text("  padded  ")));
        assert!(is_field_complete(FieldValue::Text("--")));
        assert!(!is_field_complete(FieldValue::Text("")));
        assert!(!is_field_complete(FieldValue::Text("   ")));
        assert!(!is_field_complete(FieldValue::Text("\t\n")));
        assert!(!is_field_complete(FieldValue::Text("-")));
        assert!(!is_field_complete(FieldValue::Text(" - ")));
    }

    #[test]
    fn test_flag() {
        assert!(is_field_complete(FieldValue::Flag(true)));
        assert!(!is_field_complete(FieldValue::Flag(false)));
    }

    #[test]
    fn test_titles() {
        assert!(!is_field_complete(FieldValue::Titles(&[])));
        assert!(!is_field_complete(FieldValue::Titles(&[title(""), title("-"), title("  ")])));
        assert!(is_field_complete(FieldValue::Titles(&[title("-"), title("Argo CD in 10 minutes")])));
    }
}
