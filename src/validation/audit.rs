//! Whole-draft audit for duplicates that slipped past the add rules.

use std::collections::HashMap;

use crate::model::ColorEntry;

/// Outcome of a draft audit.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// False once any error has been recorded.
    pub passed: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    fn report(&mut self, strict: bool, message: String) {
        if strict {
            self.add_error(message);
        } else {
            self.add_warning(message);
        }
    }
}

/// Report entries sharing a name (case-insensitive) or a value.
///
/// Duplicates only reach a draft through random picks or a duplicated seed.
/// They are warnings unless `strict` is set, in which case they are errors
/// and the result does not pass.
pub fn audit_entries(entries: &[ColorEntry], strict: bool) -> ValidationResult {
    let mut result = ValidationResult::ok();
    audit_names(entries, strict, &mut result);
    audit_values(entries, strict, &mut result);
    result
}

fn audit_names(entries: &[ColorEntry], strict: bool, result: &mut ValidationResult) {
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (idx, entry) in entries.iter().enumerate() {
        let key = entry.name.to_lowercase();
        if let Some(first) = first_seen.get(&key) {
            result.report(
                strict,
                format!(
                    "Color {}: name '{}' duplicates color {}",
                    idx + 1,
                    entry.name,
                    first + 1
                ),
            );
        } else {
            first_seen.insert(key, idx);
        }
    }
}

fn audit_values(entries: &[ColorEntry], strict: bool, result: &mut ValidationResult) {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();

    for (idx, entry) in entries.iter().enumerate() {
        if let Some(first) = first_seen.get(entry.value.as_str()) {
            result.report(
                strict,
                format!(
                    "Color {}: value {} duplicates color {}",
                    idx + 1,
                    entry.value,
                    first + 1
                ),
            );
        } else {
            first_seen.insert(&entry.value, idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_duplicates() -> Vec<ColorEntry> {
        vec![
            ColorEntry::new("Red", "#ff0000"),
            ColorEntry::new("green", "#00ff00"),
            ColorEntry::new("red", "#00ff00"),
        ]
    }

    #[test]
    fn test_audit_clean_draft() {
        let entries = vec![
            ColorEntry::new("red", "#ff0000"),
            ColorEntry::new("green", "#00ff00"),
        ];
        for strict in [false, true] {
            let result = audit_entries(&entries, strict);
            assert!(result.passed);
            assert!(result.warnings.is_empty());
            assert!(result.errors.is_empty());
        }
    }

    #[test]
    fn test_audit_duplicate_name() {
        let entries = vec![
            ColorEntry::new("Red", "#ff0000"),
            ColorEntry::new("green", "#00ff00"),
            ColorEntry::new("red", "#ee0000"),
        ];
        let result = audit_entries(&entries, false);
        assert!(result.passed);
        assert_eq!(
            result.warnings,
            vec!["Color 3: name 'red' duplicates color 1".to_string()]
        );
    }

    #[test]
    fn test_audit_duplicate_value() {
        let entries = vec![
            ColorEntry::new("red", "#ff0000"),
            ColorEntry::new("crimson", "#ff0000"),
        ];
        let result = audit_entries(&entries, false);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("value #ff0000"));
    }

    #[test]
    fn test_audit_lenient_only_warns() {
        let result = audit_entries(&with_duplicates(), false);
        assert!(result.passed);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_audit_strict_fails() {
        let result = audit_entries(&with_duplicates(), true);
        assert!(!result.passed);
        assert!(result.warnings.is_empty());
        assert_eq!(
            result.errors,
            vec![
                "Color 3: name 'red' duplicates color 1".to_string(),
                "Color 3: value #00ff00 duplicates color 2".to_string(),
            ]
        );
    }
}
